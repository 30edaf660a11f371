use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::Edge;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// A graph implementation using nested adjacency maps
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, L>
where
    V: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    directed: bool,
    labelled: bool,

    /// Outgoing edges for each node: node -> (target -> edge record)
    adjacency: HashMap<V, HashMap<V, Edge<V, L>>>,

    /// Every stored edge record. Undirected edges appear twice, once per direction.
    edge_set: HashSet<Edge<V, L>>,
}

impl<V, L> AdjacencyGraph<V, L>
where
    V: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    /// Creates a new empty graph
    pub fn new(directed: bool, labelled: bool) -> Self {
        AdjacencyGraph {
            directed,
            labelled,
            adjacency: HashMap::new(),
            edge_set: HashSet::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of nodes
    pub fn with_capacity(directed: bool, labelled: bool, nodes: usize) -> Self {
        AdjacencyGraph {
            directed,
            labelled,
            adjacency: HashMap::with_capacity(nodes),
            edge_set: HashSet::new(),
        }
    }

    /// Creates an empty undirected graph whose edges must carry a label
    pub fn undirected_labelled() -> Self {
        Self::new(false, true)
    }

    /// Number of edge records held, counting both directions of undirected edges
    pub fn stored_edge_records(&self) -> usize {
        self.edge_set.len()
    }

    fn store(&mut self, edge: Edge<V, L>) {
        if let Some(targets) = self.adjacency.get_mut(edge.start()) {
            targets.insert(edge.end().clone(), edge.clone());
            self.edge_set.insert(edge);
        }
    }
}

impl<V, L> Graph<V, L> for AdjacencyGraph<V, L>
where
    V: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_labelled(&self) -> bool {
        self.labelled
    }

    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        if self.directed {
            self.edge_set.len()
        } else {
            self.edge_set.len() / 2
        }
    }

    fn contains_node(&self, a: &V) -> bool {
        self.adjacency.contains_key(a)
    }

    fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .map_or(false, |targets| targets.contains_key(b))
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V, L>> + '_> {
        Box::new(self.edge_set.iter())
    }

    fn neighbours(&self, a: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        if let Some(targets) = self.adjacency.get(a) {
            Box::new(targets.keys())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn label(&self, a: &V, b: &V) -> Option<&L> {
        self.adjacency
            .get(a)
            .and_then(|targets| targets.get(b))
            .and_then(|edge| edge.label())
    }

    fn degree(&self, a: &V) -> usize {
        self.adjacency.get(a).map_or(0, |targets| targets.len())
    }
}

impl<V, L> MutableGraph<V, L> for AdjacencyGraph<V, L>
where
    V: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    fn add_node(&mut self, a: V) -> bool {
        if self.adjacency.contains_key(&a) {
            return false;
        }

        self.adjacency.insert(a, HashMap::new());
        true
    }

    fn add_edge(&mut self, a: V, b: V, label: Option<L>) -> bool {
        if !self.contains_node(&a) || !self.contains_node(&b) {
            return false;
        }

        if self.contains_edge(&a, &b) {
            return false;
        }

        if self.labelled && label.is_none() {
            return false;
        }

        // An undirected self-loop would be a single record counted as half an edge
        if !self.directed && a == b {
            return false;
        }

        let label = if self.labelled { label } else { None };
        let edge = Edge::new(a, b, label);

        if !self.directed {
            self.store(edge.reversed());
        }
        self.store(edge);

        true
    }

    fn remove_node(&mut self, a: &V) -> bool {
        let Some(outgoing) = self.adjacency.remove(a) else {
            return false;
        };

        for edge in outgoing.values() {
            self.edge_set.remove(edge);
        }

        // Edges arriving at `a` are only reachable from their source nodes
        for targets in self.adjacency.values_mut() {
            if let Some(incoming) = targets.remove(a) {
                self.edge_set.remove(&incoming);
            }
        }

        true
    }

    fn remove_edge(&mut self, a: &V, b: &V) -> bool {
        let Some(removed) = self.adjacency.get_mut(a).and_then(|targets| targets.remove(b)) else {
            return false;
        };
        self.edge_set.remove(&removed);

        if !self.directed {
            if let Some(mirror) = self.adjacency.get_mut(b).and_then(|targets| targets.remove(a)) {
                self.edge_set.remove(&mirror);
            }
        }

        true
    }
}
