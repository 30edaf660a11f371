use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Edge;

/// Trait representing a graph whose nodes are arbitrary hashable values
/// and whose edges carry an optional label
pub trait Graph<V, L>: Debug
where
    V: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    /// Returns true if edges are one-way
    fn is_directed(&self) -> bool;

    /// Returns true if every edge must carry a label
    fn is_labelled(&self) -> bool;

    /// Returns the number of nodes in the graph
    fn num_nodes(&self) -> usize;

    /// Returns the number of logical edges in the graph.
    /// An undirected edge is counted once even though it is stored twice.
    fn num_edges(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, a: &V) -> bool;

    /// Returns true if there's an edge from `a` to `b`
    fn contains_edge(&self, a: &V, b: &V) -> bool;

    /// Returns an iterator over all nodes
    fn nodes(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over every stored edge record
    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V, L>> + '_>;

    /// Returns an iterator over the nodes reachable from `a` by one edge.
    /// Empty if `a` is not in the graph.
    fn neighbours(&self, a: &V) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Gets the label of the edge from `a` to `b` if both exist
    fn label(&self, a: &V, b: &V) -> Option<&L>;

    /// Returns the number of edges leaving `a`
    fn degree(&self, a: &V) -> usize {
        self.neighbours(a).count()
    }
}

/// Trait for mutable graph operations.
///
/// Mutations report structural rejection with `false` and leave the graph
/// untouched in that case.
pub trait MutableGraph<V, L>: Graph<V, L>
where
    V: Eq + Hash + Clone + Debug,
    L: Eq + Hash + Clone + Debug,
{
    /// Adds a node with no edges. Returns false if it is already present.
    fn add_node(&mut self, a: V) -> bool;

    /// Adds an edge from `a` to `b`, mirrored on undirected graphs
    fn add_edge(&mut self, a: V, b: V, label: Option<L>) -> bool;

    /// Removes a node together with every edge touching it
    fn remove_node(&mut self, a: &V) -> bool;

    /// Removes the edge from `a` to `b`, and its mirror on undirected graphs
    fn remove_edge(&mut self, a: &V, b: &V) -> bool;
}
