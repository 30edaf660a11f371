use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, info, trace};
use num_traits::Float;

use crate::algorithm::{SpanningForest, SpanningForestAlgorithm};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{Edge, Graph};
use crate::{Error, Result};

/// Prim's algorithm, restarted at every unvisited node so that disconnected
/// graphs yield one tree per component
#[derive(Debug, Default)]
pub struct Prim;

impl Prim {
    /// Creates a new Prim algorithm instance
    pub fn new() -> Self {
        Prim
    }
}

impl<V, W, G> SpanningForestAlgorithm<V, W, G> for Prim
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Ord + Hash + Debug,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn compute_spanning_forest(&self, graph: &G) -> Result<SpanningForest<V, W>> {
        if graph.is_directed() {
            return Err(Error::DirectedGraph);
        }
        if !graph.is_labelled() {
            return Err(Error::UnlabelledGraph);
        }

        let mut visited: HashSet<V> = HashSet::with_capacity(graph.num_nodes());
        let mut edges = Vec::with_capacity(graph.num_nodes().saturating_sub(1));
        let mut tree_count = 0;

        // Frontier edges, lightest first
        let mut frontier = IndexedPriorityQueue::new(|x: &Edge<V, W>, y: &Edge<V, W>| {
            x.label().cmp(&y.label())
        });

        for root in graph.nodes() {
            if !visited.insert(root.clone()) {
                continue;
            }
            tree_count += 1;
            let tree_start = edges.len();

            push_frontier(graph, &mut frontier, root, &visited)?;

            while let Ok(lightest) = frontier.pop() {
                // Reaching a visited node would close a cycle
                if !visited.insert(lightest.end().clone()) {
                    continue;
                }

                trace!("Tree edge {:?} -> {:?} ({:?})", lightest.start(), lightest.end(), lightest.label());
                push_frontier(graph, &mut frontier, lightest.end(), &visited)?;
                edges.push(lightest);
            }

            debug!(
                "Tree {} rooted at {:?} spans {} edges",
                tree_count,
                root,
                edges.len() - tree_start
            );
        }

        info!(
            "Minimum spanning forest: {} trees, {} edges over {} nodes",
            tree_count,
            edges.len(),
            graph.num_nodes()
        );

        Ok(SpanningForest { edges, tree_count })
    }
}

/// Pushes every edge from `node` to a not-yet-visited neighbour
fn push_frontier<V, W, G, C>(
    graph: &G,
    frontier: &mut IndexedPriorityQueue<Edge<V, W>, C>,
    node: &V,
    visited: &HashSet<V>,
) -> Result<()>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Ord + Hash + Debug,
    G: Graph<V, W>,
    C: Fn(&Edge<V, W>, &Edge<V, W>) -> std::cmp::Ordering,
{
    for neighbour in graph.neighbours(node) {
        if visited.contains(neighbour) {
            continue;
        }

        let weight = graph.label(node, neighbour).ok_or_else(|| Error::MissingWeight {
            from: format!("{:?}", node),
            to: format!("{:?}", neighbour),
        })?;

        frontier.push(Edge::new(node.clone(), neighbour.clone(), Some(*weight)));
    }

    Ok(())
}

/// Computes a minimum spanning forest of an undirected weighted graph with [`Prim`]
pub fn minimum_spanning_forest<V, W, G>(graph: &G) -> Result<SpanningForest<V, W>>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Ord + Hash + Debug,
    G: Graph<V, W>,
{
    Prim::new().compute_spanning_forest(graph)
}
