use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// An undirected graph over integer node ids weighted by `f64` distances
pub type WeightedGraph = AdjacencyGraph<usize, OrderedFloat<f64>>;

fn empty_graph(n: usize) -> WeightedGraph {
    let mut graph = AdjacencyGraph::with_capacity(false, true, n);
    for v in 0..n {
        graph.add_node(v);
    }
    graph
}

/// Generates a connected random graph with n vertices.
/// A random spanning path guarantees connectivity; `extra_edges` further
/// random edges are attempted on top of it (duplicates are skipped).
pub fn generate_random_connected(n: usize, extra_edges: usize, seed: u64) -> WeightedGraph {
    let mut graph = empty_graph(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    for pair in order.windows(2) {
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_edge(pair[0], pair[1], Some(weight));
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, Some(weight));
        }
    }

    graph
}

/// Generates `components` disjoint random connected graphs of `size` vertices each.
/// Vertex ids of component `c` are `c * size .. (c + 1) * size`.
pub fn generate_components(components: usize, size: usize, extra_edges: usize, seed: u64) -> WeightedGraph {
    let mut graph = empty_graph(components * size);
    let mut rng = StdRng::seed_from_u64(seed);

    for c in 0..components {
        let offset = c * size;
        for v in 1..size {
            let parent = rng.gen_range(0..v);
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(offset + parent, offset + v, Some(weight));
        }

        if size > 1 {
            for _ in 0..extra_edges {
                let u = offset + rng.gen_range(0..size);
                let v = offset + rng.gen_range(0..size);
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                graph.add_edge(u, v, Some(weight));
            }
        }
    }

    graph
}

/// Generates a 2D grid graph with dimensions width*height (4-connectivity)
/// and random weights
pub fn generate_grid(width: usize, height: usize, seed: u64) -> WeightedGraph {
    let mut graph = empty_graph(width * height);
    let mut rng = StdRng::seed_from_u64(seed);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);

            if x + 1 < width {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                graph.add_edge(current, get_index(x + 1, y), Some(weight));
            }
            if y + 1 < height {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                graph.add_edge(current, get_index(x, y + 1), Some(weight));
            }
        }
    }

    graph
}

/// Generates a random geometric graph in a `side` x `side` square (meters).
/// Vertices within distance r are connected, weighted by Euclidean distance.
pub fn generate_geometric(n: usize, side: f64, r: f64, seed: u64) -> WeightedGraph {
    let mut graph = empty_graph(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..side), rng.gen_range(0.0..side)))
        .collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = (x1 - x2).hypot(y1 - y2);

            if dist <= r {
                graph.add_edge(i, j, Some(OrderedFloat(dist)));
            }
        }
    }

    graph
}
