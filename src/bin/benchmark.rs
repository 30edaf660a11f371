use std::time::{Duration, Instant};
use spanning_forest::algorithm::{prim::Prim, SpanningForestAlgorithm};
use spanning_forest::graph::generators::{generate_components, generate_grid, generate_random_connected, WeightedGraph};
use spanning_forest::graph::Graph;

// Function to benchmark Prim on a graph
fn benchmark_prim(name: &str, graph: &WeightedGraph) -> Duration {
    println!(
        "Running Prim on {} graph with {} vertices and {} edges...",
        name,
        graph.num_nodes(),
        graph.num_edges()
    );

    let prim = Prim::new();
    let start = Instant::now();
    let forest = match prim.compute_spanning_forest(graph) {
        Ok(forest) => forest,
        Err(e) => {
            eprintln!("  - Failed: {}", e);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    println!(
        "  - {} trees, {} edges, total weight {:.1} in {:?}",
        forest.tree_count,
        forest.edge_count(),
        forest.total_weight().into_inner(),
        duration
    );

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of extra edges per vertex
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: Prim minimum spanning forest");
    println!("Edge factor: {} extra edges per vertex", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating graphs with {} vertices...", size);

        let random = generate_random_connected(size, size * edge_factor, 42);
        let side = (size as f64).sqrt() as usize;
        let grid = generate_grid(side, side, 42);
        let components = generate_components(10, size / 10, (size / 10) * edge_factor, 42);

        let random_time = benchmark_prim("random", &random);
        let grid_time = benchmark_prim("grid", &grid);
        let components_time = benchmark_prim("10-component", &components);

        results.push((size, random_time, grid_time, components_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<12}", "Vertices", "Random (ms)", "Grid (ms)", "Forest (ms)");
    println!("-----------------------------------------------------");

    for (size, random_time, grid_time, components_time) in &results {
        println!(
            "{:<10} | {:<12} | {:<12} | {:<12}",
            size,
            random_time.as_millis(),
            grid_time.as_millis(),
            components_time.as_millis()
        );
    }
}
