use spanning_forest::graph::{AdjacencyGraph, Edge, Graph, MutableGraph};
use std::collections::HashSet;

fn undirected() -> AdjacencyGraph<&'static str, i32> {
    let mut graph = AdjacencyGraph::undirected_labelled();
    for node in ["A", "B", "C", "D"] {
        graph.add_node(node);
    }
    graph
}

#[test]
fn test_add_node_twice_is_rejected() {
    let mut graph: AdjacencyGraph<&str, i32> = AdjacencyGraph::new(true, false);
    assert!(graph.add_node("A"));
    assert!(!graph.add_node("A"));
    assert_eq!(graph.num_nodes(), 1);
}

#[test]
fn test_undirected_edge_is_mirrored() {
    let mut graph = undirected();
    assert!(graph.add_edge("A", "B", Some(7)));

    assert!(graph.contains_edge(&"A", &"B"));
    assert!(graph.contains_edge(&"B", &"A"));
    assert_eq!(graph.label(&"A", &"B"), Some(&7));
    assert_eq!(graph.label(&"B", &"A"), Some(&7));
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.stored_edge_records(), 2);
}

#[test]
fn test_directed_edge_is_one_way() {
    let mut graph: AdjacencyGraph<&str, i32> = AdjacencyGraph::new(true, true);
    graph.add_node("A");
    graph.add_node("B");
    assert!(graph.add_edge("A", "B", Some(1)));

    assert!(graph.contains_edge(&"A", &"B"));
    assert!(!graph.contains_edge(&"B", &"A"));
    assert_eq!(graph.num_edges(), 1);

    // The reverse direction is a distinct edge
    assert!(graph.add_edge("B", "A", Some(2)));
    assert_eq!(graph.num_edges(), 2);
}

#[test]
fn test_add_edge_rejections_leave_graph_untouched() {
    let mut graph = undirected();

    // Missing label on a labelled graph
    assert!(!graph.add_edge("A", "B", None));
    // Unknown endpoint
    assert!(!graph.add_edge("A", "Z", Some(1)));
    assert!(!graph.add_edge("Z", "A", Some(1)));
    assert_eq!(graph.num_edges(), 0);

    assert!(graph.add_edge("A", "B", Some(1)));
    // Duplicate, in either direction for an undirected graph
    assert!(!graph.add_edge("A", "B", Some(2)));
    assert!(!graph.add_edge("B", "A", Some(3)));
    assert_eq!(graph.label(&"A", &"B"), Some(&1));
    assert_eq!(graph.num_edges(), 1);
}

#[test]
fn test_undirected_self_loop_is_rejected() {
    let mut graph = undirected();
    assert!(!graph.add_edge("A", "A", Some(1)));
    assert_eq!(graph.num_edges(), 0);

    let mut directed: AdjacencyGraph<&str, i32> = AdjacencyGraph::new(true, true);
    directed.add_node("A");
    assert!(directed.add_edge("A", "A", Some(1)));
    assert_eq!(directed.num_edges(), 1);
}

#[test]
fn test_unlabelled_graph_ignores_labels() {
    let mut graph: AdjacencyGraph<u32, i32> = AdjacencyGraph::new(false, false);
    graph.add_node(1);
    graph.add_node(2);
    graph.add_node(3);

    assert!(graph.add_edge(1, 2, Some(99)));
    assert!(graph.add_edge(2, 3, None));
    assert_eq!(graph.label(&1, &2), None);
    assert!(graph.edges().all(|edge| edge.label().is_none()));
}

#[test]
fn test_remove_node_removes_incident_edges() {
    let mut graph = undirected();
    graph.add_edge("A", "B", Some(1));
    graph.add_edge("A", "C", Some(2));
    graph.add_edge("B", "C", Some(3));
    graph.add_edge("C", "D", Some(4));

    assert!(graph.remove_node(&"C"));
    assert!(!graph.remove_node(&"C"));

    assert!(!graph.contains_node(&"C"));
    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.stored_edge_records(), 2);
    assert!(graph.contains_edge(&"A", &"B"));
    assert_eq!(graph.degree(&"D"), 0);
    assert!(graph.edges().all(|edge| *edge.start() != "C" && *edge.end() != "C"));
}

#[test]
fn test_remove_node_in_directed_graph_drops_incoming_edges() {
    let mut graph: AdjacencyGraph<u32, ()> = AdjacencyGraph::new(true, false);
    for v in 0..4 {
        graph.add_node(v);
    }
    graph.add_edge(0, 1, None);
    graph.add_edge(2, 1, None);
    graph.add_edge(1, 3, None);
    graph.add_edge(3, 0, None);

    assert!(graph.remove_node(&1));
    assert_eq!(graph.num_edges(), 1);
    assert!(graph.contains_edge(&3, &0));
    assert_eq!(graph.neighbours(&0).count(), 0);
    assert_eq!(graph.neighbours(&2).count(), 0);
}

#[test]
fn test_remove_edge() {
    let mut graph = undirected();
    graph.add_edge("A", "B", Some(1));
    graph.add_edge("B", "C", Some(2));

    assert!(!graph.remove_edge(&"A", &"C"));
    assert!(graph.remove_edge(&"B", &"A"));

    assert!(!graph.contains_edge(&"A", &"B"));
    assert!(!graph.contains_edge(&"B", &"A"));
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.stored_edge_records(), 2);
    assert_eq!(graph.label(&"A", &"B"), None);
}

#[test]
fn test_neighbours_and_views() {
    let mut graph = undirected();
    graph.add_edge("A", "B", Some(1));
    graph.add_edge("A", "C", Some(2));

    let neighbours: HashSet<&str> = graph.neighbours(&"A").copied().collect();
    assert_eq!(neighbours, HashSet::from(["B", "C"]));
    assert_eq!(graph.neighbours(&"Z").count(), 0);

    let nodes: HashSet<&str> = graph.nodes().copied().collect();
    assert_eq!(nodes, HashSet::from(["A", "B", "C", "D"]));

    let edges: HashSet<Edge<&str, i32>> = graph.edges().cloned().collect();
    assert_eq!(edges.len(), 4);
    assert!(edges.contains(&Edge::new("A", "B", Some(1))));
    assert!(edges.contains(&Edge::new("B", "A", Some(1))));
    assert!(edges.contains(&Edge::new("C", "A", Some(2))));
}

#[test]
fn test_edges_compare_structurally() {
    let a = Edge::new("A", "B", Some(1));
    let b = Edge::new("A", "B", Some(1));
    assert_eq!(a, b);
    assert_ne!(a, Edge::new("A", "B", Some(2)));
    assert_ne!(a, a.reversed());
    assert_eq!(a.reversed().reversed(), b);
}

#[test]
fn test_undirected_edge_count_tracks_records() {
    let mut graph: AdjacencyGraph<u32, u32> = AdjacencyGraph::undirected_labelled();
    for v in 0..10 {
        graph.add_node(v);
    }
    for u in 0..10 {
        for v in (u + 1)..10 {
            if (u + v) % 3 == 0 {
                graph.add_edge(u, v, Some(u * v));
            }
        }
    }
    assert_eq!(graph.num_edges() * 2, graph.stored_edge_records());

    graph.remove_node(&3);
    graph.remove_edge(&1, &2);
    assert_eq!(graph.num_edges() * 2, graph.stored_edge_records());
}
