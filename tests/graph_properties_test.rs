use graphprops::algo::{self, GraphReport};
use graphprops::graph::{EdgeDescriptor, Graph, GraphConfig, GraphError, VertexId};

fn v(id: u64) -> VertexId {
    VertexId::new(id)
}

fn triangle() -> Graph {
    Graph::from_descriptors(
        3,
        vec![
            EdgeDescriptor::new(1, 2, 4.0),
            EdgeDescriptor::new(1, 3, 7.0),
            EdgeDescriptor::new(2, 3, 10.0),
        ],
    )
}

#[test]
fn test_regularity_breaks_with_pendant_vertex() {
    let mut graph = triangle();
    assert!(algo::is_regular(&graph));
    for id in 1..=3 {
        assert_eq!(graph.degree(v(id)), Ok(2));
    }

    // Vertex 4 joins with a single edge
    graph.add_edge(v(4), v(2), 3.0);
    assert!(!algo::is_regular(&graph));
    assert_eq!(algo::is_pending(&graph, v(4)), Ok(true));
    assert_eq!(graph.degree(v(2)), Ok(3));
}

#[test]
fn test_missing_vertex_is_not_degree_zero() {
    let mut graph = triangle();
    graph.add_isolated_vertex(v(5));

    assert_eq!(graph.degree(v(5)), Ok(0));
    assert_eq!(algo::is_isolated(&graph, v(5)), Ok(true));
    assert_eq!(graph.degree(v(6)), Err(GraphError::VertexNotFound(v(6))));
    assert_eq!(
        algo::is_pending(&graph, v(6)),
        Err(GraphError::VertexNotFound(v(6)))
    );
}

#[test]
fn test_handshake_lemma() {
    let mut graph = Graph::new(6);
    let edges = [(1, 2), (1, 3), (2, 3), (3, 4), (4, 5), (5, 5), (5, 6), (6, 1), (2, 1)];
    for (a, b) in edges {
        graph.add_edge(v(a), v(b), 1.0);
    }

    // A self-loop contributes once to its vertex's degree
    let loops = graph.edges().iter().filter(|e| e.is_loop()).count();
    let degree_sum: usize = graph
        .vertices()
        .map(|x| graph.degree(x).unwrap())
        .sum();
    assert_eq!(degree_sum, 2 * graph.edge_count() - loops);
}

#[test]
fn test_simple_graph_classification() {
    let graph = triangle();
    assert!(algo::is_simple(&graph));
    assert!(algo::is_complete(&graph));
    assert!(algo::is_eulerian(&graph));
    assert!(!algo::is_unicursal(&graph));
    assert!(algo::is_connected(&graph));
    assert!(!algo::is_null(&graph));

    let mut multi = triangle();
    multi.add_edge(v(3), v(1), 2.0);
    assert!(algo::has_parallel_edges(&multi));
    assert!(!algo::has_loops(&multi));
    assert!(!algo::is_simple(&multi));
    assert!(!algo::is_complete(&multi));
}

#[test]
fn test_dedup_config_keeps_graph_simple() {
    let mut graph = Graph::with_config(GraphConfig::deduplicating(3));
    graph.add_edge(v(1), v(2), 1.0);
    graph.add_edge(v(2), v(1), 1.0);
    graph.add_edge(v(2), v(3), 1.0);

    assert_eq!(graph.edge_count(), 2);
    assert!(algo::is_simple(&graph));
    assert!(algo::is_unicursal(&graph));
}

#[test]
fn test_cut_vertex_restores_graph_exactly() {
    let mut graph = Graph::from_descriptors(
        3,
        vec![EdgeDescriptor::new(1, 2, 1.0), EdgeDescriptor::new(2, 3, 1.0)],
    );
    let before = graph.clone();

    // Removing 2 disconnects the remainder
    let removed = graph.remove_vertex(v(2)).unwrap();
    assert!(!algo::is_connected(&graph));
    graph.restore_vertex(removed);

    assert_eq!(algo::cut_vertex_count(&mut graph), 1);
    assert_eq!(graph, before);
    assert_eq!(graph.edges(), before.edges());
    assert_eq!(graph.adjacency_matrix(), before.adjacency_matrix());
}

#[test]
fn test_cut_vertices_on_tree() {
    // 1 - 2 - 3 - 4 with 5 hanging off 3
    let mut graph = Graph::new(5);
    graph.add_edge(v(1), v(2), 1.0);
    graph.add_edge(v(2), v(3), 1.0);
    graph.add_edge(v(3), v(4), 1.0);
    graph.add_edge(v(3), v(5), 1.0);

    assert_eq!(algo::cut_vertices(&mut graph), vec![v(2), v(3)]);
}

#[test]
fn test_complement_round_trip() {
    let graph = triangle();
    let comp = algo::complement(&graph);
    assert!(algo::is_null(&comp));
    assert_eq!(comp.vertex_count(), 3);

    let mut star = Graph::new(4);
    star.add_edge(v(1), v(2), 1.0);
    star.add_edge(v(1), v(3), 1.0);
    star.add_edge(v(1), v(4), 1.0);

    // Complement of a star: 1 isolated, triangle on the leaves
    let comp = algo::complement(&star);
    assert_eq!(comp.degree(v(1)), Ok(0));
    assert_eq!(comp.edge_count(), 3);
    assert_eq!(algo::component_count(&comp), 2);
}

#[test]
fn test_report_matches_individual_queries() {
    let mut graph = triangle();
    graph.add_edge(v(4), v(2), 3.0);

    let report = GraphReport::analyze(&mut graph);
    assert_eq!(report.vertex_count, 4);
    assert_eq!(report.edge_count, 4);
    assert_eq!(report.regular, algo::is_regular(&graph));
    assert_eq!(report.unicursal, algo::is_unicursal(&graph));
    assert!(report.connected);
    assert_eq!(report.cut_vertex_count, 1);
    assert_eq!(report.degree_of(v(4)), Some(1));
}
