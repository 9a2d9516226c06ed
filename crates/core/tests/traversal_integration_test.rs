//! End-to-end checks: load an edge list file, build both representations,
//! and walk the result.

use graph_walker_core::{
    bfs, dfs, edgelist, edges_from, AdjacencyList, AdjacencyMatrix, GraphError,
    RecordingObserver, TraversalKind,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_bfs_reference_graph() {
    let adj = AdjacencyList::build(&edges_from(&[(0, 1), (0, 2), (1, 3)]));

    let order = bfs::breadth_first(&0, &adj).unwrap();

    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_bfs_absent_source() {
    let adj = AdjacencyList::build(&edges_from(&[(0, 1), (0, 2), (1, 3)]));

    let result = bfs::breadth_first(&42, &adj);

    assert!(matches!(result, Err(GraphError::VertexNotFound { .. })));
}

#[test]
fn test_matrix_reference_graph() {
    let matrix = AdjacencyMatrix::build(&edges_from(&[(1, 2)]), 5).unwrap();

    assert_eq!(matrix.rows()[1][2], 1);
    assert_eq!(matrix.rows()[2][1], 1);
    let ones: usize = matrix
        .rows()
        .iter()
        .map(|row| row.iter().filter(|&&x| x == 1).count())
        .sum();
    assert_eq!(ones, 2, "only M[1][2] and M[2][1] should be set");
}

#[test]
fn test_matrix_rejects_index_equal_to_n() {
    let result = AdjacencyMatrix::build(&edges_from(&[(0, 1), (4, 5)]), 5);

    assert_eq!(
        result.unwrap_err(),
        GraphError::OutOfRange {
            vertex: 5,
            vertex_count: 5
        }
    );
}

#[test]
fn test_coverage_over_disconnected_graph() {
    let adj = AdjacencyList::build(&edges_from(&[(0, 1), (2, 3)]));
    let mut observer = RecordingObserver::new();

    let coverage = dfs::depth_first_coverage_with(&[0, 1, 2, 3], &adj, &mut observer);

    assert_eq!(coverage.order, vec![0, 1, 2, 3]);
    assert_eq!(observer.visits.len(), 4);
    assert!(observer
        .visits
        .iter()
        .all(|(kind, _)| *kind == TraversalKind::DepthFirst));
}

#[test]
fn test_file_to_traversals() {
    let _ = env_logger::builder().is_test(true).try_init();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("city.txt");
    fs::write(
        &path,
        "# streets\nstation market\nmarket park\nstation school\n\nharbor pier\n",
    )
    .unwrap();

    let edges = edgelist::read_edge_list(&path).unwrap();
    let adj = AdjacencyList::build(&edges);

    assert_eq!(adj.len(), 6);
    assert!(adj.is_symmetric());

    let order = bfs::breadth_first(&"station".to_string(), &adj).unwrap();
    assert_eq!(order, vec!["station", "market", "school", "park"]);

    let vertices = adj.vertices().to_vec();
    let coverage = dfs::depth_first_coverage(&vertices, &adj);
    assert_eq!(
        coverage.order,
        vec!["station", "market", "park", "school", "harbor", "pier"]
    );
}

#[test]
fn test_numeric_file_to_matrix() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grid.txt");
    fs::write(&path, "0 1\n1 2\n2 0\n").unwrap();

    let edges = edgelist::read_edge_list(&path).unwrap();
    let indexed = edgelist::to_index_edges(&edges).unwrap();
    let matrix = AdjacencyMatrix::build(&indexed, 3).unwrap();

    assert!(matrix.is_symmetric());
    assert_eq!(matrix.degree(0).unwrap(), 2);
    assert_eq!(matrix.to_edges().len(), 3);
}
