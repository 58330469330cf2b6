//! End-to-end tests: load an edge list from disk, then query it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use graph_reach_analyzer::{Config, GraphError, GraphSession};
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.txt")
}

/// Write `content` to a file inside a fresh temp dir.
fn edge_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("edges.txt");
    fs::write(&path, content).expect("should write edge list");
    (dir, path)
}

fn loaded_fixture() -> GraphSession {
    let session = GraphSession::default();
    session.load_path(fixture_path()).expect("fixture should load");
    session
}

// === Fixture scenario ===

#[test]
fn fixture_counts_and_max_degree() {
    let session = loaded_fixture();
    assert_eq!(session.node_count().unwrap(), 7);
    assert_eq!(session.edge_count().unwrap(), 10);
    assert_eq!(session.max_degree_node().unwrap(), Some(0));

    let handle = session.current().unwrap();
    let degrees: Vec<usize> = (0..7).map(|n| handle.out_degree(n).unwrap()).collect();
    assert_eq!(degrees, vec![2, 2, 1, 2, 2, 1, 0]);
}

#[test]
fn fixture_bfs_depth_two() {
    let result = loaded_fixture().bfs(0, 2).unwrap();

    let mut nodes = result.nodes.clone();
    nodes.sort_unstable();
    assert_eq!(nodes, vec![0, 1, 2, 3, 4]);

    for edge in [(0, 1), (0, 2), (1, 2), (1, 3), (2, 4)] {
        assert!(result.edges.contains(&edge), "missing edge {edge:?}");
    }
}

#[test]
fn fixture_bfs_depth_zero_is_start_only() {
    let session = loaded_fixture();
    for start in 0..7 {
        let result = session.bfs(start, 0).unwrap();
        assert_eq!(result.nodes, vec![start as u32]);
        assert!(result.edges.is_empty());
    }
}

#[test]
fn fixture_out_of_range_start() {
    let session = loaded_fixture();
    assert!(matches!(session.bfs(7, 1), Err(GraphError::OutOfRange { .. })));
    assert!(matches!(session.bfs(-1, 1), Err(GraphError::OutOfRange { .. })));
}

// === Loading ===

#[test]
fn edge_count_matches_non_blank_lines() {
    let (_dir, path) = edge_file("0 1\n\n1 2\n   \n2 0\n2 0\n\n");
    let session = GraphSession::default();
    session.load_path(&path).unwrap();
    assert_eq!(session.edge_count().unwrap(), 4);
    assert_eq!(session.node_count().unwrap(), 3);
}

#[test]
fn isolated_ids_below_max_exist() {
    let (_dir, path) = edge_file("9 9\n");
    let session = GraphSession::default();
    session.load_path(&path).unwrap();
    assert_eq!(session.node_count().unwrap(), 10);

    let result = session.bfs(3, 5).unwrap();
    assert_eq!(result.nodes, vec![3]);
    assert!(result.edges.is_empty());
}

#[test]
fn malformed_file_reports_line_and_keeps_previous_graph() {
    let session = loaded_fixture();
    let (_dir, path) = edge_file("0 1\n1 2\n2 three\n");

    let err = session.load_path(&path).unwrap_err();
    match err {
        GraphError::Parse { line, content, .. } => {
            assert_eq!(line, 3);
            assert_eq!(content, "2 three");
        }
        other => panic!("expected parse error, got {other}"),
    }
    assert_eq!(session.edge_count().unwrap(), 10);

    // retrying with corrected input is fine
    fs::write(&path, "0 1\n1 2\n2 3\n").unwrap();
    session.load_path(&path).unwrap();
    assert_eq!(session.edge_count().unwrap(), 3);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let session = GraphSession::default();
    let err = session.load_path(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
    assert!(!session.is_loaded());
}

#[test]
fn header_lines_rejected_by_default() {
    let (_dir, path) = edge_file("# FromNodeId\tToNodeId\n0 1\n1 2\n");
    let session = GraphSession::default();
    let err = session.load_path(&path).unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    assert!(!session.is_loaded());
}

#[test]
fn header_lines_skipped_when_opted_in() {
    let (_dir, path) = edge_file("# FromNodeId\tToNodeId\n0 1\n1 2\n");
    let session = GraphSession::new(Config {
        skip_comments: true,
        ..Config::default()
    });
    session.load_path(&path).unwrap();
    assert_eq!(session.edge_count().unwrap(), 2);
}

#[test]
fn loading_twice_gives_identical_answers() {
    let a = loaded_fixture();
    let b = loaded_fixture();
    assert_eq!(a.node_count().unwrap(), b.node_count().unwrap());
    assert_eq!(a.edge_count().unwrap(), b.edge_count().unwrap());
    assert_eq!(a.max_degree_node().unwrap(), b.max_degree_node().unwrap());
    for start in 0..7 {
        for depth in 0..4 {
            assert_eq!(a.bfs(start, depth).unwrap(), b.bfs(start, depth).unwrap());
        }
    }
}

// === Concurrency ===

#[test]
fn concurrent_queries_share_one_handle() {
    let session = Arc::new(loaded_fixture());
    let expected = session.bfs(0, 3).unwrap();

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let session = Arc::clone(&session);
            thread::spawn(move || session.bfs(0, 3).unwrap())
        })
        .collect();

    for worker in workers {
        assert_eq!(worker.join().unwrap(), expected);
    }
}

#[test]
fn reload_while_holding_old_handle() {
    let session = Arc::new(loaded_fixture());
    let old = session.current().unwrap();

    let reloader = {
        let session = Arc::clone(&session);
        thread::spawn(move || session.load_reader("0 1\n1 0\n".as_bytes()).unwrap())
    };

    // the old handle keeps answering from its own arrays
    for _ in 0..100 {
        assert_eq!(old.bfs(0, 2).unwrap().node_count(), 5);
    }

    let new = reloader.join().unwrap();
    assert_eq!(new.node_count(), 2);
    assert_eq!(session.node_count().unwrap(), 2);
    assert_eq!(old.node_count(), 7);
}
