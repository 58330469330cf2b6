//! Bounded breadth-first traversal

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{CompressedGraph, NodeId};

/// Nodes reached within the depth bound and the edges examined on the way
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    /// Unique node ids in discovery order, start first
    pub nodes: Vec<NodeId>,

    /// Every `(u, v)` scanned while expanding levels `0..max_depth`,
    /// including edges into already-visited nodes and self-loops
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Subgraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Level-synchronous BFS over out-edges from `start`, at most `max_depth` hops.
///
/// Nodes first seen at level `max_depth` are reported but not expanded, so
/// `max_depth == 0` yields `({start}, [])`. With `max_visited` set, the
/// traversal stops with `VisitLimitExceeded` once more than that many nodes
/// have been discovered.
pub fn bfs_subgraph(
    graph: &CompressedGraph,
    start: NodeId,
    max_depth: u32,
    max_visited: Option<usize>,
) -> Result<Subgraph> {
    let n = graph.node_count();
    if start as usize >= n {
        return Err(GraphError::out_of_range(start, n));
    }

    let mut visited = vec![false; n];
    let mut result = Subgraph::default();

    visited[start as usize] = true;
    result.nodes.push(start);
    check_limit(result.nodes.len(), max_visited)?;

    let mut frontier = vec![start];
    let mut next_frontier = Vec::new();

    for _ in 0..max_depth {
        if frontier.is_empty() {
            break;
        }

        for &u in &frontier {
            for &v in graph.outgoing_edges(u as usize) {
                result.edges.push((u, v));

                let seen = &mut visited[v as usize];
                if !*seen {
                    *seen = true;
                    result.nodes.push(v);
                    check_limit(result.nodes.len(), max_visited)?;
                    next_frontier.push(v);
                }
            }
        }

        std::mem::swap(&mut frontier, &mut next_frontier);
        next_frontier.clear();
    }

    Ok(result)
}

fn check_limit(visited: usize, max_visited: Option<usize>) -> Result<()> {
    match max_visited {
        Some(limit) if visited > limit => Err(GraphError::VisitLimitExceeded { limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn fixture() -> CompressedGraph {
        crate::graph::fixture::graph()
    }

    fn make_chain(n: u32) -> CompressedGraph {
        GraphBuilder::new().extend((0..n - 1).map(|i| (i, i + 1))).build()
    }

    fn make_cycle(n: u32) -> CompressedGraph {
        GraphBuilder::new().extend((0..n).map(|i| (i, (i + 1) % n))).build()
    }

    #[test]
    fn test_bfs_fixture_depth_two() {
        let result = bfs_subgraph(&fixture(), 0, 2, None).unwrap();
        assert_eq!(result.nodes, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.edges, vec![(0, 1), (0, 2), (1, 2), (1, 3), (2, 4)]);
    }

    #[test]
    fn test_bfs_fixture_full() {
        let result = bfs_subgraph(&fixture(), 0, 10, None).unwrap();
        assert_eq!(result.nodes, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(result.edge_count(), 10);
    }

    #[test]
    fn test_bfs_depth_zero() {
        let result = bfs_subgraph(&fixture(), 3, 0, None).unwrap();
        assert_eq!(result.nodes, vec![3]);
        assert!(result.edges.is_empty());
    }

    #[test]
    fn test_bfs_sink_node() {
        let result = bfs_subgraph(&fixture(), 6, 5, None).unwrap();
        assert_eq!(result.nodes, vec![6]);
        assert!(result.edges.is_empty());
    }

    #[test]
    fn test_bfs_chain_depth_limited() {
        let result = bfs_subgraph(&make_chain(10), 0, 3, None).unwrap();
        assert_eq!(result.nodes, vec![0, 1, 2, 3]);
        // node 3 is discovered at the boundary, its edge 3->4 is not scanned
        assert_eq!(result.edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_bfs_directed_only() {
        let result = bfs_subgraph(&make_chain(5), 4, 10, None).unwrap();
        assert_eq!(result.nodes, vec![4]);
    }

    #[test]
    fn test_bfs_cycle_no_infinite_loop() {
        let result = bfs_subgraph(&make_cycle(5), 0, 100, None).unwrap();
        assert_eq!(result.node_count(), 5);
        // the closing edge 4->0 is examined even though 0 is visited
        assert_eq!(result.edges.last(), Some(&(4, 0)));
        assert_eq!(result.edge_count(), 5);
    }

    #[test]
    fn test_bfs_self_loop_recorded() {
        let g = GraphBuilder::new().extend([(0, 0), (0, 1)]).build();
        let result = bfs_subgraph(&g, 0, 1, None).unwrap();
        assert_eq!(result.nodes, vec![0, 1]);
        assert_eq!(result.edges, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_bfs_parallel_edges_recorded() {
        let g = GraphBuilder::new().extend([(0, 1), (0, 1), (0, 1)]).build();
        let result = bfs_subgraph(&g, 0, 1, None).unwrap();
        assert_eq!(result.nodes, vec![0, 1]);
        assert_eq!(result.edges, vec![(0, 1); 3]);
    }

    #[test]
    fn test_bfs_start_out_of_range() {
        let g = fixture();
        let err = bfs_subgraph(&g, 7, 1, None).unwrap_err();
        assert!(matches!(err, GraphError::OutOfRange { start: 7, node_count: 7 }));
    }

    #[test]
    fn test_bfs_empty_graph() {
        let g = GraphBuilder::new().build();
        assert!(matches!(
            bfs_subgraph(&g, 0, 0, None),
            Err(GraphError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_bfs_visit_limit() {
        let g = make_chain(10);
        let err = bfs_subgraph(&g, 0, 9, Some(4)).unwrap_err();
        assert!(matches!(err, GraphError::VisitLimitExceeded { limit: 4 }));

        // exactly at the limit is fine
        let result = bfs_subgraph(&g, 0, 3, Some(4)).unwrap();
        assert_eq!(result.node_count(), 4);
    }

    #[test]
    fn test_bfs_zero_limit_rejects_start() {
        let err = bfs_subgraph(&fixture(), 0, 0, Some(0)).unwrap_err();
        assert!(matches!(err, GraphError::VisitLimitExceeded { limit: 0 }));
    }
}
