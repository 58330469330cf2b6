//! Immutable, query-ready graph

use std::io::BufRead;
use std::path::Path;

use crate::data::{EdgeList, EdgeListLoader};
use crate::error::Result;
use crate::graph::algorithms::{bfs_subgraph, Subgraph};
use crate::graph::builder::build_csr;
use crate::graph::degree::max_degree_node;
use crate::graph::{CompressedGraph, NodeId};

/// A built graph plus its cached max-degree node.
///
/// Never mutated after construction. Queries only read the arrays and
/// allocate their own scratch space, so a handle can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphHandle {
    graph: CompressedGraph,
    max_degree_node: Option<NodeId>,
}

impl GraphHandle {
    /// Load and build from a reader. Nothing is built if any line is malformed.
    pub fn load<R: BufRead>(loader: &EdgeListLoader, reader: R) -> Result<Self> {
        let edges = loader.read(reader)?;
        Ok(Self::from_edge_list(&edges))
    }

    /// Load and build from a file on disk
    pub fn load_path(loader: &EdgeListLoader, path: impl AsRef<Path>) -> Result<Self> {
        let edges = loader.read_path(path)?;
        Ok(Self::from_edge_list(&edges))
    }

    pub fn from_edge_list(edges: &EdgeList) -> Self {
        Self::from_graph(build_csr(edges))
    }

    pub fn from_graph(graph: CompressedGraph) -> Self {
        let max_degree_node = max_degree_node(&graph);
        Self {
            graph,
            max_degree_node,
        }
    }

    pub fn graph(&self) -> &CompressedGraph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Out-degree of `node`, or `None` if it is not in `[0, N)`
    pub fn out_degree(&self, node: NodeId) -> Option<usize> {
        ((node as usize) < self.node_count()).then(|| self.graph.out_degree(node as usize))
    }

    /// Cached result of the build-time max-degree scan
    pub fn max_degree_node(&self) -> Option<NodeId> {
        self.max_degree_node
    }

    /// Redo the max-degree scan from the offsets
    pub fn recompute_max_degree_node(&self) -> Option<NodeId> {
        max_degree_node(&self.graph)
    }

    /// Depth-limited BFS with no visited-node ceiling
    pub fn bfs(&self, start: NodeId, max_depth: u32) -> Result<Subgraph> {
        bfs_subgraph(&self.graph, start, max_depth, None)
    }

    /// Depth-limited BFS that fails once more than `max_visited` nodes are reached
    pub fn bfs_bounded(
        &self,
        start: NodeId,
        max_depth: u32,
        max_visited: Option<usize>,
    ) -> Result<Subgraph> {
        bfs_subgraph(&self.graph, start, max_depth, max_visited)
    }
}
