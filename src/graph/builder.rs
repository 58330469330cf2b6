//! Graph construction module

use crate::data::EdgeList;
use crate::graph::{CompressedGraph, NodeId};

/// Build the CSR arrays for `edges` with a counting sort.
///
/// Runs in `O(N + E)`: count out-degrees, prefix-sum them into offsets,
/// then scatter each destination through a per-node write cursor. Edges
/// sharing a source keep their input order.
pub fn build_csr(edges: &EdgeList) -> CompressedGraph {
    let node_count = edges.node_count();

    // Pass 1: out-degree per node
    let mut degrees = vec![0u64; node_count];
    for &(u, _) in edges.edges() {
        degrees[u as usize] += 1;
    }

    // Pass 2: prefix sum into offsets
    let mut offsets = Vec::with_capacity(node_count + 1);
    offsets.push(0u64);
    let mut offset = 0u64;
    for &degree in &degrees {
        offset += degree;
        offsets.push(offset);
    }

    // Pass 3: scatter destinations, reusing the degree buffer as write cursors
    let mut cursors = degrees;
    cursors.copy_from_slice(&offsets[..node_count]);

    let mut neighbors: Vec<NodeId> = vec![0; edges.len()];
    for &(u, v) in edges.edges() {
        let cursor = &mut cursors[u as usize];
        neighbors[*cursor as usize] = v;
        *cursor += 1;
    }

    CompressedGraph::from_parts(node_count, offsets, neighbors)
}

/// Builder for incrementally constructing a CompressedGraph
#[derive(Debug, Default)]
pub struct GraphBuilder {
    edges: EdgeList,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with the given edge capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: EdgeList::with_capacity(capacity),
        }
    }

    /// Add a directed edge from one node to another
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) -> &mut Self {
        self.edges.push(src, dst);
        self
    }

    /// Add every edge from an iterator, in order
    pub fn extend<I: IntoIterator<Item = (NodeId, NodeId)>>(&mut self, edges: I) -> &mut Self {
        for (u, v) in edges {
            self.edges.push(u, v);
        }
        self
    }

    /// Build the compressed graph
    pub fn build(&self) -> CompressedGraph {
        build_csr(&self.edges)
    }
}
