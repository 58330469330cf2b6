//! Memory-efficient graph representation

use std::mem;

use crate::graph::NodeId;

/// Compressed sparse row representation of a directed graph
///
/// Immutable once built: `offsets[i]..offsets[i+1]` indexes the out-neighbors
/// of node `i` inside `neighbors`, in the order the edges were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    node_count: usize,

    /// Offset array, length `node_count + 1`
    offsets: Vec<u64>,

    /// Concatenated out-neighbor lists
    neighbors: Vec<NodeId>,
}

impl CompressedGraph {
    /// Assemble from already-consistent arrays. Only the builder calls this.
    pub(crate) fn from_parts(node_count: usize, offsets: Vec<u64>, neighbors: Vec<NodeId>) -> Self {
        debug_assert_eq!(offsets.len(), node_count + 1);
        debug_assert_eq!(offsets.last().copied(), Some(neighbors.len() as u64));
        Self {
            node_count,
            offsets,
            neighbors,
        }
    }

    /// Number of nodes `N`
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of directed edges `E`
    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn offsets(&self) -> &[u64] {
        &self.offsets
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Get outgoing edges for a node
    pub fn outgoing_edges(&self, node: usize) -> &[NodeId] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Get out-degree of a node
    pub fn out_degree(&self, node: usize) -> usize {
        (self.offsets[node + 1] - self.offsets[node]) as usize
    }

    /// Check the CSR invariants; returns a description of the first violation
    pub fn validate(&self) -> Result<(), String> {
        let n = self.node_count;
        if self.offsets.len() != n + 1 {
            return Err(format!(
                "offsets length {} must be node_count + 1 = {}",
                self.offsets.len(),
                n + 1
            ));
        }
        if self.offsets[0] != 0 {
            return Err("offsets[0] must be 0".into());
        }
        let last = self.offsets[n];
        if last != self.neighbors.len() as u64 {
            return Err(format!(
                "offsets[N] = {last}, but neighbors.len() = {}",
                self.neighbors.len()
            ));
        }
        if let Some(i) = (0..n).find(|&i| self.offsets[i] > self.offsets[i + 1]) {
            return Err(format!("offsets not non-decreasing at i={i}"));
        }
        if let Some(&v) = self.neighbors.iter().find(|&&v| v as usize >= n) {
            return Err(format!("neighbor {v} outside node range"));
        }
        Ok(())
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u64>();
        let neighbors = self.neighbors.capacity() * mem::size_of::<NodeId>();

        base + offsets + neighbors
    }
}
