//! Out-degree queries over the CSR offsets

use serde::Serialize;

use crate::graph::{CompressedGraph, NodeId};

/// Number of histogram buckets; the last one collects every degree >= 100
pub const DISTRIBUTION_BUCKETS: usize = 101;

/// Aggregate out-degree figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DegreeSummary {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

/// Node with the largest out-degree, lowest id on ties.
///
/// Scans ids in ascending order and only replaces the running best on a
/// strictly larger degree. `None` for a graph with no nodes.
pub fn max_degree_node(graph: &CompressedGraph) -> Option<NodeId> {
    let mut best: Option<(usize, usize)> = None;
    for node in 0..graph.node_count() {
        let degree = graph.out_degree(node);
        if best.map_or(true, |(_, max)| degree > max) {
            best = Some((node, degree));
        }
    }
    best.map(|(node, _)| node as NodeId)
}

/// Min, max and mean out-degree; all zero for an empty graph
pub fn degree_summary(graph: &CompressedGraph) -> DegreeSummary {
    let n = graph.node_count();
    if n == 0 {
        return DegreeSummary { min: 0, max: 0, mean: 0.0 };
    }

    let mut min = usize::MAX;
    let mut max = 0;
    for node in 0..n {
        let degree = graph.out_degree(node);
        min = min.min(degree);
        max = max.max(degree);
    }

    DegreeSummary {
        min,
        max,
        mean: graph.edge_count() as f64 / n as f64,
    }
}

/// Histogram of out-degrees, bucket `d` for degree `d`, capped at 100+
pub fn degree_distribution(graph: &CompressedGraph) -> Vec<usize> {
    let mut buckets = vec![0; DISTRIBUTION_BUCKETS];
    for node in 0..graph.node_count() {
        let bucket = graph.out_degree(node).min(DISTRIBUTION_BUCKETS - 1);
        buckets[bucket] += 1;
    }
    buckets
}
