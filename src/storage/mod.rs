//! Results persistence module

use anyhow::Result;
use crate::config::GuardDecision;
use crate::graph::degree::{degree_distribution, degree_summary};
use crate::graph::{GraphHandle, NodeId, Subgraph};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use serde_json::{json, to_string_pretty};

/// Save graph-level statistics to `summary.json` in the output directory
pub fn save_summary(handle: &GraphHandle, output_dir: &Path) -> Result<PathBuf> {
    log::info!("Saving graph summary");

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("summary.json");
    let mut file = File::create(&path)?;

    let graph = handle.graph();
    let summary = json!({
        "node_count": handle.node_count(),
        "edge_count": handle.edge_count(),
        "max_degree_node": handle.max_degree_node(),
        "max_degree": handle.max_degree_node().and_then(|n| handle.out_degree(n)),
        "degree": degree_summary(graph),
        "degree_distribution": degree_distribution(graph),
        "memory_bytes": graph.memory_usage(),
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(path)
}

/// Save one traversal result as `bfs_<start>_d<depth>.json`.
///
/// A `Refuse` decision keeps the counts and the node list but drops the
/// edge list, which dominates the size of large results.
pub fn save_subgraph(
    subgraph: &Subgraph,
    start: NodeId,
    max_depth: u32,
    decision: GuardDecision,
    output_dir: &Path,
) -> Result<PathBuf> {
    log::info!(
        "Saving BFS result from {} ({} nodes, {} edges)",
        start,
        subgraph.node_count(),
        subgraph.edge_count()
    );

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("bfs_{}_d{}.json", start, max_depth));
    let mut file = File::create(&path)?;

    let truncated = decision == GuardDecision::Refuse;
    let edges: &[(NodeId, NodeId)] = if truncated { &[] } else { &subgraph.edges };
    let result_json = json!({
        "start": start,
        "max_depth": max_depth,
        "node_count": subgraph.node_count(),
        "edge_count": subgraph.edge_count(),
        "edges_omitted": truncated,
        "nodes": subgraph.nodes,
        "edges": edges,
    });

    file.write_all(to_string_pretty(&result_json)?.as_bytes())?;

    Ok(path)
}
