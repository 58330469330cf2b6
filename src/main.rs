use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use rayon::prelude::*;

use graph_reach_analyzer::{storage, Config, GraphSession, GuardDecision, NodeId};

#[derive(Parser, Debug)]
#[clap(
    name = "graph-reach-analyzer",
    about = "Max-degree and bounded reachability queries over large directed edge lists"
)]
struct Cli {
    /// Path to input edge list, one "u v" pair per line
    #[clap(long)]
    input: PathBuf,

    /// Output directory for results
    #[clap(long, default_value = "reach_results")]
    output_dir: PathBuf,

    /// BFS start node; repeat to run several queries in parallel.
    /// Defaults to the max-out-degree node
    #[clap(long, allow_negative_numbers = true)]
    start: Vec<i64>,

    /// Maximum BFS depth in hops
    #[clap(long, default_value = "2", allow_negative_numbers = true)]
    depth: i64,

    /// Abort a traversal once it has visited more than this many nodes
    #[clap(long)]
    max_visited: Option<usize>,

    /// Warn when a result has more nodes than this
    #[clap(long, default_value = "1000")]
    warn_nodes: usize,

    /// Omit the edge list of results with more nodes than this
    #[clap(long, default_value = "5000")]
    max_render_nodes: usize,

    /// Skip lines starting with '#' (dataset headers) instead of rejecting them
    #[clap(long)]
    skip_comments: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = Config::new(
        args.skip_comments,
        args.max_visited,
        args.warn_nodes,
        args.max_render_nodes,
    );
    let guard = config.guard();
    let session = GraphSession::new(config);

    log::info!("Input: {}", args.input.display());
    log::info!("Output: {}", args.output_dir.display());

    // 1. Load and build
    let handle = session.load_path(&args.input)?;

    // 2. Degree query
    let starts = match (args.start.is_empty(), handle.max_degree_node()) {
        (false, _) => args.start.clone(),
        (true, Some(node)) => {
            log::info!(
                "Node with highest out-degree: {} (degree {})",
                node,
                handle.out_degree(node).unwrap_or(0)
            );
            vec![i64::from(node)]
        }
        (true, None) => {
            log::warn!("Graph is empty; no traversal to run");
            Vec::new()
        }
    };

    storage::save_summary(&handle, &args.output_dir)?;

    // 3. Traversals, all against the same immutable handle
    let results: Vec<_> = starts
        .par_iter()
        .map(|&start| (start, session.bfs(start, args.depth)))
        .collect();

    let mut failures = 0;
    for (start, result) in results {
        let subgraph = match result {
            Ok(subgraph) => subgraph,
            Err(err) => {
                log::error!("BFS from {} failed: {}", start, err);
                failures += 1;
                continue;
            }
        };

        let decision = guard.classify(subgraph.node_count());
        match decision {
            GuardDecision::Render => {}
            GuardDecision::Warn => log::warn!(
                "Result from {} is large ({} nodes)",
                start,
                subgraph.node_count()
            ),
            GuardDecision::Refuse => log::warn!(
                "Result from {} has {} nodes; edge list omitted, try a smaller depth",
                start,
                subgraph.node_count()
            ),
        }

        let start_id = NodeId::try_from(start)?;
        let depth = u32::try_from(args.depth).unwrap_or(u32::MAX);
        storage::save_subgraph(&subgraph, start_id, depth, decision, &args.output_dir)?;
    }

    if failures > 0 {
        return Err(anyhow!("{} of {} traversals failed", failures, starts.len()));
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir.display());

    Ok(())
}
