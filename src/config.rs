//! Configuration management for the graph reach analyzer

/// Default configuration for the graph reach analyzer
#[derive(Debug, Clone)]
pub struct Config {
    /// Skip lines starting with `#` (dataset headers) instead of rejecting them; off by default
    pub skip_comments: bool,

    /// Optional ceiling on visited nodes per traversal
    pub max_visited: Option<usize>,

    /// Results above this many nodes are flagged as large
    pub warn_nodes: usize,

    /// Results above this many nodes are not exported in full
    pub max_render_nodes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_comments: false,
            max_visited: None,
            warn_nodes: 1_000,
            max_render_nodes: 5_000,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        skip_comments: bool,
        max_visited: Option<usize>,
        warn_nodes: usize,
        max_render_nodes: usize,
    ) -> Self {
        Self {
            skip_comments,
            max_visited,
            warn_nodes,
            max_render_nodes,
        }
    }

    /// Result-size guard derived from this configuration
    pub fn guard(&self) -> SubgraphGuard {
        SubgraphGuard {
            warn_nodes: self.warn_nodes,
            max_render_nodes: self.max_render_nodes,
        }
    }
}

/// What a front end should do with a result of a given size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Small enough to show as is
    Render,
    /// Show, but tell the user it may be slow
    Warn,
    /// Too large to show
    Refuse,
}

/// Size thresholds applied to traversal results before presenting them
#[derive(Debug, Clone, Copy)]
pub struct SubgraphGuard {
    /// Strictly above this count results are flagged
    pub warn_nodes: usize,

    /// Strictly above this count results are refused
    pub max_render_nodes: usize,
}

impl SubgraphGuard {
    /// Classify a result by its visited-node count
    pub fn classify(&self, node_count: usize) -> GuardDecision {
        if node_count > self.max_render_nodes {
            GuardDecision::Refuse
        } else if node_count > self.warn_nodes {
            GuardDecision::Warn
        } else {
            GuardDecision::Render
        }
    }
}
