//! Error types for graph loading and queries
//!
//! Every failure aborts the requested operation and leaves all other state
//! untouched. Nothing here is recovered locally; callers decide how to
//! report it.

use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors surfaced by the loader, the handle and the session.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A non-blank input line was not exactly two non-negative integers
    #[error("line {line}: {reason}: {content:?}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Raw line text, without the trailing newline
        content: String,
        /// What was wrong with it
        reason: String,
    },

    /// Reading the edge list failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Start node outside `[0, N)`
    #[error("start node {start} out of range for graph with {node_count} nodes")]
    OutOfRange {
        /// Requested start, as the caller supplied it
        start: i64,
        /// `N` of the queried graph
        node_count: usize,
    },

    /// Argument rejected before any work began (e.g. negative depth)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Query issued with no graph loaded
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Traversal reached more nodes than the configured ceiling
    #[error("traversal exceeded the visited-node limit of {limit}")]
    VisitLimitExceeded {
        /// The ceiling that was hit
        limit: usize,
    },
}

impl GraphError {
    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            content: content.trim_end_matches(&['\r', '\n'][..]).to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(start: impl Into<i64>, node_count: usize) -> Self {
        GraphError::OutOfRange { start: start.into(), node_count }
    }
}
