//! Plain-text edge list parsing
//!
//! Input is one directed edge per line, `u v`, with both ids non-negative
//! integers. Blank lines are skipped. Any other malformed line aborts the
//! whole read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::Config;
use crate::error::{GraphError, Result};
use crate::graph::NodeId;

/// Ordered sequence of directed edges plus the dense node-count bound
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    edges: Vec<(NodeId, NodeId)>,
    node_count: usize,
}

impl EdgeList {
    /// Create an empty edge list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty edge list with room for `capacity` edges
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            node_count: 0,
        }
    }

    /// Append a directed edge `u -> v`, growing the node space to cover both ends
    pub fn push(&mut self, u: NodeId, v: NodeId) {
        let needed = u.max(v) as usize + 1;
        if needed > self.node_count {
            self.node_count = needed;
        }
        self.edges.push((u, v));
    }

    /// `1 + max(id)` over all endpoints, or 0 when there are no edges
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges, parallel edges and self-loops included
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in input order
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }
}

impl FromIterator<(NodeId, NodeId)> for EdgeList {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId)>>(iter: I) -> Self {
        let mut list = EdgeList::new();
        for (u, v) in iter {
            list.push(u, v);
        }
        list
    }
}

/// Streaming reader for `u v` edge lists
#[derive(Debug, Clone, Copy)]
pub struct EdgeListLoader {
    skip_comments: bool,
}

impl Default for EdgeListLoader {
    fn default() -> Self {
        Self { skip_comments: false }
    }
}

impl EdgeListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader configured from the shared settings
    pub fn from_config(config: &Config) -> Self {
        Self {
            skip_comments: config.skip_comments,
        }
    }

    /// Treat `#`-prefixed lines as comments (on) or as malformed input (off, the default)
    pub fn skip_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }

    /// Open `path` and read it as an edge list
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<EdgeList> {
        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// Read an edge list line by line from `reader`
    pub fn read<R: BufRead>(&self, mut reader: R) -> Result<EdgeList> {
        let mut edges = EdgeList::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(_) => {
                    return Err(GraphError::parse(
                        line_no,
                        &String::from_utf8_lossy(&buf),
                        "line is not valid UTF-8",
                    ))
                }
            };

            if let Some((u, v)) = self.parse_line(line_no, line)? {
                edges.push(u, v);
            }
        }

        Ok(edges)
    }

    fn parse_line(&self, line_no: usize, line: &str) -> Result<Option<(NodeId, NodeId)>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || (self.skip_comments && trimmed.starts_with('#')) {
            return Ok(None);
        }

        let mut tokens = trimmed.split_whitespace();
        let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            let found = trimmed.split_whitespace().count();
            return Err(GraphError::parse(
                line_no,
                line,
                format!("expected 2 node ids, found {found} tokens"),
            ));
        };

        let u = parse_node_id(line_no, line, a)?;
        let v = parse_node_id(line_no, line, b)?;
        Ok(Some((u, v)))
    }
}

fn parse_node_id(line_no: usize, line: &str, token: &str) -> Result<NodeId> {
    token
        .parse::<NodeId>()
        .map_err(|_| GraphError::parse(line_no, line, format!("invalid node id `{token}`")))
}
