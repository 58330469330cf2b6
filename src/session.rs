//! Holder for the currently loaded graph
//!
//! A load builds a fresh `GraphHandle` off to the side and only then swaps
//! it in. Queries clone the current `Arc` and run against it, so a reload
//! never disturbs a query that is already in flight, and a failed load
//! leaves the previous graph in place.

use std::io::BufRead;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use crate::config::Config;
use crate::data::EdgeListLoader;
use crate::error::{GraphError, Result};
use crate::graph::{GraphHandle, NodeId, Subgraph};

/// The caller-side view of "the graph": empty until the first successful load
#[derive(Debug, Default)]
pub struct GraphSession {
    config: Config,
    current: RwLock<Option<Arc<GraphHandle>>>,
}

impl GraphSession {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            current: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load an edge list file and make it the current graph
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Arc<GraphHandle>> {
        let path = path.as_ref();
        let size_mb = std::fs::metadata(path)
            .map(|m| m.len() as f64 / (1024.0 * 1024.0))
            .unwrap_or(0.0);
        log::info!("Loading edge list {} ({:.2} MB)", path.display(), size_mb);

        let started = Instant::now();
        let loaded = GraphHandle::load_path(&self.loader(), path);
        self.finish_load(loaded, started)
    }

    /// Load an edge list from any buffered reader and make it the current graph
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Arc<GraphHandle>> {
        let started = Instant::now();
        let loaded = GraphHandle::load(&self.loader(), reader);
        self.finish_load(loaded, started)
    }

    /// Swap in an already-built handle
    pub fn publish(&self, handle: GraphHandle) -> Arc<GraphHandle> {
        let handle = Arc::new(handle);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::clone(&handle));
        handle
    }

    /// The current handle, or `Precondition` if nothing has been loaded
    pub fn current(&self) -> Result<Arc<GraphHandle>> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(|| GraphError::Precondition("no graph loaded".into()))
    }

    pub fn is_loaded(&self) -> bool {
        self.current().is_ok()
    }

    pub fn node_count(&self) -> Result<usize> {
        Ok(self.current()?.node_count())
    }

    pub fn edge_count(&self) -> Result<usize> {
        Ok(self.current()?.edge_count())
    }

    /// Max out-degree node of the current graph; `None` if it has no nodes
    pub fn max_degree_node(&self) -> Result<Option<NodeId>> {
        Ok(self.current()?.max_degree_node())
    }

    /// BFS on the current graph with signed arguments as entered by a user.
    ///
    /// Negative `start` is `OutOfRange`, negative `max_depth` is
    /// `InvalidArgument`. The configured `max_visited` ceiling applies.
    pub fn bfs(&self, start: i64, max_depth: i64) -> Result<Subgraph> {
        let handle = self.current()?;

        let node_count = handle.node_count();
        let start_id = NodeId::try_from(start)
            .ok()
            .filter(|&id| (id as usize) < node_count)
            .ok_or(GraphError::OutOfRange { start, node_count })?;

        if max_depth < 0 {
            return Err(GraphError::InvalidArgument(format!(
                "max_depth must be non-negative, got {max_depth}"
            )));
        }
        let depth = u32::try_from(max_depth).unwrap_or(u32::MAX);

        log::debug!("Running BFS from {} with depth {}", start_id, depth);
        let started = Instant::now();
        let result = handle.bfs_bounded(start_id, depth, self.config.max_visited)?;
        log::info!(
            "BFS from {} (depth {}) finished in {:.4}s: {} nodes, {} edges",
            start_id,
            depth,
            started.elapsed().as_secs_f64(),
            result.node_count(),
            result.edge_count()
        );

        Ok(result)
    }

    fn loader(&self) -> EdgeListLoader {
        EdgeListLoader::from_config(&self.config)
    }

    fn finish_load(&self, loaded: Result<GraphHandle>, started: Instant) -> Result<Arc<GraphHandle>> {
        let handle = match loaded {
            Ok(handle) => handle,
            Err(err) => {
                log::warn!("Load failed, keeping the previous graph: {}", err);
                return Err(err);
            }
        };

        log::info!(
            "Load complete in {:.4}s: {} nodes, {} edges",
            started.elapsed().as_secs_f64(),
            handle.node_count(),
            handle.edge_count()
        );
        Ok(self.publish(handle))
    }
}
