//! Core library for the graph reach analyzer
//!
//! Loads plain-text edge lists into an immutable CSR graph and answers
//! max-out-degree and bounded breadth-first reachability queries.

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod session;
pub mod storage;

pub use config::{Config, GuardDecision, SubgraphGuard};
pub use data::{EdgeList, EdgeListLoader};
pub use error::{GraphError, Result};
pub use graph::{CompressedGraph, GraphBuilder, GraphHandle, NodeId, Subgraph};
pub use session::GraphSession;
