//! Graph representation and algorithms module

pub mod compressed;
pub mod builder;
pub mod degree;
pub mod algorithms;
pub mod handle;

pub use algorithms::Subgraph;
pub use builder::GraphBuilder;
pub use compressed::CompressedGraph;
pub use handle::GraphHandle;

/// Dense node identifier in `[0, N)`
pub type NodeId = u32;
