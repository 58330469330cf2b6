//! Input parsing module

pub mod edge_list;

pub use edge_list::{EdgeList, EdgeListLoader};
