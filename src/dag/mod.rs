// src/dag/mod.rs

//! Precedence graph of line tasks.
//!
//! - [`task`] holds task ids and resolved task nodes.
//! - [`graph`] builds the graph from parsed records and rejects unknown
//!   references and cycles.

pub mod graph;
pub mod task;

pub use graph::TaskGraph;
pub use task::{Task, TaskId};
