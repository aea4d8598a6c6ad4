// src/ordering/mod.rs

//! Task ordering heuristics.
//!
//! Each [`Method`] turns a [`TaskGraph`] into a linear task sequence that the
//! packer consumes front to back. Both methods return a permutation of the
//! graph's tasks and are deterministic: equal keys keep input order.

pub mod rpw;
pub mod wet;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::dag::{Task, TaskGraph};
use crate::errors::SalbpError;

pub use rpw::ranked_positional_weights;

/// Ordering heuristic. Names are case-insensitive wherever they are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Method {
    /// Largest task duration first.
    Wet,
    /// Ranked positional weight: own duration plus the heaviest successor
    /// chain, largest first.
    Rpw,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Wet, Method::Rpw];

    pub fn name(self) -> &'static str {
        match self {
            Method::Wet => "WET",
            Method::Rpw => "RPW",
        }
    }

    /// Produce the task sequence for this method.
    pub fn order(self, graph: &TaskGraph) -> Vec<&Task> {
        match self {
            Method::Wet => wet::order(graph),
            Method::Rpw => rpw::order(graph),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SalbpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WET" => Ok(Method::Wet),
            "RPW" => Ok(Method::Rpw),
            _ => Err(SalbpError::UnknownMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for Method {
    type Error = SalbpError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
