// src/input/mod.rs

//! Task input: the line-record format and where records are read from.

pub mod record;
pub mod source;

pub use record::{parse_line, parse_records, TaskRecord};
pub use source::TaskSource;
