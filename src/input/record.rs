// src/input/record.rs

//! Line-oriented task records.
//!
//! One task per line:
//!
//! ```text
//! <id> <duration> [<successor-id>...] ; [<predecessor-id>...]
//! ```
//!
//! The `;` and the predecessor list are optional. Blank lines and lines
//! starting with `#` are skipped.

use crate::dag::TaskId;
use crate::errors::{Result, SalbpError};

/// A task exactly as declared in the input, before references are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: TaskId,
    pub duration: u64,
    pub successors: Vec<TaskId>,
    pub predecessors: Vec<TaskId>,
}

impl TaskRecord {
    pub fn new(id: u32, duration: u64) -> Self {
        Self {
            id: TaskId(id),
            duration,
            successors: Vec::new(),
            predecessors: Vec::new(),
        }
    }
}

/// Parse every record in `text`.
///
/// Line numbers in errors are 1-based and refer to `text` as given.
pub fn parse_records(text: &str) -> Result<Vec<TaskRecord>> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(parse_line(idx + 1, trimmed)?);
    }

    Ok(records)
}

/// Parse a single non-empty record line.
pub fn parse_line(line_no: usize, line: &str) -> Result<TaskRecord> {
    let (head, tail) = match line.split_once(';') {
        Some((head, tail)) => (head, Some(tail)),
        None => (line, None),
    };

    if tail.is_some_and(|t| t.contains(';')) {
        return Err(parse_error(line_no, "more than one ';' separator"));
    }

    let mut fields = head.split_whitespace();

    let id = match fields.next() {
        Some(tok) => parse_task_id(line_no, tok)?,
        None => return Err(parse_error(line_no, "missing task id")),
    };

    let duration = match fields.next() {
        Some(tok) => parse_duration(line_no, tok)?,
        None => return Err(parse_error(line_no, format!("task {id} has no duration"))),
    };

    let successors = fields
        .map(|tok| parse_task_id(line_no, tok))
        .collect::<Result<Vec<_>>>()?;

    let predecessors = tail
        .unwrap_or_default()
        .split_whitespace()
        .map(|tok| parse_task_id(line_no, tok))
        .collect::<Result<Vec<_>>>()?;

    Ok(TaskRecord {
        id,
        duration,
        successors,
        predecessors,
    })
}

fn parse_task_id(line_no: usize, tok: &str) -> Result<TaskId> {
    match tok.parse::<u32>() {
        Ok(0) => Err(parse_error(line_no, "task id must be positive (got 0)")),
        Ok(n) => Ok(TaskId(n)),
        Err(_) => Err(parse_error(line_no, format!("invalid task id '{tok}'"))),
    }
}

fn parse_duration(line_no: usize, tok: &str) -> Result<u64> {
    match tok.parse::<u64>() {
        Ok(0) => Err(parse_error(line_no, "duration must be positive (got 0)")),
        Ok(n) => Ok(n),
        Err(_) => Err(parse_error(line_no, format!("invalid duration '{tok}'"))),
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> SalbpError {
    SalbpError::Parse {
        line,
        message: message.into(),
    }
}
