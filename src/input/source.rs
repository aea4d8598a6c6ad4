// src/input/source.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::TasksSection;
use crate::errors::{Result, SalbpError};
use crate::input::record::{parse_records, TaskRecord};

/// Where the task definitions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSource {
    /// Text embedded in the config file (`[tasks].inline`).
    Inline(String),
    /// A task file on disk.
    File(PathBuf),
}

impl TaskSource {
    /// Pick the task source for a run.
    ///
    /// Precedence:
    /// 1. a file given on the command line,
    /// 2. a non-blank `[tasks].inline` block,
    /// 3. `[tasks].file`, resolved relative to `config_dir`.
    pub fn resolve(
        cli_file: Option<&Path>,
        tasks: &TasksSection,
        config_dir: &Path,
    ) -> Result<Self> {
        if let Some(path) = cli_file {
            return Ok(TaskSource::File(path.to_path_buf()));
        }

        if let Some(text) = tasks.inline.as_deref() {
            if !text.trim().is_empty() {
                return Ok(TaskSource::Inline(text.to_string()));
            }
        }

        match tasks.file.as_deref() {
            Some(path) if path.is_absolute() => Ok(TaskSource::File(path.to_path_buf())),
            Some(path) => Ok(TaskSource::File(config_dir.join(path))),
            None => Err(SalbpError::MissingInput),
        }
    }

    /// Read and parse the records from this source.
    pub fn read_records(&self) -> Result<Vec<TaskRecord>> {
        match self {
            TaskSource::Inline(text) => {
                debug!("reading tasks from inline config block");
                parse_records(text)
            }
            TaskSource::File(path) => {
                debug!(path = %path.display(), "reading tasks from file");
                let contents = fs::read_to_string(path)?;
                parse_records(&contents)
            }
        }
    }
}
