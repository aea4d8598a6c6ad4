// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::ordering::Method;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// workstations = 4
/// methods = ["WET", "RPW"]
///
/// [tasks]
/// file = "line.txt"
/// inline = """
/// 1 3 3;
/// 2 6 4;
/// """
/// ```
///
/// All sections are optional and have reasonable defaults. This is the
/// unchecked shape; convert it into a [`ConfigFile`] with `TryFrom` to run
/// validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Balancing settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Task input from `[tasks]`.
    #[serde(default)]
    pub tasks: TasksSection,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Target number of workstations.
    #[serde(default = "default_workstations")]
    pub workstations: usize,

    /// Ordering methods to run, in order.
    #[serde(default = "default_methods")]
    pub methods: Vec<Method>,
}

fn default_workstations() -> usize {
    4
}

fn default_methods() -> Vec<Method> {
    Method::ALL.to_vec()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            workstations: default_workstations(),
            methods: default_methods(),
        }
    }
}

/// `[tasks]` section.
///
/// A non-blank `inline` block wins over `file`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TasksSection {
    /// Task file, relative to the directory of the config file.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Task lines embedded in the config.
    #[serde(default)]
    pub inline: Option<String>,
}

/// Validated configuration.
///
/// Only obtainable through `ConfigFile::try_from(RawConfigFile)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub tasks: TasksSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: TasksSection) -> Self {
        Self { config, tasks }
    }
}
