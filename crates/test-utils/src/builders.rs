#![allow(dead_code)]

use salbp::config::{ConfigFile, ConfigSection, RawConfigFile, TasksSection};
use salbp::dag::TaskGraph;
use salbp::input::TaskRecord;
use salbp::ordering::Method;

/// Builder for `TaskGraph` to simplify test setup.
///
/// ```ignore
/// let graph = GraphBuilder::new()
///     .task(1, 3)
///     .task_after(3, 8, &[1])
///     .build();
/// ```
pub struct GraphBuilder {
    records: Vec<TaskRecord>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// A task with no declared links.
    pub fn task(mut self, id: u32, duration: u64) -> Self {
        self.records.push(TaskRecord::new(id, duration));
        self
    }

    /// A task that must follow every id in `after`.
    pub fn task_after(mut self, id: u32, duration: u64, after: &[u32]) -> Self {
        let mut record = TaskRecord::new(id, duration);
        record.predecessors = after.iter().map(|&p| salbp::dag::TaskId(p)).collect();
        self.records.push(record);
        self
    }

    /// A task that must precede every id in `before`.
    pub fn task_before(mut self, id: u32, duration: u64, before: &[u32]) -> Self {
        let mut record = TaskRecord::new(id, duration);
        record.successors = before.iter().map(|&s| salbp::dag::TaskId(s)).collect();
        self.records.push(record);
        self
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn build(self) -> TaskGraph {
        TaskGraph::from_records(&self.records).expect("Failed to build valid graph from builder")
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ConfigFile`.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                tasks: TasksSection::default(),
            },
        }
    }

    pub fn workstations(mut self, n: usize) -> Self {
        self.config.config.workstations = n;
        self
    }

    pub fn methods(mut self, methods: &[Method]) -> Self {
        self.config.config.methods = methods.to_vec();
        self
    }

    pub fn inline_tasks(mut self, text: &str) -> Self {
        self.config.tasks.inline = Some(text.to_string());
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
