use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::errors::TaskError;

/// Where a task runs: every input glob and output path is relative to `root`.
#[derive(Debug, Clone)]
pub struct TaskContext {
    pub root: PathBuf,
}

impl TaskContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join a configured path onto the project root
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

/// What a finished task did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskReport {
    pub task_id: String,
    pub kind: &'static str,
    /// Number of input files (or, for `clean`, matched entries)
    pub inputs: usize,
    /// Files written, or removed for `clean`
    pub outputs: Vec<PathBuf>,
    pub bytes_written: u64,
    /// Problems that were logged without failing the task
    pub warnings: Vec<String>,
}

impl TaskReport {
    pub fn new(task_id: impl Into<String>, kind: &'static str) -> Self {
        Self {
            task_id: task_id.into(),
            kind,
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait Task: Send + Sync {
    async fn run(&self, ctx: &TaskContext) -> Result<TaskReport, TaskError>;

    /// The task kind, e.g. `concat`
    fn name(&self) -> &'static str;
}
