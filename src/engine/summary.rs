// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::path::PathBuf;

use crate::traits::TaskReport;

/// A task that failed under `FailureStrategy::ContinueOnError`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskFailure {
    pub task_id: String,
    pub error: String,
}

/// Outcome of a pipeline run.
///
/// Reports are in execution order. `failures` is only ever non-empty when the
/// run continued past a failing task.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub completed: Vec<TaskReport>,
    pub failures: Vec<TaskFailure>,
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Every path written (or deleted, for clean tasks) during the run
    pub fn outputs(&self) -> impl Iterator<Item = &PathBuf> {
        self.completed.iter().flat_map(|r| r.outputs.iter())
    }

    pub fn bytes_written(&self) -> u64 {
        self.completed.iter().map(|r| r.bytes_written).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.completed.iter().map(|r| r.warnings.len()).sum()
    }
}
