// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::TaskError;

/// How the executor reacts to a task that fails.
///
/// # Variants
/// * `FailFast` - stop the run at the first failing task (default)
/// * `ContinueOnError` - record the failure and keep running the remaining tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    #[default]
    FailFast,
    ContinueOnError,
}

impl std::fmt::Display for FailureStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureStrategy::FailFast => write!(f, "fail_fast"),
            FailureStrategy::ContinueOnError => write!(f, "continue_on_error"),
        }
    }
}

/// Errors that stop a pipeline run
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A target given on the command line names neither a task nor a sequence
    #[error("Unknown task or sequence '{name}'")]
    UnknownTarget { name: String },

    /// A task listed in the execution plan is not in the task map
    #[error("Task '{task_id}' is not registered")]
    TaskNotFound { task_id: String },

    /// A task failed under `FailureStrategy::FailFast`
    #[error("Task '{task_id}' failed: {source}")]
    TaskFailed {
        task_id: String,
        #[source]
        source: TaskError,
    },
}
