// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline run lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Run start and completion
//! * Individual task start, completion and failure

use crate::errors::FailureStrategy;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A pipeline run is starting.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use theme_assets::errors::FailureStrategy;
/// use theme_assets::observability::messages::engine::RunStarted;
///
/// let msg = RunStarted {
///     task_count: 4,
///     root: ".",
///     failure_strategy: FailureStrategy::FailFast,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Starting pipeline run: 4 tasks in '.' (fail_fast)"
/// );
/// ```
pub struct RunStarted<'a> {
    pub task_count: usize,
    pub root: &'a str,
    pub failure_strategy: FailureStrategy,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline run: {} tasks in '{}' ({})",
            self.task_count, self.root, self.failure_strategy
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            task_count = self.task_count,
            root = self.root,
            failure_strategy = %self.failure_strategy,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run",
            span_name = name,
            task_count = self.task_count,
            root = self.root,
            failure_strategy = %self.failure_strategy,
        )
    }
}

/// A pipeline run finished. `failed` is only non-zero when the run continued past errors.
///
/// # Log Level
/// `info!` when every task succeeded, `warn!` otherwise
pub struct RunCompleted {
    pub completed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl Display for RunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run finished: {} completed, {} failed in {:?}",
            self.completed, self.failed, self.duration
        )
    }
}

impl StructuredLog for RunCompleted {
    fn log(&self) {
        if self.failed == 0 {
            tracing::info!(
                completed = self.completed,
                failed = self.failed,
                duration_ms = self.duration.as_millis() as u64,
                "{}", self
            );
        } else {
            tracing::warn!(
                completed = self.completed,
                failed = self.failed,
                duration_ms = self.duration.as_millis() as u64,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run_completed",
            span_name = name,
            completed = self.completed,
            failed = self.failed,
            duration = ?self.duration,
        )
    }
}

/// A task is starting.
///
/// # Log Level
/// `info!` - mirrors the "Starting 'task'..." line of a build tool
pub struct TaskStarted<'a> {
    pub task_id: &'a str,
    pub kind: &'a str,
}

impl Display for TaskStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Starting '{}' ({})", self.task_id, self.kind)
    }
}

impl StructuredLog for TaskStarted<'_> {
    fn log(&self) {
        tracing::info!(task_id = self.task_id, kind = self.kind, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "task",
            span_name = name,
            task_id = self.task_id,
            kind = self.kind,
        )
    }
}

/// A task finished successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use theme_assets::observability::messages::engine::TaskCompleted;
/// use std::time::Duration;
///
/// let msg = TaskCompleted {
///     task_id: "copy-fonts",
///     outputs: 12,
///     warnings: 0,
///     duration: Duration::from_millis(8),
/// };
///
/// assert!(msg.to_string().starts_with("Finished 'copy-fonts'"));
/// ```
pub struct TaskCompleted<'a> {
    pub task_id: &'a str,
    pub outputs: usize,
    pub warnings: usize,
    pub duration: Duration,
}

impl Display for TaskCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Finished '{}' after {:?}: {} outputs, {} warnings",
            self.task_id, self.duration, self.outputs, self.warnings
        )
    }
}

impl StructuredLog for TaskCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            task_id = self.task_id,
            outputs = self.outputs,
            warnings = self.warnings,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "task_completed",
            span_name = name,
            task_id = self.task_id,
            outputs = self.outputs,
            warnings = self.warnings,
            duration = ?self.duration,
        )
    }
}

/// A task returned an error.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use theme_assets::errors::TaskError;
/// use theme_assets::observability::messages::engine::TaskFailed;
///
/// let error = TaskError::MissingInput {
///     pattern: "css/animate.css".to_string(),
/// };
/// let msg = TaskFailed {
///     task_id: "animate.css",
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("css/animate.css"));
/// ```
pub struct TaskFailed<'a> {
    pub task_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for TaskFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "'{}' errored: {}", self.task_id, self.error)
    }
}

impl StructuredLog for TaskFailed<'_> {
    fn log(&self) {
        tracing::error!(
            task_id = self.task_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "task_failed",
            span_name = name,
            task_id = self.task_id,
            error = %self.error,
        )
    }
}
