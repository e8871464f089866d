// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for file-level task events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// A task wrote its output file.
///
/// # Log Level
/// `debug!` - the task completion line already summarizes outputs
pub struct OutputWritten<'a> {
    pub task_id: &'a str,
    pub path: &'a Path,
    pub size: usize,
}

impl Display for OutputWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}' wrote {} ({} bytes)",
            self.task_id,
            self.path.display(),
            self.size
        )
    }
}

impl StructuredLog for OutputWritten<'_> {
    fn log(&self) {
        tracing::debug!(
            task_id = self.task_id,
            path = %self.path.display(),
            size = self.size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "output_written",
            span_name = name,
            task_id = self.task_id,
            path = %self.path.display(),
            size = self.size,
        )
    }
}

/// None of a task's wildcard inputs matched, so it produced nothing.
///
/// # Log Level
/// `warn!` - usually a typo in a pattern or a missing checkout
pub struct NoInputsMatched<'a> {
    pub task_id: &'a str,
}

impl Display for NoInputsMatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "'{}' matched no input files, nothing written", self.task_id)
    }
}

impl StructuredLog for NoInputsMatched<'_> {
    fn log(&self) {
        tracing::warn!(task_id = self.task_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("no_inputs_matched", span_name = name, task_id = self.task_id)
    }
}

pub struct FilesDeleted<'a> {
    pub task_id: &'a str,
    pub count: usize,
}

impl Display for FilesDeleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "'{}' deleted {} entries", self.task_id, self.count)
    }
}

impl StructuredLog for FilesDeleted<'_> {
    fn log(&self) {
        tracing::info!(task_id = self.task_id, count = self.count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "files_deleted",
            span_name = name,
            task_id = self.task_id,
            count = self.count,
        )
    }
}

/// One stylesheet failed to compile.
///
/// # Log Level
/// `error!` - the stylesheet is left out of the bundle but the run continues
///
/// # Example
/// ```
/// use std::path::Path;
/// use theme_assets::observability::messages::task::SassCompileFailed;
///
/// let msg = SassCompileFailed {
///     task_id: "minify-sass",
///     path: Path::new("css/broken.scss"),
///     error: "expected expression",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "'minify-sass' failed to compile css/broken.scss: expected expression"
/// );
/// ```
pub struct SassCompileFailed<'a> {
    pub task_id: &'a str,
    pub path: &'a Path,
    pub error: &'a str,
}

impl Display for SassCompileFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}' failed to compile {}: {}",
            self.task_id,
            self.path.display(),
            self.error
        )
    }
}

impl StructuredLog for SassCompileFailed<'_> {
    fn log(&self) {
        tracing::error!(
            task_id = self.task_id,
            path = %self.path.display(),
            error = self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "sass_compile_failed",
            span_name = name,
            task_id = self.task_id,
            path = %self.path.display(),
        )
    }
}

/// Execution options were resolved for an external-command task.
///
/// # Log Level
/// `debug!` - nothing is executed with them
pub struct ExecOptionsResolved<'a> {
    pub task_id: &'a str,
    pub continue_on_error: bool,
    pub pipe_stdout: bool,
}

impl Display for ExecOptionsResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}' options: continue_on_error={}, pipe_stdout={}",
            self.task_id, self.continue_on_error, self.pipe_stdout
        )
    }
}

impl StructuredLog for ExecOptionsResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            task_id = self.task_id,
            continue_on_error = self.continue_on_error,
            pipe_stdout = self.pipe_stdout,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "exec_options",
            span_name = name,
            task_id = self.task_id,
            continue_on_error = self.continue_on_error,
            pipe_stdout = self.pipe_stdout,
        )
    }
}
