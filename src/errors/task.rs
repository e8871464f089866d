// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors returned by individual tasks.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Underlying file-system operation failed
    #[error("{operation} '{path}': {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A matched entry could not be read while walking a glob
    #[error("failed to walk glob '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::GlobError,
    },

    /// A literal (wildcard-free) input path does not exist
    #[error("file not found with singular glob: '{pattern}'")]
    MissingInput { pattern: String },

    /// Sass compilation failed and the task runs in strict mode
    #[error("failed to compile '{path}': {message}")]
    SassCompile { path: PathBuf, message: String },

    /// The blocking worker that ran the task panicked or was cancelled
    #[error("background work for task '{task_id}' did not complete: {source}")]
    Join {
        task_id: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl TaskError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
