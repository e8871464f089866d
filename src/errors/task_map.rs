// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for task map creation and task instantiation.

use crate::config::TaskKind;
use thiserror::Error;

/// Errors that can occur during task map creation
#[derive(Debug, Error)]
pub enum TaskMapError {
    /// Failed to create a task from configuration
    #[error("Failed to create {kind:?} task '{task_id}': {reason}")]
    TaskCreationFailed {
        task_id: String,
        kind: TaskKind,
        reason: String,
    },
}
