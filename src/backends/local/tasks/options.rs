// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::TaskError;
use crate::observability::messages::{task::ExecOptionsResolved, StructuredLog};
use crate::traits::{Task, TaskContext, TaskReport};

/// Options for running an external command from a pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExecOptions {
    pub continue_on_error: bool,
    pub pipe_stdout: bool,
}

/// Options task - carries an `ExecOptions` record and performs no build step.
///
/// Running it only reports the resolved options; nothing is read or written.
pub struct OptionsTask {
    id: String,
    options: ExecOptions,
}

impl OptionsTask {
    pub fn new(id: String, options: ExecOptions) -> Self {
        Self { id, options }
    }

    /// The record a runner would use for the external command
    pub fn options(&self) -> ExecOptions {
        self.options
    }
}

#[async_trait]
impl Task for OptionsTask {
    async fn run(&self, _ctx: &TaskContext) -> Result<TaskReport, TaskError> {
        ExecOptionsResolved {
            task_id: &self.id,
            continue_on_error: self.options.continue_on_error,
            pipe_stdout: self.options.pipe_stdout,
        }
        .log();

        Ok(TaskReport::new(&self.id, self.name()))
    }

    fn name(&self) -> &'static str {
        "options"
    }
}
