// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::TaskError;
use crate::observability::messages::{task::NoInputsMatched, StructuredLog};
use crate::traits::{Task, TaskContext, TaskReport};
use crate::utils::paths::expand_patterns;

/// Copy task - byte copies matched files into an output directory.
///
/// Each file keeps its path relative to its pattern's glob base, so
/// `fonts/*` lands flat in the output while `fonts/**/*` keeps subdirectories.
pub struct CopyTask {
    id: String,
    inputs: Vec<String>,
    output_dir: String,
}

impl CopyTask {
    pub fn new(id: String, inputs: Vec<String>, output_dir: String) -> Self {
        Self {
            id,
            inputs,
            output_dir,
        }
    }
}

#[async_trait]
impl Task for CopyTask {
    async fn run(&self, ctx: &TaskContext) -> Result<TaskReport, TaskError> {
        let mut report = TaskReport::new(&self.id, self.name());
        let matched = expand_patterns(&ctx.root, &self.inputs, true)?;
        report.inputs = matched.len();

        if matched.is_empty() {
            NoInputsMatched { task_id: &self.id }.log();
            return Ok(report);
        }

        let output_dir = ctx.resolve(&self.output_dir);
        for file in &matched {
            let destination = output_dir.join(file.relative());
            if let Some(parent) = destination.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| TaskError::io("failed to create directory", parent, e))?;
            }
            let copied = tokio::fs::copy(&file.path, &destination)
                .await
                .map_err(|e| TaskError::io("failed to copy", &file.path, e))?;

            tracing::debug!(
                task_id = %self.id,
                from = %file.path.display(),
                to = %destination.display(),
                bytes = copied,
                "copied file"
            );
            report.bytes_written += copied;
            report.outputs.push(destination);
        }

        Ok(report)
    }

    fn name(&self) -> &'static str {
        "copy"
    }
}
