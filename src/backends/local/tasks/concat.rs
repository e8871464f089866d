// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::TaskError;
use crate::observability::messages::{task::NoInputsMatched, StructuredLog};
use crate::traits::{Task, TaskContext, TaskReport};
use crate::utils::paths::expand_patterns;

use super::write_output;

/// Concatenate task - joins the matched files, in pattern order, into one file
pub struct ConcatTask {
    id: String,
    inputs: Vec<String>,
    output: String,
    separator: Vec<u8>,
}

impl ConcatTask {
    pub fn new(id: String, inputs: Vec<String>, output: String) -> Self {
        Self {
            id,
            inputs,
            output,
            separator: Vec::new(),
        }
    }

    /// Bytes inserted between consecutive files, never after the last one
    pub fn with_separator(mut self, separator: impl Into<Vec<u8>>) -> Self {
        self.separator = separator.into();
        self
    }
}

#[async_trait]
impl Task for ConcatTask {
    async fn run(&self, ctx: &TaskContext) -> Result<TaskReport, TaskError> {
        let mut report = TaskReport::new(&self.id, self.name());
        let matched = expand_patterns(&ctx.root, &self.inputs, true)?;
        report.inputs = matched.len();

        if matched.is_empty() {
            NoInputsMatched { task_id: &self.id }.log();
            return Ok(report);
        }

        let mut bundle = Vec::new();
        for (i, file) in matched.iter().enumerate() {
            if i > 0 {
                bundle.extend_from_slice(&self.separator);
            }
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|e| TaskError::io("failed to read", &file.path, e))?;
            bundle.extend_from_slice(&bytes);
        }

        let output = ctx.resolve(&self.output);
        write_output(&self.id, &output, &bundle).await?;

        report.bytes_written = bundle.len() as u64;
        report.outputs.push(output);
        Ok(report)
    }

    fn name(&self) -> &'static str {
        "concat"
    }
}
