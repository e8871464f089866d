// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::io::ErrorKind;

use crate::errors::TaskError;
use crate::observability::messages::{task::FilesDeleted, StructuredLog};
use crate::traits::{Task, TaskContext, TaskReport};
use crate::utils::paths::expand_patterns;

/// Clean task - deletes every file or directory its patterns match
pub struct CleanTask {
    id: String,
    patterns: Vec<String>,
}

impl CleanTask {
    pub fn new(id: String, patterns: Vec<String>) -> Self {
        Self { id, patterns }
    }
}

#[async_trait]
impl Task for CleanTask {
    async fn run(&self, ctx: &TaskContext) -> Result<TaskReport, TaskError> {
        let mut report = TaskReport::new(&self.id, self.name());

        let mut matched = Vec::new();
        for pattern in &self.patterns {
            match expand_patterns(&ctx.root, std::slice::from_ref(pattern), false) {
                Ok(found) => matched.extend(found),
                // A literal path that is already gone has nothing to delete
                Err(TaskError::MissingInput { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        report.inputs = matched.len();

        for entry in matched {
            let path = entry.path;
            let result = if path.is_dir() {
                tokio::fs::remove_dir_all(&path).await
            } else {
                tokio::fs::remove_file(&path).await
            };

            match result {
                Ok(()) => report.outputs.push(path),
                // Already gone with a directory removed earlier in this run
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(TaskError::io("failed to delete", path, e)),
            }
        }

        FilesDeleted {
            task_id: &self.id,
            count: report.outputs.len(),
        }
        .log();
        Ok(report)
    }

    fn name(&self) -> &'static str {
        "clean"
    }
}
