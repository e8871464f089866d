// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};

use crate::errors::TaskError;
use crate::traits::{Task, TaskContext, TaskReport};

/// A task that records its id into a shared log when run
pub struct RecordingTask {
    pub id: String,
    pub log: Arc<Mutex<Vec<String>>>,
}

impl RecordingTask {
    pub fn new(id: &str, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            id: id.to_string(),
            log,
        }
    }
}

#[async_trait::async_trait]
impl Task for RecordingTask {
    async fn run(&self, _ctx: &TaskContext) -> Result<TaskReport, TaskError> {
        self.log.lock().unwrap().push(self.id.clone());
        Ok(TaskReport::new(&self.id, self.name()))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// A task that always fails with a missing input
pub struct FailingTask {
    pub id: String,
}

impl FailingTask {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

#[async_trait::async_trait]
impl Task for FailingTask {
    async fn run(&self, _ctx: &TaskContext) -> Result<TaskReport, TaskError> {
        Err(TaskError::MissingInput {
            pattern: format!("{}/missing.js", self.id),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
