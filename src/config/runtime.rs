// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Config, TaskMap};
use crate::engine::SequentialExecutor;
use crate::errors::{FailureStrategy, TaskMapError};
use crate::traits::PipelineExecutor;

/// Pipeline runtime builder - creates the task map and executor from configuration.
///
/// # Examples
///
/// ```
/// use theme_assets::config::{load_builtin_config, RuntimeBuilder};
/// use theme_assets::errors::FailureStrategy;
///
/// let config = load_builtin_config().unwrap();
/// let (tasks, _executor, failure_strategy) = RuntimeBuilder::from_config(&config).unwrap();
///
/// assert_eq!(tasks.len(), 7);
/// assert_eq!(failure_strategy, FailureStrategy::FailFast);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the pipeline runtime.
    ///
    /// Returns the `TaskMap` of every configured task, the executor that runs an
    /// `ExecutionPlan`, and the configured `FailureStrategy`.
    pub fn from_config(
        cfg: &Config,
    ) -> Result<(TaskMap, Box<dyn PipelineExecutor>, FailureStrategy), TaskMapError> {
        let tasks = TaskMap::from_config(cfg)?;
        let executor: Box<dyn PipelineExecutor> = Box::new(SequentialExecutor::new());
        Ok((tasks, executor, cfg.failure_strategy))
    }
}
