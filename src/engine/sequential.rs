// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sequential executor.
//!
//! Runs an `ExecutionPlan` one task at a time, in plan order. Every task in the
//! plan is checked against the `TaskMap` before the first one starts, so a
//! misconfigured plan never leaves a half-built dist directory behind.
//!
//! Failure handling:
//! - **FailFast**: the first failing task ends the run with `ExecutionError::TaskFailed`
//! - **ContinueOnError**: the failure is logged, recorded in the summary, and the
//!   remaining tasks still run

use async_trait::async_trait;
use std::time::Instant;
use tracing::Instrument;

use crate::config::{ExecutionPlan, TaskMap};
use crate::engine::summary::{RunSummary, TaskFailure};
use crate::errors::{ExecutionError, FailureStrategy};
use crate::observability::messages::engine::{
    RunCompleted, RunStarted, TaskCompleted, TaskFailed, TaskStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{PipelineExecutor, TaskContext};

#[derive(Debug, Default)]
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn new() -> Self {
        Self
    }

    async fn run_plan(
        tasks: &TaskMap,
        plan: &ExecutionPlan,
        ctx: &TaskContext,
        failure_strategy: FailureStrategy,
    ) -> Result<RunSummary, ExecutionError> {
        let mut summary = RunSummary::default();

        for task_id in plan.iter() {
            let task = tasks
                .get(task_id)
                .ok_or_else(|| ExecutionError::TaskNotFound {
                    task_id: task_id.clone(),
                })?;

            let started = TaskStarted {
                task_id,
                kind: task.name(),
            };
            started.log();
            let start_time = Instant::now();

            match task.run(ctx).instrument(started.span("task")).await {
                Ok(report) => {
                    TaskCompleted {
                        task_id,
                        outputs: report.outputs.len(),
                        warnings: report.warnings.len(),
                        duration: start_time.elapsed(),
                    }
                    .log();
                    summary.completed.push(report);
                }
                Err(error) => {
                    TaskFailed {
                        task_id,
                        error: &error,
                    }
                    .log();

                    match failure_strategy {
                        FailureStrategy::FailFast => {
                            return Err(ExecutionError::TaskFailed {
                                task_id: task_id.clone(),
                                source: error,
                            });
                        }
                        FailureStrategy::ContinueOnError => {
                            summary.failures.push(TaskFailure {
                                task_id: task_id.clone(),
                                error: error.to_string(),
                            });
                        }
                    }
                }
            }
        }

        Ok(summary)
    }
}

#[async_trait]
impl PipelineExecutor for SequentialExecutor {
    async fn execute_with_strategy(
        &self,
        tasks: TaskMap,
        plan: ExecutionPlan,
        ctx: TaskContext,
        failure_strategy: FailureStrategy,
    ) -> Result<RunSummary, ExecutionError> {
        if let Some(missing) = plan.iter().find(|id| !tasks.contains_key(id)) {
            return Err(ExecutionError::TaskNotFound {
                task_id: missing.clone(),
            });
        }

        let root = ctx.root.display().to_string();
        let started = RunStarted {
            task_count: plan.len(),
            root: &root,
            failure_strategy,
        };
        started.log();
        let start_time = Instant::now();

        let mut summary = Self::run_plan(&tasks, &plan, &ctx, failure_strategy)
            .instrument(started.span("pipeline_run"))
            .await?;
        summary.duration_ms = start_time.elapsed().as_millis() as u64;

        RunCompleted {
            completed: summary.completed.len(),
            failed: summary.failures.len(),
            duration: start_time.elapsed(),
        }
        .log();

        Ok(summary)
    }
}
