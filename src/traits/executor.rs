use async_trait::async_trait;

use crate::config::{ExecutionPlan, TaskMap};
use crate::engine::RunSummary;
use crate::errors::{ExecutionError, FailureStrategy};
use crate::traits::TaskContext;

#[async_trait]
pub trait PipelineExecutor: Send + Sync {
    /// Run an execution plan with the default failure strategy (FailFast).
    ///
    /// - `tasks`: registry mapping id -> task instance
    /// - `plan`: task ids in the order they must run
    /// - `ctx`: project root the tasks resolve paths against
    async fn execute(
        &self,
        tasks: TaskMap,
        plan: ExecutionPlan,
        ctx: TaskContext,
    ) -> Result<RunSummary, ExecutionError> {
        self.execute_with_strategy(tasks, plan, ctx, FailureStrategy::default())
            .await
    }

    /// Run with a specific failure handling strategy.
    ///
    /// Returns:
    /// - Ok(RunSummary): every task ran; under ContinueOnError this includes the failures
    /// - Err(ExecutionError): the first failure under FailFast, or a task missing from the map
    async fn execute_with_strategy(
        &self,
        tasks: TaskMap,
        plan: ExecutionPlan,
        ctx: TaskContext,
        failure_strategy: FailureStrategy,
    ) -> Result<RunSummary, ExecutionError>;
}
