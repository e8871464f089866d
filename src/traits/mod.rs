pub mod executor;
pub mod task;

pub use crate::config::{ExecutionPlan, TaskMap};
pub use executor::PipelineExecutor;
pub use task::{Task, TaskContext, TaskReport};
