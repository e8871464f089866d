pub mod sequential;
pub mod summary;

pub use sequential::SequentialExecutor;
pub use summary::{RunSummary, TaskFailure};
