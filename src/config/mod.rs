// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod plan;
mod runtime;
mod task_map;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_builtin_config, load_config, Config, TaskConfig, TaskKind,
};
pub use plan::ExecutionPlan;
pub use runtime::RuntimeBuilder;
pub use task_map::TaskMap;
pub use validation::validate_config;
