// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // task implementations
pub mod config;     // pipeline file, validation, plans
pub mod engine;     // pipeline executor
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // Task and PipelineExecutor seams
pub mod utils;      // glob expansion
