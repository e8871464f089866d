// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Task backends.
//!
//! ## Local Backend
//! In-process file tasks, created from configuration by `LocalTaskFactory`:
//! - **clean**: delete matched files and directories
//! - **sass**: compile stylesheets with `grass` and join the CSS
//! - **copy**: byte copy into an output directory
//! - **concat**: join files into a bundle
//! - **options**: an execution options record with no build step
//!
//! ## Stub Backend (Test-Only)
//! `RecordingTask` and `FailingTask` for executor tests.
//!
//! # Example
//! ```rust
//! use theme_assets::backends::local::LocalTaskFactory;
//! use theme_assets::config::{TaskConfig, TaskKind};
//! use std::collections::HashMap;
//!
//! let config = TaskConfig {
//!     id: "master.js".to_string(),
//!     kind: TaskKind::Concat,
//!     inputs: vec!["js/vendor/a.js".to_string(), "js/vendor/b.js".to_string()],
//!     output: Some("js/dist/master.js".to_string()),
//!     options: HashMap::new(),
//! };
//!
//! let task = LocalTaskFactory::create_task(&config)?;
//! assert_eq!(task.name(), "concat");
//! # Ok::<(), theme_assets::errors::TaskMapError>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
