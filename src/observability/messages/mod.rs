// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! `StructuredLog` to emit it at the right level with its fields attached.
//!
//! # Organization
//!
//! * `engine` - run and task lifecycle
//! * `task` - file-level task events
//! * `validation` - configuration validation errors
//!
//! # Usage Pattern
//!
//! ```rust
//! use theme_assets::observability::messages::engine::TaskStarted;
//! use theme_assets::observability::messages::StructuredLog;
//!
//! let msg = TaskStarted {
//!     task_id: "master.js",
//!     kind: "concat",
//! };
//!
//! let _span = msg.span("task");
//! msg.log();
//! ```

use tracing::Span;

pub mod engine;
pub mod task;
pub mod validation;

/// A log message that knows its level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event
    fn log(&self);

    /// Build a span carrying the same fields, for instrumenting the work the message describes
    fn span(&self, name: &str) -> Span;
}
