// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the asset pipeline. Message types follow a struct-based pattern
//! with a `Display` implementation so that:
//!
//! * log text lives in one place instead of being scattered through the tasks
//! * every event carries the same structured fields wherever it is emitted
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - pipeline run lifecycle and per-task events
//! * `messages::task` - what individual tasks wrote, deleted or skipped
//! * `messages::validation` - configuration validation errors
//!
//! # Usage
//!
//! ```rust
//! use theme_assets::observability::messages::task::FilesDeleted;
//! use theme_assets::observability::messages::StructuredLog;
//!
//! FilesDeleted {
//!     task_id: "clean",
//!     count: 3,
//! }
//! .log();
//! ```

pub mod messages;
