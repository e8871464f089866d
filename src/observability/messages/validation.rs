// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation errors.
//!
//! This module contains message types for logging events related to:
//! * Sequences that reference unknown tasks or sequences
//! * Sequences that include themselves
//! * The overall validation result for a pipeline file

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Cyclic sequence detected in configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use theme_assets::observability::messages::validation::CyclicSequenceDetected;
///
/// let cycle = vec!["build", "default", "build"];
/// let msg = CyclicSequenceDetected { cycle: &cycle };
///
/// assert_eq!(msg.to_string(), "Cyclic sequence detected: build -> default -> build");
/// ```
pub struct CyclicSequenceDetected<'a> {
    pub cycle: &'a [&'a str],
}

impl Display for CyclicSequenceDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cyclic sequence detected: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for CyclicSequenceDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
        )
    }
}

/// A sequence step names neither a task nor a sequence.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnresolvedReference<'a> {
    pub sequence: &'a str,
    pub missing_reference: &'a str,
}

impl Display for UnresolvedReference<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Sequence '{}' references '{}' which does not exist",
            self.sequence, self.missing_reference
        )
    }
}

impl StructuredLog for UnresolvedReference<'_> {
    fn log(&self) {
        tracing::error!(
            sequence = self.sequence,
            missing_reference = self.missing_reference,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            sequence = self.sequence,
            missing_reference = self.missing_reference,
        )
    }
}

/// A pipeline file was rejected. The individual problems were logged before this.
pub struct ValidationFailed<'a> {
    pub source: &'a str,
    pub error_count: usize,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration '{}' failed validation with {} error(s)",
            self.source, self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            source = self.source,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            source = self.source,
            error_count = self.error_count,
        )
    }
}
