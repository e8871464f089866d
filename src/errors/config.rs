// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a pipeline file from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read pipeline file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML pipeline '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse TOML pipeline '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file extension is neither YAML nor TOML
    #[error("unsupported pipeline format '{path}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors that can occur during pipeline validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Two tasks share an id
    #[error("Duplicate task ID: '{task_id}'")]
    DuplicateTaskId { task_id: String },

    /// A sequence is named the same as a task, so the target would be ambiguous
    #[error("Sequence '{name}' has the same name as a task")]
    NameCollision { name: String },

    /// A sequence step names neither a task nor a sequence
    #[error("Sequence '{sequence}' references '{missing_reference}' which does not exist")]
    UnresolvedReference {
        sequence: String,
        missing_reference: String,
    },

    /// Sequences that (transitively) contain themselves
    #[error("Cyclic sequence detected: {}", .cycle.join(" -> "))]
    CyclicSequence {
        /// The cycle path, first and last entries are the same sequence
        cycle: Vec<String>,
    },

    /// A task kind that writes files has no `output`
    #[error("Task '{task_id}' of type '{kind}' requires an output path")]
    MissingOutput { task_id: String, kind: String },

    /// A task kind that reads files has no `inputs`
    #[error("Task '{task_id}' of type '{kind}' requires at least one input pattern")]
    MissingInputs { task_id: String, kind: String },
}
