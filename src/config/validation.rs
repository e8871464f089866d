// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for pipeline integrity.
//!
//! Checks run in this order and accumulate errors:
//!
//! 1. **Uniqueness**: task ids are unique and no sequence shadows a task
//! 2. **Task shape**: tasks that read or write files declare inputs/outputs
//! 3. **Reference validation**: every sequence step names a task or a sequence
//! 4. **Cycle detection**: DFS over sequence-to-sequence edges
//!
//! Cycle detection needs resolvable references, so it only runs when the
//! earlier checks pass.
//!
//! # Example
//! ```rust
//! use theme_assets::config::{validate_config, Config};
//! use theme_assets::errors::ValidationError;
//!
//! let config: Config = serde_yaml::from_str(r#"
//! tasks: []
//! sequences:
//!   default: [missing]
//! "#).unwrap();
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert!(matches!(errors[0], ValidationError::UnresolvedReference { .. }));
//! ```

use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{CyclicSequenceDetected, UnresolvedReference};
use crate::observability::messages::StructuredLog;
use std::collections::{HashMap, HashSet};

/// Validates a pipeline configuration.
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid and every target can be resolved
/// * `Err(Vec<ValidationError>)` - All validation errors found
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(validate_unique_names(config));
    errors.extend(validate_task_shapes(config));
    errors.extend(validate_sequence_references(config));

    if errors.is_empty() {
        if let Some(cycle) = find_sequence_cycle(config) {
            errors.push(cycle);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_names(config: &Config) -> Vec<ValidationError> {
    let mut seen_ids = HashSet::new();
    let mut errors = Vec::new();

    for task in &config.tasks {
        if !seen_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::DuplicateTaskId {
                task_id: task.id.clone(),
            });
        }
    }

    for name in config.sequences.keys() {
        if seen_ids.contains(name.as_str()) {
            errors.push(ValidationError::NameCollision { name: name.clone() });
        }
    }

    errors
}

fn validate_task_shapes(config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for task in &config.tasks {
        if task.kind.requires_inputs() && task.inputs.is_empty() {
            errors.push(ValidationError::MissingInputs {
                task_id: task.id.clone(),
                kind: task.kind.to_string(),
            });
        }
        if task.kind.requires_output() && task.output.is_none() {
            errors.push(ValidationError::MissingOutput {
                task_id: task.id.clone(),
                kind: task.kind.to_string(),
            });
        }
    }

    errors
}

fn validate_sequence_references(config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (sequence, steps) in &config.sequences {
        for step in steps {
            if !config.has_target(step) {
                UnresolvedReference {
                    sequence,
                    missing_reference: step,
                }
                .log();
                errors.push(ValidationError::UnresolvedReference {
                    sequence: sequence.clone(),
                    missing_reference: step.clone(),
                });
            }
        }
    }

    errors
}

/// Finds a sequence that contains itself, directly or through other sequences.
///
/// Only sequence-to-sequence edges matter; tasks are leaves. Uses DFS with a
/// recursion stack (gray set) and returns the cycle path closed by the back edge,
/// e.g. `[a, b, a]`.
fn find_sequence_cycle(config: &Config) -> Option<ValidationError> {
    let graph: HashMap<&str, Vec<&str>> = config
        .sequences
        .iter()
        .map(|(name, steps)| {
            let children = steps
                .iter()
                .map(String::as_str)
                .filter(|step| config.sequences.contains_key(*step))
                .collect();
            (name.as_str(), children)
        })
        .collect();

    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    // BTreeMap keys give a stable starting order, so the reported cycle is deterministic
    for name in config.sequences.keys() {
        if !visited.contains(name.as_str()) {
            if let Some(cycle) =
                dfs_cycle_detection(name, &graph, &mut visited, &mut rec_stack, &mut path)
            {
                let parts: Vec<&str> = cycle.iter().map(String::as_str).collect();
                CyclicSequenceDetected { cycle: &parts }.log();
                return Some(ValidationError::CyclicSequence { cycle });
            }
        }
    }

    None
}

fn dfs_cycle_detection<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    rec_stack: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(children) = graph.get(node) {
        for &child in children {
            if rec_stack.contains(child) {
                let start = path.iter().position(|n| *n == child).unwrap_or(0);
                let mut cycle: Vec<String> = path[start..].iter().map(|s| s.to_string()).collect();
                cycle.push(child.to_string());
                return Some(cycle);
            }
            if !visited.contains(child) {
                if let Some(cycle) = dfs_cycle_detection(child, graph, visited, rec_stack, path) {
                    return Some(cycle);
                }
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TaskConfig, TaskKind};
    use crate::errors::FailureStrategy;
    use std::collections::{BTreeMap, HashMap};

    fn create_test_task(id: &str, kind: TaskKind) -> TaskConfig {
        TaskConfig {
            id: id.to_string(),
            kind,
            inputs: vec!["src/*".to_string()],
            output: Some("dist/out".to_string()),
            options: HashMap::new(),
        }
    }

    fn create_config(tasks: Vec<TaskConfig>, sequences: &[(&str, &[&str])]) -> Config {
        Config {
            failure_strategy: FailureStrategy::FailFast,
            tasks,
            sequences: sequences
                .iter()
                .map(|(name, steps)| {
                    (
                        name.to_string(),
                        steps.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_valid_pipeline() {
        let config = create_config(
            vec![
                create_test_task("a", TaskKind::Concat),
                create_test_task("b", TaskKind::Copy),
            ],
            &[("default", &["a", "b"]), ("all", &["default", "a"])],
        );

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_duplicate_task_ids() {
        let config = create_config(
            vec![
                create_test_task("a", TaskKind::Concat),
                create_test_task("a", TaskKind::Copy),
            ],
            &[],
        );

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateTaskId {
                task_id: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_sequence_shadowing_task() {
        let config = create_config(
            vec![create_test_task("a", TaskKind::Concat)],
            &[("a", &[])],
        );

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::NameCollision { .. }));
    }

    #[test]
    fn test_unresolved_reference() {
        let config = create_config(
            vec![create_test_task("a", TaskKind::Concat)],
            &[("default", &["a", "nonexistent"])],
        );

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0],
            ValidationError::UnresolvedReference {
                sequence: "default".to_string(),
                missing_reference: "nonexistent".to_string(),
            }
        );
    }

    #[test]
    fn test_self_referencing_sequence() {
        let config = create_config(vec![], &[("default", &["default"])]);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::CyclicSequence {
                cycle: vec!["default".to_string(), "default".to_string()]
            }]
        );
    }

    #[test]
    fn test_indirect_sequence_cycle() {
        let config = create_config(
            vec![create_test_task("t", TaskKind::Copy)],
            &[("a", &["t", "b"]), ("b", &["c"]), ("c", &["a"])],
        );

        let errors = validate_config(&config).unwrap_err();
        match &errors[0] {
            ValidationError::CyclicSequence { cycle } => {
                assert_eq!(cycle, &vec!["a", "b", "c", "a"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_task_is_not_a_cycle() {
        let config = create_config(
            vec![create_test_task("t", TaskKind::Copy)],
            &[("a", &["t", "t"]), ("b", &["a", "a"])],
        );

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_missing_output_and_inputs() {
        let mut concat = create_test_task("bundle", TaskKind::Concat);
        concat.output = None;
        let mut clean = create_test_task("clean", TaskKind::Clean);
        clean.inputs.clear();
        clean.output = None;
        let mut options = create_test_task("pygments", TaskKind::Options);
        options.inputs.clear();
        options.output = None;

        let config = create_config(vec![concat, clean, options], &[]);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::MissingOutput {
            task_id: "bundle".to_string(),
            kind: "concat".to_string(),
        }));
        assert!(errors.contains(&ValidationError::MissingInputs {
            task_id: "clean".to_string(),
            kind: "clean".to_string(),
        }));
    }

    #[test]
    fn test_multiple_errors() {
        let config = create_config(
            vec![
                create_test_task("a", TaskKind::Concat),
                create_test_task("a", TaskKind::Concat),
            ],
            &[("default", &["missing"])],
        );

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
