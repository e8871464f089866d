// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::errors::ExecutionError;

/// The ordered list of task ids a run executes.
///
/// Built by flattening the requested targets: a task name contributes itself,
/// a sequence contributes its steps in order, recursively. A task listed twice
/// runs twice.
///
/// # Examples
///
/// ```
/// use theme_assets::config::ExecutionPlan;
///
/// let mut plan = ExecutionPlan::new();
/// plan.add("master.js".to_string());
/// plan.add("myOkta.js".to_string());
///
/// assert_eq!(plan.len(), 2);
/// let ids: Vec<String> = plan.into();
/// assert_eq!(ids, vec!["master.js", "myOkta.js"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionPlan(pub Vec<String>);

impl ExecutionPlan {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, task_id: String) {
        self.0.push(task_id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for ExecutionPlan {
    fn from(task_ids: Vec<String>) -> Self {
        Self(task_ids)
    }
}

impl From<ExecutionPlan> for Vec<String> {
    fn from(value: ExecutionPlan) -> Self {
        value.0
    }
}

impl Config {
    /// Flatten target names into an execution plan.
    ///
    /// Expects a validated config; sequence cycles are rejected by validation.
    pub fn resolve_targets<S: AsRef<str>>(&self, targets: &[S]) -> Result<ExecutionPlan, ExecutionError> {
        let mut plan = ExecutionPlan::new();
        for target in targets {
            self.expand_target(target.as_ref(), &mut plan)?;
        }
        Ok(plan)
    }

    fn expand_target(&self, name: &str, plan: &mut ExecutionPlan) -> Result<(), ExecutionError> {
        if self.task(name).is_some() {
            plan.add(name.to_string());
            return Ok(());
        }

        match self.sequences.get(name) {
            Some(steps) => {
                for step in steps {
                    self.expand_target(step, plan)?;
                }
                Ok(())
            }
            None => Err(ExecutionError::UnknownTarget {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{load_builtin_config, Config};
    use crate::errors::ExecutionError;

    #[test]
    fn test_default_sequence_order() {
        let config = load_builtin_config().unwrap();
        let plan = config.resolve_targets(&["default"]).unwrap();

        assert_eq!(
            plan.0,
            vec!["master.js", "myOkta.js", "minify-sass", "copy-fonts"]
        );
    }

    #[test]
    fn test_nested_sequence_flattens_in_order() {
        let config = load_builtin_config().unwrap();
        let plan = config.resolve_targets(&["build"]).unwrap();

        assert_eq!(
            plan.0,
            vec!["clean", "master.js", "myOkta.js", "minify-sass", "copy-fonts"]
        );
    }

    #[test]
    fn test_tasks_and_sequences_mix() {
        let config = load_builtin_config().unwrap();
        let plan = config
            .resolve_targets(&["animate.css", "master.js", "default"])
            .unwrap();

        assert_eq!(plan.len(), 6);
        assert_eq!(plan.0[0], "animate.css");
        assert_eq!(plan.0[1], "master.js");
        assert_eq!(plan.0[2], "master.js");
    }

    #[test]
    fn test_unknown_target() {
        let config = load_builtin_config().unwrap();
        let result = config.resolve_targets(&["default", "watch"]);

        assert!(matches!(
            result,
            Err(ExecutionError::UnknownTarget { ref name }) if name == "watch"
        ));
    }

    #[test]
    fn test_empty_targets_give_empty_plan() {
        let config: Config = serde_yaml::from_str("tasks: []").unwrap();
        let plan = config.resolve_targets::<&str>(&[]).unwrap();
        assert!(plan.is_empty());
    }
}
