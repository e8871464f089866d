// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::backends::local::LocalTaskFactory;
use crate::config::Config;
use crate::errors::TaskMapError;
use crate::traits::Task;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping task ids to their runtime implementations.
///
/// Tasks are held as `Arc<dyn Task>` so the same instance can appear in an
/// execution plan more than once without being rebuilt.
///
/// # Examples
/// ```
/// use theme_assets::config::{load_builtin_config, TaskMap};
///
/// let config = load_builtin_config().unwrap();
/// let tasks = TaskMap::from_config(&config).unwrap();
///
/// assert!(tasks.contains_key("master.js"));
/// assert_eq!(tasks.get("copy-fonts").unwrap().name(), "copy");
/// ```
#[derive(Clone, Default)]
pub struct TaskMap(pub HashMap<String, Arc<dyn Task>>);

impl TaskMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Create a TaskMap from configuration, instantiating every task
    pub fn from_config(cfg: &Config) -> Result<Self, TaskMapError> {
        let mut registry = HashMap::new();

        for task_config in &cfg.tasks {
            let task = LocalTaskFactory::create_task(task_config)?;
            registry.insert(task_config.id.clone(), task);
        }

        Ok(Self(registry))
    }

    pub fn insert(&mut self, id: String, task: Arc<dyn Task>) {
        self.0.insert(id, task);
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Task>> {
        self.0.get(id)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for TaskMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskMap")
            .field("task_count", &self.0.len())
            .field("task_ids", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn Task>>> for TaskMap {
    fn from(map: HashMap<String, Arc<dyn Task>>) -> Self {
        Self(map)
    }
}
