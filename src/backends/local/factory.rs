use std::sync::Arc;

use serde_yaml::Value;

use super::tasks::*;
use crate::config::{TaskConfig, TaskKind};
use crate::errors::TaskMapError;
use crate::traits::Task;

/// Factory for creating local (in-process) task instances
pub struct LocalTaskFactory;

impl LocalTaskFactory {
    /// Create a task instance from configuration
    ///
    /// The `type` field in the config determines which task to create:
    /// - "clean" -> CleanTask
    /// - "sass" -> SassTask (options: `separator`, `style`, `load_paths`, `strict`)
    /// - "copy" -> CopyTask
    /// - "concat" -> ConcatTask (options: `separator`)
    /// - "options" -> OptionsTask (options: `continue_on_error`, `pipe_stdout`)
    pub fn create_task(config: &TaskConfig) -> Result<Arc<dyn Task>, TaskMapError> {
        let id = config.id.clone();
        let inputs = config.inputs.clone();

        let task: Arc<dyn Task> = match config.kind {
            TaskKind::Clean => Arc::new(CleanTask::new(id, inputs)),

            TaskKind::Copy => Arc::new(CopyTask::new(id, inputs, required_output(config)?)),

            TaskKind::Concat => {
                let mut task = ConcatTask::new(id, inputs, required_output(config)?);
                if let Some(separator) = option_str(config, "separator")? {
                    task = task.with_separator(separator.as_bytes());
                }
                Arc::new(task)
            }

            TaskKind::Sass => {
                let mut task = SassTask::new(id, inputs, required_output(config)?)
                    .with_load_paths(option_str_list(config, "load_paths")?)
                    .strict(option_bool(config, "strict")?.unwrap_or(false));
                if let Some(separator) = option_str(config, "separator")? {
                    task = task.with_separator(separator.to_string());
                }
                if let Some(style) = option_str(config, "style")? {
                    let style = style
                        .parse::<SassStyle>()
                        .map_err(|reason| creation_failed(config, format!("option 'style': {}", reason)))?;
                    task = task.with_style(style);
                }
                Arc::new(task)
            }

            TaskKind::Options => {
                let options = ExecOptions {
                    continue_on_error: option_bool(config, "continue_on_error")?.unwrap_or(false),
                    pipe_stdout: option_bool(config, "pipe_stdout")?.unwrap_or(false),
                };
                Arc::new(OptionsTask::new(id, options))
            }
        };

        Ok(task)
    }

    /// List all available task kinds
    pub fn list_available_kinds() -> Vec<&'static str> {
        vec!["clean", "sass", "copy", "concat", "options"]
    }
}

fn creation_failed(config: &TaskConfig, reason: String) -> TaskMapError {
    TaskMapError::TaskCreationFailed {
        task_id: config.id.clone(),
        kind: config.kind,
        reason,
    }
}

fn required_output(config: &TaskConfig) -> Result<String, TaskMapError> {
    config
        .output
        .clone()
        .ok_or_else(|| creation_failed(config, "missing 'output'".to_string()))
}

fn option_str<'a>(config: &'a TaskConfig, key: &str) -> Result<Option<&'a str>, TaskMapError> {
    match config.options.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(creation_failed(
            config,
            format!("option '{}' must be a string, got {:?}", key, other),
        )),
    }
}

fn option_bool(config: &TaskConfig, key: &str) -> Result<Option<bool>, TaskMapError> {
    match config.options.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(creation_failed(
            config,
            format!("option '{}' must be a boolean, got {:?}", key, other),
        )),
    }
}

fn option_str_list(config: &TaskConfig, key: &str) -> Result<Vec<String>, TaskMapError> {
    match config.options.get(key) {
        None => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    creation_failed(config, format!("option '{}' must list strings", key))
                })
            })
            .collect(),
        Some(other) => Err(creation_failed(
            config,
            format!("option '{}' must be a list, got {:?}", key, other),
        )),
    }
}
