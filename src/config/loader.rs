// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{BUILTIN_PIPELINE, BUILTIN_PIPELINE_NAME};
use crate::errors::{ConfigError, FailureStrategy};
use crate::observability::messages::validation::ValidationFailed;
use crate::observability::messages::StructuredLog;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for the asset pipeline.
///
/// A pipeline is a flat list of tasks plus named sequences that run tasks
/// (or other sequences) in order. It is loaded from a YAML or TOML file, or
/// taken from the theme pipeline compiled into the binary.
///
/// # Example
/// ```yaml
/// failure_strategy: fail_fast
/// tasks:
///   - id: master.js
///     type: concat
///     inputs: [js/vendor/a.js, js/vendor/b.js]
///     output: js/dist/master.js
/// sequences:
///   default: [master.js]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    pub tasks: Vec<TaskConfig>,
    #[serde(default)]
    pub sequences: BTreeMap<String, Vec<String>>,
}

/// Configuration for a single named task.
///
/// # Fields
/// * `id` - Unique task name, used as a target and in sequences
/// * `kind` - What the task does with its inputs
/// * `inputs` - Glob patterns relative to the project root, in order
/// * `output` - Output file (sass, concat) or directory (copy)
/// * `options` - Kind-specific options such as `separator` or `style`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    #[serde(default)]
    pub inputs: Vec<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,
}

/// The transform a task applies.
///
/// # Variants
/// * `Clean` - delete everything the inputs match
/// * `Sass` - compile stylesheets and join them into one CSS file
/// * `Copy` - byte copy into a directory
/// * `Concat` - join files into one output file
/// * `Options` - carries an execution options record, writes nothing
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Clean,
    Sass,
    Copy,
    Concat,
    Options,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Clean => "clean",
            TaskKind::Sass => "sass",
            TaskKind::Copy => "copy",
            TaskKind::Concat => "concat",
            TaskKind::Options => "options",
        }
    }

    /// Kinds that write their result to `output`
    pub fn requires_output(&self) -> bool {
        matches!(self, TaskKind::Sass | TaskKind::Copy | TaskKind::Concat)
    }

    /// Kinds that do nothing useful without input patterns
    pub fn requires_inputs(&self) -> bool {
        !matches!(self, TaskKind::Options)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Config {
    /// The Okta theme pipeline embedded at build time.
    pub fn builtin() -> Result<Self, ConfigError> {
        parse_yaml(BUILTIN_PIPELINE, Path::new(BUILTIN_PIPELINE_NAME))
    }

    /// Look up a task by id
    pub fn task(&self, id: &str) -> Option<&TaskConfig> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// True when `name` is a task or a sequence
    pub fn has_target(&self, name: &str) -> bool {
        self.task(name).is_some() || self.sequences.contains_key(name)
    }
}

fn parse_yaml(content: &str, path: &Path) -> Result<Config, ConfigError> {
    serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a pipeline from a YAML (`.yaml`, `.yml`) or TOML (`.toml`) file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let parse: fn(&str, &Path) -> Result<Config, ConfigError> = match extension.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml,
        Some("toml") => parse_toml,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: PathBuf::from(path),
            })
        }
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Load and validate a pipeline file.
///
/// Every validation problem is logged and returned together in
/// `ConfigError::Invalid`.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path.as_ref())?;
    validated(cfg, &path.as_ref().display().to_string())
}

/// Validate the embedded pipeline. It ships with the binary, but the check
/// keeps it honest as it gets edited.
pub fn load_builtin_config() -> Result<Config, ConfigError> {
    validated(Config::builtin()?, BUILTIN_PIPELINE_NAME)
}

fn validated(cfg: Config, source: &str) -> Result<Config, ConfigError> {
    if let Err(validation_errors) = crate::config::validate_config(&cfg) {
        ValidationFailed {
            source,
            error_count: validation_errors.len(),
        }
        .log();
        return Err(ConfigError::Invalid(validation_errors));
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
tasks:
  - id: master.js
    type: concat
    inputs: [a.js, b.js]
    output: dist/master.js
  - id: clean
    type: clean
    inputs: ["dist/**/*.min.js"]
sequences:
  default: [clean, master.js]
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.failure_strategy, FailureStrategy::FailFast);
        assert_eq!(cfg.tasks.len(), 2);
        assert_eq!(cfg.tasks[0].kind, TaskKind::Concat);
        assert_eq!(cfg.tasks[0].inputs, vec!["a.js", "b.js"]);
        assert_eq!(cfg.tasks[1].output, None);
        assert_eq!(cfg.sequences["default"], vec!["clean", "master.js"]);
    }

    #[test]
    fn test_builtin_pipeline_matches_theme_layout() {
        let cfg = load_builtin_config().unwrap();

        let ids: Vec<&str> = cfg.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "pygments",
                "clean",
                "minify-sass",
                "copy-fonts",
                "animate.css",
                "master.js",
                "myOkta.js"
            ]
        );
        assert_eq!(
            cfg.sequences["default"],
            vec!["master.js", "myOkta.js", "minify-sass", "copy-fonts"]
        );
        assert_eq!(cfg.task("master.js").unwrap().inputs.len(), 4);
        assert_eq!(
            cfg.task("minify-sass").unwrap().output.as_deref(),
            Some("themes/okta/static/dist/okta.css")
        );
        assert_eq!(cfg.task("pygments").unwrap().kind, TaskKind::Options);
    }

    #[test]
    fn test_load_and_validate_yaml_file() {
        let file = write_temp(
            ".yaml",
            r#"
failure_strategy: continue_on_error
tasks:
  - id: fonts
    type: copy
    inputs: ["fonts/*"]
    output: dist/fonts
sequences:
  default: [fonts]
"#,
        );

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.failure_strategy, FailureStrategy::ContinueOnError);
        assert!(cfg.has_target("fonts"));
        assert!(cfg.has_target("default"));
        assert!(!cfg.has_target("missing"));
    }

    #[test]
    fn test_load_toml_file() {
        let file = write_temp(
            ".toml",
            r#"
[[tasks]]
id = "css"
type = "sass"
inputs = ["css/*.scss"]
output = "dist/site.css"

[tasks.options]
style = "compressed"

[sequences]
default = ["css"]
"#,
        );

        let cfg = load_and_validate_config(file.path()).unwrap();
        let task = cfg.task("css").unwrap();
        assert_eq!(task.kind, TaskKind::Sass);
        assert_eq!(
            task.options.get("style").and_then(|v| v.as_str()),
            Some("compressed")
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".json", "{}");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_and_validate_unresolved_reference() {
        let file = write_temp(
            ".yml",
            r#"
tasks:
  - id: clean
    type: clean
    inputs: ["dist/*.min.js"]
sequences:
  default: [clean, nonexistent]
"#,
        );

        let error_msg = load_and_validate_config(file.path())
            .unwrap_err()
            .to_string();
        assert!(error_msg.contains("Configuration validation failed"));
        assert!(error_msg.contains("references 'nonexistent' which does not exist"));
    }

    #[test]
    fn test_unknown_task_type_is_rejected() {
        let yaml = r#"
tasks:
  - id: minify
    type: uglify
    inputs: [a.js]
"#;
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }
}
