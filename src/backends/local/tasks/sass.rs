// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::consts::DEFAULT_SASS_SEPARATOR;
use crate::errors::TaskError;
use crate::observability::messages::task::{NoInputsMatched, SassCompileFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::{Task, TaskContext, TaskReport};
use crate::utils::paths::expand_patterns;

use super::write_output;

/// CSS output formatting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SassStyle {
    #[default]
    Expanded,
    Compressed,
}

impl FromStr for SassStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expanded" => Ok(SassStyle::Expanded),
            "compressed" => Ok(SassStyle::Compressed),
            other => Err(format!(
                "unknown style '{}' (expected 'expanded' or 'compressed')",
                other
            )),
        }
    }
}

impl From<SassStyle> for grass::OutputStyle {
    fn from(style: SassStyle) -> Self {
        match style {
            SassStyle::Expanded => grass::OutputStyle::Expanded,
            SassStyle::Compressed => grass::OutputStyle::Compressed,
        }
    }
}

/// Sass task - compiles each stylesheet on its own and joins the CSS into one file.
///
/// Partials (`_name.scss`) are only reachable through imports and are not
/// compiled directly. A stylesheet that fails to compile is logged and left
/// out of the bundle; the task itself still succeeds unless `strict` is set.
pub struct SassTask {
    id: String,
    inputs: Vec<String>,
    output: String,
    separator: String,
    style: SassStyle,
    load_paths: Vec<String>,
    strict: bool,
}

impl SassTask {
    pub fn new(id: String, inputs: Vec<String>, output: String) -> Self {
        Self {
            id,
            inputs,
            output,
            separator: DEFAULT_SASS_SEPARATOR.to_string(),
            style: SassStyle::default(),
            load_paths: Vec::new(),
            strict: false,
        }
    }

    pub fn with_separator(mut self, separator: String) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_style(mut self, style: SassStyle) -> Self {
        self.style = style;
        self
    }

    /// Extra import directories, relative to the project root
    pub fn with_load_paths(mut self, load_paths: Vec<String>) -> Self {
        self.load_paths = load_paths;
        self
    }

    /// Fail the task on the first compile error instead of logging it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

fn is_partial(path: &std::path::Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('_'))
        .unwrap_or(false)
}

/// Compile stylesheets in order, keeping per-file results.
fn compile_all(
    sources: &[PathBuf],
    load_paths: &[PathBuf],
    style: SassStyle,
) -> Vec<Result<String, String>> {
    let mut options = grass::Options::default().style(style.into());
    for load_path in load_paths {
        options = options.load_path(load_path);
    }

    sources
        .iter()
        .map(|source| grass::from_path(source, &options).map_err(|e| e.to_string()))
        .collect()
}

#[async_trait]
impl Task for SassTask {
    async fn run(&self, ctx: &TaskContext) -> Result<TaskReport, TaskError> {
        let mut report = TaskReport::new(&self.id, self.name());

        let sources: Vec<PathBuf> = expand_patterns(&ctx.root, &self.inputs, true)?
            .into_iter()
            .map(|m| m.path)
            .filter(|p| !is_partial(p))
            .collect();
        report.inputs = sources.len();

        if sources.is_empty() {
            NoInputsMatched { task_id: &self.id }.log();
            return Ok(report);
        }

        let load_paths: Vec<PathBuf> = self.load_paths.iter().map(|p| ctx.resolve(p)).collect();
        let style = self.style;
        let compile_sources = sources.clone();
        // grass is synchronous and CPU bound
        let results = tokio::task::spawn_blocking(move || {
            compile_all(&compile_sources, &load_paths, style)
        })
        .await
        .map_err(|source| TaskError::Join {
            task_id: self.id.clone(),
            source,
        })?;

        let mut compiled = Vec::new();
        for (source, result) in sources.iter().zip(results) {
            match result {
                Ok(css) => compiled.push(css),
                Err(message) => {
                    SassCompileFailed {
                        task_id: &self.id,
                        path: source,
                        error: &message,
                    }
                    .log();
                    if self.strict {
                        return Err(TaskError::SassCompile {
                            path: source.clone(),
                            message,
                        });
                    }
                    report
                        .warnings
                        .push(format!("{}: {}", source.display(), message));
                }
            }
        }

        if compiled.is_empty() {
            return Ok(report);
        }

        let css = compiled.join(&self.separator);
        let output = ctx.resolve(&self.output);
        write_output(&self.id, &output, css.as_bytes()).await?;

        report.bytes_written = css.len() as u64;
        report.outputs.push(output);
        Ok(report)
    }

    fn name(&self) -> &'static str {
        "sass"
    }
}
