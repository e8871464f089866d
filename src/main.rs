// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use theme_assets::config::consts::DEFAULT_TARGET;
use theme_assets::config::{load_and_validate_config, load_builtin_config, Config, RuntimeBuilder};
use theme_assets::engine::RunSummary;
use theme_assets::errors::FailureStrategy;
use theme_assets::traits::TaskContext;

/// Build the theme's static assets: Sass bundle, JS bundles and fonts.
#[derive(Debug, Parser)]
#[command(name = "theme-assets", version)]
struct Cli {
    /// Tasks or sequences to run, in order
    #[arg(value_name = "TARGETS", default_value = DEFAULT_TARGET)]
    targets: Vec<String>,

    /// Pipeline file (.yaml, .yml or .toml); the built-in theme pipeline when omitted
    #[arg(short = 'c', long = "config", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Project root that every pattern and output path is relative to
    #[arg(short = 'C', long = "root", default_value = ".", value_hint = ValueHint::DirPath)]
    root: PathBuf,

    /// Keep running after a task fails (the exit code still reports the failure)
    #[arg(long = "continue-on-error", action = ArgAction::SetTrue)]
    continue_on_error: bool,

    /// Print the configured tasks and sequences, then exit
    #[arg(long = "list", action = ArgAction::SetTrue)]
    list: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("❌ {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every task succeeded.
async fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("failed to load pipeline '{}'", path.display()))?,
        None => load_builtin_config().context("built-in pipeline is invalid")?,
    };

    if cli.list {
        print_targets(&config);
        return Ok(true);
    }

    let plan = config.resolve_targets(&cli.targets)?;
    let (tasks, executor, mut failure_strategy) = RuntimeBuilder::from_config(&config)?;
    if cli.continue_on_error {
        failure_strategy = FailureStrategy::ContinueOnError;
    }

    let ctx = TaskContext::new(&cli.root);
    let summary = executor
        .execute_with_strategy(tasks, plan, ctx, failure_strategy)
        .await
        .with_context(|| format!("'{}' failed", cli.targets.join(" ")))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(summary.is_success())
}

fn print_targets(config: &Config) {
    println!("Tasks:");
    for task in &config.tasks {
        match &task.output {
            Some(output) => println!("  {:<14} {:<8} -> {}", task.id, task.kind, output),
            None => println!("  {:<14} {}", task.id, task.kind),
        }
    }

    println!("Sequences:");
    for (name, steps) in &config.sequences {
        println!("  {:<14} [{}]", name, steps.join(", "));
    }
}

fn print_summary(summary: &RunSummary) {
    for report in &summary.completed {
        println!(
            "  {} {:<14} {:>3} inputs, {} outputs",
            if report.warnings.is_empty() { "✅" } else { "⚠️" },
            report.task_id,
            report.inputs,
            report.outputs.len()
        );
    }
    for failure in &summary.failures {
        println!("  ❌ {:<14} {}", failure.task_id, failure.error);
    }
    println!(
        "{} tasks, {} failed, {} bytes written, {} warnings in {}ms",
        summary.completed.len() + summary.failures.len(),
        summary.failures.len(),
        summary.bytes_written(),
        summary.warning_count(),
        summary.duration_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const PIPELINE: &str = r#"
tasks:
  - id: scripts
    type: concat
    inputs: [js/missing.js]
    output: dist/site.js
  - id: fonts
    type: copy
    inputs: ["fonts/*"]
    output: dist/fonts
sequences:
  default: [scripts, fonts]
"#;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/a.woff"), b"woff").unwrap();
        fs::write(dir.path().join("pipeline.yaml"), PIPELINE).unwrap();
        dir
    }

    fn cli(root: &Path, extra: &[&str]) -> Cli {
        let config = root.join("pipeline.yaml");
        let mut args = vec![
            "theme-assets".to_string(),
            "-c".to_string(),
            config.display().to_string(),
            "-C".to_string(),
            root.display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::parse_from(args)
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["theme-assets"]);
        assert_eq!(cli.targets, vec![DEFAULT_TARGET]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.config.is_none());
        assert!(!cli.continue_on_error);
    }

    #[tokio::test]
    async fn test_list_runs_nothing() {
        let dir = fixture();

        let ok = run(cli(dir.path(), &["--list"])).await.unwrap();

        assert!(ok);
        assert!(!dir.path().join("dist").exists());
    }

    #[tokio::test]
    async fn test_fail_fast_is_an_error() {
        let dir = fixture();

        let result = run(cli(dir.path(), &[])).await;

        assert!(result.is_err());
        assert!(!dir.path().join("dist/fonts/a.woff").exists());
    }

    #[tokio::test]
    async fn test_continue_on_error_overrides_and_still_fails_the_run() {
        let dir = fixture();

        let ok = run(cli(dir.path(), &["--continue-on-error", "--json"]))
            .await
            .unwrap();

        assert!(!ok, "a recorded failure must map to a failing exit code");
        assert_eq!(fs::read(dir.path().join("dist/fonts/a.woff")).unwrap(), b"woff");
    }

    #[tokio::test]
    async fn test_unknown_target_is_an_error() {
        let dir = fixture();

        let result = run(cli(dir.path(), &["deploy"])).await;

        assert!(result.unwrap_err().to_string().contains("deploy"));
    }

    #[tokio::test]
    async fn test_successful_target() {
        let dir = fixture();

        let ok = run(cli(dir.path(), &["fonts"])).await.unwrap();

        assert!(ok);
        assert!(dir.path().join("dist/fonts/a.woff").is_file());
    }
}
