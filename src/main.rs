use std::env::VarError;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use version_analyzer::VersionAnalyzer;
use version_analyzer::config::{
    AnalyzerOptions, DEFAULT_CONFIG_PATH, DEFAULT_MAX_VARIANTS, DEFAULT_TARGET_VERSION,
    load_templates,
};
use version_analyzer::report::{render_json, render_text};

/// Environment variable holding the log filter
const LOG_ENV: &str = "VERSION_ANALYZER_LOG";

#[derive(Parser)]
#[command(name = "version-analyzer")]
#[command(about = "Expand version templates and list the versions older than a target")]
struct Cli {
    /// Target version
    #[arg(short = 'v', long = "version", default_value = DEFAULT_TARGET_VERSION)]
    target: String,

    /// Template file (JSON object of name -> pattern)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject configurations expanding to more versions than this
    #[arg(long, default_value_t = DEFAULT_MAX_VARIANTS)]
    max_variants: usize,

    /// Log filter, e.g. `debug` (overrides VERSION_ANALYZER_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(level: Option<&str>) -> anyhow::Result<()> {
    let filter = log_filter(level, std::env::var(LOG_ENV))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Filter from `--log-level`, else from the environment, else `warn`.
///
/// Only an unset variable falls back to the default; a set but unparseable
/// (or non-UTF-8) value is an error like a bad `--log-level`.
fn log_filter(level: Option<&str>, env: Result<String, VarError>) -> anyhow::Result<EnvFilter> {
    if let Some(level) = level {
        return Ok(EnvFilter::try_new(level)?);
    }

    match env {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("{} contains an invalid filter: {:?}", LOG_ENV, directives)),
        Err(VarError::NotPresent) => Ok(EnvFilter::new("warn")),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", LOG_ENV)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref()).context("Invalid log filter")?;

    let templates = load_templates(&cli.config)
        .with_context(|| format!("Failed to load templates from {}", cli.config.display()))?;

    let options = AnalyzerOptions {
        max_variants: cli.max_variants,
    };
    let analyzer = VersionAnalyzer::with_options(&templates, cli.target, &options)
        .context("Invalid template configuration")?;
    let analysis = analyzer.analyze().context("Version analysis failed")?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&analyzer, &analysis)),
        OutputFormat::Json => println!("{}", render_json(&analyzer, &analysis)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn log_filter_defaults_to_warn_when_env_unset() {
        let filter = log_filter(None, Err(VarError::NotPresent)).unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn log_filter_reads_env_when_flag_absent() {
        let filter = log_filter(None, Ok("debug".to_string())).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn log_filter_prefers_flag_over_env() {
        let filter = log_filter(Some("info"), Ok("debug".to_string())).unwrap();
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn log_filter_rejects_malformed_env() {
        let err = log_filter(None, Ok("debug,my_crate=notalevel".to_string())).unwrap_err();
        assert!(err.to_string().contains(LOG_ENV));
    }

    #[test]
    fn log_filter_rejects_non_unicode_env() {
        let result = log_filter(None, Err(VarError::NotUnicode(OsString::from("x"))));
        assert!(result.is_err());
    }

    #[test]
    fn log_filter_rejects_malformed_flag() {
        assert!(log_filter(Some("debug,my_crate=notalevel"), Err(VarError::NotPresent)).is_err());
    }
}
