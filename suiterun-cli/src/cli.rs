//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::Parser;

/// Default configuration file, used only if present.
pub const DEFAULT_CONFIG_PATH: &str = "suiterun.toml";

/// suiterun -- run e2e, front-end, analysis, seed and integration steps in order.
///
/// Running without arguments starts the whole sequence immediately.
/// The first failing step aborts the run with exit status 1.
#[derive(Parser, Debug)]
#[command(name = "suiterun", version, about, long_about = None)]
pub struct Cli {
    /// Path to the suiterun.toml configuration file.
    ///
    /// When omitted, `suiterun.toml` is read if it exists and defaults are used otherwise.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Override log format (pretty, json).
    #[arg(long)]
    pub log_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["suiterun"]).expect("bare invocation should parse");
        assert!(cli.config.is_none(), "config should default to None");
        assert!(cli.log_level.is_none(), "log_level should default to None");
        assert!(cli.log_format.is_none(), "log_format should default to None");
    }

    #[test]
    fn test_cli_parse_config_short_and_long() {
        let short = Cli::try_parse_from(["suiterun", "-c", "ci.toml"]).expect("parse succeeded");
        assert_eq!(short.config, Some(PathBuf::from("ci.toml")));

        let long =
            Cli::try_parse_from(["suiterun", "--config", "ci.toml"]).expect("parse succeeded");
        assert_eq!(long.config, Some(PathBuf::from("ci.toml")));
    }

    #[test]
    fn test_cli_parse_log_overrides() {
        let cli = Cli::try_parse_from([
            "suiterun",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .expect("parse succeeded");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.log_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        let result = Cli::try_parse_from(["suiterun", "e2e"]);
        assert!(result.is_err(), "steps cannot be selected on the command line");
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
