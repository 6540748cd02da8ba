//! Run assembly -- configuration resolution and step execution.
//!
//! Kept separate from `main.rs` so the whole flow can be driven from
//! integration tests with an in-memory reporter.

use std::path::Path;

use tracing::info;

use suiterun_core::command::SystemCommandRunner;
use suiterun_core::config::{ConfigSource, SuiteConfig};
use suiterun_core::plan::TestPlan;
use suiterun_core::report::Reporter;
use suiterun_core::runner::{RunReport, SuiteRunner};

use crate::cli::{Cli, DEFAULT_CONFIG_PATH};
use crate::error::CliError;

/// Resolve the effective configuration and where it came from.
///
/// Precedence: CLI flags, then environment, then config file, then defaults.
/// An explicit `--config` path must exist; the implicit default path may be absent.
/// Validation runs once, after every override has been applied.
pub fn load_config(cli: &Cli) -> Result<(SuiteConfig, ConfigSource), CliError> {
    let (mut config, source) = match &cli.config {
        Some(path) => SuiteConfig::read(path, true)?,
        None => SuiteConfig::read(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };

    if let Some(level) = &cli.log_level {
        config.general.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.general.log_format = format.clone();
    }
    config.validate()?;

    Ok((config, source))
}

/// Run the standard plan with real subprocesses.
///
/// Returns `CliError::StepFailed` for the first failing step; the reporter
/// has already printed the failure line by then.
pub fn execute(config: &SuiteConfig, reporter: &mut dyn Reporter) -> Result<RunReport, CliError> {
    let plan = TestPlan::standard(config);
    let commands = SystemCommandRunner::new().with_working_dir(config.general.working_dir());

    info!(
        e2e = %config.e2e.to_spec(),
        frontend = %config.frontend.to_spec(),
        "running test plan"
    );

    let report = SuiteRunner::new(&commands).run(&plan, reporter)?;
    report.into_result().map_err(CliError::StepFailed)
}
