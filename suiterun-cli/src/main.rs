use std::io::Write;

use clap::Parser;

use suiterun_cli::app;
use suiterun_cli::cli::Cli;
use suiterun_cli::error::CliError;
use suiterun_cli::logging;
use suiterun_core::report::ConsoleReporter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // Step failures were already reported as "Error running <step>: ..."
        if !matches!(e, CliError::StepFailed(_)) {
            // stderr may be closed or full; the exit code still carries the result
            let _ = writeln!(std::io::stderr(), "suiterun: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (config, source) = app::load_config(&cli)?;

    logging::init_tracing(&config.general).map_err(|e| CliError::Logging(e.to_string()))?;
    tracing::debug!(source = ?source, "configuration resolved");

    let mut reporter = ConsoleReporter::stdio();
    app::execute(&config, &mut reporter)?;
    Ok(())
}
