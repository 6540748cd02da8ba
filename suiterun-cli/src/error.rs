//! CLI-specific error types and exit code mapping

use suiterun_core::error::SuiteError;
use suiterun_core::runner::StepFailure;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A step failed and the remaining steps were skipped.
    #[error("{0}")]
    StepFailed(StepFailure),

    /// Logging could not be initialised.
    #[error("logging error: {0}")]
    Logging(String),

    /// IO error (stdout/stderr write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                                  |
    /// |------|------------------------------------------|
    /// | 0    | All steps succeeded                      |
    /// | 1    | A step failed                            |
    /// | 2    | Configuration error                      |
    /// | 10   | IO error (console write, logging init)   |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StepFailed(_) => 1,
            Self::Config(_) => 2,
            Self::Io(_) | Self::Logging(_) => 10,
        }
    }
}

impl From<SuiteError> for CliError {
    fn from(e: SuiteError) -> Self {
        match e {
            SuiteError::Config(e) => Self::Config(e.to_string()),
            SuiteError::Io(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suiterun_core::error::{ConfigError, StepError};
    use suiterun_core::step::StepKind;

    fn failure() -> StepFailure {
        StepFailure {
            kind: StepKind::E2e,
            title: "e2e tests",
            error: StepError::NonZeroExit {
                command: "sh test.sh".to_owned(),
                code: Some(1),
            },
        }
    }

    #[test]
    fn test_exit_code_step_failed() {
        let err = CliError::StepFailed(failure());
        assert_eq!(err.exit_code(), 1, "step failure should return exit code 1");
    }

    #[test]
    fn test_exit_code_config_error() {
        let err = CliError::Config("test error".to_owned());
        assert_eq!(err.exit_code(), 2, "config error should return exit code 2");
    }

    #[test]
    fn test_exit_code_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = CliError::Io(io_err);
        assert_eq!(err.exit_code(), 10, "io error should return exit code 10");
    }

    #[test]
    fn test_exit_code_logging_error() {
        let err = CliError::Logging("subscriber already set".to_owned());
        assert_eq!(err.exit_code(), 10, "logging init error should return exit code 10");
    }

    #[test]
    fn test_error_display_step_failed_names_step() {
        let err = CliError::StepFailed(failure());
        let display_str = err.to_string();
        assert!(display_str.contains("e2e"), "should name the failed step");
        assert!(
            display_str.contains("exited with status 1"),
            "should include failure detail"
        );
    }

    #[test]
    fn test_from_suite_config_error() {
        let suite_err: SuiteError = ConfigError::FileNotFound {
            path: "ci.toml".to_owned(),
        }
        .into();
        let cli_err: CliError = suite_err.into();
        match &cli_err {
            CliError::Config(msg) => assert!(msg.contains("ci.toml")),
            other => panic!("expected Config error variant, got {other:?}"),
        }
        assert_eq!(cli_err.exit_code(), 2);
    }

    #[test]
    fn test_from_suite_io_error() {
        let suite_err = SuiteError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let cli_err: CliError = suite_err.into();
        match cli_err {
            CliError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("expected Io error variant, got {other:?}"),
        }
    }
}
