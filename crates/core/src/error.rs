//! 에러 타입 — 도메인별 에러 정의

/// suiterun 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O 에러 (콘솔 출력 등)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 단계 실패
///
/// 실행 순서 전체를 중단시키는 유일한 에러 종류입니다.
/// 재시도나 복구 대상이 아닙니다.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// 외부 프로세스를 시작하지 못함 (실행 파일 없음, 권한 등)
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// 외부 프로세스가 0이 아닌 상태로 종료
    #[error("{}", describe_exit(.command, .code))]
    NonZeroExit { command: String, code: Option<i32> },
}

fn describe_exit(command: &str, code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("command '{command}' exited with status {code}"),
        None => format!("command '{command}' terminated by signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_exit_display_includes_code() {
        let err = StepError::NonZeroExit {
            command: "sh test.sh".to_owned(),
            code: Some(3),
        };
        assert_eq!(err.to_string(), "command 'sh test.sh' exited with status 3");
    }

    #[test]
    fn non_zero_exit_without_code_reports_signal() {
        let err = StepError::NonZeroExit {
            command: "npx cypress run".to_owned(),
            code: None,
        };
        assert_eq!(
            err.to_string(),
            "command 'npx cypress run' terminated by signal"
        );
    }

    #[test]
    fn spawn_error_display_includes_io_reason() {
        let err = StepError::Spawn {
            command: "missing-bin".to_owned(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing-bin"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn suite_error_wraps_config_error() {
        let err: SuiteError = ConfigError::FileNotFound {
            path: "suiterun.toml".to_owned(),
        }
        .into();
        assert!(matches!(err, SuiteError::Config(_)));
        assert!(err.to_string().contains("suiterun.toml"));
    }
}
