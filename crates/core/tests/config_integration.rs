//! suiterun.toml 통합 설정 테스트
//!
//! - suiterun.toml.example 파싱 테스트
//! - 파일 로딩 / 기본 경로 폴백 테스트
//! - 환경변수 우선순위 테스트
//! - 잘못된 형식 에러 테스트

use std::fs;

use serial_test::serial;
use suiterun_core::config::{CommandConfig, SuiteConfig};
use suiterun_core::error::{ConfigError, SuiteError};
use tempfile::TempDir;

// =============================================================================
// suiterun.toml.example 파싱 테스트
// =============================================================================

#[test]
fn example_config_matches_defaults() {
    let content = include_str!("../../../suiterun.toml.example");
    let config = SuiteConfig::parse(content).expect("example config should parse");
    let defaults = SuiteConfig::default();

    assert_eq!(config.general.log_level, defaults.general.log_level);
    assert_eq!(config.general.log_format, defaults.general.log_format);
    assert_eq!(config.general.working_dir, "");
    assert_eq!(config.e2e, defaults.e2e);
    assert_eq!(config.frontend, defaults.frontend);
}

#[test]
fn example_config_passes_validation() {
    let content = include_str!("../../../suiterun.toml.example");
    let config = SuiteConfig::parse(content).expect("should parse");
    config
        .validate()
        .expect("example config should pass validation");
}

// =============================================================================
// 파일 로딩 테스트
// =============================================================================

#[test]
#[serial]
fn load_reads_file_from_disk() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("suiterun.toml");
    fs::write(
        &path,
        r#"
[general]
log_level = "debug"
log_format = "json"

[e2e]
program = "bash"
args = ["scripts/e2e.sh", "--ci"]
"#,
    )
    .expect("should write config");

    let config = SuiteConfig::load(&path).expect("config should load");
    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.general.log_format, "json");
    assert_eq!(config.e2e.to_spec().to_string(), "bash scripts/e2e.sh --ci");
    assert_eq!(config.frontend, CommandConfig::frontend());
}

#[test]
#[serial]
fn load_missing_file_is_file_not_found() {
    let err = SuiteConfig::load("/nonexistent/suiterun.toml").unwrap_err();
    assert!(matches!(err, SuiteError::Config(ConfigError::FileNotFound { .. })));
}

#[test]
#[serial]
fn load_or_default_still_rejects_malformed_file() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("suiterun.toml");
    fs::write(&path, "[general\nlog_level = ").expect("should write bad config");

    let err = SuiteConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, SuiteError::Config(ConfigError::ParseFailed { .. })));
}

#[test]
#[serial]
fn load_validates_working_dir() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("suiterun.toml");
    let toml = format!(
        "[general]\nworking_dir = \"{}\"\n",
        dir.path().display()
    );
    fs::write(&path, toml).expect("should write config");

    let config = SuiteConfig::load(&path).expect("existing dir should validate");
    assert_eq!(config.general.working_dir(), Some(dir.path().to_path_buf()));
}

// =============================================================================
// 환경변수 우선순위 테스트
// =============================================================================

#[test]
#[serial]
fn env_overrides_file_values() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("suiterun.toml");
    fs::write(&path, "[frontend]\nprogram = \"npm\"\nargs = [\"test\"]\n")
        .expect("should write config");

    // SAFETY: #[serial]로 환경변수를 만지는 테스트끼리는 동시에 실행되지 않습니다.
    unsafe {
        std::env::set_var("SUITERUN_FRONTEND_PROGRAM", "pnpm");
        std::env::set_var("SUITERUN_FRONTEND_ARGS", "exec,cypress,run");
        std::env::set_var("SUITERUN_GENERAL_LOG_LEVEL", "info");
    }

    let result = SuiteConfig::load(&path);

    unsafe {
        std::env::remove_var("SUITERUN_FRONTEND_PROGRAM");
        std::env::remove_var("SUITERUN_FRONTEND_ARGS");
        std::env::remove_var("SUITERUN_GENERAL_LOG_LEVEL");
    }

    let config = result.expect("config should load");
    assert_eq!(
        config.frontend.to_spec().to_string(),
        "pnpm exec cypress run"
    );
    assert_eq!(config.general.log_level, "info");
}

#[test]
#[serial]
fn invalid_env_override_fails_validation() {
    // SAFETY: #[serial]로 환경변수를 만지는 테스트끼리는 동시에 실행되지 않습니다.
    unsafe { std::env::set_var("SUITERUN_GENERAL_LOG_FORMAT", "yaml") };
    let result = SuiteConfig::load_or_default("/nonexistent/suiterun.toml");
    unsafe { std::env::remove_var("SUITERUN_GENERAL_LOG_FORMAT") };

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        SuiteError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "general.log_format"
    ));
}
