//! 설정 관리 — suiterun.toml 파싱 및 런타임 설정
//!
//! [`SuiteConfig`]는 실행기 전체의 설정을 담는 최상위 구조체입니다.
//! 설정은 1~2단계가 *어떤 명령*을 실행할지와 진단 로그만 바꿉니다.
//! 단계의 순서와 구성은 설정으로 바꿀 수 없습니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`SUITERUN_E2E_PROGRAM=bash` 형식)
//! 3. 설정 파일 (`suiterun.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # fn example() -> Result<(), suiterun_core::error::SuiteError> {
//! use suiterun_core::config::SuiteConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = SuiteConfig::load("suiterun.toml")?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = SuiteConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::command::CommandSpec;
use crate::error::{ConfigError, SuiteError};

/// 허용되는 로그 레벨
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 허용되는 로그 형식
pub const VALID_LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// suiterun 통합 설정
///
/// `suiterun.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// e2e 스크립트 명령
    #[serde(default = "CommandConfig::e2e")]
    pub e2e: CommandConfig,
    /// 프론트엔드 테스트 명령
    #[serde(default = "CommandConfig::frontend")]
    pub frontend: CommandConfig,
}

impl SuiteConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 설정 로딩 순서:
    /// 1. TOML 파일 파싱
    /// 2. 환경변수 오버라이드 적용
    /// 3. 유효성 검증
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SuiteError> {
        let (config, _) = Self::read(path, true)?;
        config.validate()?;
        Ok(config)
    }

    /// [`load`](Self::load)와 같지만 파일이 없으면 기본값을 사용합니다.
    ///
    /// 명시하지 않은 기본 경로(`suiterun.toml`)에 사용합니다.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SuiteError> {
        let (config, _) = Self::read(path, false)?;
        config.validate()?;
        Ok(config)
    }

    /// 파일 파싱과 환경변수 오버라이드까지만 수행합니다 (검증 없음).
    ///
    /// `required`가 `false`이면 파일이 없을 때 기본값을 씁니다.
    /// CLI 인자처럼 더 높은 우선순위의 값을 덮어쓴 뒤 [`validate`](Self::validate)를
    /// 직접 호출해야 합니다.
    pub fn read(
        path: impl AsRef<Path>,
        required: bool,
    ) -> Result<(Self, ConfigSource), SuiteError> {
        let path = path.as_ref();
        let (mut config, source) = match Self::from_file(path) {
            Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
            Err(SuiteError::Config(ConfigError::FileNotFound { .. })) if !required => {
                (Self::default(), ConfigSource::Defaults)
            }
            Err(e) => return Err(e),
        };
        config.apply_env_overrides();
        Ok((config, source))
    }

    /// TOML 파일에서 설정을 읽습니다 (환경변수 오버라이드, 검증 없음).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SuiteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SuiteError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                SuiteError::Io(e)
            }
        })?;
        Self::parse(&content)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, SuiteError> {
        toml::from_str(toml_str).map_err(|e| {
            SuiteError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `SUITERUN_{SECTION}_{FIELD}`
    /// 예: `SUITERUN_FRONTEND_ARGS=cypress,run,--headless`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "SUITERUN_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "SUITERUN_GENERAL_LOG_FORMAT");
        override_string(&mut self.general.working_dir, "SUITERUN_GENERAL_WORKING_DIR");

        // Commands
        override_string(&mut self.e2e.program, "SUITERUN_E2E_PROGRAM");
        override_csv(&mut self.e2e.args, "SUITERUN_E2E_ARGS");
        override_string(&mut self.frontend.program, "SUITERUN_FRONTEND_PROGRAM");
        override_csv(&mut self.frontend.args, "SUITERUN_FRONTEND_ARGS");
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), SuiteError> {
        if !VALID_LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", VALID_LOG_LEVELS.join(", ")),
            }
            .into());
        }

        if !VALID_LOG_FORMATS.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", VALID_LOG_FORMATS.join(", ")),
            }
            .into());
        }

        if let Some(dir) = self.general.working_dir()
            && !dir.is_dir()
        {
            return Err(ConfigError::InvalidValue {
                field: "general.working_dir".to_owned(),
                reason: format!("'{}' is not an existing directory", dir.display()),
            }
            .into());
        }

        for (field, command) in [("e2e.program", &self.e2e), ("frontend.program", &self.frontend)]
        {
            if command.program.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_owned(),
                    reason: "must not be empty".to_owned(),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            e2e: CommandConfig::e2e(),
            frontend: CommandConfig::frontend(),
        }
    }
}

/// 설정을 어디서 읽었는지
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// 설정 파일
    File(PathBuf),
    /// 파일이 없어 기본값 사용
    Defaults,
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (pretty, json)
    pub log_format: String,
    /// 하위 프로세스 작업 디렉토리 (빈 문자열이면 현재 디렉토리)
    pub working_dir: String,
}

impl GeneralConfig {
    /// 설정된 작업 디렉토리. 비어 있으면 `None`.
    pub fn working_dir(&self) -> Option<PathBuf> {
        if self.working_dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.working_dir))
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "error".to_owned(),
            log_format: "pretty".to_owned(),
            working_dir: String::new(),
        }
    }
}

/// 외부 명령 설정
///
/// 섹션을 쓰면 `program`은 필수이고, `args`는 생략 시 빈 목록입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    /// 실행 파일
    pub program: String,
    /// 인자 목록
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandConfig {
    /// e2e 기본 명령: `sh test.sh`
    pub fn e2e() -> Self {
        Self {
            program: "sh".to_owned(),
            args: vec!["test.sh".to_owned()],
        }
    }

    /// 프론트엔드 기본 명령: `npx cypress run`
    pub fn frontend() -> Self {
        Self {
            program: "npx".to_owned(),
            args: vec!["cypress".to_owned(), "run".to_owned()],
        }
    }

    /// 실행 가능한 [`CommandSpec`]으로 변환합니다.
    pub fn to_spec(&self) -> CommandSpec {
        CommandSpec::new(&self.program, self.args.iter().cloned())
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

// 빈 값은 빈 인자 목록을 뜻합니다.
fn override_csv(target: &mut Vec<String>, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        if val.trim().is_empty() {
            target.clear();
        } else {
            *target = val.split(',').map(|s| s.trim().to_owned()).collect();
        }
    }
}
