//! 외부 프로세스 실행 — 주입 가능한 명령 실행 capability
//!
//! [`CommandRunner`]는 단계가 외부 프로세스를 실행하는 유일한 통로입니다.
//! 운영 환경에서는 [`SystemCommandRunner`]가 실제 하위 프로세스를 띄우고,
//! 테스트에서는 실행 기록만 남기는 대역으로 교체합니다.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

/// 실행할 외부 명령
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// 실행 파일
    pub program: String,
    /// 인자 목록
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// 종료된 프로세스의 결과
///
/// `code`가 `None`이면 시그널로 종료된 경우입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub code: Option<i32>,
}

impl CommandOutcome {
    /// 종료 코드 0
    pub const SUCCESS: Self = Self { code: Some(0) };

    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CommandOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// 외부 명령 실행 capability
///
/// 구현체는 프로세스가 끝날 때까지 블로킹해야 합니다.
/// `Err`는 프로세스를 시작조차 못한 경우에만 반환합니다.
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutcome>;
}

/// 실제 하위 프로세스를 띄우는 실행기
///
/// stdin/stdout/stderr는 호출한 터미널을 그대로 상속합니다.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    working_dir: Option<PathBuf>,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 하위 프로세스의 작업 디렉토리를 지정합니다.
    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutcome> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        debug!(command = %spec, "spawning subprocess");
        let status = cmd.status()?;
        debug!(command = %spec, code = ?status.code(), "subprocess exited");

        Ok(status.into())
    }
}
