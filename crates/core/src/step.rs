//! 단계 — 고정 실행 순서의 한 단위
//!
//! [`Step`]은 이름과 동작([`StepAction`])만 가진 일시적인 레코드입니다.
//! 식별자는 [`TestPlan`](crate::plan::TestPlan) 안의 위치뿐이며,
//! 실행 중에 생성되거나 변경되지 않습니다.

use std::fmt;

use crate::command::{CommandRunner, CommandSpec};
use crate::error::StepError;

// ─── StepKind ────────────────────────────────────────────────────────

/// 단계 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// e2e 셸 스크립트
    E2e,
    /// 프론트엔드(Cypress) 테스트
    FrontEnd,
    /// 코드 분석 (자리표시자)
    Analysis,
    /// 데이터베이스 시드 (자리표시자)
    Seed,
    /// 통합 테스트 (자리표시자)
    Integration,
    /// 확장성 테스트 (비활성)
    Scalability,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::E2e => write!(f, "e2e"),
            Self::FrontEnd => write!(f, "front-end"),
            Self::Analysis => write!(f, "analysis"),
            Self::Seed => write!(f, "seed"),
            Self::Integration => write!(f, "integration"),
            Self::Scalability => write!(f, "scalability"),
        }
    }
}

// ─── StepAction ──────────────────────────────────────────────────────

/// 단계가 수행하는 동작
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// 외부 명령 실행. 0이 아닌 종료 코드는 실패입니다.
    Command(CommandSpec),
    /// 아무 일도 하지 않고 항상 성공하는 자리표시자
    Placeholder,
}

impl StepAction {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

// ─── Step ────────────────────────────────────────────────────────────

/// 실행 순서의 한 단계
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    kind: StepKind,
    title: &'static str,
    action: StepAction,
    enabled: bool,
}

impl Step {
    pub fn command(kind: StepKind, title: &'static str, spec: CommandSpec) -> Self {
        Self {
            kind,
            title,
            action: StepAction::Command(spec),
            enabled: true,
        }
    }

    pub fn placeholder(kind: StepKind, title: &'static str) -> Self {
        Self {
            kind,
            title,
            action: StepAction::Placeholder,
            enabled: true,
        }
    }

    /// 정의는 남기되 실행되지 않는 단계로 만듭니다.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// 콘솔 메시지에 쓰이는 사람이 읽는 이름 (예: `"Cypress tests"`)
    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn action(&self) -> &StepAction {
        &self.action
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 단계의 동작을 실행합니다.
    ///
    /// 명령 단계는 프로세스가 끝날 때까지 블로킹합니다.
    /// 자리표시자는 `runner`를 건드리지 않고 바로 성공합니다.
    pub fn execute(&self, runner: &dyn CommandRunner) -> Result<(), StepError> {
        match &self.action {
            StepAction::Placeholder => Ok(()),
            StepAction::Command(spec) => {
                let outcome = runner.run(spec).map_err(|source| StepError::Spawn {
                    command: spec.to_string(),
                    source,
                })?;
                if outcome.success() {
                    Ok(())
                } else {
                    Err(StepError::NonZeroExit {
                        command: spec.to_string(),
                        code: outcome.code,
                    })
                }
            }
        }
    }
}
