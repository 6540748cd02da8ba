//! 순차 실행기 — 고정 순서 실행과 첫 실패 시 중단
//!
//! [`SuiteRunner`]는 [`TestPlan`]의 활성 단계를 하나씩 블로킹으로 실행합니다.
//! 단계가 실패하면 남은 단계는 실행하지 않고 [`RunReport`]에 실패를 담아
//! 돌려줍니다. 프로세스 종료는 호출자(CLI)의 몫입니다.
//!
//! # 상태 전이
//! ```text
//! Pending(i) → Running(i) → Succeeded(i) → Pending(i+1)
//!                         ↘ Failed(i)    → 종료 (i+1.. 은 Pending으로 남음)
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::command::CommandRunner;
use crate::error::{StepError, SuiteError};
use crate::plan::TestPlan;
use crate::report::Reporter;
use crate::step::StepKind;

// ─── StepState ───────────────────────────────────────────────────────

/// 단계 실행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// 아직 실행되지 않음 (앞 단계 실패 시 그대로 남음)
    Pending,
    /// 실행 중
    Running,
    /// 정상 완료
    Succeeded,
    /// 실패. 전체 실행 중단
    Failed,
    /// 비활성 단계 (실행 대상 아님)
    Disabled,
}

impl StepState {
    /// 단계의 동작이 실제로 호출되었는지 여부
    pub fn was_executed(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

// ─── RunReport ───────────────────────────────────────────────────────

/// 단계별 결과
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub kind: StepKind,
    pub state: StepState,
    /// 실행에 걸린 시간. 실행되지 않았으면 `None`.
    pub elapsed: Option<Duration>,
}

/// 실행을 중단시킨 실패
#[derive(Debug)]
pub struct StepFailure {
    pub kind: StepKind,
    pub title: &'static str,
    pub error: StepError,
}

impl fmt::Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.kind, self.error)
    }
}

/// 실행 결과 요약
///
/// 계획의 모든 단계(비활성 포함)에 대해 계획 순서대로 하나씩 결과를 담습니다.
#[derive(Debug)]
pub struct RunReport {
    outcomes: Vec<StepOutcome>,
    failure: Option<StepFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// 프로세스 종료 코드: 성공 0, 실패 1
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, kind: StepKind) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.kind == kind)
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        self.failure.as_ref()
    }

    /// 실패가 있으면 `Err`로 꺼내고, 없으면 보고서를 그대로 돌려줍니다.
    pub fn into_result(mut self) -> Result<Self, StepFailure> {
        match self.failure.take() {
            Some(failure) => Err(failure),
            None => Ok(self),
        }
    }

    /// 실제로 실행된 단계를 실행 순서대로 돌려줍니다.
    pub fn executed(&self) -> Vec<StepKind> {
        self.outcomes
            .iter()
            .filter(|o| o.state.was_executed())
            .map(|o| o.kind)
            .collect()
    }
}

// ─── SuiteRunner ─────────────────────────────────────────────────────

/// 순차 단계 실행기
pub struct SuiteRunner<'a> {
    commands: &'a dyn CommandRunner,
}

impl<'a> SuiteRunner<'a> {
    pub fn new(commands: &'a dyn CommandRunner) -> Self {
        Self { commands }
    }

    /// 계획을 처음부터 끝까지 실행합니다.
    ///
    /// 단계 실패는 `Ok(report)`로 돌아오며 `report.is_success()`가 `false`입니다.
    /// `Err`는 단계 실패가 없는 상태에서 reporter 출력이 실패한 경우뿐입니다.
    /// 단계가 실패한 뒤의 출력 실패는 로그만 남기고 실패 보고서를 돌려줍니다.
    pub fn run(
        &self,
        plan: &TestPlan,
        reporter: &mut dyn Reporter,
    ) -> Result<RunReport, SuiteError> {
        let mut outcomes: Vec<StepOutcome> = plan
            .steps()
            .iter()
            .map(|step| StepOutcome {
                kind: step.kind(),
                state: if step.is_enabled() {
                    StepState::Pending
                } else {
                    StepState::Disabled
                },
                elapsed: None,
            })
            .collect();
        let mut failure = None;

        info!(steps = plan.enabled_steps().count(), "test suite starting");
        reporter.suite_started()?;

        for (step, outcome) in plan.steps().iter().zip(outcomes.iter_mut()) {
            if !step.is_enabled() {
                debug!(step = %step.kind(), "step disabled, skipping");
                continue;
            }

            outcome.state = StepState::Running;
            info!(step = %step.kind(), "step started");
            reporter.step_started(step)?;

            let started = Instant::now();
            let result = step.execute(self.commands);
            let elapsed = started.elapsed();
            outcome.elapsed = Some(elapsed);

            match result {
                Ok(()) => {
                    outcome.state = StepState::Succeeded;
                    info!(
                        step = %step.kind(),
                        elapsed_ms = elapsed.as_millis() as u64,
                        "step succeeded"
                    );
                    reporter.step_succeeded(step)?;
                }
                Err(e) => {
                    outcome.state = StepState::Failed;
                    warn!(
                        step = %step.kind(),
                        elapsed_ms = elapsed.as_millis() as u64,
                        error = %e,
                        "step failed, aborting remaining steps"
                    );
                    let failed = StepFailure {
                        kind: step.kind(),
                        title: step.title(),
                        error: e,
                    };
                    // 출력 실패가 단계 실패를 가리면 안 됩니다.
                    if let Err(write_err) = reporter.step_failed(step, &failed.error) {
                        warn!(error = %write_err, "failed to report step failure");
                    }
                    failure = Some(failed);
                    break;
                }
            }
        }

        let report = RunReport { outcomes, failure };
        if report.is_success() {
            info!("test suite finished");
            reporter.suite_finished(&report)?;
        } else if let Err(write_err) = reporter.suite_finished(&report) {
            warn!(error = %write_err, "failed to report suite result");
        }
        Ok(report)
    }
}
