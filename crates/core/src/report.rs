//! 진행 상황 출력 — 사용자에게 보이는 평문 콘솔 메시지
//!
//! 실행기는 모든 진행/성공/실패 메시지를 [`Reporter`]로 보냅니다.
//! 진단용 `tracing` 이벤트와는 별개이며, 형식은 한 줄짜리 평문입니다.
//!
//! ```text
//! ---------------------- Starting the super test runner ----------------------
//! Running e2e tests...
//! e2e tests completed successfully!
//! ...
//! All tests have finished successfully!
//! ```

use std::io::{self, Stderr, Stdout, Write};

use crate::error::StepError;
use crate::runner::RunReport;
use crate::step::Step;

/// 실행 시작 배너
pub const BANNER: &str =
    "---------------------- Starting the super test runner ----------------------";

/// 전체 성공 메시지
pub const ALL_PASSED: &str = "All tests have finished successfully!";

/// 실행기 진행 상황 수신자
pub trait Reporter {
    fn suite_started(&mut self) -> io::Result<()>;

    fn step_started(&mut self, step: &Step) -> io::Result<()>;

    fn step_succeeded(&mut self, step: &Step) -> io::Result<()>;

    fn step_failed(&mut self, step: &Step, error: &StepError) -> io::Result<()>;

    /// 마지막에 정확히 한 번 호출됩니다. 실패한 실행에서도 호출됩니다.
    fn suite_finished(&mut self, report: &RunReport) -> io::Result<()>;
}

/// 평문 콘솔 출력
///
/// 진행/성공 메시지는 `out`, 실패 메시지는 `err`로 씁니다.
/// 하위 프로세스 출력과 순서가 섞이지 않도록 매 줄마다 flush합니다.
pub struct ConsoleReporter<O, E> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    /// 표준 출력/표준 에러로 쓰는 reporter
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// 내부 writer를 돌려받습니다 (테스트에서 출력 확인용).
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn suite_started(&mut self) -> io::Result<()> {
        self.line(BANNER)
    }

    fn step_started(&mut self, step: &Step) -> io::Result<()> {
        self.line(&format!("Running {}...", step.title()))
    }

    fn step_succeeded(&mut self, step: &Step) -> io::Result<()> {
        self.line(&format!("{} completed successfully!", step.title()))
    }

    fn step_failed(&mut self, step: &Step, error: &StepError) -> io::Result<()> {
        writeln!(self.err, "Error running {}: {}", step.title(), error)?;
        self.err.flush()
    }

    fn suite_finished(&mut self, report: &RunReport) -> io::Result<()> {
        if report.is_success() {
            self.line(ALL_PASSED)?;
        }
        Ok(())
    }
}
