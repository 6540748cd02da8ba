//! suiterun 핵심 라이브러리
//!
//! 이름 붙은 단계들을 고정된 순서로 하나씩 실행하고, 첫 실패에서 전체 실행을
//! 중단하는 순차 테스트 실행기입니다.
//!
//! - [`plan::TestPlan`]: 고정된 단계 목록 (e2e → front-end → analysis → seed → integration)
//! - [`runner::SuiteRunner`]: 순차 실행과 첫 실패 시 중단
//! - [`command::CommandRunner`]: 외부 프로세스 실행 capability (테스트에서 교체 가능)
//! - [`report::Reporter`]: 사용자에게 보이는 평문 진행 메시지

pub mod command;
pub mod config;
pub mod error;
pub mod plan;
pub mod report;
pub mod runner;
pub mod step;

// --- 주요 타입 re-export ---

// 에러
pub use error::{ConfigError, StepError, SuiteError};

// 설정
pub use config::SuiteConfig;

// 실행
pub use command::{CommandOutcome, CommandRunner, CommandSpec, SystemCommandRunner};
pub use plan::TestPlan;
pub use report::{ConsoleReporter, Reporter};
pub use runner::{RunReport, StepFailure, StepOutcome, StepState, SuiteRunner};
pub use step::{Step, StepAction, StepKind};
