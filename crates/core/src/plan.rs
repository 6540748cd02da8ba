//! 실행 계획 — 고정된 단계 순서
//!
//! # 실행 순서
//!
//! 1. e2e (`sh test.sh`)
//! 2. front-end (`npx cypress run`)
//! 3. analysis (자리표시자)
//! 4. seed (자리표시자)
//! 5. integration (자리표시자)
//! 6. scalability (정의만 있고 비활성)
//!
//! 순서는 설정으로 바꿀 수 없으며, 계획은 만든 뒤 변경되지 않습니다.

use crate::command::CommandSpec;
use crate::config::SuiteConfig;
use crate::step::{Step, StepKind};

/// 순서가 고정된 단계 목록
#[derive(Debug, Clone)]
pub struct TestPlan {
    steps: Vec<Step>,
}

impl TestPlan {
    /// 설정의 명령으로 표준 계획을 만듭니다.
    pub fn standard(config: &SuiteConfig) -> Self {
        Self::with_commands(config.e2e.to_spec(), config.frontend.to_spec())
    }

    /// 1~2단계 명령만 지정하여 표준 계획을 만듭니다.
    pub fn with_commands(e2e: CommandSpec, frontend: CommandSpec) -> Self {
        Self {
            steps: vec![
                Step::command(StepKind::E2e, "e2e tests", e2e),
                Step::command(StepKind::FrontEnd, "Cypress tests", frontend),
                Step::placeholder(StepKind::Analysis, "DeepSeek analysis"),
                Step::placeholder(StepKind::Seed, "database seed"),
                Step::placeholder(StepKind::Integration, "integration tests"),
                Step::placeholder(StepKind::Scalability, "scalability tests").disabled(),
            ],
        }
    }

    /// 비활성 단계를 포함한 모든 단계
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// 실제로 실행될 단계
    pub fn enabled_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.is_enabled())
    }
}

impl Default for TestPlan {
    fn default() -> Self {
        Self::standard(&SuiteConfig::default())
    }
}
