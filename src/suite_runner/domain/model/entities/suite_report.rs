use crate::suite_runner::domain::model::enums::{
    hook_phase::HookPhase, suite_failure::SuiteFailure,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TestStatus {
    Passed,
    Failed(SuiteFailure),
    NotRun,
}

#[derive(Clone, Debug)]
pub struct TestOutcome {
    pub name: String,
    pub status: TestStatus,
}

#[derive(Clone, Debug)]
pub struct HookFailureRecord {
    pub phase: HookPhase,
    pub label: String,
    pub failure: SuiteFailure,
}

#[derive(Clone, Debug)]
pub struct SuiteReport {
    suite_name: String,
    tests: Vec<TestOutcome>,
    hook_failures: Vec<HookFailureRecord>,
}

impl SuiteReport {
    pub fn new(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            tests: Vec::new(),
            hook_failures: Vec::new(),
        }
    }

    pub fn record_test(&mut self, name: impl Into<String>, status: TestStatus) {
        self.tests.push(TestOutcome {
            name: name.into(),
            status,
        });
    }

    pub fn record_hook_failure(
        &mut self,
        phase: HookPhase,
        label: impl Into<String>,
        failure: SuiteFailure,
    ) {
        self.hook_failures.push(HookFailureRecord {
            phase,
            label: label.into(),
            failure,
        });
    }

    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    pub fn tests(&self) -> &[TestOutcome] {
        &self.tests
    }

    pub fn hook_failures(&self) -> &[HookFailureRecord] {
        &self.hook_failures
    }

    pub fn test_status(&self, name: &str) -> Option<&TestStatus> {
        self.tests
            .iter()
            .find(|outcome| outcome.name == name)
            .map(|outcome| &outcome.status)
    }

    pub fn passed(&self) -> bool {
        self.hook_failures.is_empty()
            && self
                .tests
                .iter()
                .all(|outcome| outcome.status == TestStatus::Passed)
    }
}
