use std::{any::Any, future::Future, pin::Pin, sync::Arc, time::Duration};

use tracing::{info, warn};

use crate::{
    config::harness_config::HarnessConfig,
    suite_runner::domain::model::{
        entities::{
            suite_report::{SuiteReport, TestStatus},
            test_context::TestContext,
        },
        enums::{hook_phase::HookPhase, suite_failure::SuiteFailure},
    },
};

pub type StepResult = Result<(), SuiteFailure>;

type StepFuture = Pin<Box<dyn Future<Output = StepResult> + Send>>;
type Step = Arc<dyn Fn(TestContext) -> StepFuture + Send + Sync>;

struct RegisteredStep {
    label: String,
    step: Step,
}

impl RegisteredStep {
    fn new<F, Fut>(label: impl Into<String>, step: F) -> Self
    where
        F: Fn(TestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        Self {
            label: label.into(),
            step: Arc::new(move |context| Box::pin(step(context)) as StepFuture),
        }
    }
}

pub struct SuiteRunner {
    suite_name: String,
    hook_timeout: Duration,
    context: TestContext,
    suite_setup: Vec<RegisteredStep>,
    setup: Vec<RegisteredStep>,
    teardown: Vec<RegisteredStep>,
    suite_teardown: Vec<RegisteredStep>,
    tests: Vec<RegisteredStep>,
}

impl SuiteRunner {
    pub fn new(suite_name: impl Into<String>, hook_timeout: Duration) -> Self {
        Self {
            suite_name: suite_name.into(),
            hook_timeout,
            context: TestContext::new(),
            suite_setup: Vec::new(),
            setup: Vec::new(),
            teardown: Vec::new(),
            suite_teardown: Vec::new(),
            tests: Vec::new(),
        }
    }

    pub fn from_config(suite_name: impl Into<String>, config: &HarnessConfig) -> Self {
        Self::new(suite_name, config.hook_timeout)
    }

    pub fn hook_timeout(&self) -> Duration {
        self.hook_timeout
    }

    pub fn context(&self) -> TestContext {
        self.context.clone()
    }

    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    pub fn suite_setup<F, Fut>(&mut self, label: impl Into<String>, hook: F)
    where
        F: Fn(TestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        self.suite_setup.push(RegisteredStep::new(label, hook));
    }

    pub fn setup<F, Fut>(&mut self, label: impl Into<String>, hook: F)
    where
        F: Fn(TestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        self.setup.push(RegisteredStep::new(label, hook));
    }

    pub fn teardown<F, Fut>(&mut self, label: impl Into<String>, hook: F)
    where
        F: Fn(TestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        self.teardown.push(RegisteredStep::new(label, hook));
    }

    pub fn suite_teardown<F, Fut>(&mut self, label: impl Into<String>, hook: F)
    where
        F: Fn(TestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        self.suite_teardown.push(RegisteredStep::new(label, hook));
    }

    pub fn test<F, Fut>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn(TestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = StepResult> + Send + 'static,
    {
        self.tests.push(RegisteredStep::new(name, body));
    }

    pub async fn run(&self) -> SuiteReport {
        let mut report = SuiteReport::new(&self.suite_name);
        let mut aborted = false;

        info!(suite = %self.suite_name, tests = self.tests.len(), "running suite");

        for hook in &self.suite_setup {
            if let Err(failure) = self.run_step(hook).await {
                self.record_hook_failure(&mut report, HookPhase::SuiteSetup, hook, failure);
                aborted = true;
                break;
            }
        }

        for test in &self.tests {
            if aborted {
                report.record_test(&test.label, TestStatus::NotRun);
                continue;
            }

            let (status, fatal) = self.run_test(test, &mut report).await;
            report.record_test(&test.label, status);
            aborted = fatal;
        }

        for hook in &self.suite_teardown {
            if let Err(failure) = self.run_step(hook).await {
                self.record_hook_failure(&mut report, HookPhase::SuiteTeardown, hook, failure);
            }
        }

        report
    }

    async fn run_test(&self, test: &RegisteredStep, report: &mut SuiteReport) -> (TestStatus, bool) {
        let mut failure = None;
        let mut fatal = false;

        for hook in &self.setup {
            if let Err(hook_failure) = self.run_step(hook).await {
                fatal |= hook_failure.is_timeout();
                self.record_hook_failure(report, HookPhase::Setup, hook, hook_failure.clone());
                failure = Some(hook_failure);
                break;
            }
        }

        if failure.is_none() {
            if let Err(test_failure) = self.run_step(test).await {
                failure = Some(test_failure);
            }
        }

        for hook in &self.teardown {
            if let Err(hook_failure) = self.run_step(hook).await {
                fatal |= hook_failure.is_timeout();
                self.record_hook_failure(report, HookPhase::Teardown, hook, hook_failure.clone());
                failure.get_or_insert(hook_failure);
            }
        }

        let status = match failure {
            Some(failure) => {
                warn!(suite = %self.suite_name, test = %test.label, %failure, "test failed");
                TestStatus::Failed(failure)
            }
            None => TestStatus::Passed,
        };

        (status, fatal)
    }

    fn record_hook_failure(
        &self,
        report: &mut SuiteReport,
        phase: HookPhase,
        hook: &RegisteredStep,
        failure: SuiteFailure,
    ) {
        warn!(
            suite = %self.suite_name,
            phase = phase.as_str(),
            hook = %hook.label,
            %failure,
            "hook failed"
        );
        report.record_hook_failure(phase, &hook.label, failure);
    }

    async fn run_step(&self, registered: &RegisteredStep) -> StepResult {
        let handle = tokio::spawn((registered.step)(self.context.clone()));
        let abort_handle = handle.abort_handle();

        match tokio::time::timeout(self.hook_timeout, handle).await {
            Err(_) => {
                abort_handle.abort();
                Err(SuiteFailure::TimedOut {
                    label: registered.label.clone(),
                    timeout: self.hook_timeout,
                })
            }
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) if join_error.is_panic() => Err(SuiteFailure::Panicked {
                label: registered.label.clone(),
                message: panic_message(join_error.into_panic()),
            }),
            Ok(Err(_)) => Err(SuiteFailure::Cancelled {
                label: registered.label.clone(),
            }),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
