use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use entity_fixtures::suite_runner::domain::model::{
    entities::suite_report::TestStatus,
    enums::{hook_phase::HookPhase, suite_failure::SuiteFailure},
};

use crate::support::create_harness;

#[tokio::test]
async fn hooks_wrap_every_test_in_registration_order() {
    let mut harness = create_harness(Duration::from_secs(5));
    harness.record_all_hooks();
    harness.recording_test("first");
    harness.recording_test("second");

    let report = harness.runner.run().await;

    assert!(report.passed());
    assert_eq!(
        harness.log.events(),
        vec![
            "suite_setup",
            "setup",
            "first",
            "teardown",
            "setup",
            "second",
            "teardown",
            "suite_teardown",
        ]
    );
}

#[tokio::test]
async fn panicking_test_fails_alone() {
    let mut harness = create_harness(Duration::from_secs(5));
    harness.runner.test("explodes", |_| async {
        if true {
            panic!("boom");
        }
        Ok(())
    });
    harness.recording_test("survivor");

    let report = harness.runner.run().await;

    assert!(!report.passed());
    assert_eq!(
        report.test_status("explodes"),
        Some(&TestStatus::Failed(SuiteFailure::Panicked {
            label: "explodes".to_string(),
            message: "boom".to_string(),
        }))
    );
    assert_eq!(report.test_status("survivor"), Some(&TestStatus::Passed));
}

#[tokio::test]
async fn slow_test_times_out_without_aborting_the_suite() {
    let mut harness = create_harness(Duration::from_millis(50));
    harness.runner.test("slow", |_| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    });
    harness.recording_test("fast");

    let report = harness.runner.run().await;

    assert!(matches!(
        report.test_status("slow"),
        Some(TestStatus::Failed(failure)) if failure.is_timeout()
    ));
    assert_eq!(report.test_status("fast"), Some(&TestStatus::Passed));
}

#[tokio::test]
async fn hook_timeout_is_fatal_for_remaining_tests() {
    let mut harness = create_harness(Duration::from_millis(50));
    harness.runner.setup("stuck setup", |_| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    });
    harness.record_all_hooks();
    harness.recording_test("first");
    harness.recording_test("second");

    let report = harness.runner.run().await;

    assert!(matches!(
        report.test_status("first"),
        Some(TestStatus::Failed(failure)) if failure.is_timeout()
    ));
    assert_eq!(report.test_status("second"), Some(&TestStatus::NotRun));
    assert_eq!(
        harness.log.events(),
        vec!["suite_setup", "teardown", "suite_teardown"]
    );
}

#[tokio::test]
async fn suite_setup_failure_skips_tests_but_runs_suite_teardown() {
    let mut harness = create_harness(Duration::from_secs(5));
    harness
        .runner
        .suite_setup("broken", |_| async { Err(SuiteFailure::failed("no backend")) });
    harness.record_all_hooks();
    harness.recording_test("first");

    let report = harness.runner.run().await;

    assert_eq!(report.test_status("first"), Some(&TestStatus::NotRun));
    assert_eq!(report.hook_failures().len(), 1);
    assert_eq!(report.hook_failures()[0].phase, HookPhase::SuiteSetup);
    assert_eq!(report.hook_failures()[0].label, "broken");
    assert_eq!(harness.log.events(), vec!["suite_teardown"]);
}

#[tokio::test]
async fn per_test_setup_failure_skips_only_that_body() {
    let mut harness = create_harness(Duration::from_secs(5));
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    harness.runner.setup("flaky setup", move |_| {
        let counter = counter.clone();
        async move {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(SuiteFailure::failed("dirty resource"));
            }
            Ok(())
        }
    });
    harness.record_all_hooks();
    harness.recording_test("first");
    harness.recording_test("second");

    let report = harness.runner.run().await;

    assert_eq!(
        report.test_status("first"),
        Some(&TestStatus::Failed(SuiteFailure::failed("dirty resource")))
    );
    assert_eq!(report.test_status("second"), Some(&TestStatus::Passed));
    assert_eq!(
        harness.log.events(),
        vec![
            "suite_setup",
            "teardown",
            "setup",
            "second",
            "teardown",
            "suite_teardown",
        ]
    );
}
