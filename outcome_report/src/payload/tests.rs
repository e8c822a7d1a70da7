//! Unit tests for payload attachment rules.

use std::cell::Cell;
use std::io;

use rstest::rstest;

use super::PayloadOutcome;
use crate::messages::{
    DEFAULT_DATABASE_ERROR_MESSAGE, DEFAULT_NO_ACTION_MESSAGE, DEFAULT_OK_MESSAGE,
};
use crate::{NoFallibleProducer, NoProducer, Outcome, OutcomeError, OutcomeState};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Widget {
    id: u32,
}

#[rstest]
fn starts_without_payload() {
    let outcome = PayloadOutcome::<Widget>::new();
    assert_eq!(outcome.state(), OutcomeState::Uninitialized);
    assert_eq!(outcome.returned(), None);
}

#[rstest]
#[case(None, DEFAULT_OK_MESSAGE)]
#[case(Some("Widget loaded"), "Widget loaded")]
fn ok_and_attach_stores_payload(#[case] message: Option<&str>, #[case] expected: &str) {
    let outcome = PayloadOutcome::ok_and_attach(Widget { id: 1 }, message);
    assert!(outcome.is_success());
    assert_eq!(outcome.messages(), [expected]);
    assert_eq!(outcome.returned(), Some(&Widget { id: 1 }));
}

#[rstest]
fn ok_messages_and_attach_defaults_empty_list() {
    let outcome = PayloadOutcome::ok_messages_and_attach(7_u8, Vec::<String>::new());
    assert_eq!(outcome.messages(), [DEFAULT_OK_MESSAGE]);
    assert_eq!(outcome.returned(), Some(&7));
}

#[rstest]
fn not_found_attach_keeps_absent_item() {
    let mut outcome = PayloadOutcome::ok_and_attach(Widget { id: 9 }, None);
    outcome.set_ok_or_not_found_and_attach(None, Some("Widget"), None);
    assert!(!outcome.is_success());
    assert_eq!(outcome.messages(), ["Widget Not Found"]);
    assert_eq!(outcome.returned(), None);
}

#[rstest]
fn found_attach_stores_item() {
    let outcome =
        PayloadOutcome::ok_or_not_found_and_attach(Some(Widget { id: 3 }), None, Some("here"));
    assert_eq!(outcome.messages(), ["here"]);
    assert_eq!(outcome.into_returned(), Some(Widget { id: 3 }));
}

#[rstest]
fn failure_factories_carry_no_payload() {
    let single = PayloadOutcome::<Widget>::error(Some("nope"));
    assert_eq!(single.messages(), ["nope"]);
    assert_eq!(single.returned(), None);

    let many = PayloadOutcome::<Widget>::error_messages(["a", "b"]);
    assert_eq!(many.messages(), ["a", "b"]);

    let missing = PayloadOutcome::<Widget>::not_found(Some("Widget"));
    assert_eq!(missing.messages(), ["Widget Not Found"]);
}

#[rstest]
fn copy_from_absent_source_is_empty_failure() {
    let outcome = PayloadOutcome::from_outcome(None, Some(Widget { id: 4 }));
    assert_eq!(outcome.state(), OutcomeState::Failure);
    assert!(outcome.messages().is_empty());
    assert_eq!(outcome.returned(), Some(&Widget { id: 4 }));
}

#[rstest]
fn copy_from_source_copies_state_and_messages() {
    let source = Outcome::error_messages(["locked", "retry later"]);
    let mut outcome = PayloadOutcome::ok_and_attach(Widget { id: 1 }, None);
    outcome.copy_from(Some(&source), Some(Widget { id: 2 }));
    assert!(!outcome.is_success());
    assert_eq!(outcome.outcome(), &source);
    assert_eq!(outcome.returned(), Some(&Widget { id: 2 }));
}

#[rstest]
fn copy_from_uninitialized_source_settles_as_failure() {
    let mut outcome = PayloadOutcome::ok_and_attach(Widget { id: 1 }, Some("done"));
    outcome.copy_from(Some(&Outcome::new()), Some(Widget { id: 2 }));
    assert_eq!(outcome.state(), OutcomeState::Failure);
    assert_eq!(outcome.messages(), [DEFAULT_NO_ACTION_MESSAGE]);
    assert_eq!(outcome.returned(), Some(&Widget { id: 2 }));
    assert!(matches!(
        outcome.into_result(),
        Err(OutcomeError::Failed { .. })
    ));
}

#[rstest]
fn from_outcome_never_yields_uninitialized() {
    let adapted = PayloadOutcome::<Widget>::from_outcome(Some(&Outcome::new()), None);
    assert_eq!(adapted.state(), OutcomeState::Failure);
    assert_eq!(adapted.returned(), None);
}

#[rstest]
fn base_mutators_leave_payload_alone() {
    let mut outcome = PayloadOutcome::ok_and_attach(Widget { id: 5 }, None);
    outcome.set_error(Some("stale"));
    assert_eq!(outcome.messages(), ["stale"]);
    assert_eq!(outcome.returned(), Some(&Widget { id: 5 }));
}

#[rstest]
fn payload_accessors_move_the_value() {
    let mut outcome = PayloadOutcome::ok_and_attach(Widget { id: 1 }, None);
    if let Some(widget) = outcome.returned_mut() {
        widget.id = 10;
    }
    assert_eq!(outcome.take_returned(), Some(Widget { id: 10 }));
    let (base, returned) = outcome.into_parts();
    assert!(base.is_success());
    assert_eq!(returned, None);
}

#[rstest]
fn into_result_yields_payload_on_success() {
    let outcome = PayloadOutcome::ok_and_attach(Widget { id: 6 }, None);
    assert_eq!(outcome.into_result(), Ok(Some(Widget { id: 6 })));

    let failed = PayloadOutcome::from_outcome(Some(&Outcome::error(Some("x"))), Some(1_u8));
    assert_eq!(
        failed.into_result(),
        Err(OutcomeError::Failed {
            messages: vec![String::from("x")]
        })
    );
}

#[tokio::test]
async fn absent_lookup_never_invokes_producer() {
    let calls = Cell::new(0);
    let outcome = PayloadOutcome::ok_or_not_found_and_attach_from(
        None::<&Widget>,
        Some(|| {
            calls.set(calls.get() + 1);
            async { Widget { id: 1 } }
        }),
        Some("Widget"),
        None,
    )
    .await;
    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.messages(), ["Widget Not Found"]);
    assert_eq!(outcome.returned(), None);
}

#[tokio::test]
async fn present_lookup_invokes_producer_once() {
    let calls = Cell::new(0);
    let lookup = Widget { id: 1 };
    let outcome = PayloadOutcome::ok_or_not_found_and_attach_from(
        Some(&lookup),
        Some(|| {
            calls.set(calls.get() + 1);
            async { String::from("details for widget 1") }
        }),
        None,
        None,
    )
    .await;
    assert_eq!(calls.get(), 1);
    assert!(outcome.is_success());
    assert_eq!(
        outcome.returned().map(String::as_str),
        Some("details for widget 1")
    );
}

#[tokio::test]
async fn present_lookup_without_producer_keeps_prior_payload() {
    let mut outcome = PayloadOutcome::ok_and_attach(Widget { id: 2 }, None);
    outcome
        .set_ok_or_not_found_and_attach_from(Some("key"), None::<NoProducer<Widget>>, None, None)
        .await;
    assert!(outcome.is_success());
    assert_eq!(outcome.returned(), Some(&Widget { id: 2 }));
}

#[tokio::test]
async fn failing_producer_propagates_after_outcome_is_set() {
    let mut outcome = PayloadOutcome::<Widget>::new();
    let err = outcome
        .try_set_ok_or_not_found_and_attach_from(
            Some(&1_u8),
            Some(|| async { Err(io::Error::other("cache miss")) }),
            None,
            None,
        )
        .await
        .expect_err("producer error should propagate");
    assert_eq!(err.to_string(), "cache miss");
    assert!(outcome.is_success());
    assert_eq!(outcome.returned(), None);
}

#[rstest]
#[case(0, false, 0)]
#[case(-3, false, 0)]
#[case(2, true, 1)]
#[tokio::test]
async fn database_rows_gate_producer(
    #[case] rows: i64,
    #[case] success: bool,
    #[case] expected_calls: u32,
) {
    let calls = Cell::new(0_u32);
    let outcome = PayloadOutcome::ok_or_database_error_and_attach(
        rows,
        Some(|| {
            calls.set(calls.get() + 1);
            async { Widget { id: 8 } }
        }),
        None,
        None,
    )
    .await;
    assert_eq!(outcome.is_success(), success);
    assert_eq!(calls.get(), expected_calls);
    assert_eq!(outcome.returned().is_some(), success);
}

#[tokio::test]
async fn transaction_then_producer_run_in_order() {
    let order = Cell::new(0_u8);
    let outcome = PayloadOutcome::ok_or_database_error_with_and_attach(
        Some(|| {
            assert_eq!(order.replace(1), 0, "transaction runs first");
            async { 1_i64 }
        }),
        Some(|| {
            assert_eq!(order.replace(2), 1, "producer runs second");
            async { Widget { id: 11 } }
        }),
        None,
        None,
    )
    .await;
    assert_eq!(order.get(), 2);
    assert_eq!(outcome.returned(), Some(&Widget { id: 11 }));
}

#[tokio::test]
async fn absent_transaction_skips_producer() {
    let calls = Cell::new(0);
    let outcome = PayloadOutcome::ok_or_database_error_with_and_attach(
        None::<NoProducer<i64>>,
        Some(|| {
            calls.set(calls.get() + 1);
            async { Widget { id: 1 } }
        }),
        None,
        None,
    )
    .await;
    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.messages(), [DEFAULT_DATABASE_ERROR_MESSAGE]);
}

#[tokio::test]
async fn failing_transaction_skips_producer_and_propagates() {
    let calls = Cell::new(0);
    let result = PayloadOutcome::try_ok_or_database_error_with_and_attach(
        Some(|| async { Err(io::Error::other("timeout")) }),
        Some(|| {
            calls.set(calls.get() + 1);
            async { Ok(Widget { id: 1 }) }
        }),
        None,
        None,
    )
    .await;
    assert_eq!(calls.get(), 0);
    let err = result.expect_err("transaction error should propagate");
    assert_eq!(err.kind(), io::ErrorKind::Other);
}

#[tokio::test]
async fn fallible_database_attach_stores_payload() {
    let outcome = PayloadOutcome::try_ok_or_database_error_and_attach(
        1,
        Some(|| async { Ok::<_, io::Error>(Widget { id: 12 }) }),
        None,
        Some("saved"),
    )
    .await
    .expect("producer should succeed");
    assert_eq!(outcome.messages(), ["saved"]);
    assert_eq!(outcome.returned(), Some(&Widget { id: 12 }));
}

#[tokio::test]
async fn fallible_not_found_without_producer_is_ok() {
    let outcome = PayloadOutcome::<Widget>::try_ok_or_not_found_and_attach_from(
        Some("key"),
        None::<NoFallibleProducer<Widget, io::Error>>,
        None,
        None,
    )
    .await
    .expect("absent producer is not an error");
    assert!(outcome.is_success());
    assert_eq!(outcome.returned(), None);
}
