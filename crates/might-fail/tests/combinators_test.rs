//! Integration tests for the batch combinators and their by-name dispatch.
//!
//! These tests verify that:
//! - `all` keeps input order and reports the first failure to settle
//! - `race` mirrors whichever branch settles first
//! - `any` only fails when every branch fails
//! - `all_settled` never fails and keeps raw reasons
//! - unknown combinator names become failures instead of panics

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use itertools::Itertools;
use might_fail::{Batch, Combinator, Error, ErrorKind, Parts, Settled, Status, Thrown, MIGHT_FAIL};

type Op = BoxFuture<'static, Result<i32, Thrown>>;

fn succeed(value: i32) -> Op {
    async move { Ok(value) }.boxed()
}

fn succeed_after(value: i32, millis: u64) -> Op {
    async move {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(value)
    }
    .boxed()
}

fn reject_with(reason: impl Into<Thrown> + Send + 'static) -> Op {
    async move { Err(reason.into()) }.boxed()
}

fn reject_after(message: &'static str, millis: u64) -> Op {
    async move {
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Err(message.into())
    }
    .boxed()
}

/// `all` over successes yields every value in input order.
///
/// # GIVEN
/// Three branches completing in reverse order
///
/// # WHEN
/// They are combined with `all`
///
/// # THEN
/// The success holds `[1, 2, 3]`
#[tokio::test]
async fn test_all_orders_by_input_not_completion() {
    let Parts { error, result } = MIGHT_FAIL
        .all(vec![succeed_after(1, 30), succeed_after(2, 15), succeed(3)])
        .await
        .into_parts();
    assert!(error.is_none());
    assert_eq!(result, Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn test_all_fails_with_normalized_error() {
    let Parts { error, result } = MIGHT_FAIL
        .all(vec![succeed(1), reject_with("Test Error"), succeed(3)])
        .await
        .into_parts();
    assert!(result.is_none());
    assert_eq!(error.map(|e| e.message()).as_deref(), Some("Test Error"));
}

/// `all` reports the failure that settles first, however many branches it has.
///
/// # GIVEN
/// 31 branches: an early one failing slowly and the last one failing at once
///
/// # WHEN
/// They are combined with `all`
///
/// # THEN
/// The failure is the immediate one and arrives without waiting on the rest
#[tokio::test]
async fn test_all_reports_first_settled_failure_past_thirty_branches() {
    let mut branches = vec![succeed_after(0, 300), reject_after("slow", 150)];
    branches.extend((2..30).map(|value| succeed_after(value, 300)));
    branches.push(reject_with("fast"));
    assert_eq!(branches.len(), 31);

    let started = tokio::time::Instant::now();
    let outcome = MIGHT_FAIL.all(branches).await;

    let message = outcome.error().map(Error::message);
    assert_eq!(message.as_deref(), Some("fast"));
    assert!(started.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn test_all_of_nothing_is_empty_success() {
    let outcome = MIGHT_FAIL.all(Vec::<Op>::new()).await;
    assert_eq!(outcome.result().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_race_first_success_wins() {
    let branches = vec![succeed(42), succeed_after(100, 100)];
    let outcome = MIGHT_FAIL.race(branches).await;
    assert_eq!(outcome.result(), Some(&42));
}

#[tokio::test]
async fn test_race_of_nothing_fails_immediately() {
    let outcome = MIGHT_FAIL.race(Vec::<Op>::new()).await;
    let kind = outcome.error().map(Error::kind);
    assert!(matches!(kind, Some(ErrorKind::EmptyRace)));
}

#[tokio::test]
async fn test_any_skips_failures() {
    let outcome = MIGHT_FAIL
        .any(vec![reject_with("E1"), succeed_after(200, 100), reject_with("E2")])
        .await;
    assert_eq!(outcome.result(), Some(&200));
}

#[tokio::test]
async fn test_any_all_failed_is_aggregate() {
    let branches = vec![reject_with("E1"), reject_with("E2")];
    let outcome = MIGHT_FAIL.any(branches).await;
    let error = outcome.error().unwrap();
    assert_eq!(error.message(), "All promises were rejected");
    assert!(matches!(error.kind(), ErrorKind::Aggregate { .. }));
    let branch_messages = error.errors().iter().map(Error::message).collect_vec();
    assert_eq!(branch_messages, vec!["E1", "E2"]);
}

#[tokio::test]
async fn test_all_settled_keeps_raw_reasons() {
    let original = Error::msg("X");
    let outcome = MIGHT_FAIL
        .all_settled(vec![succeed(1), reject_with(original.clone()), succeed(3)])
        .await;

    assert!(outcome.is_success());
    let settled = outcome.result().unwrap();
    let statuses = settled.iter().map(|s| s.status().to_string()).collect_vec();
    assert_eq!(statuses, vec!["fulfilled", "rejected", "fulfilled"]);

    assert_eq!(settled.first().and_then(Settled::value), Some(&1));
    assert!(matches!(
        settled.get(1).and_then(Settled::reason),
        Some(Thrown::Error(reason)) if Error::ptr_eq(reason, &original)
    ));
    assert_eq!(settled.get(2).and_then(Settled::value), Some(&3));
}

#[tokio::test]
async fn test_all_settled_does_not_normalize_reasons() {
    let outcome = MIGHT_FAIL
        .all_settled(vec![reject_with(serde_json::json!({ "code": 7 }))])
        .await;
    let settled = outcome.result().unwrap();
    assert!(matches!(
        settled.first().and_then(Settled::reason),
        Some(Thrown::Value(value)) if value.get("code") == Some(&serde_json::json!(7))
    ));
    assert_eq!(settled.first().map(Settled::status), Some(Status::Rejected));
}

#[tokio::test]
async fn test_batch_by_name() {
    let all = MIGHT_FAIL.batch("all", vec![succeed(1), succeed(2)]).await;
    assert!(matches!(all.result(), Some(Batch::All(values)) if values == &vec![1, 2]));

    let settled = MIGHT_FAIL
        .batch("allSettled", vec![succeed(1), reject_with("no")])
        .await;
    assert!(matches!(settled.result(), Some(Batch::AllSettled(records)) if records.len() == 2));

    let branches = vec![reject_with("no"), succeed(9)];
    let any = MIGHT_FAIL.batch("any", branches).await;
    let combinator = any.result().map(Batch::combinator);
    assert!(matches!(combinator, Some(Combinator::Any)));
}

#[tokio::test]
async fn test_batch_unknown_name_settles_as_failure() {
    let outcome = MIGHT_FAIL.batch("withResolvers", vec![succeed(1)]).await;
    assert!(outcome.is_failure());
    assert!(matches!(
        outcome.error().map(Error::kind),
        Some(ErrorKind::UnknownCombinator { name }) if name == "withResolvers"
    ));
}
