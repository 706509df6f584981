//! Property-based tests for error normalization and the Either invariants.
//!
//! Properties verified:
//! - Normalization is idempotent and preserves identity
//! - String failures keep their message verbatim
//! - Named and positional views agree on every outcome, in every layout

use might_fail_core::{normalize, Either, Error, Go, Layout, Slot, Standard, Tuple};
use proptest::prelude::*;
use serde_json::json;

fn named_and_positional_agree<L: Layout>(outcome: &Either<i64, L>) -> bool {
    let absent = outcome.iter().filter(Slot::is_absent).count();
    let positional_error = outcome
        .iter()
        .find_map(|slot| slot.as_error().map(Error::message));
    let positional_result = outcome
        .iter()
        .find_map(|slot| slot.as_result().copied());

    absent == 1
        && outcome.error().is_some() != outcome.result().is_some()
        && positional_error == outcome.error().map(Error::message)
        && positional_result == outcome.result().copied()
}

// ==========================================================================
// PROPERTY: Normalization
// ==========================================================================

proptest! {
    /// Property: normalizing an already normalized error returns the same instance.
    #[test]
    fn prop_normalize_is_idempotent(message in ".*") {
        let once = normalize(message);
        let twice = normalize(once.clone());
        prop_assert!(Error::ptr_eq(&once, &twice));
        prop_assert_eq!(once.location(), twice.location());
    }

    /// Property: a string failure becomes an error with exactly that message.
    #[test]
    fn prop_string_message_is_verbatim(message in ".*") {
        prop_assert_eq!(normalize(message.clone()).message(), message);
    }

    /// Property: an object with a string message lends it regardless of other fields.
    #[test]
    fn prop_structured_message_wins(message in ".*", extra in any::<i64>()) {
        let error = normalize(json!({ "extra": extra, "message": message.clone() }));
        prop_assert_eq!(error.message(), message);
    }

    /// Property: numbers are never a usable message.
    #[test]
    fn prop_numbers_are_unknown(number in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        prop_assert_eq!(normalize(json!(number)).message(), "Unknown error");
    }
}

// ==========================================================================
// PROPERTY: Dual access
// ==========================================================================

proptest! {
    /// Property: every layout exposes one absent slot and agrees across views.
    #[test]
    fn prop_views_agree(value in any::<i64>(), fail in any::<bool>(), message in "[a-z]{1,12}") {
        let standard: Either<i64, Standard> = if fail {
            Either::failure(message.clone())
        } else {
            Either::success(value)
        };
        prop_assert!(named_and_positional_agree(&standard));

        let tuple: Either<i64, Tuple> = standard.clone().relayout();
        prop_assert!(named_and_positional_agree(&tuple));

        let go: Either<i64, Go> = standard.relayout();
        prop_assert!(named_and_positional_agree(&go));
        prop_assert_eq!(go.get(if fail { 1 } else { 0 }).is_some_and(|s| !s.is_absent()), true);
    }
}
