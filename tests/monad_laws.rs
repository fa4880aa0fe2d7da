#![cfg(feature = "control")]
//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! `bind` must agree with `flat_map`, and binding into a lifted function must
//! agree with `map`.

use maybe_result::control::{Maybe, Outcome};
use maybe_result::typeclass::{Applicative, Monad};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Success),
        any::<String>().prop_map(Outcome::Failure),
    ]
}

fn checked_half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 {
        Maybe::present(n / 2)
    } else {
        Maybe::absent()
    }
}

fn checked_increment(n: i32) -> Maybe<i32> {
    Maybe::from_nullable(n.checked_add(1))
}

fn non_negative(n: i32) -> Outcome<i32, String> {
    if n >= 0 {
        Outcome::success(n)
    } else {
        Outcome::failure(format!("{n} is negative"))
    }
}

fn checked_double(n: i32) -> Outcome<i32, String> {
    n.checked_mul(2)
        .map_or_else(|| Outcome::failure("overflow".to_string()), Outcome::success)
}

// =============================================================================
// Maybe Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            <Maybe<i32>>::pure(value).flat_map(checked_half),
            checked_half(value)
        );
    }

    #[test]
    fn prop_maybe_right_identity(value in maybe_strategy()) {
        prop_assert_eq!(value.flat_map(Maybe::present), value);
    }

    #[test]
    fn prop_maybe_associativity(value in maybe_strategy()) {
        let left = value.flat_map(checked_half).flat_map(checked_increment);
        let right = value.flat_map(|x| checked_half(x).flat_map(checked_increment));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_bind_matches_flat_map(value in maybe_strategy()) {
        prop_assert_eq!(value.bind(checked_half), value.flat_map(checked_half));
    }

    #[test]
    fn prop_maybe_bind_lifted_is_map(value in maybe_strategy()) {
        let function = |n: i32| n.wrapping_sub(3);
        prop_assert_eq!(value.bind(|x| Maybe::present(function(x))), value.map(function));
    }

    #[test]
    fn prop_maybe_absent_short_circuits(value in any::<i32>()) {
        let absent: Maybe<i32> = Maybe::absent();
        prop_assert_eq!(absent.bind(|_| Maybe::present(value)), Maybe::absent());
    }
}

// =============================================================================
// Outcome Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            <Outcome<i32, String>>::pure(value).flat_map(non_negative),
            non_negative(value)
        );
    }

    #[test]
    fn prop_outcome_right_identity(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Outcome::success), value);
    }

    #[test]
    fn prop_outcome_associativity(value in outcome_strategy()) {
        let left = value.clone().flat_map(non_negative).flat_map(checked_double);
        let right = value.flat_map(|x| non_negative(x).flat_map(checked_double));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_bind_matches_flat_map(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().bind(non_negative), value.flat_map(non_negative));
    }

    #[test]
    fn prop_outcome_bind_lifted_is_map(value in outcome_strategy()) {
        let function = |n: i32| n.wrapping_mul(5);
        prop_assert_eq!(
            value.clone().bind(|x| Outcome::success(function(x))),
            value.map(function)
        );
    }

    #[test]
    fn prop_outcome_failure_propagates_unchanged(error in any::<String>()) {
        let failure: Outcome<i32, String> = Outcome::failure(error.clone());
        prop_assert_eq!(failure.bind(checked_double), Outcome::failure(error));
    }
}
