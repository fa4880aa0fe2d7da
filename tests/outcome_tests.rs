//! Integration tests for `Outcome<T, E>`.
//!
//! `Outcome` represents a computation that either succeeded or failed:
//! - `Success(T)`: carries the produced value
//! - `Failure(E)`: carries the error payload
//!
//! Success-side combinators never touch a `Failure` and error-side
//! combinators never touch a `Success`.

#![cfg(feature = "control")]

use std::cell::Cell;

use maybe_result::control::{Either, Maybe, Outcome};
use rstest::rstest;

fn parse(input: &str) -> Outcome<i32, String> {
    input
        .parse::<i32>()
        .map_err(|_| format!("not a number: {input}"))
        .into()
}

// =============================================================================
// Construction and Inspection
// =============================================================================

#[rstest]
fn test_outcome_success_is_ok() {
    let value: Outcome<i32, String> = Outcome::success(1);
    assert!(value.is_ok());
    assert!(!value.is_err());
}

#[rstest]
fn test_outcome_failure_is_err() {
    let value: Outcome<i32, String> = Outcome::failure("boom".to_string());
    assert!(value.is_err());
    assert!(!value.is_ok());
}

#[rstest]
fn test_outcome_result_conversion_roundtrip() {
    let result: Result<i32, String> = parse("12").into();
    assert_eq!(result, Ok(12));
    assert_eq!(Outcome::from(Err::<i32, _>(0_u8)), Outcome::failure(0));
}

#[rstest]
fn test_outcome_either_conversion_puts_failure_left() {
    let failure: Either<&str, i32> = Outcome::<i32, &str>::failure("e").into();
    let success: Either<&str, i32> = Outcome::<i32, &str>::success(1).into();
    assert_eq!(failure, Either::Left("e"));
    assert_eq!(success, Either::Right(1));
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn test_outcome_map_success() {
    assert_eq!(parse("4").map(|n| n * 2), Outcome::success(8));
}

#[rstest]
fn test_outcome_map_failure_never_calls_function() {
    let calls = Cell::new(0);
    let mapped = parse("x").map(|n| {
        calls.set(calls.get() + 1);
        n
    });
    assert_eq!(mapped, Outcome::failure("not a number: x".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_outcome_map_composition() {
    let first = |n: i32| n - 2;
    let second = |n: i32| n.to_string();
    assert_eq!(
        parse("10").map(first).map(second),
        parse("10").map(|n| second(first(n)))
    );
}

#[rstest]
fn test_outcome_map_err_success_never_calls_function() {
    let calls = Cell::new(0);
    let mapped = parse("3").map_err(|error| {
        calls.set(calls.get() + 1);
        error.len()
    });
    assert_eq!(mapped, Outcome::success(3));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case("5", 10)]
#[case("five", 0)]
fn test_outcome_map_or(#[case] input: &str, #[case] expected: i32) {
    assert_eq!(parse(input).map_or(|n| n * 2, 0), expected);
}

#[rstest]
fn test_outcome_map_or_else_receives_error() {
    let length = parse("abc").map_or_else(|n| n.unsigned_abs() as usize, |error| error.len());
    assert_eq!(length, "not a number: abc".len());
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
#[should_panic(expected = "Call unwrap on Err!")]
fn test_outcome_unwrap_failure_panics() {
    Outcome::<i32, i32>::failure(1).unwrap();
}

#[rstest]
#[should_panic(expected = "Call unwrap_err on Ok!")]
fn test_outcome_unwrap_err_success_panics() {
    Outcome::<i32, i32>::success(1).unwrap_err();
}

#[rstest]
#[should_panic(expected = "loading settings: \"disk full\"")]
fn test_outcome_expect_failure_includes_error() {
    Outcome::<i32, &str>::failure("disk full").expect("loading settings");
}

#[rstest]
#[should_panic(expected = "wanted an error: 3")]
fn test_outcome_expect_err_success_includes_value() {
    Outcome::<i32, &str>::success(3).expect_err("wanted an error");
}

#[rstest]
fn test_outcome_expect_err_failure_returns_error() {
    assert_eq!(
        Outcome::<i32, &str>::failure("e").expect_err("unused"),
        "e"
    );
}

#[rstest]
#[case("8", 8)]
#[case("eight", -1)]
fn test_outcome_unwrap_or(#[case] input: &str, #[case] expected: i32) {
    assert_eq!(parse(input).unwrap_or(-1), expected);
}

#[rstest]
fn test_outcome_unwrap_or_else_only_runs_on_failure() {
    let calls = Cell::new(0);
    let fallback = |error: String| {
        calls.set(calls.get() + 1);
        i32::try_from(error.len()).unwrap_or(i32::MAX)
    };
    assert_eq!(parse("2").unwrap_or_else(fallback), 2);
    assert_eq!(calls.get(), 0);
    assert_eq!(parse("z").unwrap_or_else(fallback), 15);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Chaining and Application
// =============================================================================

fn reciprocal(n: i32) -> Outcome<f64, String> {
    if n == 0 {
        Outcome::failure("division by zero".to_string())
    } else {
        Outcome::success(1.0 / f64::from(n))
    }
}

#[rstest]
#[case("4", Outcome::success(0.25))]
#[case("0", Outcome::failure("division by zero".to_string()))]
#[case("q", Outcome::failure("not a number: q".to_string()))]
fn test_outcome_bind_chains(#[case] input: &str, #[case] expected: Outcome<f64, String>) {
    assert_eq!(parse(input).bind(reciprocal), expected);
}

#[rstest]
fn test_outcome_bind_failure_never_calls_function() {
    let calls = Cell::new(0);
    let chained = parse("?").and_then(|n| {
        calls.set(calls.get() + 1);
        Outcome::success(n)
    });
    assert!(chained.is_err());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_outcome_bind_with_success_is_map() {
    let function = |n: i32| n * 7;
    assert_eq!(
        parse("6").bind(|n| Outcome::success(function(n))),
        parse("6").map(function)
    );
}

#[rstest]
fn test_outcome_ap_applies_held_function() {
    let negate: Outcome<fn(i32) -> i32, String> = Outcome::success(|n| -n);
    assert_eq!(negate.ap(parse("5")).unwrap(), -5);
}

#[rstest]
fn test_outcome_ap_receiver_failure_wins() {
    let broken: Outcome<fn(i32) -> i32, String> = Outcome::failure("receiver".to_string());
    assert_eq!(
        broken.ap(parse("argument")).unwrap_err(),
        "receiver".to_string()
    );
}

#[rstest]
fn test_outcome_ap_argument_failure_propagates() {
    let negate: Outcome<fn(i32) -> i32, String> = Outcome::success(|n| -n);
    assert_eq!(negate.ap(parse("x")).unwrap_err(), "not a number: x");
}

// =============================================================================
// Folding and Branching
// =============================================================================

#[rstest]
#[case("3", "ok 3")]
#[case("-", "err not a number: -")]
fn test_outcome_fold(#[case] input: &str, #[case] expected: &str) {
    let rendered = parse(input).fold(|n| format!("ok {n}"), |error| format!("err {error}"));
    assert_eq!(rendered, expected);
}

#[rstest]
fn test_outcome_branch_allows_different_result_types() {
    let success = parse("2").branch(|n| n > 1, |error| error.len());
    let failure = parse("").branch(|n| n > 1, |error| error.len());
    assert_eq!(success, Either::Right(true));
    assert_eq!(failure, Either::Left("not a number: ".len()));
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
fn test_outcome_to_maybe_success_is_present() {
    assert_eq!(Outcome::<i32, i32>::success(1).to_maybe().unwrap(), 1);
}

#[rstest]
fn test_outcome_to_maybe_failure_is_absent() {
    assert!(Outcome::<i32, i32>::failure(1).to_maybe().is_absent());
}

#[rstest]
fn test_outcome_to_maybe_then_to_outcome_restores_success() {
    let restored = parse("11").to_maybe().to_outcome("lost".to_string());
    assert_eq!(restored, Outcome::success(11));
}

#[rstest]
fn test_outcome_as_ref_borrows_both_sides() {
    let failure: Outcome<Vec<u8>, String> = Outcome::failure("bad".to_string());
    assert_eq!(failure.as_ref().map_err(String::len), Outcome::failure(3));
    assert_eq!(failure.as_ref().to_maybe(), Maybe::absent());
}
