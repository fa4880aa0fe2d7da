//! Outcome type - a disjoint success/failure value.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. It mirrors
//! [`Maybe`] with a payload on both sides, so the failure branch of the
//! fallback combinators ([`Outcome::map_or_else`], [`Outcome::unwrap_or_else`])
//! receives the error instead of nothing.
//!
//! Data errors travel as `Failure` values through `map`, `bind` and `ap`; only
//! the unwrap family turns a wrong-variant access into a panic.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::Outcome;
//!
//! fn parse(raw: &str) -> Outcome<i32, String> {
//!     raw.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("40").bind(|a| parse("2").map(|b| a + b));
//! assert_eq!(total, Outcome::success(42));
//!
//! let broken = parse("40").bind(|a| parse("two").map(|b| a + b));
//! assert!(broken.is_err());
//! assert_eq!(broken.unwrap_or_else(|_| -1), -1);
//! ```

use std::fmt;

use static_assertions::assert_impl_all;

use super::{Either, Maybe};
use crate::typeclass::{Applicative, Bifunctor, Functor, Monad, TypeConstructor};

/// A disjoint success/failure value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error payload.
    Failure(E),
}

assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a success value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error payload.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Probes
    // =========================================================================

    /// Returns `true` on `Success`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` on `Failure`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows both payload slots.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the success value; a `Failure` passes through unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error payload; a `Success` passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::failure(1);
    /// assert_eq!(failure.map_err(|e| e + 1), Outcome::failure(2));
    ///
    /// let success: Outcome<i32, i32> = Outcome::success(1);
    /// assert_eq!(success.map_err(|e| e + 1), Outcome::success(1));
    /// ```
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<B, F>(self, function: F, default: B) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` to the success value, or `on_err` to the error.
    ///
    /// Unlike [`Maybe::map_or_else`], the fallback receives the error payload.
    #[inline]
    pub fn map_or_else<B, F, O>(self, function: F, on_err: O) -> B
    where
        F: FnOnce(T) -> B,
        O: FnOnce(E) -> B,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => on_err(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `"Call unwrap on Err!"` on `Failure`. The error payload is
    /// not part of the message; use [`Outcome::expect`] to include it.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("Call unwrap on Err!"),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics with `"Call unwrap_err on Ok!"` on `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Success(_) => panic!("Call unwrap_err on Ok!"),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains a fallible computation on the success value.
    ///
    /// A `Failure` short-circuits, propagating the same error.
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`Outcome::bind`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.bind(function)
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Collapses both cases into one value.
    #[inline]
    pub fn fold<R, S, O>(self, on_ok: S, on_err: O) -> R
    where
        S: FnOnce(T) -> R,
        O: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_ok(value),
            Self::Failure(error) => on_err(error),
        }
    }

    /// Runs one of two branches whose return types may differ.
    ///
    /// The success branch lands in `Right`, the failure branch in `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::{Either, Outcome};
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("timeout");
    /// let shape = failure.branch(|n| n + 1, |reason| reason.len());
    /// assert_eq!(shape, Either::Left(7));
    /// ```
    #[inline]
    pub fn branch<R1, R2, S, O>(self, on_ok: S, on_err: O) -> Either<R2, R1>
    where
        S: FnOnce(T) -> R1,
        O: FnOnce(E) -> R2,
    {
        match self {
            Self::Success(value) => Either::Right(on_ok(value)),
            Self::Failure(error) => Either::Left(on_err(error)),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a `Maybe`, discarding the error payload.
    ///
    /// `Success(v)` becomes `Present(v)` and any `Failure` becomes `Absent`;
    /// the error cannot be recovered afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::{Maybe, Outcome};
    ///
    /// assert_eq!(Outcome::<i32, i32>::success(1).to_maybe(), Maybe::present(1));
    /// assert_eq!(Outcome::<i32, i32>::failure(1).to_maybe(), Maybe::absent());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Failure` with `message` followed by the error's `Debug` form.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{message}: {error:?}"),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the error payload.
    ///
    /// # Panics
    ///
    /// Panics on `Success` with `message` followed by the value's `Debug` form.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Success(value) => panic!("{message}: {value:?}"),
            Self::Failure(error) => error,
        }
    }
}

impl<F, E> Outcome<F, E> {
    /// Applies a held function to a held argument.
    ///
    /// Left-biased: when both sides fail, the receiver's error wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Outcome;
    ///
    /// let render: Outcome<fn(i32) -> String, &str> = Outcome::success(|n| n.to_string());
    /// assert_eq!(render.ap(Outcome::success(1)), Outcome::success("1".to_string()));
    ///
    /// let broken: Outcome<fn(i32) -> String, &str> = Outcome::failure("first");
    /// assert_eq!(broken.ap(Outcome::<i32, &str>::failure("second")), Outcome::failure("first"));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, other: Outcome<A, E>) -> Outcome<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match (self, other) {
            (Self::Success(function), Outcome::Success(argument)) => {
                Outcome::Success(function(argument))
            }
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
                Outcome::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Outcome::Failure(error), _)
            | (_, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.bind(function)
    }
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }
}
