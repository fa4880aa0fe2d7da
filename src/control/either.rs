//! Either type - the result of a heterogeneous fold.
//!
//! [`Outcome::branch`](super::Outcome::branch) and
//! [`Maybe::branch`](super::Maybe::branch) run one of two functions whose
//! return types may differ. Rust functions have a single return type, so the
//! two possible shapes come back wrapped in `Either<L, R>`. The convention
//! follows the containers: `Left` holds what the failure/absent branch
//! produced, `Right` what the success/present branch produced.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::{Either, Outcome};
//!
//! let parsed: Outcome<i32, String> = Outcome::success(7);
//! let shape = parsed.branch(|n| n * 6, |e| e.len() > 3);
//! assert_eq!(shape, Either::Right(42));
//!
//! let summary = shape.fold(|flag| flag.to_string(), |n| n.to_string());
//! assert_eq!(summary, "42");
//! ```

use super::{Maybe, Outcome};
use crate::typeclass::Bifunctor;

/// A value that can be one of two types.
///
/// `Left` conventionally carries the failure/absent side and `Right` the
/// success/present side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, produced by the failure/absent branch.
    Left(L),
    /// The right variant, produced by the success/present branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Keeps the left value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Maybe::present(42));
    /// ```
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Present(value),
            Self::Right(_) => Maybe::Absent,
        }
    }

    /// Keeps the right value, if any.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Absent,
            Self::Right(value) => Maybe::Present(value),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

impl<L, R> From<Outcome<R, L>> for Either<L, R> {
    /// `Success(r)` becomes `Right(r)`, `Failure(l)` becomes `Left(l)`.
    #[inline]
    fn from(outcome: Outcome<R, L>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Right(value),
            Outcome::Failure(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Outcome<R, L> {
    /// `Right(r)` becomes `Success(r)`, `Left(l)` becomes `Failure(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Self::Failure(value),
            Either::Right(value) => Self::Success(value),
        }
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }
}
