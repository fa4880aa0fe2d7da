//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` is either `Present(T)` or `Absent`. Every combinator is total
//! and leaves the `Absent` case untouched without calling the supplied
//! function; only [`Maybe::unwrap`] and [`Maybe::expect`] panic, and only
//! when called on `Absent`.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::Maybe;
//!
//! let configured: Option<&str> = Some("9000");
//! let port = Maybe::from_nullable(configured)
//!     .bind(|raw| Maybe::from_nullable(raw.parse::<u16>().ok()))
//!     .unwrap_or(8080);
//! assert_eq!(port, 9000);
//!
//! let greeting = Maybe::present("world").fold(|name| format!("hello {name}"), || "nobody".to_string());
//! assert_eq!(greeting, "hello world");
//! ```

use static_assertions::assert_impl_all;

use super::{Either, Outcome};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: either `Present(T)` or `Absent`.
///
/// Values are immutable; combinators consume `self` and return a new
/// container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// Holds exactly one value.
    Present(T),
    /// Holds nothing.
    Absent,
}

assert_impl_all!(Maybe<i32>: Send, Sync, Copy);

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// The empty container.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Builds a `Maybe` from a nullable source: `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::present(1));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::absent());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Probes
    // =========================================================================

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if nothing is held.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the held value. `function` is not called on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).map(|v| v + 1), Maybe::present(2));
    /// assert_eq!(Maybe::<i32>::absent().map(|v| v + 1), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies `function` to the held value, or returns `default`.
    ///
    /// `default` is evaluated by the caller before the call; use
    /// [`Maybe::map_or_else`] to compute it lazily.
    #[inline]
    pub fn map_or<B, F>(self, function: F, default: B) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies `function` to the held value, or computes a default.
    ///
    /// `default_function` only runs on `Absent`.
    #[inline]
    pub fn map_or_else<B, F, D>(self, function: F, default_function: D) -> B
    where
        F: FnOnce(T) -> B,
        D: FnOnce() -> B,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default_function(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with `"Call unwrap on Nothing!"` when called on `Absent`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("Call unwrap on Nothing!"),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with a message starting with `message` when called on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use maybe_result::control::Maybe;
    ///
    /// Maybe::<i32>::absent().expect("configuration was loaded");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{message}: Call expect on Nothing!"),
        }
    }

    /// Returns the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value or computes one. `function` only runs on `Absent`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains a computation that may itself be absent.
    ///
    /// `Absent` short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::absent() };
    /// assert_eq!(Maybe::present(8).bind(half).bind(half), Maybe::present(2));
    /// assert_eq!(Maybe::present(6).bind(half).bind(half), Maybe::absent());
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Alias for [`Maybe::bind`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Collapses both cases into one value.
    #[inline]
    pub fn fold<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Runs one of two branches whose return types may differ.
    ///
    /// The present branch lands in `Right`, the absent branch in `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::{Either, Maybe};
    ///
    /// let shape = Maybe::present(2).branch(|n| n * 10, || "missing");
    /// assert_eq!(shape, Either::Right(20));
    /// ```
    #[inline]
    pub fn branch<R1, R2, P, A>(self, on_present: P, on_absent: A) -> Either<R2, R1>
    where
        P: FnOnce(T) -> R1,
        A: FnOnce() -> R2,
    {
        match self {
            Self::Present(value) => Either::Right(on_present(value)),
            Self::Absent => Either::Left(on_absent()),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an `Outcome`, using `error` for the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::present(1).to_outcome(99), Outcome::success(1));
    /// assert_eq!(Maybe::<i32>::absent().to_outcome(99), Outcome::failure(99));
    /// ```
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }
}

impl<F> Maybe<F> {
    /// Applies a held function to a held argument.
    ///
    /// Yields `Absent` when either side is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    ///
    /// let render = Maybe::present(|n: i32| n.to_string());
    /// assert_eq!(render.ap(Maybe::present(1)), Maybe::present("1".to_string()));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, other: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, other) {
            (Self::Present(function), Maybe::Present(argument)) => Maybe::Present(function(argument)),
            _ => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
                Maybe::Present(function(a, b, c))
            }
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}
