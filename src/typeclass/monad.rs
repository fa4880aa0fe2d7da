//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, letting the value
//! produced by one step decide which computation runs next. An `Absent` or
//! `Failure` at any step ends the chain; later functions are never called.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::Maybe;
//! use maybe_result::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0).into()
//! }
//!
//! let result = Maybe::present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::present(n * 2));
//! assert_eq!(result, Maybe::present(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Outcome;
    /// use maybe_result::typeclass::Monad;
    ///
    /// let halved: Outcome<i32, String> = Outcome::success(10)
    ///     .flat_map(|n| if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure("odd".to_string()) });
    /// assert_eq!(halved, Outcome::success(5));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    /// use maybe_result::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::present(5).then(Maybe::present("hello")), Maybe::present("hello"));
    /// assert_eq!(Maybe::<i32>::absent().then(Maybe::present("hello")), Maybe::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
