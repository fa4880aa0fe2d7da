//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with the ability to lift plain values
//! into the context (`pure`) and to combine independent contexts (`map2`,
//! `map3`, `apply`). For both containers in this crate the combination
//! short-circuits: any `Absent`/`Failure` operand makes the whole result
//! `Absent`/`Failure`, and for `Outcome` the leftmost failure wins.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::Maybe;
//! use maybe_result::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::present(42));
//!
//! let sum = Maybe::present(1).map2(Maybe::present(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::present(3));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Outcome;
    /// use maybe_result::typeclass::Applicative;
    ///
    /// let lifted: Outcome<String, ()> = <Outcome<(), ()>>::pure("hello".to_string());
    /// assert_eq!(lifted, Outcome::success("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    /// use maybe_result::typeclass::Applicative;
    ///
    /// let sum = Maybe::present(1).map2(Maybe::<i32>::absent(), |x, y| x + y);
    /// assert_eq!(sum, Maybe::absent());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    /// use maybe_result::typeclass::Applicative;
    ///
    /// let pair = Maybe::present(1).product(Maybe::present("hello"));
    /// assert_eq!(pair, Maybe::present((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the context to a value held in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    /// use maybe_result::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::present(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::present(5)), Maybe::present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}
