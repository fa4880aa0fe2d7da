//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to the value it holds while its
//! shape is preserved: a `Present` stays `Present`, a `Failure` stays the
//! same `Failure`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::Maybe;
//! use maybe_result::typeclass::Functor;
//!
//! let present = Maybe::present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::present("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::absent();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::absent());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Outcome;
    /// use maybe_result::typeclass::Functor;
    ///
    /// let success: Outcome<i32, String> = Outcome::success(5);
    /// assert_eq!(success.fmap(|n| n * 2), Outcome::success(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is left untouched, which is useful when the inner type is
    /// not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    /// use maybe_result::typeclass::Functor;
    ///
    /// let name = Maybe::present("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Maybe::present(5));
    /// assert!(name.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Maybe;
    /// use maybe_result::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).replace("replaced"), Maybe::present("replaced"));
    /// assert_eq!(Maybe::<i32>::absent().replace("replaced"), Maybe::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
