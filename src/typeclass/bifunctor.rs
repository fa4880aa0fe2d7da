//! Bifunctor type class - mapping over two type parameters.
//!
//! `Bifunctor` generalises [`Functor`](super::Functor) to types with two
//! payload slots. `Outcome<T, E>` is a bifunctor over `<E, T>`: `first`
//! rewrites the error (`map_err`) and `second` the success value (`map`).
//! `Either<L, R>` is a bifunctor over `<L, R>`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::Outcome;
//! use maybe_result::typeclass::Bifunctor;
//!
//! let failure: Outcome<i32, String> = Outcome::failure("boom".to_string());
//! let mapped = failure.bimap(|e| e.len(), |x| x * 2);
//! assert_eq!(mapped, Outcome::failure(4));
//! ```

/// A type class for types with two independently mappable payloads.
pub trait Bifunctor<A, B> {
    /// The same bifunctor applied to two new types.
    type Target<C, D>;

    /// Maps both sides at once; only the function for the active side runs.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps only the first type parameter.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps only the second type parameter.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps both sides through references, leaving `self` intact.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}
