//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Outcome<_, E>` as type
//! constructors directly. This module uses a GAT to recover that ability,
//! which is what lets [`Functor`](super::Functor), [`Applicative`](super::Applicative)
//! and [`Monad`](super::Monad) talk about "the same container holding a
//! different type".
//!
//! # Example
//!
//! ```rust
//! use maybe_result::control::Maybe;
//! use maybe_result::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = emptied(Maybe::present(42));
//! assert!(absent.is_absent());
//! ```

/// A type constructor applied to some inner type.
///
/// # Associated Types
///
/// - `Inner`: the type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type currently held by the constructor.
    type Inner;

    /// The same type constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
