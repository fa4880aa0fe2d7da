//! Type class traits shared by the containers of this crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over the held value
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//! - [`Bifunctor`]: mapping over both payload slots
//!
//! The inherent combinators on [`Maybe`](crate::control::Maybe) and
//! [`Outcome`](crate::control::Outcome) (`map`, `bind`, `ap`, ...) agree
//! with these trait methods on every input; the traits exist so that code
//! can be written once against any law-abiding container.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::{Maybe, Outcome};
//! use maybe_result::typeclass::{Functor, Monad};
//!
//! fn double_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::present(21)), Maybe::present(42));
//! assert_eq!(double_all(Outcome::<i32, String>::success(21)), Outcome::success(42));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
