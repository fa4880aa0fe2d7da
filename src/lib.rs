//! # maybe-result
//!
//! Two algebraic containers for explicit absence and explicit failure, with
//! law-abiding combinators and a canonical JSON encoding.
//!
//! ## Overview
//!
//! - **[`Maybe`](control::Maybe)**: a value that is `Present` or `Absent`
//! - **[`Outcome`](control::Outcome)**: a computation that is a `Success` or
//!   a `Failure` carrying an error
//! - **Type Classes**: Functor, Applicative, Monad and Bifunctor instances
//!   for both containers
//! - **Codec**: the `{"_tag": ..}` wire format and total decode functions
//! - **Async**: adapters from futures and spawned tasks to `Outcome`
//!
//! Both containers are immutable values: every combinator returns a new
//! container and callbacks run at most once, only on the side they target.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe`, `Outcome` and `Either`
//! - `serde`: Serialization bridge and decode functions
//! - `async`: Adapters from asynchronous operations (tokio)
//! - `tracing`: Emit `tracing` events on decode rejections and failed tasks
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_result::prelude::*;
//!
//! let port = Maybe::present("8080")
//!     .to_outcome("no port configured")
//!     .and_then(|raw| Outcome::from(raw.parse::<u16>().map_err(|_| "not a number")));
//!
//! assert_eq!(port, Outcome::success(8080));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybe_result::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "serde")]
    pub use crate::codec::{
        CodecError, decode_maybe_from_record, decode_maybe_from_text, decode_outcome_from_record,
        decode_outcome_from_text, encode_to_record, encode_to_text,
    };
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "serde")]
pub mod codec;

#[cfg(feature = "async")]
pub mod effect;
