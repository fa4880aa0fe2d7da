//! The containers.
//!
//! - [`Maybe`]: a value that is either present or absent
//! - [`Outcome`]: a value that is either a success or a failure
//! - [`Either`]: the result of a heterogeneous fold over either container
//!
//! The two containers know about each other only through
//! [`Maybe::to_outcome`] and [`Outcome::to_maybe`].
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::{Maybe, Outcome};
//!
//! let lookup = |id: u32| if id == 7 { Maybe::present("alice") } else { Maybe::absent() };
//!
//! let found: Outcome<&str, String> = lookup(7).to_outcome("no such user".to_string());
//! assert_eq!(found.unwrap(), "alice");
//!
//! let missing: Outcome<&str, String> = lookup(8).to_outcome("no such user".to_string());
//! assert_eq!(missing.clone().unwrap_err(), "no such user");
//! assert!(missing.to_maybe().is_absent());
//! ```

mod either;
mod maybe;
mod outcome;

pub use either::Either;
pub use maybe::Maybe;
pub use outcome::Outcome;
