//! Asynchronous boundary.
//!
//! The containers are synchronous values; this module only adds the
//! adapters that turn a settled asynchronous operation into an
//! [`Outcome`](crate::control::Outcome):
//!
//! - [`Outcome::from_future`](crate::control::Outcome::from_future) for any
//!   future resolving to a `Result`
//! - [`Outcome::from_join_handle`](crate::control::Outcome::from_join_handle)
//!   for spawned tokio tasks, where cancellation and panics become failures
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::control::Outcome;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let handle = tokio::spawn(async { 40 + 2 });
//! let outcome = Outcome::from_join_handle(handle).await;
//! assert_eq!(outcome.unwrap(), 42);
//! # });
//! ```

mod async_outcome;
