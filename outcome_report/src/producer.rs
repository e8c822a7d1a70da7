//! Type aliases for passing an absent producer.
//!
//! A bare `None` cannot name the closure type of the producer it stands in
//! for, so callers spell it with one of these aliases:
//!
//! ```
//! use outcome_report::{NoProducer, Outcome};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome = Outcome::ok_or_database_error_with(None::<NoProducer<i64>>, None, None).await;
//! assert!(!outcome.is_success());
//! # }
//! ```

use std::future::Ready;

/// Stand-in type for an absent infallible producer of `T`.
pub type NoProducer<T> = fn() -> Ready<T>;

/// Stand-in type for an absent fallible producer of `T` with error `E`.
pub type NoFallibleProducer<T, E> = fn() -> Ready<Result<T, E>>;
