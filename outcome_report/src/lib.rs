//! Outcome values for reporting how an operation went.
//!
//! Service and business layers use [`Outcome`] to tell callers whether an
//! action succeeded, failed, found nothing, or changed rows in a database,
//! together with human-readable messages. [`PayloadOutcome`] adds a returned
//! value that is attached (or fetched from an asynchronous producer) when the
//! outcome is successful.
//!
//! Ordinary conditions such as "not found" or "zero rows changed" are
//! represented as failure outcomes rather than errors. Callers that prefer
//! `?` can convert with [`Outcome::into_result`].
//!
//! # Examples
//!
//! ```
//! use outcome_report::{Outcome, OutcomeState};
//!
//! let saved = Outcome::ok_or_database_error(1, None, Some("Widget saved"));
//! assert!(saved.is_success());
//! assert_eq!(saved.messages(), ["Widget saved"]);
//!
//! let missing = Outcome::ok_or_not_found(None::<&u32>, Some("Widget"), None);
//! assert_eq!(missing.state(), OutcomeState::Failure);
//! assert_eq!(missing.messages(), ["Widget Not Found"]);
//! ```

mod error;
pub mod messages;
mod outcome;
mod payload;
mod producer;
mod state;

pub use error::{Disclosure, OutcomeError};
pub use outcome::Outcome;
pub use payload::PayloadOutcome;
pub use producer::{NoFallibleProducer, NoProducer};
pub use state::OutcomeState;
