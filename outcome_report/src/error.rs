//! Error bridge for callers that want to propagate failed outcomes with `?`.

use thiserror::Error;

/// A non-successful outcome converted into an error.
///
/// Produced by [`crate::Outcome::into_result`] and
/// [`crate::PayloadOutcome::into_result`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// The outcome never had a mutator applied.
    #[error("no action taken")]
    Uninitialized,

    /// The outcome settled as a failure.
    #[error("{}", .messages.join("; "))]
    Failed {
        /// Messages recorded on the failed outcome, in insertion order.
        messages: Vec<String>,
    },
}

impl OutcomeError {
    /// Messages carried by the error; empty for
    /// [`OutcomeError::Uninitialized`].
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Uninitialized => &[],
            Self::Failed { messages } => messages,
        }
    }
}

/// Whether an error's own text may be shown in an outcome's messages.
///
/// Use [`Disclosure::Redact`] when the outcome is returned to untrusted
/// consumers; the stored message is then always
/// [`crate::messages::DEFAULT_EXCEPTION_MESSAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disclosure {
    /// Store the error's `Display` text.
    #[default]
    Reveal,
    /// Store the generic exception message instead.
    Redact,
}
