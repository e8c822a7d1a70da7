//! The base outcome value: a lifecycle state plus ordered messages.

mod constructors;
mod database;

use std::fmt;

use crate::messages::{
    self, DEFAULT_ERROR_MESSAGE, DEFAULT_EXCEPTION_MESSAGE, DEFAULT_NO_ACTION_MESSAGE,
    DEFAULT_OK_MESSAGE,
};
use crate::{Disclosure, OutcomeError, OutcomeState};

/// Reports whether an action succeeded, with human-readable messages.
///
/// A fresh outcome is [`OutcomeState::Uninitialized`] and carries
/// `"No Action taken"`. Every `set_*` mutator replaces both the state and the
/// message list (last write wins); the matching static constructor builds a
/// fresh outcome and applies that mutator.
///
/// After any mutator has run, [`Outcome::messages`] is never empty.
///
/// # Examples
///
/// ```
/// use outcome_report::Outcome;
///
/// let mut outcome = Outcome::new();
/// outcome.set_error(Some("Quota exceeded"));
/// assert!(!outcome.is_success());
/// assert_eq!(outcome.to_string(), "Quota exceeded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    state: OutcomeState,
    messages: Vec<String>,
}

impl Default for Outcome {
    fn default() -> Self {
        Self::new()
    }
}

impl Outcome {
    /// Creates an [`OutcomeState::Uninitialized`] outcome.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: OutcomeState::Uninitialized,
            messages: vec![DEFAULT_NO_ACTION_MESSAGE.to_owned()],
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> OutcomeState {
        self.state
    }

    /// Returns `true` when the action is considered successful.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.state.is_success()
    }

    /// Messages in insertion order.
    #[must_use]
    pub const fn messages(&self) -> &[String] {
        self.messages.as_slice()
    }

    /// Consumes the outcome, returning its messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Converts the outcome into a `Result` so failures can propagate with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Uninitialized`] when no mutator has run, and
    /// [`OutcomeError::Failed`] carrying the messages when the outcome failed.
    pub fn into_result(self) -> Result<Vec<String>, OutcomeError> {
        match self.state {
            OutcomeState::Success => Ok(self.messages),
            OutcomeState::Failure => Err(OutcomeError::Failed {
                messages: self.messages,
            }),
            OutcomeState::Uninitialized => Err(OutcomeError::Uninitialized),
        }
    }

    /// Marks the outcome successful with `message`, or
    /// `"Operation Succeeded"` when it is blank.
    pub fn set_ok(&mut self, message: Option<&str>) {
        let text = messages::or_default(message, DEFAULT_OK_MESSAGE).to_owned();
        self.settle(true, vec![text]);
    }

    /// Marks the outcome successful with `messages`, or
    /// `["Operation Succeeded"]` when the list is empty.
    pub fn set_ok_messages<I>(&mut self, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.settle(true, messages::list_or_default(messages, DEFAULT_OK_MESSAGE));
    }

    /// Marks the outcome failed with `message`, or
    /// `"Operation did not complete successfully"` when it is blank.
    pub fn set_error(&mut self, message: Option<&str>) {
        let text = messages::or_default(message, DEFAULT_ERROR_MESSAGE).to_owned();
        self.settle(false, vec![text]);
    }

    /// Marks the outcome failed with `messages`, or the default error message
    /// when the list is empty. Entries are kept verbatim.
    pub fn set_error_messages<I>(&mut self, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.settle(
            false,
            messages::list_or_default(messages, DEFAULT_ERROR_MESSAGE),
        );
    }

    /// Marks the outcome failed from an already-caught error.
    ///
    /// With [`Disclosure::Reveal`] the error's `Display` text becomes the
    /// message (falling back to the default error message if that text is
    /// blank). With [`Disclosure::Redact`] the message is always
    /// `"An exception occurred"`, so internal detail does not leak.
    pub fn set_error_from<E>(&mut self, error: &E, disclosure: Disclosure)
    where
        E: fmt::Display + ?Sized,
    {
        match disclosure {
            Disclosure::Reveal => self.set_error(Some(error.to_string().as_str())),
            Disclosure::Redact => self.set_error(Some(DEFAULT_EXCEPTION_MESSAGE)),
        }
    }

    /// Marks the outcome failed with `"{item_name} Not Found"`, using
    /// `"Object Requested"` when the name is blank.
    pub fn set_not_found(&mut self, item_name: Option<&str>) {
        self.settle(false, vec![messages::not_found(item_name)]);
    }

    /// Applies [`Outcome::set_not_found`] when `item` is absent and
    /// [`Outcome::set_ok`] otherwise.
    ///
    /// Presence is the only test; the item's contents are never inspected.
    pub fn set_ok_or_not_found<U>(
        &mut self,
        item: Option<&U>,
        item_name_not_found: Option<&str>,
        ok_message: Option<&str>,
    ) where
        U: ?Sized,
    {
        if item.is_some() {
            self.set_ok(ok_message);
        } else {
            self.set_not_found(item_name_not_found);
        }
    }

    /// Overwrites state and messages wholesale.
    pub(crate) fn replace(&mut self, state: OutcomeState, messages: Vec<String>) {
        tracing::trace!(?state, ?messages, "outcome settled");
        self.state = state;
        self.messages = messages;
    }

    fn settle(&mut self, success: bool, messages: Vec<String>) {
        self.replace(OutcomeState::settled(success), messages);
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}
