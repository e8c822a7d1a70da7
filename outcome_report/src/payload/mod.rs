//! Outcomes that carry a returned value.
//!
//! [`PayloadOutcome`] embeds an [`Outcome`] and adds an optional payload.
//! It dereferences to the embedded outcome, so every base accessor and
//! mutator is available on it; base mutators never touch the payload.

mod constructors;
mod fetch;

use std::ops::{Deref, DerefMut};

use crate::{Outcome, OutcomeError, OutcomeState};

/// An [`Outcome`] plus the value the operation returned.
///
/// The payload is `None` until an attach operation stores one. Whether it is
/// stored on failure depends on the operation:
///
/// * [`set_ok_or_not_found_and_attach`](Self::set_ok_or_not_found_and_attach)
///   always stores the inspected item, even when it is absent;
/// * the producer-based operations only invoke their producer, and only
///   store its result, when the outcome is successful.
///
/// # Examples
///
/// ```
/// use outcome_report::PayloadOutcome;
///
/// let found = PayloadOutcome::ok_or_not_found_and_attach(Some(42_u32), Some("Answer"), None);
/// assert!(found.is_success());
/// assert_eq!(found.returned(), Some(&42));
///
/// let missing = PayloadOutcome::<u32>::ok_or_not_found_and_attach(None, Some("Answer"), None);
/// assert_eq!(missing.messages(), ["Answer Not Found"]);
/// assert_eq!(missing.returned(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadOutcome<T> {
    outcome: Outcome,
    returned: Option<T>,
}

impl<T> Default for PayloadOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Outcome> for PayloadOutcome<T> {
    fn from(outcome: Outcome) -> Self {
        Self {
            outcome,
            returned: None,
        }
    }
}

impl<T> Deref for PayloadOutcome<T> {
    type Target = Outcome;

    fn deref(&self) -> &Self::Target {
        &self.outcome
    }
}

impl<T> DerefMut for PayloadOutcome<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.outcome
    }
}

impl<T> PayloadOutcome<T> {
    /// Creates an uninitialized outcome with no payload.
    #[must_use]
    pub fn new() -> Self {
        Outcome::new().into()
    }

    /// The embedded base outcome.
    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The attached payload, if any.
    #[must_use]
    pub const fn returned(&self) -> Option<&T> {
        self.returned.as_ref()
    }

    /// Mutable access to the attached payload.
    #[must_use]
    pub const fn returned_mut(&mut self) -> Option<&mut T> {
        self.returned.as_mut()
    }

    /// Removes and returns the payload, leaving `None`.
    pub const fn take_returned(&mut self) -> Option<T> {
        self.returned.take()
    }

    /// Consumes the outcome, returning only the payload.
    #[must_use]
    pub fn into_returned(self) -> Option<T> {
        self.returned
    }

    /// Splits into the base outcome and the payload.
    #[must_use]
    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.outcome, self.returned)
    }

    /// Converts into a `Result` yielding the payload on success.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Uninitialized`] when no mutator has run, and
    /// [`OutcomeError::Failed`] carrying the messages when the outcome failed.
    /// The payload is dropped in both cases.
    pub fn into_result(self) -> Result<Option<T>, OutcomeError> {
        let (outcome, returned) = self.into_parts();
        outcome.into_result().map(|_messages| returned)
    }

    /// Marks the outcome successful (see [`Outcome::set_ok`]) and stores
    /// `payload`.
    pub fn set_ok_and_attach(&mut self, payload: T, message: Option<&str>) {
        self.outcome.set_ok(message);
        self.returned = Some(payload);
    }

    /// Marks the outcome successful with a message list (see
    /// [`Outcome::set_ok_messages`]) and stores `payload`.
    pub fn set_ok_messages_and_attach<I>(&mut self, payload: T, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.outcome.set_ok_messages(messages);
        self.returned = Some(payload);
    }

    /// Stores `item` as the payload, then applies
    /// [`Outcome::set_ok_or_not_found`] to it.
    ///
    /// The payload is overwritten even when `item` is `None`, so callers can
    /// read it uniformly whatever the result.
    pub fn set_ok_or_not_found_and_attach(
        &mut self,
        item: Option<T>,
        item_name_not_found: Option<&str>,
        ok_message: Option<&str>,
    ) {
        self.outcome
            .set_ok_or_not_found(item.as_ref(), item_name_not_found, ok_message);
        self.returned = item;
    }

    /// Copies state and messages from `other` and stores `payload`.
    ///
    /// Only the success flag is copied, so an uninitialized `other` settles
    /// this outcome as a failure. An absent `other` is copied as a failure
    /// with no messages. The payload is stored whatever the copied state.
    pub fn copy_from(&mut self, other: Option<&Outcome>, payload: Option<T>) {
        match other {
            Some(source) => self.outcome.replace(
                OutcomeState::settled(source.is_success()),
                source.messages().to_vec(),
            ),
            None => self.outcome.replace(OutcomeState::Failure, Vec::new()),
        }
        self.returned = payload;
    }
}

#[cfg(test)]
mod tests;
