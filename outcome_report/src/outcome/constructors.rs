//! Static constructors for `Outcome`.
//!
//! Each one builds a fresh outcome and delegates to the matching mutator.

use std::fmt;

use super::Outcome;
use crate::Disclosure;

impl Outcome {
    /// Successful outcome; see [`Outcome::set_ok`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_report::Outcome;
    ///
    /// assert_eq!(Outcome::ok(None).messages(), ["Operation Succeeded"]);
    /// assert_eq!(Outcome::ok(Some("Saved")).messages(), ["Saved"]);
    /// ```
    #[must_use]
    pub fn ok(message: Option<&str>) -> Self {
        let mut outcome = Self::new();
        outcome.set_ok(message);
        outcome
    }

    /// Successful outcome with a message list; see [`Outcome::set_ok_messages`].
    #[must_use]
    pub fn ok_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut outcome = Self::new();
        outcome.set_ok_messages(messages);
        outcome
    }

    /// Failed outcome; see [`Outcome::set_error`].
    #[must_use]
    pub fn error(message: Option<&str>) -> Self {
        let mut outcome = Self::new();
        outcome.set_error(message);
        outcome
    }

    /// Failed outcome with a message list; see
    /// [`Outcome::set_error_messages`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_report::Outcome;
    ///
    /// let outcome = Outcome::error_messages(["name is required", "age is negative"]);
    /// assert_eq!(outcome.messages().len(), 2);
    ///
    /// let defaulted = Outcome::error_messages(Vec::<String>::new());
    /// assert_eq!(defaulted.messages(), ["Operation did not complete successfully"]);
    /// ```
    #[must_use]
    pub fn error_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut outcome = Self::new();
        outcome.set_error_messages(messages);
        outcome
    }

    /// Failed outcome built from a caught error; see
    /// [`Outcome::set_error_from`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_report::{Disclosure, Outcome};
    ///
    /// let err = std::io::Error::other("connection string leaked");
    /// let outcome = Outcome::error_from(&err, Disclosure::Redact);
    /// assert_eq!(outcome.messages(), ["An exception occurred"]);
    /// ```
    #[must_use]
    pub fn error_from<E>(error: &E, disclosure: Disclosure) -> Self
    where
        E: fmt::Display + ?Sized,
    {
        let mut outcome = Self::new();
        outcome.set_error_from(error, disclosure);
        outcome
    }

    /// Not-found outcome; see [`Outcome::set_not_found`].
    #[must_use]
    pub fn not_found(item_name: Option<&str>) -> Self {
        let mut outcome = Self::new();
        outcome.set_not_found(item_name);
        outcome
    }

    /// Found-or-not-found outcome; see [`Outcome::set_ok_or_not_found`].
    #[must_use]
    pub fn ok_or_not_found<U>(
        item: Option<&U>,
        item_name_not_found: Option<&str>,
        ok_message: Option<&str>,
    ) -> Self
    where
        U: ?Sized,
    {
        let mut outcome = Self::new();
        outcome.set_ok_or_not_found(item, item_name_not_found, ok_message);
        outcome
    }
}
