//! Static constructors for `PayloadOutcome`.

use std::future::Future;

use super::PayloadOutcome;
use crate::Outcome;

impl<T> PayloadOutcome<T> {
    /// Successful outcome carrying `payload`; see
    /// [`PayloadOutcome::set_ok_and_attach`].
    #[must_use]
    pub fn ok_and_attach(payload: T, message: Option<&str>) -> Self {
        let mut outcome = Self::new();
        outcome.set_ok_and_attach(payload, message);
        outcome
    }

    /// Successful outcome carrying `payload` with a message list; see
    /// [`PayloadOutcome::set_ok_messages_and_attach`].
    #[must_use]
    pub fn ok_messages_and_attach<I>(payload: T, messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut outcome = Self::new();
        outcome.set_ok_messages_and_attach(payload, messages);
        outcome
    }

    /// Failed outcome with no payload; see [`Outcome::set_error`].
    #[must_use]
    pub fn error(message: Option<&str>) -> Self {
        Outcome::error(message).into()
    }

    /// Failed outcome with a message list and no payload; see
    /// [`Outcome::set_error_messages`].
    #[must_use]
    pub fn error_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Outcome::error_messages(messages).into()
    }

    /// Not-found outcome with no payload; see [`Outcome::set_not_found`].
    #[must_use]
    pub fn not_found(item_name: Option<&str>) -> Self {
        Outcome::not_found(item_name).into()
    }

    /// Found-or-not-found outcome that always carries `item`; see
    /// [`PayloadOutcome::set_ok_or_not_found_and_attach`].
    #[must_use]
    pub fn ok_or_not_found_and_attach(
        item: Option<T>,
        item_name_not_found: Option<&str>,
        ok_message: Option<&str>,
    ) -> Self {
        let mut outcome = Self::new();
        outcome.set_ok_or_not_found_and_attach(item, item_name_not_found, ok_message);
        outcome
    }

    /// Adapts a base outcome, copying its state and messages; see
    /// [`PayloadOutcome::copy_from`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_report::{Outcome, PayloadOutcome};
    ///
    /// let adapted = PayloadOutcome::from_outcome(None, Some("draft"));
    /// assert!(!adapted.is_success());
    /// assert!(adapted.messages().is_empty());
    /// assert_eq!(adapted.returned(), Some(&"draft"));
    ///
    /// let base = Outcome::ok(Some("Published"));
    /// let published = PayloadOutcome::from_outcome(Some(&base), Some("post"));
    /// assert_eq!(published.messages(), ["Published"]);
    /// ```
    #[must_use]
    pub fn from_outcome(other: Option<&Outcome>, payload: Option<T>) -> Self {
        let mut outcome = Self::new();
        outcome.copy_from(other, payload);
        outcome
    }

    /// Found-or-not-found outcome whose payload is fetched on success; see
    /// [`PayloadOutcome::set_ok_or_not_found_and_attach_from`].
    #[must_use]
    pub async fn ok_or_not_found_and_attach_from<U, F, Fut>(
        lookup: Option<&U>,
        producer: Option<F>,
        item_name_not_found: Option<&str>,
        ok_message: Option<&str>,
    ) -> Self
    where
        U: ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut outcome = Self::new();
        outcome
            .set_ok_or_not_found_and_attach_from(lookup, producer, item_name_not_found, ok_message)
            .await;
        outcome
    }

    /// Fallible form of [`PayloadOutcome::ok_or_not_found_and_attach_from`].
    ///
    /// # Errors
    ///
    /// Returns the producer's error unchanged.
    pub async fn try_ok_or_not_found_and_attach_from<U, F, Fut, E>(
        lookup: Option<&U>,
        producer: Option<F>,
        item_name_not_found: Option<&str>,
        ok_message: Option<&str>,
    ) -> Result<Self, E>
    where
        U: ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut outcome = Self::new();
        outcome
            .try_set_ok_or_not_found_and_attach_from(
                lookup,
                producer,
                item_name_not_found,
                ok_message,
            )
            .await?;
        Ok(outcome)
    }

    /// Database outcome from a row count whose payload is fetched on
    /// success; see [`PayloadOutcome::set_ok_or_database_error_and_attach`].
    #[must_use]
    pub async fn ok_or_database_error_and_attach<F, Fut>(
        rows_changed: i64,
        producer: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut outcome = Self::new();
        outcome
            .set_ok_or_database_error_and_attach(
                rows_changed,
                producer,
                error_message,
                success_message,
            )
            .await;
        outcome
    }

    /// Fallible form of [`PayloadOutcome::ok_or_database_error_and_attach`].
    ///
    /// # Errors
    ///
    /// Returns the producer's error unchanged.
    pub async fn try_ok_or_database_error_and_attach<F, Fut, E>(
        rows_changed: i64,
        producer: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Result<Self, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut outcome = Self::new();
        outcome
            .try_set_ok_or_database_error_and_attach(
                rows_changed,
                producer,
                error_message,
                success_message,
            )
            .await?;
        Ok(outcome)
    }

    /// Database outcome from a transaction whose payload is fetched on
    /// success; see
    /// [`PayloadOutcome::set_ok_or_database_error_with_and_attach`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_report::PayloadOutcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let outcome = PayloadOutcome::ok_or_database_error_with_and_attach(
    ///     Some(|| async { 1_i64 }),
    ///     Some(|| async { String::from("row 17") }),
    ///     None,
    ///     Some("Row inserted"),
    /// )
    /// .await;
    /// assert_eq!(outcome.messages(), ["Row inserted"]);
    /// assert_eq!(outcome.returned().map(String::as_str), Some("row 17"));
    /// # }
    /// ```
    #[must_use]
    pub async fn ok_or_database_error_with_and_attach<TF, TFut, F, Fut>(
        transaction: Option<TF>,
        producer: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Self
    where
        TF: FnOnce() -> TFut,
        TFut: Future<Output = i64>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let mut outcome = Self::new();
        outcome
            .set_ok_or_database_error_with_and_attach(
                transaction,
                producer,
                error_message,
                success_message,
            )
            .await;
        outcome
    }

    /// Fallible form of
    /// [`PayloadOutcome::ok_or_database_error_with_and_attach`].
    ///
    /// # Errors
    ///
    /// Returns the transaction's or the producer's error unchanged.
    pub async fn try_ok_or_database_error_with_and_attach<TF, TFut, F, Fut, E>(
        transaction: Option<TF>,
        producer: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Result<Self, E>
    where
        TF: FnOnce() -> TFut,
        TFut: Future<Output = Result<i64, E>>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut outcome = Self::new();
        outcome
            .try_set_ok_or_database_error_with_and_attach(
                transaction,
                producer,
                error_message,
                success_message,
            )
            .await?;
        Ok(outcome)
    }
}
