//! Database-transaction outcomes.
//!
//! A transaction succeeds when it changed at least one row. Zero or negative
//! row counts, and absent transactions, become failures carrying
//! `"A database transaction error occurred"` unless the caller supplies a
//! non-blank error message.

use std::future::Future;

use super::Outcome;
use crate::messages::{self, DEFAULT_DATABASE_ERROR_MESSAGE};

impl Outcome {
    /// Succeeds when `rows_changed >= 1`, otherwise fails.
    pub fn set_ok_or_database_error(
        &mut self,
        rows_changed: i64,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) {
        tracing::debug!(rows_changed, "interpreting database row count");
        if rows_changed >= 1 {
            self.set_ok(success_message);
        } else {
            self.set_database_error(error_message);
        }
    }

    /// Runs `transaction` and interprets its row count like
    /// [`Outcome::set_ok_or_database_error`].
    ///
    /// An absent transaction is a failure and nothing is awaited. The
    /// transaction is invoked at most once.
    pub async fn set_ok_or_database_error_with<F, Fut>(
        &mut self,
        transaction: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) where
        F: FnOnce() -> Fut,
        Fut: Future<Output = i64>,
    {
        let Some(run_transaction) = transaction else {
            tracing::debug!("no database transaction supplied");
            self.set_database_error(error_message);
            return;
        };
        let rows_changed = run_transaction().await;
        self.set_ok_or_database_error(rows_changed, error_message, success_message);
    }

    /// Fallible form of [`Outcome::set_ok_or_database_error_with`].
    ///
    /// # Errors
    ///
    /// Returns the transaction's error unchanged; the outcome is then left as
    /// it was before the call.
    pub async fn try_set_ok_or_database_error_with<F, Fut, E>(
        &mut self,
        transaction: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<i64, E>>,
    {
        let Some(run_transaction) = transaction else {
            tracing::debug!("no database transaction supplied");
            self.set_database_error(error_message);
            return Ok(());
        };
        let rows_changed = run_transaction().await?;
        self.set_ok_or_database_error(rows_changed, error_message, success_message);
        Ok(())
    }

    /// Database outcome from a row count; see
    /// [`Outcome::set_ok_or_database_error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_report::Outcome;
    ///
    /// assert!(Outcome::ok_or_database_error(3, None, None).is_success());
    ///
    /// let none_changed = Outcome::ok_or_database_error(0, None, None);
    /// assert_eq!(none_changed.messages(), ["A database transaction error occurred"]);
    /// ```
    #[must_use]
    pub fn ok_or_database_error(
        rows_changed: i64,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Self {
        let mut outcome = Self::new();
        outcome.set_ok_or_database_error(rows_changed, error_message, success_message);
        outcome
    }

    /// Database outcome from a transaction; see
    /// [`Outcome::set_ok_or_database_error_with`].
    #[must_use]
    pub async fn ok_or_database_error_with<F, Fut>(
        transaction: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = i64>,
    {
        let mut outcome = Self::new();
        outcome
            .set_ok_or_database_error_with(transaction, error_message, success_message)
            .await;
        outcome
    }

    /// Database outcome from a fallible transaction; see
    /// [`Outcome::try_set_ok_or_database_error_with`].
    ///
    /// # Errors
    ///
    /// Returns the transaction's error unchanged.
    pub async fn try_ok_or_database_error_with<F, Fut, E>(
        transaction: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Result<Self, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<i64, E>>,
    {
        let mut outcome = Self::new();
        outcome
            .try_set_ok_or_database_error_with(transaction, error_message, success_message)
            .await?;
        Ok(outcome)
    }

    fn set_database_error(&mut self, error_message: Option<&str>) {
        self.set_error(Some(messages::or_default(
            error_message,
            DEFAULT_DATABASE_ERROR_MESSAGE,
        )));
    }
}
