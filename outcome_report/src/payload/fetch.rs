//! Producer-driven attachment: fetch the payload only once the outcome has
//! settled as a success.

use std::future::Future;

use super::PayloadOutcome;

impl<T> PayloadOutcome<T> {
    /// Applies [`crate::Outcome::set_ok_or_not_found`] to `lookup`, then, only
    /// when that succeeded, awaits `producer` and stores its result.
    ///
    /// Unlike [`PayloadOutcome::set_ok_or_not_found_and_attach`], `lookup` is
    /// never stored: on failure, or when no producer is given, the payload is
    /// left as it was.
    pub async fn set_ok_or_not_found_and_attach_from<U, F, Fut>(
        &mut self,
        lookup: Option<&U>,
        producer: Option<F>,
        item_name_not_found: Option<&str>,
        ok_message: Option<&str>,
    ) where
        U: ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.outcome
            .set_ok_or_not_found(lookup, item_name_not_found, ok_message);
        self.attach_on_success(producer).await;
    }

    /// Fallible form of
    /// [`PayloadOutcome::set_ok_or_not_found_and_attach_from`].
    ///
    /// # Errors
    ///
    /// Returns the producer's error unchanged. State and messages are already
    /// set at that point; the payload is left as it was.
    pub async fn try_set_ok_or_not_found_and_attach_from<U, F, Fut, E>(
        &mut self,
        lookup: Option<&U>,
        producer: Option<F>,
        item_name_not_found: Option<&str>,
        ok_message: Option<&str>,
    ) -> Result<(), E>
    where
        U: ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.outcome
            .set_ok_or_not_found(lookup, item_name_not_found, ok_message);
        self.try_attach_on_success(producer).await
    }

    /// Applies [`crate::Outcome::set_ok_or_database_error`] to `rows_changed`,
    /// then, only on success, awaits `producer` and stores its result.
    pub async fn set_ok_or_database_error_and_attach<F, Fut>(
        &mut self,
        rows_changed: i64,
        producer: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.outcome
            .set_ok_or_database_error(rows_changed, error_message, success_message);
        self.attach_on_success(producer).await;
    }

    /// Fallible form of [`PayloadOutcome::set_ok_or_database_error_and_attach`].
    ///
    /// # Errors
    ///
    /// Returns the producer's error unchanged; the payload is left as it was.
    pub async fn try_set_ok_or_database_error_and_attach<F, Fut, E>(
        &mut self,
        rows_changed: i64,
        producer: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.outcome
            .set_ok_or_database_error(rows_changed, error_message, success_message);
        self.try_attach_on_success(producer).await
    }

    /// Runs `transaction` as in
    /// [`crate::Outcome::set_ok_or_database_error_with`], then, only on
    /// success, awaits `producer` and stores its result.
    ///
    /// The transaction always completes before the producer starts.
    pub async fn set_ok_or_database_error_with_and_attach<TF, TFut, F, Fut>(
        &mut self,
        transaction: Option<TF>,
        producer: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) where
        TF: FnOnce() -> TFut,
        TFut: Future<Output = i64>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.outcome
            .set_ok_or_database_error_with(transaction, error_message, success_message)
            .await;
        self.attach_on_success(producer).await;
    }

    /// Fallible form of
    /// [`PayloadOutcome::set_ok_or_database_error_with_and_attach`].
    ///
    /// # Errors
    ///
    /// Returns the transaction's error unchanged, leaving the outcome as it
    /// was, or the producer's error unchanged, leaving the payload as it was.
    /// The producer is not invoked when the transaction fails.
    pub async fn try_set_ok_or_database_error_with_and_attach<TF, TFut, F, Fut, E>(
        &mut self,
        transaction: Option<TF>,
        producer: Option<F>,
        error_message: Option<&str>,
        success_message: Option<&str>,
    ) -> Result<(), E>
    where
        TF: FnOnce() -> TFut,
        TFut: Future<Output = Result<i64, E>>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.outcome
            .try_set_ok_or_database_error_with(transaction, error_message, success_message)
            .await?;
        self.try_attach_on_success(producer).await
    }

    async fn attach_on_success<F, Fut>(&mut self, producer: Option<F>)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(fetch) = self.producer_to_run(producer) {
            self.returned = Some(fetch().await);
        }
    }

    async fn try_attach_on_success<F, Fut, E>(&mut self, producer: Option<F>) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(fetch) = self.producer_to_run(producer) {
            self.returned = Some(fetch().await?);
        }
        Ok(())
    }

    fn producer_to_run<F>(&self, producer: Option<F>) -> Option<F> {
        if !self.outcome.is_success() {
            tracing::debug!(state = ?self.outcome.state(), "payload producer skipped");
            return None;
        }
        if producer.is_none() {
            tracing::debug!("no payload producer supplied");
        }
        producer
    }
}
