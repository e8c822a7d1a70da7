//! Lifecycle states shared by [`crate::Outcome`] and [`crate::PayloadOutcome`].

/// Where an outcome sits in its lifecycle.
///
/// Every outcome starts [`Uninitialized`](Self::Uninitialized). Each mutator
/// moves it straight to [`Success`](Self::Success) or
/// [`Failure`](Self::Failure); nothing moves it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutcomeState {
    /// No mutator has run yet.
    #[default]
    Uninitialized,
    /// The action is considered successful.
    Success,
    /// The action failed, found nothing, or changed no rows.
    Failure,
}

impl OutcomeState {
    /// Returns `true` only for [`OutcomeState::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Maps a success flag onto a settled state.
    #[must_use]
    pub(crate) const fn settled(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}
