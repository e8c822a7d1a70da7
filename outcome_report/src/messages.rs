//! Default messages applied when callers omit or blank their own text.
//!
//! A message is *blank* when it is absent, empty, or whitespace-only. Blank
//! single messages are replaced by the default for the operation performed;
//! message lists only fall back to the default when they are empty, and their
//! entries are otherwise kept verbatim.

/// Message used when a success outcome is set without a message.
pub const DEFAULT_OK_MESSAGE: &str = "Operation Succeeded";

/// Message used when a failure outcome is set without a message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Operation did not complete successfully";

/// Message carried by a freshly constructed outcome.
pub const DEFAULT_NO_ACTION_MESSAGE: &str = "No Action taken";

/// Message stored in place of an error's own text when it is redacted.
pub const DEFAULT_EXCEPTION_MESSAGE: &str = "An exception occurred";

/// Message used when a database transaction changes no rows.
pub const DEFAULT_DATABASE_ERROR_MESSAGE: &str = "A database transaction error occurred";

/// Item name used by not-found outcomes when the caller names nothing.
pub const DEFAULT_ITEM_NAME: &str = "Object Requested";

/// Suffix appended to the item name in not-found outcomes.
pub const NOT_FOUND_SUFFIX: &str = " Not Found";

/// Returns `true` when `message` is absent, empty, or whitespace-only.
#[must_use]
pub fn is_blank(message: Option<&str>) -> bool {
    message.is_none_or(|text| text.trim().is_empty())
}

/// Picks `message` unless it is blank, otherwise `default`.
pub(crate) fn or_default<'a>(message: Option<&'a str>, default: &'a str) -> &'a str {
    match message {
        Some(text) if !is_blank(Some(text)) => text,
        _ => default,
    }
}

/// Collects `messages`, substituting a single `default` when none are given.
pub(crate) fn list_or_default<I>(messages: I, default: &str) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let collected: Vec<String> = messages.into_iter().map(Into::into).collect();
    if collected.is_empty() {
        vec![default.to_owned()]
    } else {
        collected
    }
}

/// Builds the `"{item} Not Found"` message.
pub(crate) fn not_found(item_name: Option<&str>) -> String {
    let item = or_default(item_name, DEFAULT_ITEM_NAME);
    format!("{item}{NOT_FOUND_SUFFIX}")
}
