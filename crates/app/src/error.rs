//! Application-level error type for the client engine.

use tracktor_core::CoreError;
use tracktor_remote::RemoteError;

/// Error type returned by the engine and controllers.
///
/// The taxonomy upstream code dispatches on:
/// - `Validation` -- blank required fields, caught before any network
///   call and never surfaced to the remote;
/// - `Remote(NotFound)` -- the entity is gone remotely; rendered as the
///   terminal not-found state, no retry offered;
/// - `Remote(Transport | Rejected)` -- surfaced as a single user-visible
///   notice; the store is left exactly as it was;
/// - `Core` -- contract violations and domain failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required form fields that were absent or blank.
    #[error("Validation failed: missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// A domain-level error from `tracktor_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A remote boundary error.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Convenience alias for engine return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The message to show the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote(err) => err.user_message(),
            other => other.to_string(),
        }
    }

    /// Whether this failure should render as the terminal not-found
    /// state rather than a notice.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote(RemoteError::NotFound))
    }
}
