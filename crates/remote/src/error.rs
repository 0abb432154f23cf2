//! Error taxonomy for the remote boundary.

/// Fallback shown when the remote gives no usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "The tracker service could not complete the request";

/// Errors from the remote store.
///
/// `Transport` means no usable response was received; `Rejected` means
/// the remote answered and said no. The distinction matters upstream:
/// both surface as a notification, but only `NotFound` turns into the
/// terminal not-found page state.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The HTTP request itself failed (connection, DNS, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote responded with a failure, optionally explaining why.
    #[error("Remote rejected the request ({status}): {}", message.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, message: Option<String> },

    /// The requested entity does not exist remotely.
    #[error("Not found on the remote store")]
    NotFound,
}

impl RemoteError {
    /// The message to show the user: the remote-provided one when
    /// present, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
