//! Error kinds surfaced by the net layer.
//!
//! ERROR HANDLING
//! ==============
//! Resource clients surface these unchanged and never retry; pages catch them
//! at the action boundary and render a message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed API interaction, classified by what the caller can do about it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A usable session could not be established.
    #[error("authentication failed: {0}")]
    Auth(String),
    /// A local precondition failed before any network call was made.
    #[error("invalid input: {0}")]
    Input(String),
    /// Transport failure or an unexpected backend status.
    #[error("request failed: {0}")]
    Network(String),
    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// Map a non-2xx HTTP status to an error kind. `context` names the
    /// operation for the rendered message.
    pub fn from_status(status: u16, context: &str) -> Self {
        match status {
            404 => Self::NotFound(context.to_owned()),
            401 | 403 => Self::Auth(format!("{context}: status {status}")),
            _ => Self::Network(format!("{context}: status {status}")),
        }
    }
}
