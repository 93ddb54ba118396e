//! The error policy contract and the default error type.

use serde::{Deserialize, Serialize};

/// Capabilities an error type needs to be stored in an [`Outcome`](crate::Outcome).
///
/// Any type that can be built from a message, cloned, moved, and asked for a
/// message qualifies. Richer errors (codes, causes) implement this trait and
/// keep their extra data alongside the message.
///
/// # Examples
///
/// ```
/// use fallibl::{ErrorPolicy, Outcome, make_error};
///
/// #[derive(Debug, Clone)]
/// struct Coded {
///     code: u16,
///     message: String,
/// }
///
/// impl ErrorPolicy for Coded {
///     fn from_message(message: String) -> Self {
///         Coded { code: 500, message }
///     }
///
///     fn message(&self) -> &str {
///         &self.message
///     }
/// }
///
/// let result: Outcome<u8, Coded> = make_error("disk full");
/// assert_eq!(result.error().code, 500);
/// assert_eq!(result.error().message(), "disk full");
/// ```
pub trait ErrorPolicy: Clone {
    /// Builds an error from a human-readable message.
    fn from_message(message: String) -> Self;

    /// Returns the human-readable message.
    fn message(&self) -> &str;
}

/// Default error policy: an owned message and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct MessageError {
    message: String,
}

impl MessageError {
    /// Creates an error carrying `message`.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl ErrorPolicy for MessageError {
    fn from_message(message: String) -> Self {
        Self { message }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for MessageError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for MessageError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
