//! Error type produced when a wrapper gains context.
//!
//! [`Either::context`](super::Either::context) and
//! [`Maybe::context`](super::Maybe::context) build an [`Error`] carrying a
//! free-text message and, for a right-holding `Either`, the previous right
//! payload as its cause. [`Fallible::catching`](super::Fallible::catching)
//! builds one from a captured panic.

use std::any::Any;
use std::fmt;

/// A boxed, thread-safe error used as the cause of a context [`Error`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error carrying a message and, optionally, the value it was built from.
///
/// # Examples
///
/// ```rust
/// use std::error::Error as _;
/// use uogtad::control::Error;
///
/// let error = Error::with_cause("loading settings", "file not found");
/// assert_eq!(error.to_string(), "loading settings");
/// assert_eq!(error.source().map(ToString::to_string), Some("file not found".to_string()));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A message attached by `context()`, wrapping the prior right value if any.
    #[error("{message}")]
    Context {
        /// The context message.
        message: String,
        /// The value that was in the right channel before context was added.
        #[source]
        cause: Option<BoxError>,
    },
    /// A panic captured while running a `Fallible` computation.
    #[error("computation panicked: {message}")]
    Panicked {
        /// The panic message, or a placeholder for non-string payloads.
        message: String,
    },
}

impl Error {
    /// Creates a context error without a cause.
    pub fn context(message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a context error wrapping `cause`.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::Context {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Creates a context error wrapping a payload that is not an error.
    ///
    /// The payload's `Debug` rendering becomes the `Display` of the cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::Error;
    ///
    /// #[derive(Debug)]
    /// struct Status(u16);
    ///
    /// let error = Error::with_debug_cause("fetching index", Status(404));
    /// assert_eq!(error.cause().map(ToString::to_string), Some("Status(404)".to_string()));
    /// ```
    pub fn with_debug_cause<P>(message: impl Into<String>, payload: P) -> Self
    where
        P: fmt::Debug + Send + Sync + 'static,
    {
        Self::Context {
            message: message.into(),
            cause: Some(Box::new(DebugCause(payload))),
        }
    }

    /// Creates an error from a panic payload as returned by
    /// [`std::panic::catch_unwind`].
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Panicked { message }
    }

    /// Returns the message this error was built from.
    pub fn message(&self) -> &str {
        match self {
            Self::Context { message, .. } | Self::Panicked { message } => message,
        }
    }

    /// Returns the wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Context { cause, .. } => cause.as_deref(),
            Self::Panicked { .. } => None,
        }
    }

    /// Returns `true` if this error was captured from a panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }
}

/// Presents a plain value as an error through its `Debug` output.
#[derive(Debug, thiserror::Error)]
#[error("{0:?}")]
struct DebugCause<P: fmt::Debug>(P);
