//! A ready-made exception type for producers that do not need their own.
//!
//! Drivers are generic over the exception type and never wrap or convert it;
//! [`Exception`] is only a convenient default for injected and raised errors.

use thiserror::Error;

/// The broad category of an [`Exception`], for matching in handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    Value,
    Type,
    Runtime,
    Custom,
}

/// An exception raised by, or injected into, a producer.
///
/// ```rust
/// use yield_from::{Exception, ExceptionKind};
///
/// let e = Exception::value("negative input");
/// assert_eq!(e.kind(), ExceptionKind::Value);
/// assert_eq!(e.to_string(), "value error: negative input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Exception {
    #[error("value error: {0}")]
    Value(String),

    #[error("type error: {0}")]
    Type(String),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("{kind}: {message}")]
    Custom { kind: String, message: String },
}

impl Exception {
    pub fn value(message: impl Into<String>) -> Self {
        Exception::Value(message.into())
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Exception::Type(message.into())
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Exception::Runtime(message.into())
    }

    pub fn custom(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Exception::Custom {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ExceptionKind {
        match self {
            Exception::Value(_) => ExceptionKind::Value,
            Exception::Type(_) => ExceptionKind::Type,
            Exception::Runtime(_) => ExceptionKind::Runtime,
            Exception::Custom { .. } => ExceptionKind::Custom,
        }
    }

    /// Returns `true` if this exception is of `kind`.
    pub fn is(&self, kind: ExceptionKind) -> bool {
        self.kind() == kind
    }

    pub fn message(&self) -> &str {
        match self {
            Exception::Value(m) | Exception::Type(m) | Exception::Runtime(m) => m,
            Exception::Custom { message, .. } => message,
        }
    }
}
