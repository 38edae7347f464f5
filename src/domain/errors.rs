// src/domain/errors.rs
use std::fmt;

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Fallback message shown when no structured message exists in the chain.
pub const INTERNAL_MESSAGE: &str =
    "An internal error has occurred. Please contact technical support.";

/// Machine-readable error classification for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Validation failed on user input or data constraints.
    Invalid,
    /// Action cannot be performed due to business rule conflicts.
    Conflict,
    /// Action not allowed due to permission restrictions.
    Forbidden,
    /// Requested entity does not exist in the system.
    NotFound,
    /// Internal failure requiring technical investigation.
    Internal,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Conflict => "conflict",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured domain error carrying operation context and a cause chain.
///
/// `code()` and `user_message()` resolve by walking the chain, so wrapping
/// an error for operation context never hides the classification recorded
/// at the point of failure.
#[derive(Debug, Error)]
pub struct DomainError {
    code: Option<ErrorCode>,
    message: Option<String>,
    operation: &'static str,
    #[source]
    cause: Option<Box<DomainError>>,
}

impl DomainError {
    #[must_use]
    pub fn invalid(operation: &'static str, message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::Invalid, operation, message)
    }

    #[must_use]
    pub fn conflict(operation: &'static str, message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::Conflict, operation, message)
    }

    #[must_use]
    pub fn forbidden(operation: &'static str, message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::Forbidden, operation, message)
    }

    #[must_use]
    pub fn not_found(operation: &'static str, message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::NotFound, operation, message)
    }

    #[must_use]
    pub fn internal(operation: &'static str, message: impl Into<String>) -> Self {
        Self::with_code(ErrorCode::Internal, operation, message)
    }

    /// Adds operation context without overriding code or message.
    #[must_use]
    pub fn wrap(operation: &'static str, cause: Self) -> Self {
        Self {
            code: None,
            message: None,
            operation,
            cause: Some(Box::new(cause)),
        }
    }

    fn with_code(code: ErrorCode, operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
            operation,
            cause: None,
        }
    }

    /// The most specific code in the chain, `Internal` when none is set.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        if let Some(code) = self.code {
            return code;
        }
        self.cause
            .as_ref()
            .map_or(ErrorCode::Internal, |cause| cause.code())
    }

    /// The most specific human-readable message in the chain.
    #[must_use]
    pub fn user_message(&self) -> &str {
        if let Some(message) = self.message.as_deref() {
            return message;
        }
        self.cause
            .as_ref()
            .map_or(INTERNAL_MESSAGE, |cause| cause.user_message())
    }

    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.operation.is_empty() {
            write!(f, "{}: ", self.operation)?;
        }

        if let Some(cause) = &self.cause {
            write!(f, "{cause}")
        } else {
            if let Some(code) = self.code {
                write!(f, "<{code}> ")?;
            }
            f.write_str(self.message.as_deref().unwrap_or_default())
        }
    }
}
