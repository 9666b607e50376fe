//! # Error Types
//!
//! Two kinds of failure exist, both built with `thiserror`:
//!
//! - [`ValidationError`]: a caller-stated invariant does not hold. Every
//!   assertion produces this one type; callers tell failures apart by the
//!   composed message, never by variant.
//! - [`ConfigurationError`]: the runtime cannot provide the requested byte
//!   encoding. This is an environment defect, not a data problem.
//!
//! [`FormError`] joins both for callers that mix encoding and assertions
//! behind a single `?`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendered when a validation failure carries no message.
const DEFAULT_VALIDATION_MESSAGE: &str = "validation failed";

/// Top-level error type for form submission helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// An argument failed validation.
    #[error("invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// The requested character encoding is not available.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl FormError {
    /// Returns `true` if this is a caller-recoverable validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// An argument did not satisfy an asserted invariant.
///
/// Carries the message composed from the caller's template and parameters,
/// or `None` when the caller supplied no template.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", .message.as_deref().unwrap_or(DEFAULT_VALIDATION_MESSAGE))]
pub struct ValidationError {
    message: Option<String>,
}

impl ValidationError {
    /// Create a validation failure from an already composed message.
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }

    /// The composed message, if one was supplied.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The runtime cannot encode text the way a request body requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No byte encoding is known under the requested label.
    #[error("problem constructing form body: unsupported character encoding {0:?}")]
    UnsupportedCharset(String),
}
