//! # Assertions
//!
//! Fail-fast invariant checks for arguments about to be encoded into a
//! request body. Every failure is a [`ValidationError`] carrying the message
//! composed from the caller's template and parameters (see
//! [`message`](crate::message::message)).
//!
//! [`is_true`] is the primitive. [`not_null`] and [`not_empty`] are boolean
//! conditions handed to it, and [`fail`] is what it calls when the condition
//! does not hold.
//!
//! ```
//! use formsub_core::{not_empty, not_null, ValidationError};
//!
//! fn submit(form_id: Option<&str>, answers: &[(&str, &str)]) -> Result<(), ValidationError> {
//!     not_null(form_id, "form id is required", &[])?;
//!     not_empty(Some(answers), "form %s has no answers", &[&form_id.unwrap_or_default()])?;
//!     Ok(())
//! }
//!
//! let err = submit(Some("f1"), &[]).unwrap_err();
//! assert_eq!(err.message(), Some("form f1 has no answers"));
//! ```

use std::fmt::Display;

use crate::collection::CollectionLike;
use crate::error::ValidationError;
use crate::message::message;

/// Assert that `value` is present.
///
/// # Errors
///
/// Returns a [`ValidationError`] with the composed message if `value` is
/// `None`.
pub fn not_null<'a, T: ?Sized>(
    value: Option<&T>,
    message: impl Into<Option<&'a str>>,
    params: &[&dyn Display],
) -> Result<(), ValidationError> {
    is_true(value.is_some(), message, params)
}

/// Assert that `collection` is present and holds at least one element.
///
/// Works the same for sequences, sets and maps. Absence is checked first,
/// with the same message.
///
/// # Errors
///
/// Returns a [`ValidationError`] with the composed message if `collection`
/// is `None` or empty.
pub fn not_empty<'a, C: CollectionLike + ?Sized>(
    collection: Option<&C>,
    message: impl Into<Option<&'a str>>,
    params: &[&dyn Display],
) -> Result<(), ValidationError> {
    let message = message.into();
    not_null(collection, message, params)?;
    is_true(collection.is_some_and(|c| !c.is_empty()), message, params)
}

/// Assert that `flag` is `true`.
///
/// # Errors
///
/// Returns a [`ValidationError`] with the composed message if `flag` is
/// `false`.
pub fn is_true<'a>(
    flag: bool,
    message: impl Into<Option<&'a str>>,
    params: &[&dyn Display],
) -> Result<(), ValidationError> {
    if !flag {
        return fail(message, params);
    }
    Ok(())
}

/// Fail unconditionally with the message composed from `template` and
/// `params`.
///
/// Generic over the success type so it can stand in for any result:
/// `return fail("unsupported question type %s", &[&kind]);`
///
/// # Errors
///
/// Always returns a [`ValidationError`].
pub fn fail<'a, T>(
    template: impl Into<Option<&'a str>>,
    params: &[&dyn Display],
) -> Result<T, ValidationError> {
    let composed = message(template, params);
    tracing::debug!(reason = composed.as_deref(), "argument validation failed");
    Err(ValidationError::new(composed))
}
