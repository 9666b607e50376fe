//! # formsub-core: Preconditions for Form Submission
//!
//! Small, stateless helpers used by form submission clients before answers
//! are written into a URL-encoded request body:
//!
//! - [`encode`]: `application/x-www-form-urlencoded` translation (UTF-8).
//! - [`has_length`], [`is_empty`], [`is_empty_text`]: text predicates.
//! - [`message()`]: printf-style placeholder substitution.
//! - [`not_null`], [`not_empty`], [`is_true`], [`fail`]: fail-fast
//!   assertions returning a single [`ValidationError`] kind.
//!
//! ## Crate Policy
//!
//! - Free functions only. No global state, no initialization, nothing is
//!   retained between calls, so every function is safe to call from any
//!   thread.
//! - Absence is `None`. Wherever text may be absent, a plain `&str` is
//!   accepted too.
//! - Assertion failures are distinguished by message text, never by type.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Failures are logged through `tracing` at the point they are produced.
//!   Installing a subscriber is the embedding application's job.

pub mod assertions;
pub mod collection;
pub mod encoding;
pub mod error;
pub mod message;
pub mod predicates;

// Re-export the full surface for flat imports.
pub use assertions::{fail, is_true, not_empty, not_null};
pub use collection::CollectionLike;
pub use encoding::{encode, encode_with_charset, Charset};
pub use error::{ConfigurationError, FormError, ValidationError};
pub use message::message;
pub use predicates::{has_length, is_empty, is_empty_text};
