//! # Form Encoding: `application/x-www-form-urlencoded`
//!
//! Translates answer text into the representation embedded in a URL-encoded
//! request body. The byte serialization is delegated to
//! `url::form_urlencoded`:
//!
//! - ASCII alphanumerics and `*`, `-`, `.`, `_` pass through unchanged.
//! - Space becomes `+`.
//! - Every other byte of the UTF-8 encoding becomes `%XX` (upper-case hex).
//!
//! Absent or empty text is returned as is. Encoding nothing is identity, not
//! an error.
//!
//! ## Character Encodings
//!
//! UTF-8 is the only byte encoding a form body is built with. Rust `str` is
//! always UTF-8, so [`encode`] cannot fail. [`encode_with_charset`] resolves
//! an explicit label first and reports an unknown label as a
//! [`ConfigurationError`].

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::ConfigurationError;
use crate::predicates::has_length;

/// Byte encodings a form body can be serialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Charset {
    /// UTF-8, the encoding mandated for form submission.
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
}

impl Charset {
    /// Resolve a charset from its label.
    ///
    /// Labels are matched case-insensitively after trimming ASCII whitespace.
    /// The accepted UTF-8 labels are those of the WHATWG Encoding Standard:
    /// `utf-8`, `utf8`, `unicode-1-1-utf-8`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnsupportedCharset`] for any other label.
    pub fn from_label(label: &str) -> Result<Self, ConfigurationError> {
        let normalized = label.trim_matches(|c: char| c.is_ascii_whitespace());
        if ["utf-8", "utf8", "unicode-1-1-utf-8"]
            .iter()
            .any(|known| normalized.eq_ignore_ascii_case(known))
        {
            Ok(Self::Utf8)
        } else {
            Err(ConfigurationError::UnsupportedCharset(label.to_string()))
        }
    }

    /// The canonical label for this charset.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
        }
    }

    fn form_serialize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let bytes = match self {
            Self::Utf8 => text.as_bytes(),
        };
        let encoded: String = form_urlencoded::byte_serialize(bytes).collect();
        if encoded == text {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(encoded)
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Charset {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Translate text into `application/x-www-form-urlencoded` using UTF-8.
///
/// Absent or empty input is returned unchanged. When nothing needs escaping
/// the input is returned borrowed.
///
/// ```
/// use formsub_core::encode;
///
/// assert_eq!(encode("a b&c").as_deref(), Some("a+b%26c"));
/// assert_eq!(encode("").as_deref(), Some(""));
/// assert_eq!(encode(None), None);
/// ```
pub fn encode<'a>(text: impl Into<Option<&'a str>>) -> Option<Cow<'a, str>> {
    let text = text.into();
    match text {
        Some(t) if has_length(t) => Some(Charset::Utf8.form_serialize(t)),
        _ => text.map(Cow::Borrowed),
    }
}

/// Translate text into `application/x-www-form-urlencoded` using the byte
/// encoding named by `label`.
///
/// Absent or empty input is returned unchanged without resolving the label.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnsupportedCharset`] if `label` does not
/// name a supported encoding.
pub fn encode_with_charset<'a>(
    text: impl Into<Option<&'a str>>,
    label: &str,
) -> Result<Option<Cow<'a, str>>, ConfigurationError> {
    let text = text.into();
    let Some(t) = text.filter(|t| has_length(*t)) else {
        return Ok(text.map(Cow::Borrowed));
    };

    let charset = Charset::from_label(label).map_err(|e| {
        tracing::error!(charset = label, "cannot encode form value: {e}");
        e
    })?;

    Ok(Some(charset.form_serialize(t)))
}
