//! # Emptiness and Length Predicates
//!
//! [`is_empty`] is deliberately narrow: only absence and the empty string
//! count as empty. Empty collections, zero, and every other value do not.
//! Collection emptiness is checked separately through
//! [`CollectionLike`](crate::collection::CollectionLike).

use std::any::Any;
use std::borrow::Cow;

/// Returns `true` if `text` is present and has at least one character.
pub fn has_length<'a>(text: impl Into<Option<&'a str>>) -> bool {
    text.into().is_some_and(|t| !t.is_empty())
}

/// Returns `true` if `value` is absent or is a string equal to `""`.
///
/// Recognized string types are `String`, `&'static str`, `Box<str>` and
/// `Cow<'static, str>`. The `Any` bound requires `'static` values, so a
/// borrowed `&str` cannot be passed here; use [`is_empty_text`] for it.
///
/// ```
/// use formsub_core::is_empty;
///
/// assert!(is_empty::<String>(None));
/// assert!(is_empty(Some(&"")));
/// assert!(!is_empty(Some(&"x")));
/// assert!(!is_empty(Some(&Vec::<u8>::new())));
/// ```
pub fn is_empty<T: Any>(value: Option<&T>) -> bool {
    let Some(value) = value else {
        return true;
    };
    let value: &dyn Any = value;
    as_text(value).is_some_and(str::is_empty)
}

/// Returns `true` if `text` is absent or `""`.
///
/// The borrowed-text form of [`is_empty`], and the complement of
/// [`has_length`].
///
/// ```
/// use formsub_core::is_empty_text;
///
/// let answer = String::from("yes");
/// assert!(!is_empty_text(answer.as_str()));
/// assert!(is_empty_text(&answer[..0]));
/// assert!(is_empty_text(None));
/// ```
pub fn is_empty_text<'a>(text: impl Into<Option<&'a str>>) -> bool {
    !has_length(text)
}

fn as_text(value: &dyn Any) -> Option<&str> {
    value
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| value.downcast_ref::<&'static str>().copied())
        .or_else(|| value.downcast_ref::<Box<str>>().map(|s| &**s))
        .or_else(|| value.downcast_ref::<Cow<'static, str>>().map(|s| &**s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_has_length() {
        assert!(!has_length(None));
        assert!(!has_length(""));
        assert!(has_length("x"));
        assert!(has_length(" "));
    }

    #[test]
    fn test_has_length_owned_string() {
        let owned = String::from("abc");
        assert!(has_length(owned.as_str()));
        assert!(has_length(Some(owned.as_str())));
    }

    #[test]
    fn test_is_empty_absent() {
        assert!(is_empty::<String>(None));
        assert!(is_empty::<i32>(None));
    }

    #[test]
    fn test_is_empty_strings() {
        assert!(is_empty(Some(&"")));
        assert!(is_empty(Some(&String::new())));
        assert!(is_empty(Some(&Box::<str>::from(""))));
        assert!(is_empty(Some(&Cow::<'static, str>::Borrowed(""))));
        assert!(!is_empty(Some(&"x")));
        assert!(!is_empty(Some(&String::from(" "))));
    }

    #[test]
    fn test_is_empty_ignores_empty_collections() {
        assert!(!is_empty(Some(&Vec::<String>::new())));
        assert!(!is_empty(Some(&HashMap::<String, String>::new())));
    }

    #[test]
    fn test_is_empty_text_accepts_borrowed_str() {
        let owned = String::from("entry.1=");
        let (key, value) = owned.split_at(7);
        assert!(!is_empty_text(key));
        assert!(is_empty_text(&value[1..]));
        assert!(is_empty_text(None));
        assert_eq!(is_empty_text(key), is_empty(Some(&key.to_string())));
    }

    #[test]
    fn test_is_empty_ignores_falsy_values() {
        assert!(!is_empty(Some(&0)));
        assert!(!is_empty(Some(&false)));
        assert!(!is_empty(Some(&'\0')));
    }
}
