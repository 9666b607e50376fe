//! # Message Composition
//!
//! Fills placeholders in a message template with positional parameters,
//! using printf-style specifiers:
//!
//! ```text
//! %[index$][flags][width][.precision]conversion
//! ```
//!
//! | Part | Meaning |
//! |------|---------|
//! | `index$` | 1-based argument index; does not advance the argument cursor |
//! | `<` | reuse the previously rendered argument |
//! | `-` | left-justify within `width` |
//! | `0` | zero-pad numbers within `width` |
//! | `width` | minimum width, right-justified by default, at most 65535 |
//! | `.precision` | handed to the argument's `Display` impl, at most 65535 |
//! | `s` `d` `c` `f` | render the argument's `Display` output |
//! | `b` | `false` if the argument displays as `false`, otherwise `true` |
//! | `S` `B` | as `s` and `b`, upper-cased |
//! | `%%` `%n` | literal `%`, line separator |
//!
//! Composition never fails. A specifier with an unknown conversion, bad
//! syntax, an out-of-range width or precision, or no matching argument is copied to the output verbatim, and
//! excess arguments are ignored.

use std::fmt::Display;

use crate::predicates::has_length;

/// Compose a message from `template` and positional `params`.
///
/// Absent or empty templates are returned unchanged and no substitution is
/// attempted.
///
/// ```
/// use formsub_core::message;
///
/// assert_eq!(message("%s-%d", &[&"a", &1]).as_deref(), Some("a-1"));
/// assert_eq!(message("", &[&1, &2]).as_deref(), Some(""));
/// assert_eq!(message(None, &[]), None);
/// ```
pub fn message<'a>(
    template: impl Into<Option<&'a str>>,
    params: &[&dyn Display],
) -> Option<String> {
    let template = template.into()?;
    if !has_length(template) {
        return Some(template.to_string());
    }
    Some(substitute(template, params))
}

fn substitute(template: &str, params: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = ArgCursor::default();
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match Specifier::parse(tail) {
            Some(spec) => {
                let source = &tail[..spec.len];
                match spec.render(params, &mut args) {
                    Some(rendered) => out.push_str(&rendered),
                    None => out.push_str(source),
                }
                rest = &tail[spec.len..];
            }
            None => {
                out.push('%');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Tracks the ordinary argument position and the last argument rendered.
#[derive(Debug, Default)]
struct ArgCursor {
    next: usize,
    last: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgIndex {
    Next,
    Explicit(usize),
    Previous,
}

/// One parsed `%...` specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Specifier {
    index: ArgIndex,
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
    /// Length in bytes of the specifier source, `%` included.
    len: usize,
}

impl Specifier {
    /// Parse the specifier at the start of `src`, which begins with `%`.
    fn parse(src: &str) -> Option<Self> {
        let bytes = src.as_bytes();
        let mut i = 1;
        let mut index = ArgIndex::Next;
        let mut left = false;
        let mut zero = false;

        let end = scan_digits(bytes, i);
        if end > i && bytes.get(end) == Some(&b'$') {
            let n: usize = src[i..end].parse().ok()?;
            if n == 0 {
                return None;
            }
            index = ArgIndex::Explicit(n);
            i = end + 1;
        }

        while let Some(&flag) = bytes.get(i) {
            match flag {
                b'-' => left = true,
                b'0' => zero = true,
                b'<' => index = ArgIndex::Previous,
                _ => break,
            }
            i += 1;
        }

        let end = scan_digits(bytes, i);
        let width = if end > i {
            let w: u16 = src[i..end].parse().ok()?;
            i = end;
            Some(usize::from(w))
        } else {
            None
        };

        let precision = if bytes.get(i) == Some(&b'.') {
            let end = scan_digits(bytes, i + 1);
            if end == i + 1 {
                return None;
            }
            let p: u16 = src[i + 1..end].parse().ok()?;
            i = end;
            Some(usize::from(p))
        } else {
            None
        };

        let conversion = src[i..].chars().next()?;
        if !matches!(conversion, 's' | 'S' | 'd' | 'c' | 'b' | 'B' | 'f' | '%' | 'n') {
            return None;
        }

        Some(Self {
            index,
            left,
            zero,
            width,
            precision,
            conversion,
            len: i + conversion.len_utf8(),
        })
    }

    /// Render against `params`, or `None` when no argument matches.
    fn render(&self, params: &[&dyn Display], args: &mut ArgCursor) -> Option<String> {
        match self.conversion {
            '%' => return Some("%".to_string()),
            'n' => return Some("\n".to_string()),
            _ => {}
        }

        let position = match self.index {
            ArgIndex::Next => {
                let p = args.next;
                args.next += 1;
                p
            }
            ArgIndex::Explicit(n) => n - 1,
            ArgIndex::Previous => args.last?,
        };
        let arg = params.get(position)?;
        args.last = Some(position);

        let arg: &dyn Display = match self.conversion {
            'b' | 'B' if arg.to_string() == "false" => &"false",
            'b' | 'B' => &"true",
            _ => *arg,
        };
        let rendered = self.pad(arg);
        if self.conversion.is_ascii_uppercase() {
            Some(rendered.to_uppercase())
        } else {
            Some(rendered)
        }
    }

    fn pad(&self, arg: &dyn Display) -> String {
        let width = self.width.unwrap_or(0);
        match (self.precision, self.left, self.zero) {
            (Some(p), true, _) => format!("{arg:<width$.p$}"),
            (Some(p), false, true) => format!("{arg:>0width$.p$}"),
            (Some(p), false, false) => format!("{arg:>width$.p$}"),
            (None, true, _) => format!("{arg:<width$}"),
            (None, false, true) => format!("{arg:>0width$}"),
            (None, false, false) => format!("{arg:>width$}"),
        }
    }
}

fn scan_digits(bytes: &[u8], start: usize) -> usize {
    bytes[start.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
        + start
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Composition never panics for arbitrary templates and arguments.
        #[test]
        fn message_never_panics(template in ".{0,64}", a in ".{0,8}", b in any::<i64>()) {
            let _ = message(template.as_str(), &[&a, &b]);
        }

        /// Any width or precision is either rendered or copied verbatim.
        #[test]
        fn width_and_precision_never_panic(width in any::<usize>(), precision in any::<usize>()) {
            let template = format!("[%{width}.{precision}s]");
            let composed = message(template.as_str(), &[&"a"]).unwrap();
            if width > usize::from(u16::MAX) || precision > usize::from(u16::MAX) {
                prop_assert_eq!(composed, template);
            } else {
                prop_assert_eq!(composed.chars().count(), width.max(precision.min(1)) + 2);
            }
        }

        /// Templates without `%` are returned unchanged.
        #[test]
        fn plain_template_is_identity(template in "[^%]{0,64}", a in ".{0,8}") {
            let composed = message(template.as_str(), &[&a]);
            prop_assert_eq!(composed.as_deref(), Some(template.as_str()));
        }

        /// Composition is deterministic.
        #[test]
        fn message_is_deterministic(template in ".{0,32}", a in any::<u32>()) {
            prop_assert_eq!(
                message(template.as_str(), &[&a]),
                message(template.as_str(), &[&a])
            );
        }
    }
}
