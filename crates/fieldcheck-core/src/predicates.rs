//! Shape predicates for raw form input.
//!
//! Every predicate except [`is_empty`] returns `false` for the empty string,
//! so a blank field never counts as a number, an email or a bounded-length
//! value. Lengths are counted in `char`s.
use std::sync::LazyLock;

use regex::Regex;

/// Compiles a pattern that is a string literal in this crate.
///
/// The workspace bans `expect()`, so an invalid literal degrades to a regex
/// that never matches instead of panicking.
pub(crate) fn compile_static(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
}

/// Digits, a single dot, digits. Either side may be empty.
static REAL_RE: LazyLock<Regex> = LazyLock::new(|| compile_static(r"^[0-9]*\.[0-9]*$"));

/// Lowercase local part and dotted hostname labels.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_static(concat!(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~\-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~\-]+)*",
        r"@(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?$",
    ))
});

/// Returns `true` if `field` has no characters.
pub fn is_empty(field: &str) -> bool {
    field.is_empty()
}

/// Non-empty and made only of ASCII digits. Signs are not accepted.
pub fn is_integer(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty and of the form `digits.digits`, where either side may be
/// empty: `"1.5"`, `".5"`, `"1."` and `"."` all match.
pub fn is_real(field: &str) -> bool {
    !field.is_empty() && REAL_RE.is_match(field)
}

/// Either [`is_integer`] or [`is_real`].
pub fn is_number(field: &str) -> bool {
    is_integer(field) || is_real(field)
}

/// Non-empty and made only of hexadecimal digits, either case.
pub fn is_hex(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Non-empty and made only of ASCII letters and whitespace.
///
/// Whitespace here is space, tab, line feed, vertical tab, form feed and
/// carriage return. Accented letters are rejected.
pub fn is_alphabetic(field: &str) -> bool {
    !field.is_empty()
        && field
            .bytes()
            .all(|b| b.is_ascii_alphabetic() || is_form_whitespace(b))
}

fn is_form_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Non-empty and a lowercase address such as `user.name+tag@mail.example.com`.
///
/// The hostname needs at least one dot and labels cannot start or end with a
/// hyphen. Uppercase letters are rejected.
pub fn is_email(field: &str) -> bool {
    !field.is_empty() && EMAIL_RE.is_match(field)
}

/// Non-empty and at least `min` characters long.
pub fn min_length(field: &str, min: usize) -> bool {
    !field.is_empty() && field.chars().count() >= min
}

/// Non-empty and at most `max` characters long.
pub fn max_length(field: &str, max: usize) -> bool {
    !field.is_empty() && field.chars().count() <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(is_empty(""));
        assert!(!is_empty(" "));
    }

    #[test]
    fn integer() {
        assert!(is_integer("0"));
        assert!(is_integer("007"));
        assert!(!is_integer(""));
        assert!(!is_integer("-1"));
        assert!(!is_integer("1.0"));
        assert!(!is_integer("12a"));
    }

    #[test]
    fn real() {
        assert!(is_real("1.5"));
        assert!(is_real(".5"));
        assert!(is_real("1."));
        assert!(is_real("."));
        assert!(!is_real("1"));
        assert!(!is_real("1.2.3"));
        assert!(!is_real("1,5"));
        assert!(!is_real(""));
    }

    #[test]
    fn number() {
        assert!(is_number("42"));
        assert!(is_number("4.2"));
        assert!(!is_number("4e2"));
        assert!(!is_number(""));
    }

    #[test]
    fn hex() {
        assert!(is_hex("deadBEEF09"));
        assert!(!is_hex("0x1f"));
        assert!(!is_hex("g"));
        assert!(!is_hex(""));
    }

    #[test]
    fn alphabetic() {
        assert!(is_alphabetic("Maria da Silva"));
        assert!(is_alphabetic("tab\tand\nnewline"));
        assert!(is_alphabetic("   "));
        assert!(!is_alphabetic("João"));
        assert!(!is_alphabetic("R2D2"));
        assert!(!is_alphabetic(""));
    }

    #[test]
    fn email() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@mail.example.com.br"));
        assert!(is_email("o'brien@x-y.example.org"));
        assert!(!is_email("User@example.com"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("user@-example.com"));
        assert!(!is_email("user@example-.com"));
        assert!(!is_email(".user@example.com"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("user@example.com "));
        assert!(!is_email(""));
    }

    #[test]
    fn min_length_bounds() {
        assert!(min_length("abc", 3));
        assert!(!min_length("ab", 3));
        assert!(!min_length("", 0));
    }

    #[test]
    fn max_length_bounds() {
        assert!(max_length("abc", 3));
        assert!(!max_length("abcd", 3));
        assert!(!max_length("", 3));
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        assert!(max_length("ção", 3));
        assert!(min_length("ção", 3));
    }
}
