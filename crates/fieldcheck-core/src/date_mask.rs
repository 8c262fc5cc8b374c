//! Strict date/time checks against `SimpleDateFormat`-style masks.
//!
//! Form masks such as `dd/MM/yyyy` or `yyyy-MM-dd HH:mm:ss` are translated to
//! chrono strftime items once and then used for non-lenient parsing: the
//! whole input must be consumed and the resulting calendar date (and time of
//! day, when the mask has one) must exist.
//!
//! A mask with only some date fields is checked against defaults: year 1970,
//! month 1, day 1. So `31/02` fails `dd/MM` and `29/02` fails too.
//!
//! Supported pattern letters:
//!
//! | letter | width | meaning |
//! |--------|-------|---------|
//! | `y` | 2 / other | two-digit year / full year |
//! | `M` | 1-2 / 3 / 4+ | month number / `Jan` / `January` |
//! | `d` | any | day of month |
//! | `H` | any | hour 0-23 |
//! | `h` | any | hour 1-12 (needs `a` for a full time) |
//! | `m` | any | minute |
//! | `s` | any | second 0-59 |
//! | `S` | 3 | milliseconds |
//! | `a` | any | `AM` / `PM` |
//! | `E` | 1-3 / 4+ | `Mon` / `Monday` |
//!
//! Text inside single quotes is literal (`''` is a quote). Any other
//! non-letter character is literal.
use chrono::format::{ParseError, Parsed, StrftimeItems, parse};
use thiserror::Error;

/// Errors from translating a mask or parsing a value with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateMaskError {
    /// The mask is the empty string.
    #[error("date mask is empty")]
    EmptyMask,

    /// The mask uses a pattern letter this module does not understand.
    #[error("unsupported pattern letter {letter:?} at offset {offset}")]
    UnsupportedLetter {
        /// The letter.
        letter: char,
        /// Byte offset in the mask.
        offset: usize,
    },

    /// The letter is known but not at this width (e.g. `SS`).
    #[error("unsupported width {width} for pattern letter {letter:?}")]
    UnsupportedWidth {
        /// The letter.
        letter: char,
        /// Number of repetitions.
        width: usize,
    },

    /// A quoted literal is not closed.
    #[error("unterminated quote starting at offset {offset}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// The value does not match the mask or names a date that does not exist.
    #[error("value does not match mask: {0}")]
    Parse(#[from] ParseError),

    /// The value has second 60.
    #[error("second 60 is out of range")]
    LeapSecond,
}

/// A mask translated to a chrono strftime format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedMask {
    format: String,
    year: bool,
    month: bool,
    day: bool,
    full_time: bool,
}

impl TranslatedMask {
    /// The equivalent chrono strftime format string.
    pub fn strftime(&self) -> &str {
        &self.format
    }

    /// Parses `value` strictly against this mask.
    ///
    /// # Errors
    ///
    /// [`DateMaskError::Parse`] when the text does not match, has trailing
    /// characters, has an out-of-range field, or names a nonexistent date
    /// such as 31 February. [`DateMaskError::LeapSecond`] for second 60.
    pub fn parse(&self, value: &str) -> Result<(), DateMaskError> {
        let mut parsed = Parsed::new();
        parse(&mut parsed, value, StrftimeItems::new(&self.format))?;
        if parsed.second() == Some(60) {
            return Err(DateMaskError::LeapSecond);
        }
        if self.year || self.month || self.day {
            if !self.year {
                parsed.set_year(DEFAULT_YEAR)?;
            }
            if !self.month {
                parsed.set_month(1)?;
            }
            if !self.day {
                parsed.set_day(1)?;
            }
            parsed.to_naive_date()?;
        }
        if self.full_time {
            parsed.to_naive_time()?;
        }
        Ok(())
    }
}

/// Year assumed when the mask has no year field.
const DEFAULT_YEAR: i64 = 1970;

#[derive(Default)]
struct Seen {
    year: bool,
    month: bool,
    day: bool,
    hour24: bool,
    hour12: bool,
    am_pm: bool,
    minute: bool,
}

/// Translates a `SimpleDateFormat`-style mask into a [`TranslatedMask`].
///
/// # Errors
///
/// [`DateMaskError::EmptyMask`], [`DateMaskError::UnsupportedLetter`],
/// [`DateMaskError::UnsupportedWidth`] or
/// [`DateMaskError::UnterminatedQuote`].
pub fn translate_mask(mask: &str) -> Result<TranslatedMask, DateMaskError> {
    if mask.is_empty() {
        return Err(DateMaskError::EmptyMask);
    }

    let mut format = String::with_capacity(mask.len() * 2);
    let mut seen = Seen::default();
    let mut chars = mask.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c == '\'' {
            if chars.next_if(|&(_, next)| next == '\'').is_some() {
                format.push('\'');
                continue;
            }
            let mut closed = false;
            while let Some((_, q)) = chars.next() {
                if q == '\'' {
                    if chars.next_if(|&(_, next)| next == '\'').is_some() {
                        format.push('\'');
                        continue;
                    }
                    closed = true;
                    break;
                }
                push_literal(&mut format, q);
            }
            if !closed {
                return Err(DateMaskError::UnterminatedQuote { offset });
            }
            continue;
        }

        if !c.is_ascii_alphabetic() {
            push_literal(&mut format, c);
            continue;
        }

        let mut width = 1;
        while chars.next_if(|&(_, next)| next == c).is_some() {
            width += 1;
        }
        let directive = match (c, width) {
            ('y', 2) => {
                seen.year = true;
                "%y"
            }
            ('y', _) => {
                seen.year = true;
                "%Y"
            }
            ('M', 1 | 2) => {
                seen.month = true;
                "%m"
            }
            ('M', 3) => {
                seen.month = true;
                "%b"
            }
            ('M', _) => {
                seen.month = true;
                "%B"
            }
            ('d', _) => {
                seen.day = true;
                "%d"
            }
            ('H', _) => {
                seen.hour24 = true;
                "%H"
            }
            ('h', _) => {
                seen.hour12 = true;
                "%I"
            }
            ('m', _) => {
                seen.minute = true;
                "%M"
            }
            ('s', _) => "%S",
            ('S', 3) => "%3f",
            ('a', _) => {
                seen.am_pm = true;
                "%p"
            }
            ('E', 1..=3) => "%a",
            ('E', _) => "%A",
            ('S', _) => return Err(DateMaskError::UnsupportedWidth { letter: c, width }),
            _ => return Err(DateMaskError::UnsupportedLetter { letter: c, offset }),
        };
        format.push_str(directive);
    }

    Ok(TranslatedMask {
        format,
        year: seen.year,
        month: seen.month,
        day: seen.day,
        full_time: seen.minute && (seen.hour24 || (seen.hour12 && seen.am_pm)),
    })
}

fn push_literal(format: &mut String, c: char) {
    if c == '%' {
        format.push_str("%%");
    } else {
        format.push(c);
    }
}

/// Returns `true` if `value` is a real date (or time) in the shape of `mask`.
///
/// `false` when either argument is empty, the mask cannot be translated, or
/// the value does not parse strictly.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::date_mask::is_valid_date;
///
/// assert!(is_valid_date("29/02/2024", "dd/MM/yyyy"));
/// assert!(!is_valid_date("29/02/2023", "dd/MM/yyyy"));
/// ```
pub fn is_valid_date(value: &str, mask: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    translate_mask(mask).and_then(|m| m.parse(value)).is_ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn translates_common_masks() {
        let m = translate_mask("dd/MM/yyyy").expect("valid mask");
        assert_eq!(m.strftime(), "%d/%m/%Y");
        let m = translate_mask("yyyy-MM-dd HH:mm:ss.SSS").expect("valid mask");
        assert_eq!(m.strftime(), "%Y-%m-%d %H:%M:%S.%3f");
        let m = translate_mask("d MMM yy, h:mm a").expect("valid mask");
        assert_eq!(m.strftime(), "%d %b %y, %I:%M %p");
    }

    #[test]
    fn quoted_literals_and_percent() {
        let m = translate_mask("yyyy'T'HH'h' 100%").expect("valid mask");
        assert_eq!(m.strftime(), "%YT%Hh 100%%");
        let m = translate_mask("dd''MM").expect("valid mask");
        assert_eq!(m.strftime(), "%d'%m");
        let m = translate_mask("'it''s' dd").expect("valid mask");
        assert_eq!(m.strftime(), "it's %d");
    }

    #[test]
    fn mask_errors() {
        assert_eq!(translate_mask(""), Err(DateMaskError::EmptyMask));
        assert_eq!(
            translate_mask("dd/MM/yyyy G"),
            Err(DateMaskError::UnsupportedLetter {
                letter: 'G',
                offset: 11
            })
        );
        assert_eq!(
            translate_mask("HH:mm:ss.SS"),
            Err(DateMaskError::UnsupportedWidth {
                letter: 'S',
                width: 2
            })
        );
        assert_eq!(
            translate_mask("dd 'of MM"),
            Err(DateMaskError::UnterminatedQuote { offset: 3 })
        );
    }

    #[test]
    fn valid_dates() {
        assert!(is_valid_date("19/10/2026", "dd/MM/yyyy"));
        assert!(is_valid_date("2026-10-19", "yyyy-MM-dd"));
        assert!(is_valid_date("29/02/2024", "dd/MM/yyyy"));
        assert!(is_valid_date("19 Oct 2026", "dd MMM yyyy"));
    }

    #[test]
    fn nonexistent_dates_are_rejected() {
        assert!(!is_valid_date("31/02/2024", "dd/MM/yyyy"));
        assert!(!is_valid_date("29/02/2023", "dd/MM/yyyy"));
        assert!(!is_valid_date("00/01/2024", "dd/MM/yyyy"));
        assert!(!is_valid_date("10/13/2024", "dd/MM/yyyy"));
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        assert!(!is_valid_date("2024-01-10", "dd/MM/yyyy"));
        assert!(!is_valid_date("10/01/2024 extra", "dd/MM/yyyy"));
        assert!(!is_valid_date("10/01", "dd/MM/yyyy"));
    }

    #[test]
    fn times() {
        assert!(is_valid_date("23:59:59", "HH:mm:ss"));
        assert!(!is_valid_date("24:00:00", "HH:mm:ss"));
        assert!(!is_valid_date("12:60", "HH:mm"));
        assert!(is_valid_date("2026-10-19 08:30:00", "yyyy-MM-dd HH:mm:ss"));
        assert!(is_valid_date("07:15 PM", "hh:mm a"));
    }

    #[test]
    fn second_sixty_is_rejected() {
        assert!(!is_valid_date("23:59:60", "HH:mm:ss"));
        assert!(!is_valid_date("01/01/2024 12:00:60", "dd/MM/yyyy HH:mm:ss"));
        assert!(!is_valid_date("60", "ss"));
        let mask = translate_mask("HH:mm:ss").expect("valid mask");
        assert_eq!(mask.parse("23:59:60"), Err(DateMaskError::LeapSecond));
    }

    // ── masks without every date field ──

    #[test]
    fn day_month_mask_uses_1970() {
        assert!(is_valid_date("28/02", "dd/MM"));
        assert!(is_valid_date("31/12", "dd/MM"));
        assert!(!is_valid_date("29/02", "dd/MM"));
        assert!(!is_valid_date("31/02", "dd/MM"));
        assert!(!is_valid_date("31/04", "dd/MM"));
        assert!(!is_valid_date("00/01", "dd/MM"));
    }

    #[test]
    fn month_year_mask() {
        assert!(is_valid_date("02/2024", "MM/yyyy"));
        assert!(!is_valid_date("13/2024", "MM/yyyy"));
        assert!(!is_valid_date("00/2024", "MM/yyyy"));
    }

    #[test]
    fn day_only_mask_defaults_to_january() {
        assert!(is_valid_date("31", "dd"));
        assert!(!is_valid_date("32", "dd"));
    }

    #[test]
    fn twelve_hour_without_marker() {
        assert!(is_valid_date("12:30", "hh:mm"));
        assert!(is_valid_date("01:05", "hh:mm"));
        assert!(!is_valid_date("13:00", "hh:mm"));
        assert!(!is_valid_date("00:30", "hh:mm"));
        assert!(!is_valid_date("11:60", "hh:mm"));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert!(!is_valid_date("", "dd/MM/yyyy"));
        assert!(!is_valid_date("19/10/2026", ""));
    }

    #[test]
    fn unsupported_mask_is_rejected() {
        assert!(!is_valid_date("2026", "uuuu"));
    }

    #[test]
    fn parse_error_surfaces_through_translated_mask() {
        let mask = translate_mask("dd/MM/yyyy").expect("valid mask");
        assert!(matches!(mask.parse("31/04/2026"), Err(DateMaskError::Parse(_))));
        assert!(mask.parse("30/04/2026").is_ok());
    }
}
