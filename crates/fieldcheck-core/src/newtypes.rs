/// Validated newtype wrappers for identifiers that carry check digits.
///
/// Each newtype checks shape with a regex and then verifies the check digits
/// at construction time via [`TryFrom<&str>`]. The punctuated forms users
/// type into forms (`111.444.777-35`, `11.222.333/0001-81`) are accepted and
/// normalized to bare digits. Serde `Deserialize` impls re-run validation so
/// invalid data cannot enter the type system from untrusted JSON.
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::check_digits::{cnpj_strict, cpf_strict, gs1_mod10};
use crate::predicates::compile_static;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewtypeError {
    /// The string did not match the expected format.
    #[error("invalid {type_name}: expected {expected}, got {got:?}")]
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },

    /// The shape is right but the check digits are wrong.
    #[error("invalid {type_name}: check digits do not match in {got:?}")]
    InvalidCheckDigit {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

// ---------------------------------------------------------------------------
// Regex statics
// ---------------------------------------------------------------------------

/// `00000000000` or `000.000.000-00`, punctuation optional piecewise.
static CPF_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_static(r"^[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}$"));

/// `00000000000000` or `00.000.000/0000-00`, punctuation optional piecewise.
static CNPJ_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_static(r"^[0-9]{2}\.?[0-9]{3}\.?[0-9]{3}/?[0-9]{4}-?[0-9]{2}$"));

/// 8, 12, 13 or 14 digits.
static GTIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_static(r"^(?:[0-9]{8}|[0-9]{12,14})$"));

fn strip_punctuation(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Shared construction path: shape check, normalize, check-digit check.
fn build(
    s: &str,
    re: &Regex,
    type_name: &'static str,
    expected: &'static str,
    check: fn(&str) -> bool,
) -> Result<String, NewtypeError> {
    if !re.is_match(s) {
        return Err(NewtypeError::InvalidFormat {
            type_name,
            expected,
            got: s.to_owned(),
        });
    }
    let digits = strip_punctuation(s);
    if check(&digits) {
        Ok(digits)
    } else {
        Err(NewtypeError::InvalidCheckDigit {
            type_name,
            got: s.to_owned(),
        })
    }
}

// ---------------------------------------------------------------------------
// Cpf
// ---------------------------------------------------------------------------

/// Brazilian individual taxpayer number, stored as 11 bare digits.
///
/// `Display` renders the conventional `000.000.000-00` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cpf(String);

impl TryFrom<&str> for Cpf {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        build(
            s,
            &CPF_RE,
            "Cpf",
            "11 digits, optionally as 000.000.000-00",
            cpf_strict,
        )
        .map(Self)
    }
}

impl Cpf {
    /// The 11 bare digits.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl Deref for Cpf {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Cnpj
// ---------------------------------------------------------------------------

/// Brazilian company taxpayer number, stored as 14 bare digits.
///
/// `Display` renders the conventional `00.000.000/0000-00` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cnpj(String);

impl TryFrom<&str> for Cnpj {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        build(
            s,
            &CNPJ_RE,
            "Cnpj",
            "14 digits, optionally as 00.000.000/0000-00",
            cnpj_strict,
        )
        .map(Self)
    }
}

impl Cnpj {
    /// The 14 bare digits.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The 8-digit root shared by every branch of the company.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number (`0001` for the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }
}

impl Deref for Cnpj {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(
            f,
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        )
    }
}

impl Serialize for Cnpj {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Gtin
// ---------------------------------------------------------------------------

/// Global Trade Item Number of 8, 12, 13 or 14 digits with a valid GS1
/// mod-10 check digit.
///
/// Only the check digit is verified. The issuer prefix is not, because a
/// GTIN-14 starts with a packaging indicator rather than a prefix; use
/// [`crate::barcode::check_barcode`] for prefix-aware validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gtin(String);

impl TryFrom<&str> for Gtin {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        build(s, &GTIN_RE, "Gtin", "8, 12, 13 or 14 digits", gs1_mod10).map(Self)
    }
}

impl Gtin {
    /// Number of digits (8, 12, 13 or 14).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Gtin {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Gtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Gtin {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Gtin {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
