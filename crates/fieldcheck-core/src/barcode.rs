//! GS1 barcode validation: issuer-prefix lookup plus the mod-10 check digit.
//!
//! [`check_barcode`] reports why a code was rejected; [`is_valid_barcode`]
//! collapses every failure to `false`. Any length of three digits or more is
//! checked; [`BarcodeFormat`] only names the standard lengths.
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::check_digits::{CheckDigitError, ensure_digits, gs1_check_digit};
use crate::gs1_prefix::{country_for_prefix, prefix_of};

/// Barcode families sharing the GS1 mod-10 scheme, identified by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarcodeFormat {
    /// 8 digits (EAN-8).
    Gtin8,
    /// 12 digits (UPC-A).
    Gtin12,
    /// 13 digits (EAN-13).
    Gtin13,
    /// 14 digits (ITF-14 / DUN-14).
    Gtin14,
    /// 17-digit Global Shipment Identification Number.
    Gsin,
    /// 18-digit Serial Shipping Container Code.
    Sscc,
}

impl BarcodeFormat {
    /// Classifies a barcode by its digit count.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            8 => Some(Self::Gtin8),
            12 => Some(Self::Gtin12),
            13 => Some(Self::Gtin13),
            14 => Some(Self::Gtin14),
            17 => Some(Self::Gsin),
            18 => Some(Self::Sscc),
            _ => None,
        }
    }

    /// Display name, e.g. `GTIN-13`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gtin8 => "GTIN-8",
            Self::Gtin12 => "GTIN-12",
            Self::Gtin13 => "GTIN-13",
            Self::Gtin14 => "GTIN-14",
            Self::Gsin => "GSIN",
            Self::Sscc => "SSCC",
        }
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a barcode is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// The input is empty.
    #[error("barcode is empty")]
    Empty,

    /// The input contains a non-digit character.
    #[error(transparent)]
    Digits(#[from] CheckDigitError),

    /// Fewer than three digits: no prefix to look up.
    #[error("barcode has {len} digits, at least 3 are required")]
    TooShort {
        /// Number of digits supplied.
        len: usize,
    },

    /// No GS1 prefix range covers the leading three digits.
    #[error("unknown GS1 prefix {prefix:03}")]
    UnknownPrefix {
        /// The leading three digits as an integer.
        prefix: u32,
    },

    /// The trailing digit does not match the computed check digit.
    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Digit computed from the body.
        expected: u8,
        /// Digit present in the input.
        found: u8,
    },
}

/// Details of a barcode that passed [`check_barcode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarcodeInfo {
    /// Leading three digits.
    pub prefix: u32,
    /// Issuer label from the GS1 prefix table.
    pub country: &'static str,
    /// Standard format for this length, if any.
    pub format: Option<BarcodeFormat>,
}

/// Validates `code` and returns its prefix details.
///
/// Checks, in order: non-empty, digits only, at least three digits, known
/// GS1 prefix, and finally the mod-10 check digit.
///
/// # Errors
///
/// The first failed check, as a [`BarcodeError`].
pub fn check_barcode(code: &str) -> Result<BarcodeInfo, BarcodeError> {
    if code.is_empty() {
        return Err(BarcodeError::Empty);
    }
    ensure_digits(code)?;
    let len = code.len();
    let prefix = prefix_of(code).ok_or(BarcodeError::TooShort { len })?;
    let country = country_for_prefix(prefix).ok_or(BarcodeError::UnknownPrefix { prefix })?;

    let (body, check) = code.split_at(len - 1);
    let expected = gs1_check_digit(body)?;
    let found = check.as_bytes()[0] - b'0';
    if expected != found {
        return Err(BarcodeError::CheckDigitMismatch { expected, found });
    }

    Ok(BarcodeInfo {
        prefix,
        country,
        format: BarcodeFormat::from_len(len),
    })
}

/// Returns `true` if `code` has a known GS1 prefix and a correct check digit.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::barcode::is_valid_barcode;
///
/// assert!(is_valid_barcode("4006381333931"));
/// assert!(!is_valid_barcode("4006381333932"));
/// assert!(!is_valid_barcode("0000000000000"));
/// ```
pub fn is_valid_barcode(code: &str) -> bool {
    check_barcode(code).is_ok()
}
