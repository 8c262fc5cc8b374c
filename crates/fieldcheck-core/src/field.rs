//! Field-kind dispatcher: one entry point that runs the right check for a
//! form field and explains the outcome.
//!
//! [`check_field`] applies the optional length rules first, then the check
//! for the field's [`FieldKind`], and returns a serializable [`FieldReport`].
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::barcode::{BarcodeError, check_barcode};
use crate::check_digits::{CNPJ_LEN, CPF_LEN, cnpj, cpf};
use crate::date_mask::{DateMaskError, translate_mask};
use crate::newtypes::{Cnpj, Cpf, NewtypeError};
use crate::predicates;

/// Mask used for [`FieldKind::Date`] when [`FieldRules::mask`] is unset.
pub const DEFAULT_DATE_MASK: &str = "dd/MM/yyyy";

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// What a form field is supposed to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Unsigned decimal integer.
    Integer,
    /// `digits.digits`.
    Real,
    /// Integer or real.
    Number,
    /// Hexadecimal digits.
    Hex,
    /// ASCII letters and whitespace.
    Alphabetic,
    /// Lowercase email address.
    Email,
    /// Date or time matching a mask.
    Date,
    /// Brazilian individual taxpayer number.
    Cpf,
    /// Brazilian company taxpayer number.
    Cnpj,
    /// GS1 barcode with a known issuer prefix.
    Barcode,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Integer,
        Self::Real,
        Self::Number,
        Self::Hex,
        Self::Alphabetic,
        Self::Email,
        Self::Date,
        Self::Cpf,
        Self::Cnpj,
        Self::Barcode,
    ];

    /// The snake_case name used in reports and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Number => "number",
            Self::Hex => "hex",
            Self::Alphabetic => "alphabetic",
            Self::Email => "email",
            Self::Date => "date",
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Barcode => "barcode",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown field kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field kind {0:?}")]
pub struct UnknownFieldKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFieldKind(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Rules and reports
// ---------------------------------------------------------------------------

/// Optional constraints applied on top of the kind check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRules {
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Date mask for [`FieldKind::Date`]; defaults to [`DEFAULT_DATE_MASK`].
    pub mask: Option<String>,
}

/// Machine-readable rejection cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The field is empty.
    Empty,
    /// Shorter than [`FieldRules::min_length`].
    TooShort,
    /// Longer than [`FieldRules::max_length`].
    TooLong,
    /// Wrong characters or shape for the kind.
    BadFormat,
    /// Right shape, wrong check digit(s).
    BadCheckDigit,
    /// Barcode prefix not assigned to any issuer.
    UnknownPrefix,
    /// The date mask itself is unusable.
    BadMask,
}

impl Reason {
    /// The snake_case name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::BadFormat => "bad_format",
            Self::BadCheckDigit => "bad_check_digit",
            Self::UnknownPrefix => "unknown_prefix",
            Self::BadMask => "bad_mask",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of [`check_field`] for one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    /// Kind the value was checked as.
    pub kind: FieldKind,
    /// The value as supplied.
    pub value: String,
    /// Whether every check passed.
    pub valid: bool,
    /// Why the value was rejected; `None` when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    /// Extra context: issuer and format for barcodes, the punctuated form
    /// for taxpayer IDs, or the underlying error message on rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FieldReport {
    fn pass(kind: FieldKind, value: &str, detail: Option<String>) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            valid: true,
            reason: None,
            detail,
        }
    }

    fn fail(kind: FieldKind, value: &str, reason: Reason, detail: Option<String>) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            valid: false,
            reason: Some(reason),
            detail,
        }
    }
}

// ---------------------------------------------------------------------------
// check_field
// ---------------------------------------------------------------------------

/// Checks `value` as a field of `kind` under `rules`.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::field::{FieldKind, FieldRules, Reason, check_field};
///
/// let rules = FieldRules::default();
/// assert!(check_field(FieldKind::Cnpj, "11222333000181", &rules).valid);
///
/// let report = check_field(FieldKind::Barcode, "0000000000000", &rules);
/// assert_eq!(report.reason, Some(Reason::UnknownPrefix));
/// ```
pub fn check_field(kind: FieldKind, value: &str, rules: &FieldRules) -> FieldReport {
    if predicates::is_empty(value) {
        return FieldReport::fail(kind, value, Reason::Empty, None);
    }
    if let Some(min) = rules.min_length {
        if !predicates::min_length(value, min) {
            return FieldReport::fail(
                kind,
                value,
                Reason::TooShort,
                Some(format!("at least {min} characters required")),
            );
        }
    }
    if let Some(max) = rules.max_length {
        if !predicates::max_length(value, max) {
            return FieldReport::fail(
                kind,
                value,
                Reason::TooLong,
                Some(format!("at most {max} characters allowed")),
            );
        }
    }

    match kind {
        FieldKind::Integer => shape(kind, value, predicates::is_integer),
        FieldKind::Real => shape(kind, value, predicates::is_real),
        FieldKind::Number => shape(kind, value, predicates::is_number),
        FieldKind::Hex => shape(kind, value, predicates::is_hex),
        FieldKind::Alphabetic => shape(kind, value, predicates::is_alphabetic),
        FieldKind::Email => shape(kind, value, predicates::is_email),
        FieldKind::Date => check_date(value, rules.mask.as_deref().unwrap_or(DEFAULT_DATE_MASK)),
        FieldKind::Cpf => check_taxpayer_id(kind, value, CPF_LEN, cpf, |v| {
            Cpf::try_from(v).map(|c| c.to_string())
        }),
        FieldKind::Cnpj => check_taxpayer_id(kind, value, CNPJ_LEN, cnpj, |v| {
            Cnpj::try_from(v).map(|c| c.to_string())
        }),
        FieldKind::Barcode => check_barcode_field(value),
    }
}

fn shape(kind: FieldKind, value: &str, predicate: fn(&str) -> bool) -> FieldReport {
    if predicate(value) {
        FieldReport::pass(kind, value, None)
    } else {
        FieldReport::fail(kind, value, Reason::BadFormat, None)
    }
}

fn check_date(value: &str, mask: &str) -> FieldReport {
    let kind = FieldKind::Date;
    match translate_mask(mask).and_then(|m| m.parse(value)) {
        Ok(()) => FieldReport::pass(kind, value, None),
        Err(err @ (DateMaskError::Parse(_) | DateMaskError::LeapSecond)) => {
            FieldReport::fail(kind, value, Reason::BadFormat, Some(err.to_string()))
        }
        Err(
            err @ (DateMaskError::EmptyMask
            | DateMaskError::UnsupportedLetter { .. }
            | DateMaskError::UnsupportedWidth { .. }
            | DateMaskError::UnterminatedQuote { .. }),
        ) => FieldReport::fail(kind, value, Reason::BadMask, Some(err.to_string())),
    }
}

/// CPF / CNPJ: bare digits go through the zero-filling validator; punctuated
/// input goes through the newtype, which needs the full digit count.
///
/// A check-digit failure is reported only for a well-formed punctuated value
/// or for at most `full_len` bare digits. Anything else is a format error.
fn check_taxpayer_id(
    kind: FieldKind,
    value: &str,
    full_len: usize,
    bare: fn(&str) -> bool,
    punctuated: impl Fn(&str) -> Result<String, NewtypeError>,
) -> FieldReport {
    match punctuated(value) {
        Ok(formatted) => return FieldReport::pass(kind, value, Some(formatted)),
        Err(NewtypeError::InvalidCheckDigit { .. }) => {
            return FieldReport::fail(kind, value, Reason::BadCheckDigit, None);
        }
        Err(NewtypeError::InvalidFormat { .. }) => {}
    }
    if bare(value) {
        return FieldReport::pass(kind, value, None);
    }

    let bare_digits = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    if bare_digits && value.len() <= full_len {
        FieldReport::fail(kind, value, Reason::BadCheckDigit, None)
    } else {
        FieldReport::fail(
            kind,
            value,
            Reason::BadFormat,
            Some(format!("expected up to {full_len} digits")),
        )
    }
}

fn check_barcode_field(value: &str) -> FieldReport {
    let kind = FieldKind::Barcode;
    match check_barcode(value) {
        Ok(info) => {
            let detail = match info.format {
                Some(format) => format!("{} ({format})", info.country),
                None => info.country.to_owned(),
            };
            FieldReport::pass(kind, value, Some(detail))
        }
        Err(err) => {
            let reason = match err {
                BarcodeError::Empty => Reason::Empty,
                BarcodeError::Digits(_) | BarcodeError::TooShort { .. } => Reason::BadFormat,
                BarcodeError::UnknownPrefix { .. } => Reason::UnknownPrefix,
                BarcodeError::CheckDigitMismatch { .. } => Reason::BadCheckDigit,
            };
            FieldReport::fail(kind, value, reason, Some(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn check(kind: FieldKind, value: &str) -> FieldReport {
        check_field(kind, value, &FieldRules::default())
    }

    #[test]
    fn empty_value_is_reported_for_every_kind() {
        for kind in FieldKind::ALL {
            let report = check(kind, "");
            assert!(!report.valid, "{kind}");
            assert_eq!(report.reason, Some(Reason::Empty), "{kind}");
        }
    }

    #[test]
    fn length_rules_run_before_kind_check() {
        let rules = FieldRules {
            min_length: Some(3),
            max_length: Some(5),
            mask: None,
        };
        assert_eq!(
            check_field(FieldKind::Integer, "12", &rules).reason,
            Some(Reason::TooShort)
        );
        assert_eq!(
            check_field(FieldKind::Integer, "123456", &rules).reason,
            Some(Reason::TooLong)
        );
        assert!(check_field(FieldKind::Integer, "12345", &rules).valid);
        assert_eq!(
            check_field(FieldKind::Integer, "12a", &rules).reason,
            Some(Reason::BadFormat)
        );
    }

    #[test]
    fn shape_kinds() {
        assert!(check(FieldKind::Real, "3.14").valid);
        assert!(check(FieldKind::Number, "314").valid);
        assert!(check(FieldKind::Hex, "c0ffee").valid);
        assert!(check(FieldKind::Alphabetic, "Ana Maria").valid);
        assert!(check(FieldKind::Email, "ana@example.com.br").valid);
        assert_eq!(
            check(FieldKind::Email, "ana@").reason,
            Some(Reason::BadFormat)
        );
    }

    #[test]
    fn date_uses_default_and_custom_masks() {
        assert!(check(FieldKind::Date, "19/10/2026").valid);
        let rules = FieldRules {
            mask: Some("yyyy-MM-dd".to_owned()),
            ..FieldRules::default()
        };
        assert!(check_field(FieldKind::Date, "2026-10-19", &rules).valid);
        assert_eq!(
            check_field(FieldKind::Date, "19/10/2026", &rules).reason,
            Some(Reason::BadFormat)
        );
    }

    #[test]
    fn bad_mask_is_distinguished() {
        let rules = FieldRules {
            mask: Some("qq/MM".to_owned()),
            ..FieldRules::default()
        };
        let report = check_field(FieldKind::Date, "01/02", &rules);
        assert_eq!(report.reason, Some(Reason::BadMask));
        assert!(report.detail.is_some_and(|d| d.contains("'q'")));
    }

    #[test]
    fn cpf_bare_and_punctuated() {
        assert!(check(FieldKind::Cpf, "11144477735").valid);
        let report = check(FieldKind::Cpf, "111.444.777-35");
        assert!(report.valid);
        assert_eq!(report.detail.as_deref(), Some("111.444.777-35"));
        assert_eq!(
            check(FieldKind::Cpf, "111.444.777-36").reason,
            Some(Reason::BadCheckDigit)
        );
        assert_eq!(
            check(FieldKind::Cpf, "abc").reason,
            Some(Reason::BadFormat)
        );
        assert_eq!(
            check(FieldKind::Cpf, "111444777350").reason,
            Some(Reason::BadFormat)
        );
    }

    #[test]
    fn cnpj_reports() {
        let report = check(FieldKind::Cnpj, "11.222.333/0001-81");
        assert!(report.valid);
        assert_eq!(report.detail.as_deref(), Some("11.222.333/0001-81"));
        assert_eq!(
            check(FieldKind::Cnpj, "11222333000182").reason,
            Some(Reason::BadCheckDigit)
        );
        assert_eq!(
            check(FieldKind::Cnpj, "11.222.333/0001-82").reason,
            Some(Reason::BadCheckDigit)
        );
    }

    #[test]
    fn short_punctuated_ids_are_bad_format() {
        assert_eq!(
            check(FieldKind::Cpf, "111.444.777-3").reason,
            Some(Reason::BadFormat)
        );
        assert_eq!(
            check(FieldKind::Cpf, "11.444.777-35").reason,
            Some(Reason::BadFormat)
        );
        assert_eq!(
            check(FieldKind::Cnpj, "11.222.333/0001-8").reason,
            Some(Reason::BadFormat)
        );
        assert_eq!(
            check(FieldKind::Cpf, "1144477735").reason,
            Some(Reason::BadCheckDigit)
        );
    }

    #[test]
    fn barcode_reports() {
        let report = check(FieldKind::Barcode, "7891000315507");
        assert!(report.valid);
        assert_eq!(report.detail.as_deref(), Some("Brasil (GTIN-13)"));
        assert_eq!(
            check(FieldKind::Barcode, "7891000315508").reason,
            Some(Reason::BadCheckDigit)
        );
        assert_eq!(
            check(FieldKind::Barcode, "0000000000000").reason,
            Some(Reason::UnknownPrefix)
        );
        assert_eq!(
            check(FieldKind::Barcode, "78910003155O7").reason,
            Some(Reason::BadFormat)
        );
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.name().parse::<FieldKind>(), Ok(kind));
        }
        assert_eq!("CPF".parse::<FieldKind>(), Ok(FieldKind::Cpf));
        assert!("isbn".parse::<FieldKind>().is_err());
    }

    #[test]
    fn report_serializes_snake_case_and_skips_none() {
        let report = check(FieldKind::Cpf, "11144477736");
        let json = serde_json::to_string(&report).expect("serialize");
        assert_eq!(
            json,
            r#"{"kind":"cpf","value":"11144477736","valid":false,"reason":"bad_check_digit"}"#
        );
    }
}
