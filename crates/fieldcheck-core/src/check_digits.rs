//! Pure check-digit functions for Brazilian taxpayer IDs and GS1 barcodes.
//!
//! Three schemes live here:
//!
//! - the generic modulo-11 calculator with a cyclic, capped weight vector;
//! - CPF (11 digits) and CNPJ (14 digits), both built on modulo-11;
//! - GS1 mod-10, shared by every GTIN / EAN / GSIN / SSCC length.
//!
//! The boolean validators never panic and never allocate: short inputs are
//! left zero-filled into a fixed-size stack buffer, and any non-digit byte
//! rejects the input before arithmetic runs.

use thiserror::Error;

/// Number of digits in a CPF, check digits included.
pub const CPF_LEN: usize = 11;

/// Number of digits in a CNPJ, check digits included.
pub const CNPJ_LEN: usize = 14;

/// Weight vector for the CPF check digits. The first digit uses the last nine
/// entries, the second digit uses all ten.
const CPF_WEIGHTS: [u64; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights cycle 2..=9 from the right.
const CNPJ_WEIGHT_CAP: u32 = 9;

/// Errors produced by the check-digit calculators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitError {
    /// The input contains a character that is not an ASCII decimal digit.
    #[error("non-digit character {found:?} at byte offset {offset}")]
    NonDigit {
        /// Byte offset of the offending character.
        offset: usize,
        /// The offending character.
        found: char,
    },

    /// The input does not have the number of digits the scheme requires.
    #[error("expected {expected} digits, got {got}")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Number of characters supplied.
        got: usize,
    },
}

// ---------------------------------------------------------------------------
// Modulo 11
// ---------------------------------------------------------------------------

/// Computes the modulo-11 check digit of `digits`.
///
/// # Algorithm
///
/// The rightmost digit gets weight 2 and weights grow by one moving left.
/// When `weight_cap` is non-zero and the next weight would exceed it, the
/// weight resets to 2. With `weight_cap == 0` weights grow without bound.
///
/// The check digit is `11 - (sum mod 11)`, except that 10 and 11 map to 0.
/// An empty input has sum 0 and therefore check digit 0.
///
/// # Errors
///
/// Returns [`CheckDigitError::NonDigit`] for the first character that is not
/// an ASCII digit. Nothing is coerced.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::check_digits::modulo11;
///
/// // First CNPJ check digit of 11.222.333/0001-81.
/// assert_eq!(modulo11("112223330001", 9), Ok(8));
/// assert_eq!(modulo11("1122233300018", 9), Ok(1));
///
/// assert!(modulo11("11a", 9).is_err());
/// ```
pub fn modulo11(digits: &str, weight_cap: u32) -> Result<u8, CheckDigitError> {
    ensure_digits(digits)?;
    Ok(modulo11_ascii(digits.as_bytes(), weight_cap))
}

/// Modulo-11 over bytes already known to be ASCII digits.
fn modulo11_ascii(digits: &[u8], weight_cap: u32) -> u8 {
    let cap = u64::from(weight_cap);
    let mut weight: u64 = 2;
    let mut sum: u64 = 0;
    for &byte in digits.iter().rev() {
        if cap != 0 && weight > cap {
            weight = 2;
        }
        sum = (sum + u64::from(byte - b'0') * (weight % 11)) % 11;
        weight += 1;
    }
    reduce_mod11(sum)
}

/// Maps a weighted sum to its modulo-11 check digit (10 and 11 become 0).
fn reduce_mod11(sum: u64) -> u8 {
    let dv = 11 - sum % 11;
    if dv > 9 { 0 } else { dv as u8 }
}

// ---------------------------------------------------------------------------
// CPF
// ---------------------------------------------------------------------------

/// Returns `true` if `cpf` is a structurally valid CPF.
///
/// Inputs shorter than 11 characters are zero-filled on the left before the
/// check, so `"191"` is treated as `"00000000191"`. Use [`cpf_strict`] to
/// require all 11 digits. Empty input, input longer than 11 characters and
/// any non-digit character are rejected.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::check_digits::cpf;
///
/// assert!(cpf("11144477735"));
/// assert!(!cpf("11144477736"));
/// ```
pub fn cpf(cpf: &str) -> bool {
    let Some(padded) = zero_fill::<CPF_LEN>(cpf) else {
        return false;
    };
    let [first, second] = cpf_digits_ascii(&padded[..9]);
    padded[9] == b'0' + first && padded[10] == b'0' + second
}

/// Like [`cpf`], but requires exactly 11 digits.
pub fn cpf_strict(value: &str) -> bool {
    value.len() == CPF_LEN && cpf(value)
}

/// Computes both CPF check digits for a 9-digit body.
///
/// # Errors
///
/// [`CheckDigitError::WrongLength`] unless `body` has exactly nine
/// characters; [`CheckDigitError::NonDigit`] for any non-digit.
pub fn cpf_check_digits(body: &str) -> Result<[u8; 2], CheckDigitError> {
    ensure_digits(body)?;
    ensure_len(body, CPF_LEN - 2)?;
    Ok(cpf_digits_ascii(body.as_bytes()))
}

fn cpf_digits_ascii(body: &[u8]) -> [u8; 2] {
    let first = cpf_digit(body.iter().copied());
    let second = cpf_digit(body.iter().copied().chain([b'0' + first]));
    [first, second]
}

/// One CPF check digit: the digits are aligned with the tail of the weight
/// vector, so a 9-digit prefix starts at weight 10 and a 10-digit one at 11.
fn cpf_digit<I>(digits: I) -> u8
where
    I: DoubleEndedIterator<Item = u8>,
{
    let sum: u64 = digits
        .rev()
        .zip(CPF_WEIGHTS.iter().rev())
        .map(|(byte, &weight)| u64::from(byte - b'0') * weight)
        .sum();
    reduce_mod11(sum)
}

// ---------------------------------------------------------------------------
// CNPJ
// ---------------------------------------------------------------------------

/// Returns `true` if `cnpj` is a structurally valid CNPJ.
///
/// Inputs shorter than 14 characters are zero-filled on the left. Empty
/// input, input longer than 14 characters and non-digits are rejected. See
/// [`cnpj_strict`] for the exact-length variant.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::check_digits::cnpj;
///
/// assert!(cnpj("11222333000181"));
/// assert!(!cnpj("11222333000182"));
/// ```
pub fn cnpj(cnpj: &str) -> bool {
    let Some(padded) = zero_fill::<CNPJ_LEN>(cnpj) else {
        return false;
    };
    let first = modulo11_ascii(&padded[..12], CNPJ_WEIGHT_CAP);
    let second = modulo11_ascii(&padded[..13], CNPJ_WEIGHT_CAP);
    padded[12] == b'0' + first && padded[13] == b'0' + second
}

/// Like [`cnpj`], but requires exactly 14 digits.
pub fn cnpj_strict(value: &str) -> bool {
    value.len() == CNPJ_LEN && cnpj(value)
}

/// Computes both CNPJ check digits for a 12-digit body.
///
/// # Errors
///
/// [`CheckDigitError::WrongLength`] unless `body` has exactly twelve
/// characters; [`CheckDigitError::NonDigit`] for any non-digit.
pub fn cnpj_check_digits(body: &str) -> Result<[u8; 2], CheckDigitError> {
    ensure_digits(body)?;
    ensure_len(body, CNPJ_LEN - 2)?;
    let mut buf = [b'0'; CNPJ_LEN - 1];
    buf[..12].copy_from_slice(body.as_bytes());
    let first = modulo11_ascii(&buf[..12], CNPJ_WEIGHT_CAP);
    buf[12] = b'0' + first;
    let second = modulo11_ascii(&buf, CNPJ_WEIGHT_CAP);
    Ok([first, second])
}

// ---------------------------------------------------------------------------
// GS1 mod 10
// ---------------------------------------------------------------------------

/// Computes the GS1 mod-10 check digit for a barcode body (every digit but
/// the check digit).
///
/// # Algorithm
///
/// Walking the body from right to left, weights alternate 3, 1, 3, 1, ...
/// so the digit next to the check digit always has weight 3 regardless of
/// the barcode length. The check digit `d` satisfies
/// `(sum_of_weighted_products + d) mod 10 == 0`, equivalently
/// `d == (10 - (sum mod 10)) mod 10`.
///
/// # Errors
///
/// [`CheckDigitError::NonDigit`] for any character that is not a digit.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::check_digits::gs1_check_digit;
///
/// assert_eq!(gs1_check_digit("400638133393"), Ok(1));
/// ```
pub fn gs1_check_digit(body: &str) -> Result<u8, CheckDigitError> {
    ensure_digits(body)?;
    Ok(gs1_digit_ascii(body.as_bytes()))
}

fn gs1_digit_ascii(body: &[u8]) -> u8 {
    let sum = body
        .iter()
        .rev()
        .enumerate()
        .fold(0u32, |acc, (i, &byte)| {
            let weight = if i % 2 == 0 { 3 } else { 1 };
            (acc + u32::from(byte - b'0') * weight) % 10
        });
    ((10 - sum) % 10) as u8
}

/// Verifies the trailing GS1 mod-10 check digit of `code`.
///
/// Works for any length of at least two digits (GTIN-8, GTIN-12, GTIN-13,
/// GTIN-14, GSIN, SSCC). Returns `false` for shorter input or any non-digit.
/// Issuer prefixes are not consulted here; see
/// [`crate::barcode::is_valid_barcode`] for that.
///
/// # Examples
///
/// ```
/// use fieldcheck_core::check_digits::gs1_mod10;
///
/// assert!(gs1_mod10("0614141000418"));
/// assert!(!gs1_mod10("0614141000419"));
/// ```
pub fn gs1_mod10(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() < 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let (body, check) = bytes.split_at(bytes.len() - 1);
    gs1_digit_ascii(body) == check[0] - b'0'
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Returns the first non-digit character as an error.
pub(crate) fn ensure_digits(s: &str) -> Result<(), CheckDigitError> {
    match s.char_indices().find(|&(_, c)| !c.is_ascii_digit()) {
        Some((offset, found)) => Err(CheckDigitError::NonDigit { offset, found }),
        None => Ok(()),
    }
}

fn ensure_len(s: &str, expected: usize) -> Result<(), CheckDigitError> {
    if s.len() == expected {
        Ok(())
    } else {
        Err(CheckDigitError::WrongLength {
            expected,
            got: s.chars().count(),
        })
    }
}

/// Right-justifies `s` into an `N`-byte buffer of ASCII zeros.
///
/// `None` for empty input, input longer than `N`, or any non-digit.
fn zero_fill<const N: usize>(s: &str) -> Option<[u8; N]> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || bytes.len() > N || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut out = [b'0'; N];
    out[N - bytes.len()..].copy_from_slice(bytes);
    Some(out)
}
