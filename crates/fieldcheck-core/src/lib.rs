#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod barcode;
pub mod check_digits;
pub mod date_mask;
pub mod digest;
pub mod field;
pub mod gs1_prefix;
pub mod newtypes;
pub mod predicates;

pub use barcode::{BarcodeError, BarcodeFormat, BarcodeInfo, check_barcode, is_valid_barcode};
pub use check_digits::{
    CheckDigitError, cnpj, cnpj_check_digits, cnpj_strict, cpf, cpf_check_digits, cpf_strict,
    gs1_check_digit, gs1_mod10, modulo11,
};
pub use date_mask::{DateMaskError, TranslatedMask, is_valid_date, translate_mask};
pub use digest::{md5_hex, md5_hex_bytes};
pub use field::{
    DEFAULT_DATE_MASK, FieldKind, FieldReport, FieldRules, Reason, UnknownFieldKind, check_field,
};
pub use gs1_prefix::{PrefixRange, country_for_prefix, prefix_of};
pub use newtypes::{Cnpj, Cpf, Gtin, NewtypeError};
pub use predicates::{
    is_alphabetic, is_email, is_empty, is_hex, is_integer, is_number, is_real, max_length,
    min_length,
};

/// Returns the current version of the fieldcheck-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
