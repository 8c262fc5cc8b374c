//! Property-based tests for the check-digit schemes and the GS1 prefix table.
//!
//! Generates random digit bodies, appends the computed check digits and
//! verifies the validators accept the result, reject single-digit
//! corruptions of the check digit, and never panic on arbitrary input.
#![allow(clippy::expect_used)]

use fieldcheck_core::{
    check_barcode, cnpj, cnpj_check_digits, country_for_prefix, cpf, cpf_check_digits,
    gs1_check_digit, gs1_mod10, gs1_prefix, is_valid_barcode, modulo11,
};
use proptest::prelude::*;

/// Linear-scan reference for the binary-search lookup.
fn linear_lookup(prefix: u32) -> Option<&'static str> {
    gs1_prefix::ranges()
        .iter()
        .find(|r| u32::from(r.low) <= prefix && prefix <= u32::from(r.high))
        .map(|r| r.label)
}

fn with_digits(body: &str, digits: &[u8]) -> String {
    let mut s = body.to_owned();
    for d in digits {
        s.push(char::from(b'0' + d));
    }
    s
}

/// Replaces the last digit with a different one.
fn corrupt_last(code: &str) -> String {
    let (body, last) = code.split_at(code.len() - 1);
    let d = last.as_bytes()[0] - b'0';
    with_digits(body, &[(d + 1) % 10])
}

#[test]
fn binary_search_agrees_with_linear_scan_everywhere() {
    for prefix in 0..=1000 {
        assert_eq!(
            country_for_prefix(prefix),
            linear_lookup(prefix),
            "prefix {prefix}"
        );
    }
}

#[test]
fn prefix_ranges_are_sorted_and_disjoint() {
    let ranges = gs1_prefix::ranges();
    assert!(!ranges.is_empty());
    for pair in ranges.windows(2) {
        assert!(pair[0].low <= pair[0].high);
        assert!(pair[0].high < pair[1].low, "{:?} / {:?}", pair[0], pair[1]);
    }
}

proptest! {
    #[test]
    fn cpf_with_computed_digits_is_valid(body in "[0-9]{9}") {
        let digits = cpf_check_digits(&body).expect("nine digits");
        let full = with_digits(&body, &digits);
        prop_assert!(cpf(&full));
        prop_assert!(!cpf(&corrupt_last(&full)));
    }

    #[test]
    fn cnpj_with_computed_digits_is_valid(body in "[0-9]{12}") {
        let digits = cnpj_check_digits(&body).expect("twelve digits");
        let full = with_digits(&body, &digits);
        prop_assert!(cnpj(&full));
        prop_assert!(!cnpj(&corrupt_last(&full)));
    }

    #[test]
    fn cnpj_digits_are_chained_modulo11(body in "[0-9]{12}") {
        let first = modulo11(&body, 9).expect("digits");
        let second = modulo11(&with_digits(&body, &[first]), 9).expect("digits");
        prop_assert_eq!(cnpj_check_digits(&body).expect("twelve digits"), [first, second]);
    }

    #[test]
    fn modulo11_digit_is_single_decimal(digits in "[0-9]{0,40}", cap in 0u32..20) {
        let d = modulo11(&digits, cap).expect("digits");
        prop_assert!(d <= 9);
    }

    #[test]
    fn gs1_with_computed_digit_is_valid(body in "[0-9]{7,17}") {
        let digit = gs1_check_digit(&body).expect("digits");
        let full = with_digits(&body, &[digit]);
        prop_assert!(gs1_mod10(&full));
        prop_assert!(!gs1_mod10(&corrupt_last(&full)));
    }

    #[test]
    fn barcode_validity_is_prefix_and_checksum(body in "[0-9]{12}") {
        let digit = gs1_check_digit(&body).expect("digits");
        let full = with_digits(&body, &[digit]);
        let prefix: u32 = body[..3].parse().expect("three digits");
        prop_assert_eq!(is_valid_barcode(&full), country_for_prefix(prefix).is_some());
    }

    #[test]
    fn validators_never_panic(input in "\\PC{0,24}") {
        let _cpf = cpf(&input);
        let _cnpj = cnpj(&input);
        let _gs1 = gs1_mod10(&input);
        let _barcode = check_barcode(&input);
        let _mod11 = modulo11(&input, 9);
    }

    #[test]
    fn validators_are_pure(input in "[0-9]{0,16}") {
        prop_assert_eq!(cpf(&input), cpf(&input));
        prop_assert_eq!(cnpj(&input), cnpj(&input));
        prop_assert_eq!(is_valid_barcode(&input), is_valid_barcode(&input));
    }
}
