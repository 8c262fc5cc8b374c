//! Implementation of `fieldcheck prefix`.
//!
//! Resolves the GS1 issuer of a barcode (first three digits) or of a bare
//! prefix of at most three digits: `7891000315507` and `789` both resolve to
//! Brasil.
//!
//! Exit codes: 0 = issuer printed, 1 = no issuer for the prefix,
//! 2 = the code is empty or contains a non-digit.
use std::io::Write;

use fieldcheck_core::gs1_prefix::{self, PrefixRange};
use serde_json::json;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_json_line;

use super::write_failed;

/// Runs the `prefix` command.
///
/// # Errors
///
/// - [`CliError::InvalidArgument`] when `code` is empty or not all digits.
/// - [`CliError::UnknownPrefix`] when no range covers the prefix.
pub fn run(code: &str, format: OutputFormat) -> Result<(), CliError> {
    let prefix = parse_prefix(code)?;
    let range = gs1_prefix::lookup(prefix).ok_or(CliError::UnknownPrefix { prefix })?;
    let stdout = std::io::stdout();
    write_range(&mut stdout.lock(), prefix, range, format).map_err(write_failed("stdout"))
}

/// Up to three digits are the prefix itself; longer codes contribute their
/// first three digits.
fn parse_prefix(code: &str) -> Result<u32, CliError> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CliError::InvalidArgument {
            detail: format!("expected a barcode or prefix of digits, got {code:?}"),
        });
    }
    let head = code.get(..3).unwrap_or(code);
    head.parse().map_err(|_| CliError::InvalidArgument {
        detail: format!("cannot read a prefix from {code:?}"),
    })
}

fn write_range<W: Write>(
    writer: &mut W,
    prefix: u32,
    range: &PrefixRange,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(writer, "{}", range.label),
        OutputFormat::Json => write_json_line(
            writer,
            &json!({
                "prefix": prefix,
                "country": range.label,
                "low": range.low,
                "high": range.high,
            }),
        ),
    }
}
