//! Implementation of `fieldcheck mod11`.
//!
//! Prints the modulo-11 check digit of a digit string. With the default cap
//! of 9 this is the CNPJ scheme; `--cap 0` lets the weights grow unbounded.
//!
//! Exit codes: 0 = digit printed, 2 = the input contains a non-digit.
use std::io::Write;

use fieldcheck_core::modulo11;
use serde_json::json;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_json_line;

use super::write_failed;

/// Runs the `mod11` command.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] when `digits` contains a non-digit
/// character.
pub fn run(digits: &str, cap: u32, format: OutputFormat) -> Result<(), CliError> {
    let digit = modulo11(digits, cap).map_err(|e| CliError::InvalidArgument {
        detail: format!("{digits:?}: {e}"),
    })?;
    let stdout = std::io::stdout();
    write_digit(&mut stdout.lock(), digits, cap, digit, format).map_err(write_failed("stdout"))
}

fn write_digit<W: Write>(
    writer: &mut W,
    digits: &str,
    cap: u32,
    digit: u8,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(writer, "{digit}"),
        OutputFormat::Json => write_json_line(
            writer,
            &json!({ "digits": digits, "cap": cap, "check_digit": digit }),
        ),
    }
}
