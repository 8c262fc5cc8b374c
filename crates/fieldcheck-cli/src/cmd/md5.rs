//! Implementation of `fieldcheck md5`.
//!
//! Prints the lowercase hex MD5 digest of TEXT, or of the whole content of
//! `--input` (file or stdin) taken verbatim, trailing newline included.
use std::io::Write;

use fieldcheck_core::md5_hex;
use serde_json::json;

use crate::error::CliError;
use crate::format::write_json_line;
use crate::io::read_input;
use crate::{OutputFormat, PathOrStdin};

use super::write_failed;

/// Runs the `md5` command.
///
/// # Errors
///
/// Returns a read error (exit 2) when `--input` cannot be read, and
/// [`CliError::InvalidArgument`] when neither TEXT nor `--input` is given.
pub fn run(
    text: Option<&str>,
    input: Option<&PathOrStdin>,
    max_file_size: u64,
    format: OutputFormat,
) -> Result<(), CliError> {
    let digest = match (text, input) {
        (Some(text), _) => md5_hex(text),
        (None, Some(source)) => md5_hex(&read_input(source, max_file_size)?),
        (None, None) => {
            return Err(CliError::InvalidArgument {
                detail: "nothing to hash; pass TEXT or --input".to_owned(),
            });
        }
    };
    let stdout = std::io::stdout();
    write_digest(&mut stdout.lock(), &digest, format).map_err(write_failed("stdout"))
}

fn write_digest<W: Write>(writer: &mut W, digest: &str, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(writer, "{digest}"),
        OutputFormat::Json => write_json_line(writer, &json!({ "md5": digest })),
    }
}
