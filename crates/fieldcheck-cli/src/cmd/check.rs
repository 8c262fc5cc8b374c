//! Implementation of `fieldcheck check`.
//!
//! Checks every value as a field of one kind and prints one report per value
//! to stdout. Values come from the positional arguments followed by the
//! non-blank lines of `--input`, in that order.
//!
//! Exit codes: 0 = every value accepted, 1 = at least one rejected,
//! 2 = unreadable input or no values at all.
use std::io::Write;
use std::time::Instant;

use fieldcheck_core::{FieldKind, FieldRules, check_field};

use crate::error::CliError;
use crate::format::{FormatterConfig, write_report, write_summary, write_timing};
use crate::io::read_values;
use crate::{OutputFormat, PathOrStdin};

use super::write_failed;

/// Parsed arguments of `fieldcheck check`.
#[derive(Debug)]
pub struct CheckArgs {
    /// Kind every value is checked as.
    pub kind: FieldKind,
    /// Positional values.
    pub values: Vec<String>,
    /// Optional file or stdin with one value per line.
    pub input: Option<PathOrStdin>,
    /// Length and mask rules.
    pub rules: FieldRules,
}

/// Runs the `check` command.
///
/// # Errors
///
/// - [`CliError::NoValues`] when neither positional values nor `--input`
///   lines were supplied.
/// - Any read error from `--input` (exit 2).
/// - [`CliError::InvalidValues`] when at least one value is rejected.
pub fn run(
    args: CheckArgs,
    max_file_size: u64,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let CheckArgs {
        kind,
        mut values,
        input,
        rules,
    } = args;

    if let Some(source) = &input {
        values.extend(read_values(source, max_file_size)?);
    }
    if values.is_empty() {
        return Err(CliError::NoValues);
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    check_values(
        kind,
        &values,
        &rules,
        format,
        config,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Checks `values`, writing reports to `out` and the summary to `err`.
fn check_values<O: Write, E: Write>(
    kind: FieldKind,
    values: &[String],
    rules: &FieldRules,
    format: OutputFormat,
    config: &FormatterConfig,
    out: &mut O,
    err: &mut E,
) -> Result<(), CliError> {
    let start = Instant::now();
    let mut invalid = 0usize;

    for value in values {
        let report = check_field(kind, value, rules);
        if !report.valid {
            invalid += 1;
        }
        write_report(out, &report, format, config).map_err(write_failed("stdout"))?;
    }
    out.flush().map_err(write_failed("stdout"))?;

    write_summary(err, values.len(), invalid, format, config).map_err(write_failed("stderr"))?;
    write_timing(err, "checked", start.elapsed(), format, config)
        .map_err(write_failed("stderr"))?;

    if invalid > 0 {
        return Err(CliError::InvalidValues {
            invalid,
            total: values.len(),
        });
    }
    Ok(())
}
