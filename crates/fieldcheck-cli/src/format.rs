/// Report formatting: human-readable and JSON (NDJSON) modes.
///
/// This module renders [`FieldReport`] values and the end-of-run summary:
///
/// - **Human mode** (default): one aligned line per value, tagged `[ok]` or
///   `[no]` and color-coded. Colors are disabled when `--no-color` is set,
///   the `NO_COLOR` environment variable is present (per
///   <https://no-color.org>), or stdout is not a TTY.
/// - **JSON mode**: each report is serialized as a single-line JSON object
///   (NDJSON).
///
/// Both modes support a **quiet** flag (only rejected values are reported, no
/// summary) and a **verbose** flag (timing on stderr).
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use fieldcheck_core::FieldReport;
use serde_json::json;

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted.
///
/// Colors are disabled when any of the following conditions hold:
/// - `no_color_flag` is `true` (the `--no-color` CLI flag was passed).
/// - The `NO_COLOR` environment variable is present.
/// - stdout is not a TTY (e.g. the output is piped to a file).
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// ---------------------------------------------------------------------------
// ANSI escape sequences
// ---------------------------------------------------------------------------

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the report formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Report only rejected values; no summary.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes one [`FieldReport`] in human-readable format.
///
/// Format: `[ok] cpf  "111.444.777-35"  111.444.777-35` for an accepted
/// value, `[no] cpf  "11144477736"  bad_check_digit` for a rejected one, with
/// `: detail` appended when the report carries one.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report_human<W: Write>(
    writer: &mut W,
    report: &FieldReport,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet && report.valid {
        return Ok(());
    }

    let (tag, color) = if report.valid {
        ("[ok]", ANSI_GREEN)
    } else {
        ("[no]", ANSI_RED)
    };
    if config.colors {
        write!(writer, "{color}{tag}{ANSI_RESET}")?;
    } else {
        write!(writer, "{tag}")?;
    }
    write!(writer, " {}  {:?}", report.kind, report.value)?;

    match (report.reason, report.detail.as_deref()) {
        (Some(reason), Some(detail)) => writeln!(writer, "  {reason}: {detail}"),
        (Some(reason), None) => writeln!(writer, "  {reason}"),
        (None, Some(detail)) => writeln!(writer, "  {detail}"),
        (None, None) => writeln!(writer),
    }
}

/// Writes the end-of-run summary in human-readable format.
///
/// Format: `3 values checked, 1 invalid`. Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    checked: usize,
    invalid: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{checked} {} checked, {invalid} invalid",
        pluralize(checked, "value", "values"),
    )
}

/// Writes timing information in verbose mode; no-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

// ---------------------------------------------------------------------------
// JSON mode (NDJSON)
// ---------------------------------------------------------------------------

/// Writes one [`FieldReport`] as an NDJSON line.
///
/// ```json
/// {"kind":"cpf","value":"11144477736","valid":false,"reason":"bad_check_digit"}
/// ```
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report_json<W: Write>(
    writer: &mut W,
    report: &FieldReport,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet && report.valid {
        return Ok(());
    }
    write_json_line(writer, report)
}

/// Writes the summary as a final NDJSON line.
///
/// Format: `{"summary":{"checked":3,"valid":2,"invalid":1}}`. Suppressed in
/// quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    checked: usize,
    invalid: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let summary = json!({
        "summary": {
            "checked": checked,
            "valid": checked.saturating_sub(invalid),
            "invalid": invalid,
        }
    });
    write_json_line(writer, &summary)
}

/// Writes `{"timing":{"label":...,"ms":...}}` in verbose mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_json<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    let timing = json!({ "timing": { "label": label, "ms": ms } });
    write_json_line(writer, &timing)
}

/// Serializes `value` on a single line followed by `\n`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json_line<W: Write, T: serde::Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Dispatch by format
// ---------------------------------------------------------------------------

/// Writes one report in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &FieldReport,
    format: OutputFormat,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => write_report_human(writer, report, config),
        OutputFormat::Json => write_report_json(writer, report, config),
    }
}

/// Writes the summary in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    checked: usize,
    invalid: usize,
    format: OutputFormat,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => write_summary_human(writer, checked, invalid, config),
        OutputFormat::Json => write_summary_json(writer, checked, invalid, config),
    }
}

/// Writes timing in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    format: OutputFormat,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => write_timing_human(writer, label, duration, config),
        OutputFormat::Json => write_timing_json(writer, label, duration, config),
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Returns the singular or plural form of `word` depending on `count`.
fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
