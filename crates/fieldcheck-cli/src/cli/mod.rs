//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fieldcheck_core::FieldKind;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits aligned, optionally colored lines. `Json` emits one JSON
/// object per line (NDJSON) on stdout and NDJSON diagnostics on stderr.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// Field kind accepted by `check --kind`.
///
/// Mirrors [`FieldKind`] so that clap can list the possible values in help
/// output without `fieldcheck-core` depending on clap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Digits only.
    Integer,
    /// Digits with one decimal point.
    Real,
    /// Integer or real.
    Number,
    /// Hexadecimal digits.
    Hex,
    /// ASCII letters and whitespace.
    Alphabetic,
    /// E-mail address (lowercase).
    Email,
    /// Date matching `--mask` (default dd/MM/yyyy).
    Date,
    /// Brazilian individual taxpayer number.
    Cpf,
    /// Brazilian company registration number.
    Cnpj,
    /// GS1 barcode (GTIN/EAN/UPC, GSIN, SSCC).
    Barcode,
}

impl From<KindArg> for FieldKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Integer => FieldKind::Integer,
            KindArg::Real => FieldKind::Real,
            KindArg::Number => FieldKind::Number,
            KindArg::Hex => FieldKind::Hex,
            KindArg::Alphabetic => FieldKind::Alphabetic,
            KindArg::Email => FieldKind::Email,
            KindArg::Date => FieldKind::Date,
            KindArg::Cpf => FieldKind::Cpf,
            KindArg::Cnpj => FieldKind::Cnpj,
            KindArg::Barcode => FieldKind::Barcode,
        }
    }
}

/// All top-level subcommands exposed by the `fieldcheck` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Check form field values of one kind.
    Check {
        /// Kind of field the values belong to.
        #[arg(long, short = 'k', value_enum)]
        kind: KindArg,
        /// Values to check.
        #[arg(value_name = "VALUE")]
        values: Vec<String>,
        /// Read additional values, one per non-blank line, from FILE or `-` for stdin.
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<PathOrStdin>,
        /// Date mask for `--kind date` (e.g. `yyyy-MM-dd HH:mm`).
        #[arg(long, value_name = "MASK")]
        mask: Option<String>,
        /// Minimum length in characters.
        #[arg(long, value_name = "N")]
        min: Option<usize>,
        /// Maximum length in characters.
        #[arg(long, value_name = "N")]
        max: Option<usize>,
    },

    /// Compute a modulo-11 check digit.
    Mod11 {
        /// Decimal digits to weigh.
        #[arg(value_name = "DIGITS")]
        digits: String,
        /// Weight at which the cycle resets to 2 (0 = never reset).
        #[arg(long, default_value = "9")]
        cap: u32,
    },

    /// Look up the GS1 issuer of a barcode or a three-digit prefix.
    Prefix {
        /// A barcode, or a prefix of at most three digits.
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print the MD5 hex digest of a text.
    Md5 {
        /// Text to hash, taken verbatim.
        #[arg(value_name = "TEXT", required_unless_present = "input")]
        text: Option<String>,
        /// Hash the contents of FILE, or `-` for stdin.
        #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "text")]
        input: Option<PathOrStdin>,
    },
}

/// Root CLI struct for the `fieldcheck` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "fieldcheck",
    version,
    about = "Form field and Brazilian document checker",
    long_about = "Checks form field values: numbers, e-mail addresses, dates against a\n\
                  mask, CPF and CNPJ check digits, and GS1 barcodes. Also computes\n\
                  modulo-11 check digits, GS1 issuer prefixes and MD5 digests."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress valid reports and summaries (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report timing on stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes for `--input`.
    ///
    /// Can also be set via the `FIELDCHECK_MAX_FILE_SIZE` environment
    /// variable. The CLI flag takes precedence over the environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "FIELDCHECK_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests;
