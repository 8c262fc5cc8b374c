/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `fieldcheck` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The tool could not read the input or an
///   argument is unusable, so no value was judged.
/// - Exit code **1**: logical failure. Every value was judged and at least
///   one was rejected, or a lookup found nothing.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `fieldcheck` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// `"-"` for stdin, `"stdout"`, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// An argument was parsed by clap but is not acceptable.
    InvalidArgument {
        /// What was wrong with it.
        detail: String,
    },

    /// `check` was given no values, neither positional nor via `--input`.
    NoValues,

    // --- Exit code 1: logical failures ---
    /// One or more checked values were rejected.
    ///
    /// The per-value reports have already been printed.
    InvalidValues {
        /// Number of rejected values.
        invalid: usize,
        /// Number of values checked.
        total: usize,
    },

    /// No GS1 prefix range covers the requested prefix.
    UnknownPrefix {
        /// The three-digit prefix.
        prefix: u32,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::InvalidArgument { .. }
            | Self::NoValues => 2,

            Self::InvalidValues { .. } | Self::UnknownPrefix { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::InvalidArgument { detail } => format!("error: invalid argument: {detail}"),
            Self::NoValues => {
                "error: no values to check; pass VALUE arguments or --input".to_owned()
            }
            Self::InvalidValues { invalid, total } => {
                format!("error: {invalid} of {total} values failed the check")
            }
            Self::UnknownPrefix { prefix } => {
                format!("error: no GS1 issuer for prefix {prefix:03}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("values.txt"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/values.txt"),
            },
            CliError::FileTooLarge {
                source: "big.txt".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "bad.txt".to_owned(),
                byte_offset: 42,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "stdout".to_owned(),
                detail: "device full".to_owned(),
            },
            CliError::InvalidArgument {
                detail: "non-digit".to_owned(),
            },
            CliError::NoValues,
        ];
        for e in &errors {
            assert_eq!(e.exit_code(), 2, "{e}");
        }
    }

    #[test]
    fn logical_failures_are_exit_1() {
        assert_eq!(
            CliError::InvalidValues {
                invalid: 1,
                total: 3
            }
            .exit_code(),
            1
        );
        assert_eq!(CliError::UnknownPrefix { prefix: 1 }.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("cpfs.txt"),
        };
        let msg = e.message();
        assert!(msg.contains("cpfs.txt"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_without_actual_mentions_limit() {
        let e = CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: 512,
            actual: None,
        };
        assert!(e.message().contains("512"));
    }

    #[test]
    fn invalid_values_message_counts() {
        let msg = CliError::InvalidValues {
            invalid: 2,
            total: 5,
        }
        .message();
        assert_eq!(msg, "error: 2 of 5 values failed the check");
    }

    #[test]
    fn unknown_prefix_is_zero_padded() {
        let msg = CliError::UnknownPrefix { prefix: 1 }.message();
        assert!(msg.contains("001"), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::NoValues;
        assert_eq!(format!("{e}"), e.message());
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(CliError::NoValues);
        assert!(!e.to_string().is_empty());
    }
}
