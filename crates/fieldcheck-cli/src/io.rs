/// Input reading for `--input` arguments.
///
/// All filesystem and stdin access of the `fieldcheck` binary goes through
/// this module; `fieldcheck-core` never does I/O.
///
/// - Disk files: size checked via `std::fs::metadata` before reading.
/// - Stdin: read through `Read::take` so the buffer never exceeds the limit.
/// - Content must be UTF-8; the offset of the first bad byte is reported.
/// - Every failure becomes a [`CliError`] with exit code 2.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) when the file is missing or unreadable,
/// when the input exceeds `max_size` bytes, or when it is not valid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let (bytes, label) = match source {
        PathOrStdin::Path(path) => (read_file(path, max_size)?, path.display().to_string()),
        PathOrStdin::Stdin => (read_stdin(max_size)?, "-".to_owned()),
    };
    bytes_to_string(bytes, &label)
}

/// Reads `source` and returns one value per non-blank line.
///
/// `str::lines` splits on `\n` and `\r\n` but leaves a `\r` on a final line
/// with no newline, so that one is stripped here. Other whitespace is kept:
/// a value with stray spaces is a value the user typed.
///
/// # Errors
///
/// Same as [`read_input`].
pub fn read_values(source: &PathOrStdin, max_size: u64) -> Result<Vec<String>, CliError> {
    let content = read_input(source, max_size)?;
    Ok(split_values(&content))
}

fn split_values(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Disk files
// ---------------------------------------------------------------------------

fn read_file(path: &Path, max_size: u64) -> Result<Vec<u8>, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))
}

/// Maps a `std::io::Error` from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stdin
// ---------------------------------------------------------------------------

/// Reads stdin, capped at `max_size` bytes.
///
/// When exactly `max_size` bytes arrive, one more byte is probed to tell
/// "at the limit" from "over the limit".
fn read_stdin(max_size: u64) -> Result<Vec<u8>, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();
    let mut buf: Vec<u8> = Vec::new();

    handle
        .by_ref()
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    Ok(buf)
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
