/// Command module for the `fieldcheck` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or
/// a [`crate::error::CliError`] on failure.
pub mod check;
pub mod md5;
pub mod mod11;
pub mod prefix;

use crate::error::CliError;

/// Builds a mapper from a write failure on `stream` to [`CliError::IoError`].
pub(crate) fn write_failed(stream: &'static str) -> impl FnOnce(std::io::Error) -> CliError {
    move |e| CliError::IoError {
        source: stream.to_owned(),
        detail: e.to_string(),
    }
}
