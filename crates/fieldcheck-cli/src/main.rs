mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser;
use fieldcheck_core::FieldRules;

use cli::{Cli, Command};
pub(crate) use cli::{OutputFormat, PathOrStdin};
use error::CliError;
use format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);
    match cli.command {
        Command::Check {
            kind,
            values,
            input,
            mask,
            min,
            max,
        } => cmd::check::run(
            cmd::check::CheckArgs {
                kind: kind.into(),
                values,
                input,
                rules: FieldRules {
                    min_length: min,
                    max_length: max,
                    mask,
                },
            },
            cli.max_file_size,
            cli.format,
            &config,
        ),
        Command::Mod11 { digits, cap } => cmd::mod11::run(&digits, cap, cli.format),
        Command::Prefix { code } => cmd::prefix::run(&code, cli.format),
        Command::Md5 { text, input } => cmd::md5::run(
            text.as_deref(),
            input.as_ref(),
            cli.max_file_size,
            cli.format,
        ),
    }
}
