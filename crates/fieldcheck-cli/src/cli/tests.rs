#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::{CommandFactory, Parser};
use fieldcheck_core::FieldKind;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["check", "mod11", "prefix", "md5"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    let expected_flags = [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--no-color",
        "--help",
        "--version",
    ];
    for flag in &expected_flags {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// `fieldcheck check --help` must mention its options and every kind.
#[test]
fn test_check_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("check")
        .expect("check subcommand should exist");
    let help = format!("{}", sub.render_help());
    for needle in ["--kind", "--mask", "--min", "--max", "--input", "VALUE"] {
        assert!(help.contains(needle), "check help should mention {needle}");
    }
    for kind in FieldKind::ALL {
        assert!(
            help.contains(kind.name()),
            "check help should list kind '{}'",
            kind.name()
        );
    }
}

/// `fieldcheck mod11 --help` must mention `--cap` and its default.
#[test]
fn test_mod11_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("mod11")
        .expect("mod11 subcommand should exist");
    let help = format!("{}", sub.render_help());
    assert!(help.contains("--cap"), "mod11 help should mention --cap");
    assert!(help.contains("DIGITS"), "mod11 help should mention DIGITS");
}

#[test]
fn test_clap_definition_is_consistent() {
    Cli::command().debug_assert();
}

// ── argument parsing ─────────────────────────────────────────────────────────

#[test]
fn test_check_parses_kind_and_values() {
    let cli = Cli::try_parse_from([
        "fieldcheck",
        "check",
        "--kind",
        "cpf",
        "11144477735",
        "11144477736",
    ])
    .expect("should parse");
    match cli.command {
        Command::Check { kind, values, .. } => {
            assert_eq!(FieldKind::from(kind), FieldKind::Cpf);
            assert_eq!(values, vec!["11144477735", "11144477736"]);
        }
        _ => panic!("expected check"),
    }
}

#[test]
fn test_check_rejects_unknown_kind() {
    let result = Cli::try_parse_from(["fieldcheck", "check", "--kind", "iban", "x"]);
    assert!(result.is_err());
}

#[test]
fn test_mod11_cap_defaults_to_nine() {
    let cli = Cli::try_parse_from(["fieldcheck", "mod11", "112223330001"]).expect("should parse");
    match cli.command {
        Command::Mod11 { cap, .. } => assert_eq!(cap, 9),
        _ => panic!("expected mod11"),
    }
}

#[test]
fn test_md5_requires_text_or_input() {
    assert!(Cli::try_parse_from(["fieldcheck", "md5"]).is_err());
    assert!(Cli::try_parse_from(["fieldcheck", "md5", "--input", "-"]).is_ok());
    assert!(Cli::try_parse_from(["fieldcheck", "md5", "abc", "--input", "-"]).is_err());
}

#[test]
fn test_stdin_sentinel_parses() {
    let cli = Cli::try_parse_from(["fieldcheck", "md5", "--input", "-"]).expect("should parse");
    match cli.command {
        Command::Md5 { input, .. } => {
            assert!(matches!(input, Some(PathOrStdin::Stdin)));
        }
        _ => panic!("expected md5"),
    }
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let result = Cli::try_parse_from(["fieldcheck", "-q", "-v", "prefix", "789"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["fieldcheck", "prefix", "789", "--format", "json"])
        .expect("should parse");
    assert!(matches!(cli.format, OutputFormat::Json));
}

#[test]
fn test_every_kind_arg_maps_to_a_distinct_field_kind() {
    let mapped: Vec<FieldKind> = KindArg::value_variants()
        .iter()
        .map(|&k| FieldKind::from(k))
        .collect();
    assert_eq!(mapped, FieldKind::ALL.to_vec());
}
