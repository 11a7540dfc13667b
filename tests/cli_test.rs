use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tempfile::NamedTempFile;

use confab::cli::commands::check::{self, CheckArgs};
use confab::cli::{Cli, Commands};

#[test]
fn parse_check_command() {
    let cli = Cli::try_parse_from([
        "confab",
        "check",
        "--config-file",
        "/var/vcap/jobs/confab/config.json",
    ])
    .unwrap();

    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.config_file,
                PathBuf::from("/var/vcap/jobs/confab/config.json")
            );
        }
        _ => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
}

#[test]
fn parse_defaults_command_with_json_flag() {
    let cli = Cli::try_parse_from(["confab", "defaults", "--json"]).unwrap();

    assert!(matches!(cli.command, Commands::Defaults));
    assert!(cli.json);
}

#[test]
fn check_resolves_valid_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"node": {{"name": "nodename"}}}}"#).unwrap();
    file.flush().unwrap();

    let args = CheckArgs {
        config_file: file.path().to_path_buf(),
    };
    check::execute(args, true).expect("valid file should resolve");
}

#[test]
fn check_propagates_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{%%%").unwrap();
    file.flush().unwrap();

    let args = CheckArgs {
        config_file: file.path().to_path_buf(),
    };
    let err = check::execute(args, true).expect_err("garbage file should fail");
    assert!(
        format!("{err:#}").contains("invalid character"),
        "unexpected error text: {err:#}"
    );
}

#[test]
fn check_fails_on_missing_file() {
    let args = CheckArgs {
        config_file: PathBuf::from("/nonexistent/confab.json"),
    };
    let err = check::execute(args, true).expect_err("missing file should fail");
    assert!(format!("{err:#}").contains("failed to read"));
}
