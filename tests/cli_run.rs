use std::fs;

use clap::Parser;
use tempfile::tempdir;
use salbp::cli::CliArgs;
use salbp::errors::SalbpError;
use salbp::ordering::Method;
use salbp::run;
use salbp_test_utils::fixtures::{REFERENCE_LINE, TWO_CHAINS};

#[test]
fn method_flag_accepts_known_names_only() {
    let args = CliArgs::try_parse_from(["salbp", "-m", "rpw", "--method", "WET"]).unwrap();
    assert_eq!(args.methods, vec![Method::Rpw, Method::Wet]);

    let err = CliArgs::try_parse_from(["salbp", "--method", "SPT"]).unwrap_err();
    assert!(err.to_string().contains("SPT"));
}

#[test]
fn run_balances_a_task_file() {
    let dir = tempdir().unwrap();
    let tasks = dir.path().join("line.txt");
    fs::write(&tasks, REFERENCE_LINE).unwrap();
    let config = dir.path().join("Salbp.toml");
    fs::write(&config, "[config]\nworkstations = 4\n").unwrap();

    let args = CliArgs::try_parse_from([
        "salbp",
        tasks.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();

    run(args).unwrap();
}

#[test]
fn run_uses_inline_tasks_and_dry_run() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("Salbp.toml");
    fs::write(
        &config,
        format!("[config]\nworkstations = 2\n\n[tasks]\ninline = \"\"\"\n{TWO_CHAINS}\"\"\"\n"),
    )
    .unwrap();

    for extra in [None, Some("--dry-run")] {
        let mut argv = vec!["salbp", "--config", config.to_str().unwrap()];
        argv.extend(extra);
        let args = CliArgs::try_parse_from(argv).unwrap();
        run(args).unwrap();
    }
}

#[test]
fn run_resolves_task_file_relative_to_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("line.txt"), TWO_CHAINS).unwrap();
    let config = dir.path().join("Salbp.toml");
    fs::write(&config, "[tasks]\nfile = \"line.txt\"\n").unwrap();

    let args = CliArgs::try_parse_from([
        "salbp",
        "--config",
        config.to_str().unwrap(),
        "-w",
        "2",
        "-m",
        "WET",
    ])
    .unwrap();

    run(args).unwrap();
}

#[test]
fn run_without_any_task_input_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("Salbp.toml");
    fs::write(&config, "[config]\nworkstations = 2\n").unwrap();

    let args = CliArgs::try_parse_from(["salbp", "--config", config.to_str().unwrap()]).unwrap();
    let err = run(args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SalbpError>(),
        Some(SalbpError::MissingInput)
    ));
}

#[test]
fn run_reports_cycles_and_bad_records() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("Salbp.toml");
    fs::write(&config, "").unwrap();

    let cyclic = dir.path().join("cyclic.txt");
    fs::write(&cyclic, "1 3 2\n2 3 3\n3 1 1\n").unwrap();
    let args = CliArgs::try_parse_from([
        "salbp",
        cyclic.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    assert!(matches!(
        run(args).unwrap_err().downcast_ref::<SalbpError>(),
        Some(SalbpError::GraphCycle(_))
    ));

    let malformed = dir.path().join("malformed.txt");
    fs::write(&malformed, "1 3\n2 x ; 1\n").unwrap();
    let args = CliArgs::try_parse_from([
        "salbp",
        malformed.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    assert!(matches!(
        run(args).unwrap_err().downcast_ref::<SalbpError>(),
        Some(SalbpError::Parse { line: 2, .. })
    ));
}

#[test]
fn zero_workstations_on_the_command_line_fails() {
    let dir = tempdir().unwrap();
    let tasks = dir.path().join("line.txt");
    fs::write(&tasks, TWO_CHAINS).unwrap();
    let config = dir.path().join("Salbp.toml");
    fs::write(&config, "").unwrap();

    let args = CliArgs::try_parse_from([
        "salbp",
        tasks.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "-w",
        "0",
    ])
    .unwrap();

    assert!(run(args).is_err());
}
