//! Integration tests for the pitchlog pipeline

use clap::Parser;
use pitchlog_cli::{run, Cli, CliError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIRST: &str = "\
Jane Doe (She/Her)  3:45 PM
· 2nd
Talent Partner at Mollie
Mar 7, 2023
Hi Nikita, 80k-120k for a Python role at https://mollie.com";

const SECOND: &str = "\
Bob Smith sent the following messages at 9:05 AM
Dec 12, 2022
Hello, an exciting opportunity at Elastic!";

const KEYS: [&str; 16] = [
    "sender_name",
    "sender_title",
    "sender_pronouns",
    "has_name",
    "read_cv",
    "autogenerated",
    "salary_low",
    "salary_high",
    "has_emoji",
    "has_email",
    "has_url",
    "company",
    "python",
    "chars",
    "date",
    "time",
];

/// Helper to write an archive into a temp dir
fn write_archive(dir: &TempDir, blocks: &[&str]) -> String {
    let path = dir.path().join("raw.txt");
    fs::write(&path, blocks.join("\n\n\n\n\n")).unwrap();
    path.to_str().unwrap().to_string()
}

fn parse_lines(out: Vec<u8>) -> Vec<serde_json::Value> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_two_blocks_two_lines_in_order() {
    let dir = TempDir::new().unwrap();
    let input = write_archive(&dir, &[FIRST, SECOND]);
    let cli = Cli::try_parse_from(["pitchlog", input.as_str()]).unwrap();

    let mut out = Vec::new();
    let summary = run(&cli, &mut out).unwrap();
    assert_eq!(summary.written, 2);

    let records = parse_lines(out);
    assert_eq!(records.len(), 2);
    for record in &records {
        let obj = record.as_object().unwrap();
        assert_eq!(obj.len(), KEYS.len());
        for key in KEYS {
            assert!(obj.contains_key(key), "missing {}", key);
        }
    }

    assert_eq!(records[0]["sender_name"], "Jane Doe");
    assert_eq!(records[0]["sender_pronouns"], "she");
    assert_eq!(records[0]["salary_low"], "80");
    assert_eq!(records[0]["salary_high"], "120");
    assert_eq!(records[0]["company"], "Mollie");
    assert_eq!(records[0]["date"], "2023-03-07");
    assert_eq!(records[0]["time"], "15:03");
    assert_eq!(records[0]["autogenerated"], false);

    assert_eq!(records[1]["sender_name"], "Bob Smith");
    assert_eq!(records[1]["company"], "Elastic");
    assert_eq!(records[1]["autogenerated"], true);
    assert_eq!(records[1]["date"], "2022-12-12");
    assert_eq!(records[1]["time"], "09:09");
}

#[test]
fn test_fixed_time_format_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_archive(&dir, &[FIRST]);
    let cli = Cli::try_parse_from(["pitchlog", input.as_str(), "--time-format", "fixed"]).unwrap();

    let mut out = Vec::new();
    run(&cli, &mut out).unwrap();
    assert_eq!(parse_lines(out)[0]["time"], "15:45");
}

#[test]
fn test_malformed_block_aborts_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_archive(&dir, &[FIRST, "Jane Doe  3:45 PM\nno date", SECOND]);
    let cli = Cli::try_parse_from(["pitchlog", input.as_str()]).unwrap();

    let mut out = Vec::new();
    let err = run(&cli, &mut out).unwrap_err();
    match err {
        CliError::MalformedBlock { index, source } => {
            assert_eq!(index, 2);
            assert!(source.to_string().contains("Jane Doe"));
        }
        other => panic!("unexpected: {:?}", other),
    }
    assert_eq!(parse_lines(out).len(), 1);
}

#[test]
fn test_skip_policy_from_config_file() {
    let dir = TempDir::new().unwrap();
    let input = write_archive(&dir, &[FIRST, "garbage", SECOND]);
    let config_path = dir.path().join("pitchlog.toml");
    fs::write(&config_path, "on_malformed = \"skip\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "pitchlog",
        input.as_str(),
        "--config",
        config_path.to_str().unwrap(),
    ])
    .unwrap();

    let mut out = Vec::new();
    let summary = run(&cli, &mut out).unwrap();
    assert_eq!(summary.blocks, 3);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].index, 2);
    assert_eq!(parse_lines(out).len(), 2);
}

#[test]
fn test_missing_archive() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");
    assert!(!Path::new(&missing).exists());

    let cli = Cli::try_parse_from(["pitchlog", missing.to_str().unwrap()]).unwrap();
    let mut out = Vec::new();
    assert!(matches!(run(&cli, &mut out), Err(CliError::ReadArchive { .. })));
}
