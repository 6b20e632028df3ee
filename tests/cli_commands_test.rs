#![cfg(feature = "cli")]

use clap::Parser;
use daily_kit::app::commands::run;
use daily_kit::CliConfig;
use std::io::Write;
use tempfile::NamedTempFile;

fn users_file() -> NamedTempFile {
    let mut temp_file = NamedTempFile::with_suffix(".json").unwrap();
    temp_file
        .write_all(
            br#"[
                {"name": "Sat", "birthday": "1985.05.11"},
                {"name": "Wed", "birthday": "1990.05.15"},
                {"name": "Later", "birthday": "1990.05.20"}
            ]"#,
        )
        .unwrap();
    temp_file
}

#[test]
fn test_birthdays_command_plain_output() {
    let file = users_file();
    let path = file.path().to_str().unwrap();
    let config =
        CliConfig::try_parse_from(["daily-kit", "--today", "2024-05-08", "birthdays", path])
            .unwrap();

    let output = run(&config).unwrap();
    assert_eq!(output, "Sat: 2024.05.13\nWed: 2024.05.15");
}

#[test]
fn test_birthdays_command_json_output() {
    let file = users_file();
    let path = file.path().to_str().unwrap();
    let config = CliConfig::try_parse_from([
        "daily-kit",
        "--today",
        "2024-05-08",
        "birthdays",
        path,
        "--json",
    ])
    .unwrap();

    let output = run(&config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let dates: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["congratulation_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024.05.13", "2024.05.15"]);
}

#[test]
fn test_birthdays_command_missing_file() {
    let config = CliConfig::try_parse_from(["daily-kit", "birthdays", "/nonexistent/users.json"])
        .unwrap();

    let err = run(&config).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load users"));
}

#[test]
fn test_ticket_command_full_allowed_range() {
    let config = CliConfig::try_parse_from(["daily-kit", "ticket", "1", "1000", "5"]).unwrap();
    let output = run(&config).unwrap();
    assert_eq!(output.split(' ').count(), 5);

    let config = CliConfig::try_parse_from(["daily-kit", "ticket", "1", "1001", "5"]).unwrap();
    assert_eq!(run(&config).unwrap(), "");
}
