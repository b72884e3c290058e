use crate::helpers::cli_runner::CliRunner;

use serde_json::Value;
use std::fs;

#[test]
fn i1_cfg_shows_defaults() {
    let res = CliRunner::new().run(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();

    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"].as_str(), Some("default"));
    assert_eq!(json["ai"]["value"].as_str(), Some("scripted"));
    assert_eq!(json["pause"]["value"].as_bool(), Some(true));
    assert_eq!(json["pause"]["source"].as_str(), Some("default"));
}

#[test]
fn i2_env_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("battler.toml");
    fs::write(&path, "seed = 11\npause = false\n").unwrap();
    let path = path.to_string_lossy().into_owned();

    let res = CliRunner::new().run_with_env(
        &["cfg"],
        &[("BATTLER_CONFIG", path.as_str()), ("BATTLER_SEED", "12")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(12));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["pause"]["value"].as_bool(), Some(false));
    assert_eq!(json["pause"]["source"].as_str(), Some("file"));
}

#[test]
fn i3_flag_seed_over_env_seed() {
    let cli = CliRunner::new();
    let env = [("BATTLER_SEED", "3")];
    let from_env = cli.run_with_env(&["sim", "--games", "1"], &env);
    let from_flag = cli.run_with_env(&["sim", "--games", "1", "--seed", "4"], &env);
    assert!(from_env.stdout.starts_with("sim: games=1 seed=3 "));
    assert!(from_flag.stdout.starts_with("sim: games=1 seed=4 "));
}

#[test]
fn i4_invalid_env_value_is_an_error() {
    let res = CliRunner::new().run_with_env(&["cfg"], &[("BATTLER_PAUSE", "sometimes")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid pause 'sometimes'"));
}

#[test]
fn i5_unknown_file_key_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("battler.toml");
    fs::write(&path, "deck_size = 20\n").unwrap();
    let path = path.to_string_lossy().into_owned();

    let res = CliRunner::new().run_with_env(&["play"], &[("BATTLER_CONFIG", path.as_str())]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
    assert!(!res.stdout.contains("Welcome to BATTLER!"));
}
