use crate::helpers::cli_runner::CliRunner;

#[test]
fn a1_help_lists_subcommands() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for command in ["play", "sim", "cfg"] {
        assert!(res.stdout.contains(command), "help missing {}", command);
    }
}

#[test]
fn a2_version_exits_zero() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("battler"));
}

#[test]
fn a3_unknown_subcommand_exits_two() {
    let res = CliRunner::new().run(&["shuffle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Commands:"));
    assert!(res.stderr.contains("For full help, run: battler --help"));
}

#[test]
fn a4_bad_flag_value_exits_two() {
    let res = CliRunner::new().run(&["sim", "--games", "many"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
}

#[test]
fn a5_logs_go_to_stderr_only_when_asked() {
    let cli = CliRunner::new();
    let quiet = cli.run(&["sim", "--games", "2", "--seed", "1"]);
    assert_eq!(quiet.exit_code, 0);
    assert!(quiet.stderr.is_empty(), "stderr={}", quiet.stderr);

    let verbose = cli.run_with_env(
        &["sim", "--games", "2", "--seed", "1"],
        &[("RUST_LOG", "debug")],
    );
    assert_eq!(verbose.exit_code, 0);
    assert!(verbose.stderr.contains("simulated game"));
    assert_eq!(quiet.stdout, verbose.stdout);
}
