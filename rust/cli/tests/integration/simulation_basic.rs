use crate::helpers::cli_runner::CliRunner;

fn count(stdout: &str, label: &str) -> u32 {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix(label))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_else(|| panic!("missing '{}' in {}", label, stdout))
}

#[test]
fn s1_sim_outcomes_add_up() {
    let res = CliRunner::new().run(&["sim", "--games", "40", "--seed", "42"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let total = count(&res.stdout, "Player wins:")
        + count(&res.stdout, "Computer wins:")
        + count(&res.stdout, "Exhausted:");
    assert_eq!(total, 40);
    assert!(res.stdout.contains("Average turns: "));
}

#[test]
fn s2_sim_is_deterministic_with_seed() {
    let cli = CliRunner::new();
    let a = cli.run(&["sim", "--games", "10", "--seed", "7"]);
    let b = cli.run(&["sim", "--games", "10", "--seed", "7"]);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn s3_sim_rejects_zero_games() {
    let res = CliRunner::new().run(&["sim", "--games", "0"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("games must be >= 1"));
}

#[test]
fn s4_sim_rejects_unknown_ai() {
    let res = CliRunner::new().run(&["sim", "--ai", "oracle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Unknown AI type: oracle"));
}
