use crate::helpers::cli_runner::CliRunner;

/// More card choices than any single game can use: the human plays at most
/// 10 dealt cards plus 16 drawn ones.
fn card_choices(n: usize) -> String {
    "1\n".repeat(n)
}

#[test]
fn g1_full_game_then_decline() {
    let input = card_choices(30) + "n\n";
    let res = CliRunner::new().run_with_input(&["play", "--seed", "42", "--no-pause"], &input);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout.matches("Welcome to BATTLER!").count(), 1);
    assert!(res.stdout.contains("Final Score - Player: "));
    assert!(res.stdout.contains("Would you like to play again? (y/n): "));
    assert!(res.stdout.trim_end().ends_with("Thanks for playing Battler!"));
    assert!(!res.stdout.contains("Press Enter to continue..."));
}

#[test]
fn g2_replay_starts_fresh_game() {
    let input = card_choices(30) + "y\n" + &card_choices(30) + "no\n";
    let res = CliRunner::new().run_with_input(&["play", "--seed", "8", "--no-pause"], &input);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout.matches("Welcome to BATTLER!").count(), 2);
    assert_eq!(res.stdout.matches("Final Score - ").count(), 2);
    assert_eq!(
        res.stdout
            .matches("SCORES: Player: 0 | Computer: 0\nCards remaining in deck: 32")
            .count(),
        2
    );
}

#[test]
fn g3_same_seed_same_session() {
    let cli = CliRunner::new();
    let input = card_choices(30) + "n\n";
    let a = cli.run_with_input(&["play", "--seed", "5", "--no-pause"], &input);
    let b = cli.run_with_input(&["play", "--seed", "5", "--no-pause"], &input);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn g4_input_closed_mid_game_exits_130() {
    let res = CliRunner::new().run_with_input(&["play", "--seed", "1"], "1\n");
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("input closed"));
    assert!(!res.stdout.contains("Final Score"));
}

#[test]
fn g5_default_command_is_play() {
    let res = CliRunner::new().run_with_env(&[], &[("BATTLER_SEED", "2")]);
    assert_eq!(res.exit_code, 130);
    assert!(res.stdout.contains("Welcome to BATTLER!"));
    assert!(res.stdout.contains("Player's turn!"));
}

#[test]
fn g6_pause_waits_for_enter() {
    // Every line is accepted by the pause prompt, and "1" is always a valid card.
    let input = card_choices(80);
    let res = CliRunner::new().run_with_input(&["play", "--seed", "3"], &input);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("Press Enter to continue..."));
    assert!(res.stdout.contains("Computer drew a card"));
}
