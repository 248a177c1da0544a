//! Session clock integration tests.
//!
//! Covers timer-driven termination and the tick-versus-command race.

mod common;

use std::time::Duration;

use aita_engine::{ClockTick, Command, EventLog, GameError, GameResult, Phase, Precondition};
use common::{ids, named_game};

/// duration = 5, five ticks in progress: game over.
#[test]
fn test_five_ticks_end_five_second_game() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.set_duration(5).unwrap();
    game.start_game().unwrap();

    for expected in (1..5).rev() {
        assert_eq!(game.tick(), ClockTick::Running { remaining: expected });
    }
    assert_eq!(game.tick(), ClockTick::Expired);

    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.time_remaining(), 0);
}

/// Expiry preempts a judge who has not ruled yet.
#[test]
fn test_expiry_during_judging() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.set_duration(2).unwrap();
    game.start_game().unwrap();
    game.tick();
    game.finish_turn().unwrap();
    game.tick();

    assert_eq!(game.phase(), Phase::GameOver);
    let err = game.submit_verdict(true).unwrap_err();
    assert!(matches!(
        err,
        GameError::Precondition(Precondition::WrongPhase { .. })
    ));
    assert_eq!(game.snapshot().tallies(), vec![0, 0]);
}

/// The clock keeps its value across storytelling and judging.
#[test]
fn test_clock_not_reset_between_phases() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.start_game().unwrap();
    game.tick();
    game.tick();
    game.finish_turn().unwrap();
    assert_eq!(game.time_remaining(), 58);
    game.tick();
    game.submit_verdict(false).unwrap();
    assert_eq!(game.time_remaining(), 57);
}

/// No ticks are counted in setup or after the game ended.
#[test]
fn test_idle_outside_play() {
    let mut game = named_game(&["Alice", "Bob"]);
    assert_eq!(game.tick(), ClockTick::Idle);
    assert_eq!(game.time_remaining(), 60);

    game.set_duration(1).unwrap();
    game.start_game().unwrap();
    assert_eq!(game.tick(), ClockTick::Expired);
    assert_eq!(game.tick(), ClockTick::Idle);
    assert_eq!(game.phase(), Phase::GameOver);
}

/// A new game gets a fresh clock, not the leftovers.
#[test]
fn test_fresh_clock_on_new_game() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.set_duration(10).unwrap();
    game.start_game().unwrap();
    for _ in 0..4 {
        game.tick();
    }
    assert_eq!(game.time_remaining(), 6);

    game.restart_game().unwrap();
    assert_eq!(game.time_remaining(), 60);
    assert_eq!(game.tick(), ClockTick::Idle);
}

/// Ticks due in the same quantum as a verdict win.
#[test]
fn test_quantum_timer_has_priority() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.set_duration(3).unwrap();
    game.start_game().unwrap();
    game.finish_turn().unwrap();
    game.tick();
    game.tick();

    let report = game.process_quantum(1, [Command::SubmitVerdict { is_asshole: true }]);
    assert!(report.expired);
    assert_eq!(report.ticks_applied, 1);
    assert!(report.results.is_empty());
    assert_eq!(report.discarded, vec![Command::SubmitVerdict { is_asshole: true }]);

    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.snapshot().tallies(), vec![0, 0]);
}

/// Without expiry, queued commands apply after the ticks.
#[test]
fn test_quantum_applies_commands_when_time_left() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.start_game().unwrap();
    game.finish_turn().unwrap();

    let report = game.process_quantum(2, [Command::SubmitVerdict { is_asshole: true }]);
    assert!(!report.expired);
    assert_eq!(report.ticks_applied, 2);
    assert_eq!(report.results.len(), 1);
    assert!(report.results[0].is_ok());
    assert_eq!(game.snapshot().tallies(), vec![1, 0]);
    assert_eq!(game.time_remaining(), 58);
}

/// A restart queued after a game that was already over still runs.
#[test]
fn test_quantum_after_game_over_allows_restart() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.set_duration(1).unwrap();
    game.start_game().unwrap();
    game.tick();

    let report = game.process_quantum(1, [Command::RestartGame]);
    assert!(!report.expired);
    assert_eq!(report.ticks_applied, 0);
    assert!(report.results[0].is_ok());
    assert_eq!(game.phase(), Phase::Setup);
}

/// Wall-clock time is converted into whole ticks with carry.
#[test]
fn test_advance_time() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.set_duration(3).unwrap();
    game.start_game().unwrap();

    assert_eq!(game.advance_time(Duration::from_millis(600)), 0);
    assert_eq!(game.advance_time(Duration::from_millis(600)), 1);
    assert_eq!(game.time_remaining(), 2);

    // More time than is left: stops at expiry.
    assert_eq!(game.advance_time(Duration::from_secs(10)), 2);
    assert_eq!(game.phase(), Phase::GameOver);
}

/// Time short of a whole tick is not due: a verdict in that window counts,
/// and the game ends on the tick itself, never while a command is pending.
#[test]
fn test_verdict_inside_last_second_counts() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.set_duration(1).unwrap();
    game.start_game().unwrap();
    game.finish_turn().unwrap();

    assert_eq!(game.advance_time(Duration::from_millis(999)), 0);
    assert_eq!(game.phase(), Phase::Judging);
    let snapshot = game.submit_verdict(true).unwrap();
    assert_eq!(snapshot.tallies(), vec![1, 0]);

    assert_eq!(game.advance_time(Duration::from_millis(1)), 1);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.result(), Some(GameResult::Winner(ids(&game)[0])));
    assert!(matches!(
        game.finish_turn().unwrap_err(),
        GameError::Precondition(Precondition::WrongPhase { .. })
    ));
}

/// Expiry is announced with the final tick and the winners.
#[test]
fn test_expiry_events() {
    let mut game = named_game(&["Alice", "Bob"]);
    game.set_duration(1).unwrap();
    game.start_game().unwrap();
    game.finish_turn().unwrap();

    let log = EventLog::new();
    game.subscribe(log.clone());
    game.tick();

    assert_eq!(log.names(), vec!["ticked", "game_over"]);
}
