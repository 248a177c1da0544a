//! Shared helpers for integration tests.

#![allow(dead_code)]

use aita_engine::{Game, GameConfig, PlayerId, PromptCorpus};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A corpus of `n` distinct prompts, every one containing the placeholder.
pub fn corpus(n: usize) -> PromptCorpus {
    PromptCorpus::new((0..n).map(|i| format!("%% did thing #{}", i)).collect()).unwrap()
}

/// Seeded game in setup with the given names filled in.
pub fn game_with(names: &[&str], config: GameConfig) -> Game {
    init_logging();
    let mut game = Game::new(config, corpus(20)).unwrap();
    while game.roster().len() < names.len() {
        game.add_player().unwrap();
    }
    for (id, name) in ids(&game).into_iter().zip(names) {
        game.rename_player(id, *name).unwrap();
    }
    game
}

/// Seeded, 60-second game with the given names.
pub fn named_game(names: &[&str]) -> Game {
    game_with(names, GameConfig::new().with_seed(42).with_duration(60))
}

/// Player ids in seat order.
pub fn ids(game: &Game) -> Vec<PlayerId> {
    game.roster().iter().map(|p| p.id).collect()
}
