//! The game: state machine driving setup, rounds and game over.
//!
//! ```text
//!   setup --start_game--> player_turn --finish_turn--> judging
//!                              ^                          |
//!                              +-----submit_verdict-------+
//!
//!   player_turn | judging --clock hits zero--> game_over
//!   any --restart_game--> setup
//! ```
//!
//! `Game` owns every piece of mutable state. Front ends talk to it only
//! through commands and read it only through snapshots.
//!
//! ## Atomicity
//!
//! Each command validates everything it needs before touching state. A
//! rejected command returns an error and leaves the game as it was; an
//! accepted one applies all of its effects.
//!
//! ## Clock priority
//!
//! Expiry always wins. A tick that takes the clock to zero ends the game
//! in the same step, so no command ever sees a running game with an empty
//! clock. [`Game::process_quantum`] delivers due ticks before any commands
//! queued in the same quantum and discards those commands if the game
//! ended. Time that has not yet added up to a whole tick (the metronome's
//! carry) does not count: a command arriving then is applied normally.

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, warn};

use crate::clock::{ClockTick, Metronome};
use crate::core::{
    personalize, Command, CommandKind, CommandRecord, GameConfig, GameRng, Phase, Player, PlayerId,
    Session, Snapshot,
};
use crate::deck::{ContentMode, Deck, PromptCorpus, PromptLibrary};
use crate::error::{ConfigError, GameError, Precondition, Result};
use crate::events::{GameEvent, SessionObserver};
use crate::roster::Roster;
use crate::score::{compute_winners, record_verdict, GameResult, WinnerSet};
use crate::turn::TurnOrder;

/// Outcome of [`Game::process_quantum`].
#[derive(Debug)]
pub struct QuantumReport {
    /// Ticks actually delivered (stops early at expiry).
    pub ticks_applied: u32,
    /// True if the clock ran out during this quantum.
    pub expired: bool,
    /// Result of each command that was applied, in order.
    pub results: Vec<Result<Snapshot>>,
    /// Commands dropped because the clock ran out first.
    pub discarded: Vec<Command>,
}

/// A party-game session: roster, deck, clock and turn state.
pub struct Game {
    config: GameConfig,
    library: PromptLibrary,
    content_mode: ContentMode,
    roster: Roster,
    deck: Deck,
    session: Session,
    metronome: Metronome,
    winners: WinnerSet,
    history: Vector<CommandRecord>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("content_mode", &self.content_mode)
            .field("roster", &self.roster)
            .field("deck", &self.deck)
            .field("session", &self.session)
            .field("winners", &self.winners)
            .field("history_len", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    /// Create a game in setup dealing from a single corpus.
    ///
    /// Fails if the configuration is invalid. The corpus is already known
    /// to be non-empty.
    pub fn new(config: GameConfig, corpus: PromptCorpus) -> Result<Self> {
        Self::with_library(config, PromptLibrary::new(corpus))
    }

    /// Create a game in setup with one corpus per content mode.
    ///
    /// Fails if the configuration is invalid or names a content mode the
    /// library has no prompts for.
    pub fn with_library(config: GameConfig, library: PromptLibrary) -> Result<Self> {
        config.validate()?;

        let content_mode = config.content_mode;
        let corpus = library
            .get(content_mode)
            .cloned()
            .ok_or(ConfigError::MissingContent(content_mode))?;
        let rng = GameRng::from_optional_seed(config.seed);
        let deck = Deck::new(corpus, rng);
        let roster = Roster::new(config.min_players, config.max_players)?;
        let session = Session::new(config.default_duration_secs);

        info!(
            prompts = deck.len(),
            mode = %content_mode,
            min_players = config.min_players,
            max_players = config.max_players,
            "Game created"
        );

        Ok(Self {
            config,
            library,
            content_mode,
            roster,
            deck,
            session,
            metronome: Metronome::new(),
            winners: WinnerSet::new(),
            history: Vector::new(),
            observers: Vec::new(),
        })
    }

    /// Create a game from raw prompts with the default configuration.
    pub fn with_prompts<I, S>(prompts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let corpus = PromptCorpus::new(prompts.into_iter().map(Into::into).collect())?;
        Self::new(GameConfig::default(), corpus)
    }

    /// Register an observer for every subsequent event.
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Commands ===

    /// Apply a command, returning the new snapshot.
    pub fn apply(&mut self, command: Command) -> Result<Snapshot> {
        let phase = self.session.phase;
        let round = self.session.round;
        let kind = command.kind();

        let mut events = Vec::new();
        match self.dispatch(&command, &mut events) {
            Ok(()) => {
                self.history.push_back(CommandRecord::new(round, phase, command));
                Ok(self.publish(&events))
            }
            Err(err) => {
                warn!(command = %kind, phase = %phase, error = %err, "Command rejected");
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, command: &Command, events: &mut Vec<GameEvent>) -> Result<()> {
        self.check_phase(command.kind())?;

        match command {
            Command::AddPlayer => {
                let player = self.roster.add_player()?;
                events.push(GameEvent::PlayerAdded { id: player.id });
            }
            Command::RemovePlayer { id } => {
                let player = self.roster.remove_player(*id)?;
                events.push(GameEvent::PlayerRemoved { id: player.id });
            }
            Command::RenamePlayer { id, name } => {
                self.roster.rename_player(*id, name.clone())?;
                events.push(GameEvent::PlayerRenamed {
                    id: *id,
                    name: name.clone(),
                });
            }
            Command::SetDuration { seconds } => {
                if *seconds == 0 {
                    return Err(Precondition::InvalidDuration(*seconds).into());
                }
                self.session.clock.set_duration(*seconds);
                debug!(seconds, "Duration changed");
                events.push(GameEvent::DurationChanged { seconds: *seconds });
            }
            Command::SetContentMode { mode } => {
                let corpus = self
                    .library
                    .get(*mode)
                    .cloned()
                    .ok_or(Precondition::ContentUnavailable(*mode))?;
                self.deck.replace_corpus(corpus);
                self.content_mode = *mode;
                debug!(mode = %mode, prompts = self.deck.len(), "Content mode changed");
                events.push(GameEvent::ContentModeChanged { mode: *mode });
            }
            Command::StartGame => self.start(events)?,
            Command::FinishTurn => {
                let turn = self.current_turn()?;
                let active = self.seat_id(turn.active())?;
                self.session.phase = Phase::Judging;
                debug!(round = self.session.round, %active, "Turn finished, judging");
                events.push(GameEvent::TurnFinished { active });
            }
            Command::SubmitVerdict { is_asshole } => self.resolve_verdict(*is_asshole, events)?,
            Command::RestartGame => self.restart(events)?,
        }

        Ok(())
    }

    fn check_phase(&self, kind: CommandKind) -> Result<()> {
        let phase = self.session.phase;
        if kind.accepted_in(phase) {
            return Ok(());
        }

        let roster_edit = matches!(
            kind,
            CommandKind::AddPlayer | CommandKind::RemovePlayer | CommandKind::RenamePlayer
        );
        if roster_edit {
            Err(Precondition::RosterLocked.into())
        } else {
            Err(Precondition::WrongPhase { command: kind, phase }.into())
        }
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        if let Some(blocker) = self.roster.start_blocker() {
            return Err(Precondition::NotReady(blocker).into());
        }
        let turn = TurnOrder::first(self.roster.len())?;

        self.roster.reset_tallies();
        self.deck.reset();
        self.metronome.reset();
        self.winners.clear();
        self.session.turn = Some(turn);
        self.session.round = 1;
        self.session.clock.start();
        self.session.phase = Phase::PlayerTurn;

        info!(
            players = self.roster.len(),
            duration = self.session.clock.duration(),
            "Game started"
        );
        events.push(GameEvent::GameStarted {
            players: self.roster.len(),
            duration: self.session.clock.duration(),
        });

        self.deal_prompt(events)
    }

    fn resolve_verdict(&mut self, is_asshole: bool, events: &mut Vec<GameEvent>) -> Result<()> {
        let turn = self.current_turn()?;
        let next = turn.advance(self.roster.len())?;
        let active = self.seat_id(turn.active())?;

        // Indices are validated above, so nothing below can fail half-way.
        record_verdict(&mut self.roster, turn.active(), is_asshole)?;
        let tally = self.roster.get(turn.active()).map_or(0, |p| p.tally);

        events.push(GameEvent::VerdictRecorded {
            active,
            is_asshole,
            tally,
        });

        self.session.turn = Some(next);
        self.session.round += 1;
        self.session.phase = Phase::PlayerTurn;
        debug!(
            round = self.session.round,
            active = next.active(),
            judge = next.judge(),
            "Next round"
        );

        self.deal_prompt(events)
    }

    fn restart(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        let from = self.session.phase;

        // Fallible step first so a failure leaves everything untouched.
        if self.config.preserve_roster_on_restart {
            self.roster.reset_tallies();
        } else {
            self.roster.reset_to_minimum()?;
        }
        self.session.reset(self.config.default_duration_secs);
        self.metronome.reset();
        self.winners.clear();

        info!(%from, preserved = self.config.preserve_roster_on_restart, "Game restarted");
        events.push(GameEvent::Restarted { from });
        Ok(())
    }

    fn deal_prompt(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        let turn = self.current_turn()?;
        let active = self.seat_id(turn.active())?;
        let judge = self.seat_id(turn.judge())?;

        let cycle = self.deck.cycle();
        let prompt = self.deck.draw().to_string();
        if self.deck.cycle() != cycle {
            events.push(GameEvent::DeckReshuffled {
                cycle: self.deck.cycle(),
            });
        }

        self.session.current_prompt = Some(prompt);
        events.push(GameEvent::PromptDrawn {
            round: self.session.round,
            active,
            judge,
        });
        Ok(())
    }

    // === Clock ===

    /// Deliver one clock tick.
    ///
    /// Outside a running game this is a no-op returning `ClockTick::Idle`.
    /// A tick that reaches zero ends the game.
    pub fn tick(&mut self) -> ClockTick {
        if !self.session.phase.is_in_progress() {
            return ClockTick::Idle;
        }

        let tick = self.session.clock.tick();
        match tick {
            ClockTick::Idle => {}
            ClockTick::Running { remaining } => {
                self.publish(&[GameEvent::Ticked { remaining }]);
            }
            ClockTick::Expired => {
                self.publish(&[GameEvent::Ticked { remaining: 0 }]);
                self.expire();
            }
        }
        tick
    }

    /// Feed elapsed wall-clock time; delivers every whole second that is due.
    ///
    /// Returns the number of ticks delivered.
    pub fn advance_time(&mut self, elapsed: Duration) -> u32 {
        let due = self.metronome.advance(elapsed);
        self.deliver_ticks(due)
    }

    fn deliver_ticks(&mut self, due: u32) -> u32 {
        let mut applied = 0;
        for _ in 0..due {
            match self.tick() {
                ClockTick::Idle => break,
                ClockTick::Running { .. } => applied += 1,
                ClockTick::Expired => {
                    applied += 1;
                    break;
                }
            }
        }
        applied
    }

    /// Process one scheduling quantum: due ticks first, then commands.
    ///
    /// If the clock runs out during this quantum, every queued command is
    /// discarded. Commands queued after a game that was *already* over are
    /// still applied (a restart, typically).
    pub fn process_quantum<I>(&mut self, ticks: u32, commands: I) -> QuantumReport
    where
        I: IntoIterator<Item = Command>,
    {
        let was_running = self.session.phase.is_in_progress();
        let ticks_applied = self.deliver_ticks(ticks);
        let expired = was_running && self.session.phase == Phase::GameOver;

        let mut report = QuantumReport {
            ticks_applied,
            expired,
            results: Vec::new(),
            discarded: Vec::new(),
        };

        if expired {
            report.discarded = commands.into_iter().collect();
            if !report.discarded.is_empty() {
                warn!(count = report.discarded.len(), "Clock expired first, discarding commands");
            }
            return report;
        }

        for command in commands {
            report.results.push(self.apply(command));
        }
        report
    }

    fn expire(&mut self) {
        self.session.clock.stop();
        self.session.phase = Phase::GameOver;
        self.winners = compute_winners(self.roster.iter());

        info!(
            rounds = self.session.round,
            winners = self.winners.len(),
            "Game over"
        );
        let winners = self.winners.clone();
        self.publish(&[GameEvent::GameOver { winners }]);
    }

    // === Convenience commands ===

    /// Append a blank player during setup.
    pub fn add_player(&mut self) -> Result<Snapshot> {
        self.apply(Command::AddPlayer)
    }

    /// Remove a player during setup.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Snapshot> {
        self.apply(Command::RemovePlayer { id })
    }

    /// Rename a player during setup.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<Snapshot> {
        self.apply(Command::RenamePlayer {
            id,
            name: name.into(),
        })
    }

    /// Set the session length during setup.
    pub fn set_duration(&mut self, seconds: u32) -> Result<Snapshot> {
        self.apply(Command::SetDuration { seconds })
    }

    /// Choose the prompt set during setup.
    pub fn set_content_mode(&mut self, mode: ContentMode) -> Result<Snapshot> {
        self.apply(Command::SetContentMode { mode })
    }

    /// Start the game.
    pub fn start_game(&mut self) -> Result<Snapshot> {
        self.apply(Command::StartGame)
    }

    /// End the storyteller's turn.
    pub fn finish_turn(&mut self) -> Result<Snapshot> {
        self.apply(Command::FinishTurn)
    }

    /// Judge the storyteller.
    pub fn submit_verdict(&mut self, is_asshole: bool) -> Result<Snapshot> {
        self.apply(Command::SubmitVerdict { is_asshole })
    }

    /// Return to setup.
    pub fn restart_game(&mut self) -> Result<Snapshot> {
        self.apply(Command::RestartGame)
    }

    // === Queries ===

    /// Commands the current state would accept.
    ///
    /// Checks phase and the cheap preconditions (roster bounds, readiness);
    /// a front end can use this to enable or disable controls.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<CommandKind> {
        let phase = self.session.phase;
        CommandKind::ALL
            .into_iter()
            .filter(|kind| kind.accepted_in(phase))
            .filter(|kind| match kind {
                CommandKind::AddPlayer => self.roster.len() < self.roster.max(),
                CommandKind::RemovePlayer => self.roster.len() > self.roster.min(),
                CommandKind::StartGame => self.roster.can_start(),
                CommandKind::SetContentMode => self.library.modes().count() > 1,
                _ => true,
            })
            .collect()
    }

    /// Current read-only view.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.session.phase,
            players: self.roster.players(),
            active_player_index: self.session.turn.map(TurnOrder::active),
            judge_index: self.session.turn.map(TurnOrder::judge),
            current_prompt: self.session.current_prompt.clone(),
            time_remaining: self.session.clock.remaining(),
            duration: self.session.clock.duration(),
            content_mode: self.content_mode,
            round: self.session.round,
            winners: self.winners.clone(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    /// The roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Prompt set currently dealt from.
    #[must_use]
    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    /// Every corpus this game can deal from.
    #[must_use]
    pub fn library(&self) -> &PromptLibrary {
        &self.library
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Accepted commands so far.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.session.clock.remaining()
    }

    /// Raw prompt for the current round.
    #[must_use]
    pub fn current_prompt(&self) -> Option<&str> {
        self.session.current_prompt.as_deref()
    }

    /// Current prompt with the storyteller's name filled in.
    #[must_use]
    pub fn personalized_prompt(&self) -> Option<String> {
        let prompt = self.current_prompt()?;
        let player = self.active_player()?;
        Some(personalize(prompt, &player.name, &self.config.placeholder))
    }

    /// The storyteller, while a game is running or just ended.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.session.turn.and_then(|t| self.roster.get(t.active()))
    }

    /// The judge, while a game is running or just ended.
    #[must_use]
    pub fn judge(&self) -> Option<&Player> {
        self.session.turn.and_then(|t| self.roster.get(t.judge()))
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        (self.session.phase == Phase::GameOver).then(|| GameResult::from_winners(&self.winners))
    }

    // === Internals ===

    fn current_turn(&self) -> Result<TurnOrder> {
        let len = self.roster.len();
        let turn = self
            .session
            .turn
            .ok_or(GameError::IndexOutOfRange { index: 0, len })?;
        turn.validate(len)?;
        Ok(turn)
    }

    fn seat_id(&self, index: usize) -> Result<PlayerId> {
        self.roster
            .get(index)
            .map(|p| p.id)
            .ok_or(GameError::IndexOutOfRange {
                index,
                len: self.roster.len(),
            })
    }

    fn publish(&mut self, events: &[GameEvent]) -> Snapshot {
        let snapshot = self.snapshot();
        for event in events {
            debug!(event = event.name(), "Event");
            for observer in &mut self.observers {
                observer.on_event(event, &snapshot);
            }
        }
        snapshot
    }
}
