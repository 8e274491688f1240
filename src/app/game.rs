//! Application driver: one renderer, one session at a time.

use std::time::Duration;

use tracing::{debug, info};

use crate::core::error::Result;
use crate::core::{CardIndex, GameConfig, GameRng};
use crate::render::{DeferredQueue, Renderer};
use crate::session::{ClickOutcome, Effect, EffectBatch, GameSession, IgnoreReason};

/// Runs the game against a renderer.
///
/// Routes front-end events (`click`, `new_game`, `quit`) to the current
/// `GameSession`, draws the resulting effects and keeps deferred effects
/// in a `DeferredQueue` until `advance` makes them due.
///
/// Every new game forks the driver's RNG, so a seed reproduces the whole
/// sequence of boards. Deferred effects from a replaced game are dropped
/// when they come due rather than drawn onto the new board.
pub struct MemoryGame<R: Renderer> {
    config: GameConfig,
    rng: GameRng,
    session: GameSession,
    renderer: R,
    queue: DeferredQueue,
    generation: u64,
    running: bool,
}

impl<R: Renderer> MemoryGame<R> {
    /// Validate `config`, deal the first board and draw it.
    pub fn new(config: GameConfig, seed: u64, renderer: R) -> Result<Self> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let session = GameSession::new(&config, &mut rng.fork())?;
        Ok(Self::start(config, rng, session, renderer))
    }

    /// Start on a prepared session (e.g. a fixed deck) and draw it.
    ///
    /// `config` seeds later `new_game` calls and is validated the same way
    /// as in `new`.
    pub fn with_session(config: GameConfig, seed: u64, session: GameSession, renderer: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::start(config, GameRng::new(seed), session, renderer))
    }

    fn start(config: GameConfig, rng: GameRng, session: GameSession, renderer: R) -> Self {
        let mut game = Self {
            config,
            rng,
            session,
            renderer,
            queue: DeferredQueue::new(),
            generation: 0,
            running: true,
        };
        let effects = game.session.initial_effects();
        game.dispatch(effects);
        game
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Zero for the first game; each `new_game` adds one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the current game with a fresh board of `set_count` pairs.
    ///
    /// On error the current game is left untouched. Does nothing after
    /// `quit`.
    pub fn new_game(&mut self, set_count: usize) -> Result<()> {
        if !self.running {
            debug!(set_count, "new game requested after quit");
            return Ok(());
        }
        self.config.check_set_count(set_count)?;
        let config = self.config.clone().with_set_count(set_count);
        let session = GameSession::new(&config, &mut self.rng.fork())?;

        self.config = config;
        self.session = session;
        self.generation += 1;
        info!(set_count, generation = self.generation, "game replaced");

        let effects = self.session.initial_effects();
        self.dispatch(effects);
        Ok(())
    }

    /// Handle a click at pixel `(x, y)`.
    pub fn click(&mut self, x: i32, y: i32) -> ClickOutcome {
        if !self.running {
            return ClickOutcome::Ignored(IgnoreReason::Stopped);
        }
        let (outcome, effects) = self.session.click(x, y);
        self.dispatch(effects);
        outcome
    }

    /// Handle a click on card `index`.
    pub fn select(&mut self, index: CardIndex) -> ClickOutcome {
        if !self.running {
            return ClickOutcome::Ignored(IgnoreReason::Stopped);
        }
        let (outcome, effects) = self.session.select(index);
        self.dispatch(effects);
        outcome
    }

    /// Stop accepting input. Later clicks are ignored and `new_game` is a
    /// no-op; effects already queued still fire on `advance`.
    pub fn quit(&mut self) {
        info!(generation = self.generation, "quit requested");
        self.running = false;
    }

    /// Time until the next deferred effect is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.queue.next_due_in()
    }

    /// Advance the clock by `elapsed` and run every effect that came due.
    ///
    /// Returns how many effects reached the renderer.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let mut applied = 0;
        for (generation, effect) in self.queue.advance(elapsed) {
            if generation != self.generation {
                debug!(generation, current = self.generation, "dropping effect for replaced game");
                continue;
            }
            if self.apply(effect) {
                applied += 1;
            }
        }
        applied
    }

    fn dispatch(&mut self, effects: EffectBatch) {
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Draw an effect now, or queue it if deferred. Returns true if drawn.
    fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::Deferred { delay, effect } => {
                self.queue.schedule(delay, self.generation, *effect);
                false
            }
            Effect::RenderBoardSize { set_count, surface } => {
                self.renderer.render_board_size(set_count, surface);
                true
            }
            Effect::RenderCard { index, value, face } => {
                self.renderer.render_card(index, value, face);
                true
            }
            Effect::RenderTurns(turns) => {
                self.renderer.render_turns(turns);
                true
            }
            Effect::NotifyWin { set_count, turns } => {
                self.renderer.notify_win(set_count, turns);
                true
            }
        }
    }
}
