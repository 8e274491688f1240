//! One game of memory: the board, the guess history and the turn protocol.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::effect::{Effect, EffectBatch};
use crate::board::{Board, Layout};
use crate::core::error::Result;
use crate::core::{CardIndex, CardValue, GameConfig, GameRng, Timing};
use crate::render::CardFace;

/// Which guess of a pair the session is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingFirstGuess,
    AwaitingSecondGuess,
}

/// Why a click changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The click did not land on a card.
    OffBoard,
    /// The card is already revealed or matched.
    AlreadyRevealed,
    /// The player has quit.
    Stopped,
}

/// Result of a completed pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairOutcome {
    pub first: CardIndex,
    pub second: CardIndex,
    pub first_value: CardValue,
    pub second_value: CardValue,
    /// True if both cards carry the same value.
    pub matched: bool,
    /// Turn count after this pair.
    pub turns: u32,
    /// True if this pair completed the board.
    pub won: bool,
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    Ignored(IgnoreReason),
    FirstGuess { index: CardIndex, value: CardValue },
    Pair(PairOutcome),
}

/// A single game session.
///
/// Owns the board and the guess history exclusively. A new game builds a
/// new session; nothing carries over.
///
/// ## Turn protocol
///
/// Odd history length means a pair is open (`AwaitingSecondGuess`). On
/// every even length the last two guesses are compared: a match locks both
/// cards and schedules a cosmetic highlight, a mismatch conceals both at
/// once. The win check runs after every completed pair.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    guesses: Vector<CardIndex>,
    layout: Layout,
    timing: Timing,
}

impl GameSession {
    /// Start a new game with a freshly shuffled board.
    pub fn new(config: &GameConfig, rng: &mut GameRng) -> Result<Self> {
        config.layout.validate()?;
        let board = Board::new(config.set_count, config.max_sets, rng)?;
        info!(set_count = config.set_count, seed = rng.seed(), "new game");
        Self::with_board(board, config)
    }

    /// Start a new game on an explicit board.
    ///
    /// Fails if `config.layout` cannot map clicks to cards.
    pub fn with_board(board: Board, config: &GameConfig) -> Result<Self> {
        config.layout.validate()?;
        Ok(Self {
            board,
            guesses: Vector::new(),
            layout: config.layout,
            timing: config.timing,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.board.set_count()
    }

    /// Every card revealed this game, in click order.
    #[must_use]
    pub fn guesses(&self) -> &Vector<CardIndex> {
        &self.guesses
    }

    /// Completed pairs so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        (self.guesses.len() / 2) as u32
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.guesses.len() % 2 == 0 {
            TurnPhase::AwaitingFirstGuess
        } else {
            TurnPhase::AwaitingSecondGuess
        }
    }

    /// True once every card is face up.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.all_revealed_or_matched()
    }

    /// Effects that draw the whole session from scratch.
    #[must_use]
    pub fn initial_effects(&self) -> EffectBatch {
        let mut effects = EffectBatch::new();
        effects.push(Effect::RenderBoardSize {
            set_count: self.set_count(),
            surface: self.layout.surface_size(self.board.len()),
        });
        for (index, card) in self.board.iter() {
            effects.push(Effect::card(index, card.value(), CardFace::from(card.state)));
        }
        effects.push(Effect::RenderTurns(self.turns()));
        effects
    }

    /// Handle a click at pixel `(x, y)` on the play surface.
    pub fn click(&mut self, x: i32, y: i32) -> (ClickOutcome, EffectBatch) {
        match self.layout.hit_test(x, y, self.board.len()) {
            Some(index) => self.select(index),
            None => {
                trace!(x, y, "click off board");
                (ClickOutcome::Ignored(IgnoreReason::OffBoard), EffectBatch::new())
            }
        }
    }

    /// Handle a click on card `index`.
    pub fn select(&mut self, index: CardIndex) -> (ClickOutcome, EffectBatch) {
        let mut effects = EffectBatch::new();

        if index.index() >= self.board.len() {
            trace!(%index, "selection off board");
            return (ClickOutcome::Ignored(IgnoreReason::OffBoard), effects);
        }
        if self.board.is_revealed(index) {
            trace!(%index, "card already face up");
            return (ClickOutcome::Ignored(IgnoreReason::AlreadyRevealed), effects);
        }

        self.guesses.push_back(index);
        self.board.reveal(index);
        let value = self.board.value(index);
        effects.push(Effect::card(index, value, CardFace::Revealed));

        if self.phase() == TurnPhase::AwaitingSecondGuess {
            debug!(%index, %value, "first guess");
            return (ClickOutcome::FirstGuess { index, value }, effects);
        }

        let outcome = self.resolve_pair(&mut effects);
        (ClickOutcome::Pair(outcome), effects)
    }

    fn resolve_pair(&mut self, effects: &mut EffectBatch) -> PairOutcome {
        let len = self.guesses.len();
        let first = self.guesses[len - 2];
        let second = self.guesses[len - 1];
        let first_value = self.board.value(first);
        let second_value = self.board.value(second);
        let matched = first_value == second_value;
        let turns = self.turns();

        effects.push(Effect::RenderTurns(turns));

        if matched {
            self.board.mark_matched(first);
            self.board.mark_matched(second);
            for (index, value) in [(first, first_value), (second, second_value)] {
                effects.push(
                    Effect::card(index, value, CardFace::Highlighted).after(self.timing.highlight_delay),
                );
            }
        } else {
            self.board.conceal(first);
            self.board.conceal(second);
            effects.push(Effect::card(first, first_value, CardFace::Covered));
            effects.push(Effect::card(second, second_value, CardFace::Covered));
        }
        debug!(%first, %second, matched, turns, "pair resolved");

        let won = self.is_won();
        if won {
            info!(set_count = self.set_count(), turns, "board cleared");
            effects.push(
                Effect::NotifyWin {
                    set_count: self.set_count(),
                    turns,
                }
                .after(self.timing.win_delay),
            );
        }

        PairOutcome {
            first,
            second,
            first_value,
            second_value,
            matched,
            turns,
            won,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardState;

    fn session(values: &[u16]) -> GameSession {
        let board = Board::from_values(values).unwrap();
        GameSession::with_board(board, &GameConfig::new(values.len() / 2)).unwrap()
    }

    #[test]
    fn test_new_session() {
        let mut rng = GameRng::new(42);
        let session = GameSession::new(&GameConfig::new(4), &mut rng).unwrap();

        assert_eq!(session.board().len(), 8);
        assert_eq!(session.turns(), 0);
        assert!(session.guesses().is_empty());
        assert_eq!(session.phase(), TurnPhase::AwaitingFirstGuess);
        assert!(!session.is_won());
    }

    #[test]
    fn test_new_session_rejects_bad_set_count() {
        let mut rng = GameRng::new(42);
        assert!(GameSession::new(&GameConfig::new(0), &mut rng).is_err());
        assert!(GameSession::new(&GameConfig::new(21), &mut rng).is_err());
    }

    #[test]
    fn test_first_guess() {
        let mut s = session(&[0, 1, 0, 1]);
        let (outcome, effects) = s.select(CardIndex::new(1));

        assert_eq!(
            outcome,
            ClickOutcome::FirstGuess {
                index: CardIndex::new(1),
                value: CardValue::new(1),
            }
        );
        assert_eq!(s.phase(), TurnPhase::AwaitingSecondGuess);
        assert_eq!(s.turns(), 0);
        assert_eq!(effects.len(), 1);
        assert_eq!(s.board().state(CardIndex::new(1)), CardState::Revealed);
    }

    #[test]
    fn test_match_locks_cards_and_defers_highlight() {
        let mut s = session(&[0, 1, 0, 1]);
        s.select(CardIndex::new(0));
        let (outcome, effects) = s.select(CardIndex::new(2));

        let ClickOutcome::Pair(pair) = outcome else {
            panic!("Expected Pair");
        };
        assert!(pair.matched);
        assert!(!pair.won);
        assert_eq!(pair.turns, 1);
        assert_eq!(s.board().state(CardIndex::new(0)), CardState::Matched);
        assert_eq!(s.board().state(CardIndex::new(2)), CardState::Matched);

        let deferred: Vec<_> = effects.iter().filter(|e| e.is_deferred()).collect();
        assert_eq!(deferred.len(), 2);
        assert!(effects.iter().any(|e| *e == Effect::RenderTurns(1)));
    }

    #[test]
    fn test_mismatch_conceals_both() {
        let mut s = session(&[0, 1, 0, 1]);
        s.select(CardIndex::new(0));
        let (outcome, effects) = s.select(CardIndex::new(1));

        let ClickOutcome::Pair(pair) = outcome else {
            panic!("Expected Pair");
        };
        assert!(!pair.matched);
        assert_eq!(pair.first_value, CardValue::new(0));
        assert_eq!(pair.second_value, CardValue::new(1));
        assert_eq!(s.board().state(CardIndex::new(0)), CardState::Hidden);
        assert_eq!(s.board().state(CardIndex::new(1)), CardState::Hidden);
        assert_eq!(s.phase(), TurnPhase::AwaitingFirstGuess);
        assert!(effects.iter().all(|e| !e.is_deferred()));
        assert!(effects
            .iter()
            .any(|e| *e == Effect::card(CardIndex::new(1), CardValue::new(1), CardFace::Covered)));
    }

    #[test]
    fn test_repeat_click_on_open_card_is_ignored() {
        let mut s = session(&[0, 1, 0, 1]);
        s.select(CardIndex::new(3));
        let (outcome, effects) = s.select(CardIndex::new(3));

        assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::AlreadyRevealed));
        assert!(effects.is_empty());
        assert_eq!(s.guesses().len(), 1);
        assert_eq!(s.phase(), TurnPhase::AwaitingSecondGuess);
    }

    #[test]
    fn test_single_pair_board_wins_after_one_turn() {
        let mut s = session(&[0, 0]);
        s.select(CardIndex::new(0));
        let (outcome, effects) = s.select(CardIndex::new(1));

        let ClickOutcome::Pair(pair) = outcome else {
            panic!("Expected Pair");
        };
        assert!(pair.won);
        assert!(s.is_won());
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Deferred { effect, .. } if **effect == Effect::NotifyWin { set_count: 1, turns: 1 }
        )));
    }

    #[test]
    fn test_click_maps_pixels() {
        let mut s = session(&[0, 1, 0, 1]);
        let (outcome, _) = s.click(60, 50);
        assert!(matches!(outcome, ClickOutcome::FirstGuess { index, .. } if index == CardIndex::new(1)));

        let (outcome, _) = s.click(-1, 50);
        assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::OffBoard));
        assert_eq!(s.guesses().len(), 1);
    }

    #[test]
    fn test_initial_effects_cover_every_card() {
        let s = session(&[0, 1, 0, 1]);
        let effects: Vec<_> = s.initial_effects().into_iter().collect();

        assert_eq!(effects.len(), 6);
        assert!(matches!(effects[0], Effect::RenderBoardSize { set_count: 2, .. }));
        assert_eq!(effects[5], Effect::RenderTurns(0));
        assert!(effects[1..5]
            .iter()
            .all(|e| matches!(e, Effect::RenderCard { face: CardFace::Covered, .. })));
    }

    #[test]
    fn test_with_board_rejects_empty_card_cell() {
        let layout = Layout {
            card_width: 0,
            ..Layout::default()
        };
        let config = GameConfig::new(1).with_layout(layout);
        let board = Board::from_values(&[0, 0]).unwrap();

        let err = GameSession::with_board(board, &config).unwrap_err();
        assert!(matches!(err, crate::core::GameError::InvalidLayout(_)));
    }
}
