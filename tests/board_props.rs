//! Property tests for dealing, card-state transitions and turn counting.

use memory_game::{
    Board, CardIndex, CardState, ClickOutcome, GameConfig, GameRng, GameSession, Layout, MAX_SETS,
};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    /// Property: a fresh board holds every value in 0..N exactly twice.
    #[test]
    fn prop_fresh_board_has_exact_pairs(
        set_count in 1usize..=MAX_SETS,
        seed in any::<u64>(),
    ) {
        let board = Board::new(set_count, MAX_SETS, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(board.len(), 2 * set_count);
        let mut counts = vec![0usize; set_count];
        for (_, card) in board.iter() {
            prop_assert!(usize::from(card.value().raw()) < set_count);
            counts[usize::from(card.value().raw())] += 1;
            prop_assert_eq!(card.state, CardState::Hidden);
        }
        prop_assert!(counts.iter().all(|&c| c == 2), "counts: {:?}", counts);
    }

    /// Property: out-of-range set counts are rejected.
    #[test]
    fn prop_bad_set_count_rejected(
        set_count in (MAX_SETS + 1)..1000usize,
        seed in any::<u64>(),
    ) {
        prop_assert!(Board::new(set_count, MAX_SETS, &mut GameRng::new(seed)).is_err());
    }

    /// Property: reveal + conceal restores Hidden; reveal + mark_matched sticks.
    #[test]
    fn prop_state_round_trips(
        set_count in 1usize..=MAX_SETS,
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut board = Board::new(set_count, MAX_SETS, &mut GameRng::new(seed)).unwrap();
        let i = CardIndex::new(pick.index(board.len()) as u16);

        board.reveal(i);
        board.conceal(i);
        prop_assert_eq!(board.state(i), CardState::Hidden);

        board.reveal(i);
        board.mark_matched(i);
        prop_assert!(!board.reveal(i));
        prop_assert!(board.is_revealed(i));
        prop_assert_eq!(board.state(i), CardState::Matched);
    }

    /// Property: after any click sequence the turn count is half the history,
    /// and ignored clicks never touch the history.
    #[test]
    fn prop_turns_follow_history(
        set_count in 1usize..=8,
        seed in any::<u64>(),
        clicks in prop::collection::vec((-20i32..600, -20i32..300), 0..80),
    ) {
        let config = GameConfig::new(set_count);
        let mut session = GameSession::new(&config, &mut GameRng::new(seed)).unwrap();
        let mut completed_pairs = 0u32;

        for (x, y) in clicks {
            let before = session.guesses().len();
            let (outcome, effects) = session.click(x, y);
            match outcome {
                ClickOutcome::Ignored(_) => {
                    prop_assert_eq!(session.guesses().len(), before);
                    prop_assert!(effects.is_empty());
                }
                ClickOutcome::FirstGuess { .. } => {
                    prop_assert_eq!(session.guesses().len(), before + 1);
                }
                ClickOutcome::Pair(pair) => {
                    completed_pairs += 1;
                    prop_assert_eq!(pair.turns, completed_pairs);
                    prop_assert_eq!(pair.won, session.is_won());
                }
            }
            prop_assert_eq!(session.turns(), (session.guesses().len() / 2) as u32);
            prop_assert_eq!(session.turns(), completed_pairs);
        }
    }

    /// Property: every on-board pixel maps back to the card drawn there.
    #[test]
    fn prop_hit_test_matches_cells(
        card_count in 1usize..=40,
        dx in 0i32..50,
        dy in 0i32..100,
        pick in any::<prop::sample::Index>(),
    ) {
        let layout = Layout::default();
        let index = CardIndex::new(pick.index(card_count) as u16);
        let (x, y) = layout.card_origin(index);

        prop_assert_eq!(layout.hit_test(x + dx, y + dy, card_count), Some(index));
    }
}
