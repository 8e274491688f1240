//! Seeded shuffling for decks.
//!
//! A `GameRng` is created once per driver from a single seed. Each game
//! deals from its own `fork`, so one seed replays the whole sequence of
//! boards a player saw.
//!
//! ```
//! use memory_game::core::GameRng;
//!
//! let deal = |rng: &mut GameRng| {
//!     let mut deck = vec![0, 0, 1, 1, 2, 2, 3, 3];
//!     rng.fork().shuffle(&mut deck);
//!     deck
//! };
//!
//! let mut rng = GameRng::new(42);
//! let (first, second) = (deal(&mut rng), deal(&mut rng));
//!
//! let mut replay = GameRng::new(42);
//! assert_eq!(deal(&mut replay), first);
//! assert_eq!(deal(&mut replay), second);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio step between the seeds of successive forks.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deck shuffler backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
    games_dealt: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            games_dealt: 0,
        }
    }

    /// The seed this RNG was created from. Logged with every new game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Branch off the RNG for the next game.
    ///
    /// The n-th fork of a given seed is always the same, whatever the
    /// earlier forks were used for.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.games_dealt += 1;
        Self::new(self.seed.wrapping_add(self.games_dealt.wrapping_mul(FORK_STEP)))
    }

    /// Shuffle a deck in place.
    pub fn shuffle<T>(&mut self, deck: &mut [T]) {
        deck.shuffle(&mut self.stream);
    }
}
