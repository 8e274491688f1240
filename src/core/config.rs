//! Game configuration types.
//!
//! - `GameConfig`: deck size selection plus layout and timing
//! - `Timing`: delays for the cosmetic deferred effects
//!
//! The selectable set counts are `1..=max_sets`; the default selection is
//! the middle of that range.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::board::Layout;

/// Largest selectable number of card sets.
pub const MAX_SETS: usize = 20;

/// Default set count offered by the selection UI for a given maximum.
///
/// ```
/// use memory_game::core::config::{default_set_count, MAX_SETS};
///
/// assert_eq!(default_set_count(MAX_SETS), 10);
/// assert_eq!(default_set_count(1), 1);
/// ```
#[must_use]
pub const fn default_set_count(max_sets: usize) -> usize {
    if max_sets < 2 {
        max_sets
    } else {
        max_sets / 2
    }
}

/// Delays for the deferred, purely cosmetic effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Delay before a matched pair is recolored.
    pub highlight_delay: Duration,

    /// Delay before the win notification, letting the last card settle.
    pub win_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            highlight_delay: Duration::from_millis(500),
            win_delay: Duration::from_millis(50),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct pairs on the board (1..=max_sets).
    pub set_count: usize,

    /// Upper bound for `set_count`.
    pub max_sets: usize,

    /// Grid geometry.
    pub layout: Layout,

    /// Cosmetic delays.
    pub timing: Timing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            set_count: default_set_count(MAX_SETS),
            max_sets: MAX_SETS,
            layout: Layout::default(),
            timing: Timing::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given set count with default layout.
    pub fn new(set_count: usize) -> Self {
        Self::default().with_set_count(set_count)
    }

    /// Set the number of card sets.
    #[must_use]
    pub fn with_set_count(mut self, set_count: usize) -> Self {
        self.set_count = set_count;
        self
    }

    /// Set the upper bound for the set count.
    #[must_use]
    pub fn with_max_sets(mut self, max_sets: usize) -> Self {
        self.max_sets = max_sets;
        self
    }

    /// Set the grid geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the cosmetic delays.
    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// The set counts the selection UI may offer.
    #[must_use]
    pub fn set_count_choices(&self) -> RangeInclusive<usize> {
        1..=self.max_sets
    }

    /// Check that `set_count` is a valid selection.
    pub fn check_set_count(&self, set_count: usize) -> Result<()> {
        if self.set_count_choices().contains(&set_count) {
            Ok(())
        } else {
            Err(GameError::InvalidSetCount {
                requested: set_count,
                max: self.max_sets,
            })
        }
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.check_set_count(self.set_count)?;
        self.layout.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.set_count, 10);
        assert_eq!(config.max_sets, 20);
        assert_eq!(config.timing.highlight_delay, Duration::from_millis(500));
        assert_eq!(config.timing.win_delay, Duration::from_millis(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(3)
            .with_max_sets(8)
            .with_timing(Timing {
                highlight_delay: Duration::ZERO,
                win_delay: Duration::ZERO,
            });

        assert_eq!(config.set_count, 3);
        assert_eq!(config.set_count_choices(), 1..=8);
        assert_eq!(config.timing.highlight_delay, Duration::ZERO);
    }

    #[test]
    fn test_set_count_bounds() {
        let config = GameConfig::default();
        assert!(config.check_set_count(1).is_ok());
        assert!(config.check_set_count(20).is_ok());
        assert_eq!(
            config.check_set_count(0),
            Err(GameError::InvalidSetCount { requested: 0, max: 20 })
        );
        assert!(config.check_set_count(21).is_err());
        assert!(GameConfig::new(25).validate().is_err());
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let layout = Layout {
            cards_per_row: 0,
            ..Layout::default()
        };
        let config = GameConfig::default().with_layout(layout);
        assert!(matches!(config.validate(), Err(GameError::InvalidLayout(_))));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
