//! Side-effect requests emitted by the controller.
//!
//! The controller never talks to a renderer directly. Each state change
//! yields an `EffectBatch` that the driver hands to the rendering side.
//! Delayed requests are wrapped in `Effect::Deferred` and run on the
//! renderer's own schedule; the game state they describe is already final
//! when they are emitted.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::SurfaceSize;
use crate::core::{CardIndex, CardValue};
use crate::render::CardFace;

/// A request for the rendering collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Resize the play surface for a new board.
    RenderBoardSize {
        set_count: usize,
        surface: SurfaceSize,
    },

    /// Draw one card.
    RenderCard {
        index: CardIndex,
        value: CardValue,
        face: CardFace,
    },

    /// Update the turn counter display.
    RenderTurns(u32),

    /// Announce the end of the game.
    NotifyWin { set_count: usize, turns: u32 },

    /// Run `effect` after `delay`. Fire-and-forget: never cancelled.
    Deferred { delay: Duration, effect: Box<Effect> },
}

impl Effect {
    /// Draw a card with the given face.
    #[must_use]
    pub fn card(index: CardIndex, value: CardValue, face: CardFace) -> Self {
        Effect::RenderCard { index, value, face }
    }

    /// Wrap this effect so it runs after `delay`.
    #[must_use]
    pub fn after(self, delay: Duration) -> Self {
        Effect::Deferred {
            delay,
            effect: Box::new(self),
        }
    }

    /// True for `Deferred` effects.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Effect::Deferred { .. })
    }
}

/// Effects produced by a single controller step, in emission order.
///
/// A pair resolution emits at most five effects, so these stay inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectBatch {
    effects: SmallVec<[Effect; 6]>,
}

impl EffectBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect.
    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over the effects in order.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = smallvec::IntoIter<[Effect; 6]>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}
