//! Grid geometry: card index <-> grid cell <-> pixel.
//!
//! Cards are laid out row-major, `cards_per_row` to a row. Every card
//! occupies a `card_width` x `card_height` cell, and the whole grid is
//! shifted by `offset` pixels from the play surface's top-left corner.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::CardIndex;

/// A cell in the card grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub col: usize,
    pub row: usize,
}

/// Pixel dimensions of the play surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// Grid geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Cards per row (W).
    pub cards_per_row: usize,

    /// Cell width in pixels.
    pub card_width: u32,

    /// Cell height in pixels.
    pub card_height: u32,

    /// Margin between the surface origin and the first cell.
    pub offset: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cards_per_row: 10,
            card_width: 50,
            card_height: 100,
            offset: 3,
        }
    }
}

impl Layout {
    /// Reject geometries that cannot map clicks back to cards.
    pub fn validate(&self) -> Result<()> {
        if self.cards_per_row == 0 {
            return Err(GameError::InvalidLayout("cards_per_row must be positive".into()));
        }
        if self.card_width == 0 || self.card_height == 0 {
            return Err(GameError::InvalidLayout(format!(
                "card cell must be non-empty, got {}x{}",
                self.card_width, self.card_height
            )));
        }
        Ok(())
    }

    /// Grid cell of a card: `(i mod W, i div W)`.
    #[must_use]
    pub fn cell_of(&self, index: CardIndex) -> GridCell {
        GridCell {
            col: index.index() % self.cards_per_row,
            row: index.index() / self.cards_per_row,
        }
    }

    /// Top-left pixel of a card's cell, clamped to `i32::MAX`.
    #[must_use]
    pub fn card_origin(&self, index: CardIndex) -> (i32, i32) {
        let cell = self.cell_of(index);
        let x = cell.col as i64 * i64::from(self.card_width) + i64::from(self.offset);
        let y = cell.row as i64 * i64::from(self.card_height) + i64::from(self.offset);
        (saturate(x), saturate(y))
    }

    /// Map a click on the play surface to a card.
    ///
    /// Returns `None` for points above or left of the grid, right of the
    /// last column, or past the last card. An empty card cell hits nothing.
    #[must_use]
    pub fn hit_test(&self, x: i32, y: i32, card_count: usize) -> Option<CardIndex> {
        let dx = i64::from(x) - i64::from(self.offset);
        let dy = i64::from(y) - i64::from(self.offset);
        if dx < 0 || dy < 0 {
            return None;
        }

        let col = dx.checked_div(i64::from(self.card_width))? as usize;
        let row = dy.checked_div(i64::from(self.card_height))? as usize;
        if col >= self.cards_per_row {
            return None;
        }

        let index = row.checked_mul(self.cards_per_row)?.checked_add(col)?;
        if index >= card_count {
            return None;
        }
        u16::try_from(index).ok().map(CardIndex)
    }

    /// Number of rows needed for `card_count` cards.
    #[must_use]
    pub fn rows_for(&self, card_count: usize) -> usize {
        card_count.div_ceil(self.cards_per_row)
    }

    /// Size of a play surface that fits exactly `card_count` cards.
    #[must_use]
    pub fn surface_size(&self, card_count: usize) -> SurfaceSize {
        let cols = card_count.min(self.cards_per_row) as u32;
        let rows = self.rows_for(card_count) as u32;
        SurfaceSize {
            width: cols * self.card_width + self.offset,
            height: rows * self.card_height + self.offset,
        }
    }
}

fn saturate(pixel: i64) -> i32 {
    i32::try_from(pixel).unwrap_or(i32::MAX)
}
