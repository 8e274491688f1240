//! Plain-text renderer for terminal front ends.

use std::fmt::Write as _;

use super::{win_message, CardFace, Renderer, TITLE};
use crate::board::SurfaceSize;
use crate::core::{CardIndex, CardValue};

/// Keeps a text picture of the board up to date.
///
/// Cards are drawn four columns wide: `[##]` covered, `[ 7]` revealed,
/// `< 7>` highlighted. Notifications queue up until the front end takes
/// them.
#[derive(Clone, Debug)]
pub struct TextRenderer {
    cards_per_row: usize,
    set_count: usize,
    surface: Option<SurfaceSize>,
    cells: Vec<Option<(CardValue, CardFace)>>,
    turns: u32,
    messages: Vec<String>,
}

impl TextRenderer {
    /// Create a renderer that wraps rows after `cards_per_row` cards.
    #[must_use]
    pub fn new(cards_per_row: usize) -> Self {
        Self {
            cards_per_row: cards_per_row.max(1),
            set_count: 0,
            surface: None,
            cells: Vec::new(),
            turns: 0,
            messages: Vec::new(),
        }
    }

    /// Turn count as last rendered.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Play-surface size as last rendered.
    #[must_use]
    pub fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }

    /// How a card is currently drawn, if it has been drawn at all.
    #[must_use]
    pub fn face(&self, index: CardIndex) -> Option<CardFace> {
        self.cells.get(index.index()).copied().flatten().map(|(_, face)| face)
    }

    /// Take all pending notifications.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Draw the board and turn counter.
    #[must_use]
    pub fn frame(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} - {} sets - Turns: {}", TITLE, self.set_count, self.turns);

        for (row, chunk) in self.cells.chunks(self.cards_per_row).enumerate() {
            let _ = write!(out, "{:>3} ", row * self.cards_per_row);
            let cells: Vec<String> = chunk.iter().map(|cell| draw_cell(*cell)).collect();
            let _ = writeln!(out, "{}", cells.join(" "));
        }
        out
    }
}

fn draw_cell(cell: Option<(CardValue, CardFace)>) -> String {
    match cell {
        None | Some((_, CardFace::Covered)) => "[##]".to_string(),
        Some((value, CardFace::Revealed)) => format!("[{:>2}]", value.raw()),
        Some((value, CardFace::Highlighted)) => format!("<{:>2}>", value.raw()),
    }
}

impl Renderer for TextRenderer {
    fn render_board_size(&mut self, set_count: usize, surface: SurfaceSize) {
        self.set_count = set_count;
        self.surface = Some(surface);
        self.cells = vec![None; set_count * 2];
    }

    fn render_card(&mut self, index: CardIndex, value: CardValue, face: CardFace) {
        if let Some(cell) = self.cells.get_mut(index.index()) {
            *cell = Some((value, face));
        }
    }

    fn render_turns(&mut self, turns: u32) {
        self.turns = turns;
    }

    fn notify_win(&mut self, set_count: usize, turns: u32) {
        self.messages.push(win_message(set_count, turns));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SurfaceSize {
        SurfaceSize { width: 153, height: 103 }
    }

    #[test]
    fn test_frame_draws_each_face() {
        let mut r = TextRenderer::new(10);
        r.render_board_size(2, surface());
        r.render_card(CardIndex::new(1), CardValue::new(1), CardFace::Revealed);
        r.render_card(CardIndex::new(2), CardValue::new(0), CardFace::Highlighted);
        r.render_turns(3);

        assert_eq!(
            r.frame(),
            "Memory Game - 2 sets - Turns: 3\n  0 [##] [ 1] < 0> [##]\n"
        );
        assert_eq!(r.face(CardIndex::new(2)), Some(CardFace::Highlighted));
        assert_eq!(r.face(CardIndex::new(0)), None);
    }

    #[test]
    fn test_frame_wraps_rows() {
        let mut r = TextRenderer::new(4);
        r.render_board_size(3, surface());

        let frame = r.frame();
        let rows: Vec<_> = frame.lines().skip(1).collect();
        assert_eq!(rows, vec!["  0 [##] [##] [##] [##]", "  4 [##] [##]"]);
    }

    #[test]
    fn test_off_board_card_is_ignored() {
        let mut r = TextRenderer::new(10);
        r.render_board_size(1, surface());
        r.render_card(CardIndex::new(5), CardValue::new(0), CardFace::Revealed);
        assert_eq!(r.face(CardIndex::new(5)), None);
    }

    #[test]
    fn test_notifications_are_taken_once() {
        let mut r = TextRenderer::new(10);
        r.notify_win(3, 4);

        let messages = r.take_messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("3 card sets in 4 turns"));
        assert!(r.take_messages().is_empty());
    }
}
