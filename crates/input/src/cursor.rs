//! Board cursor: a row-major position on the card grid.

use crate::map::{Direction, InputAction};
use crate::types::{grid_columns, GameAction};

/// Selection cursor over `slot_count` cards laid out by [`grid_columns`].
///
/// Moves wrap around the edges. The last row may be short; moving vertically
/// into a gap lands on the last card of that row instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    slot_count: usize,
    cols: usize,
}

impl Cursor {
    pub fn new(slot_count: usize) -> Self {
        Self {
            index: 0,
            slot_count,
            cols: grid_columns(slot_count),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Re-fit to a board of a different size, keeping the position when it still exists.
    pub fn resize(&mut self, slot_count: usize) {
        self.slot_count = slot_count;
        self.cols = grid_columns(slot_count);
        if self.index >= slot_count {
            self.index = 0;
        }
    }

    pub fn move_to(&mut self, index: usize) {
        if index < self.slot_count {
            self.index = index;
        }
    }

    pub fn step(&mut self, dir: Direction) {
        if self.slot_count == 0 {
            return;
        }
        let rows = self.slot_count.div_ceil(self.cols);
        let row = self.index / self.cols;
        let col = self.index % self.cols;
        let row_len = |r: usize| (self.slot_count - r * self.cols).min(self.cols);

        self.index = match dir {
            Direction::Left => {
                let len = row_len(row);
                row * self.cols + (col + len - 1) % len
            }
            Direction::Right => row * self.cols + (col + 1) % row_len(row),
            Direction::Up => {
                let r = (row + rows - 1) % rows;
                r * self.cols + col.min(row_len(r) - 1)
            }
            Direction::Down => {
                let r = (row + 1) % rows;
                r * self.cols + col.min(row_len(r) - 1)
            }
        };
    }

    /// Apply an input action; returns the game action it produces, if any.
    pub fn handle(&mut self, action: InputAction) -> Option<GameAction> {
        match action {
            InputAction::Move(dir) => {
                self.step(dir);
                None
            }
            InputAction::Flip => Some(GameAction::Select(self.index)),
            InputAction::NewGame => Some(GameAction::NewGame),
        }
    }
}
