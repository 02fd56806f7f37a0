//! BoardView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SessionSnapshot, SlotSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{grid_columns, grid_rows, Card, VisualState};

/// Card width in terminal columns, border included.
pub const CARD_W: u16 = 6;
/// Card height in terminal rows, border included.
pub const CARD_H: u16 = 3;

const GAP_X: u16 = 1;
const PANEL_W: u16 = 12;
const TABLE_BG: Rgb = Rgb::new(20, 60, 35);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board frame placement for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    cols: usize,
}

/// Terminal renderer for the card table.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    /// Reveal every card regardless of state (debug aid).
    peek: bool,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_peek(mut self, peek: bool) -> Self {
        self.peek = peek;
        self
    }

    /// Size of the bordered board for `slot_count` cards.
    pub fn frame_size(slot_count: usize) -> (u16, u16) {
        let cols = grid_columns(slot_count) as u16;
        let rows = grid_rows(slot_count) as u16;
        let grid_w = cols * CARD_W + cols.saturating_sub(1) * GAP_X;
        let grid_h = rows * CARD_H;
        (grid_w + 4, grid_h + 2)
    }

    /// Render into an existing framebuffer, reusing its allocation.
    ///
    /// `cursor` is the highlighted slot, if any.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let frame = self.layout(snap, viewport);

        let table = CellStyle::new(Rgb::new(200, 200, 200), TABLE_BG);
        fb.fill_rect(frame.x, frame.y, frame.w, frame.h, ' ', table);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, table);
        fb.put_str_centered(frame.x, frame.y, frame.w, " FLIP CARDS ", table.bold());

        for (i, slot) in snap.slots.iter().enumerate() {
            let (x, y) = self.card_origin(frame, i);
            self.draw_card(fb, x, y, slot, cursor == Some(i));
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.complete {
            self.draw_completion(fb, snap, viewport, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    /// Map a terminal position to the slot drawn there.
    pub fn slot_at(
        &self,
        snap: &SessionSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<usize> {
        let frame = self.layout(snap, viewport);
        (0..snap.slots.len()).find(|&i| {
            let (cx, cy) = self.card_origin(frame, i);
            x >= cx && x < cx + CARD_W && y >= cy && y < cy + CARD_H
        })
    }

    fn layout(&self, snap: &SessionSnapshot, viewport: Viewport) -> Frame {
        let (w, h) = Self::frame_size(snap.slots.len());
        // Leave room for the side panel when the terminal is wide enough.
        let total_w = w + PANEL_W + 2;
        let x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(w) / 2
        };
        Frame {
            x,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
            cols: grid_columns(snap.slots.len()),
        }
    }

    fn card_origin(&self, frame: Frame, index: usize) -> (u16, u16) {
        let row = (index / frame.cols) as u16;
        let col = (index % frame.cols) as u16;
        (
            frame.x + 2 + col * (CARD_W + GAP_X),
            frame.y + 1 + row * CARD_H,
        )
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, slot: &SlotSnapshot, selected: bool) {
        let face = if self.peek {
            Some(slot.card)
        } else {
            slot.visible_card()
        };

        let (border_fg, bg) = match slot.state {
            VisualState::NotFlipped => (Rgb::new(120, 140, 220), Rgb::new(30, 40, 110)),
            VisualState::Flipped => (Rgb::new(240, 240, 240), Rgb::new(245, 245, 235)),
            VisualState::Matched => (Rgb::new(90, 200, 110), Rgb::new(210, 235, 210)),
        };
        let mut border = CellStyle::new(border_fg, TABLE_BG);
        if selected {
            border = CellStyle::new(Rgb::new(255, 215, 0), TABLE_BG).bold();
        }

        fb.draw_box(x, y, CARD_W, CARD_H, border);
        let inner_w = CARD_W - 2;
        match face {
            Some(card) => {
                let mut style = CellStyle::new(card_color(card), bg).bold();
                if slot.state == VisualState::Matched {
                    style.bold = false;
                }
                fb.fill_rect(x + 1, y + 1, inner_w, 1, ' ', style);
                let label = card.to_string();
                fb.put_str_centered(x + 1, y + 1, inner_w, &label, style);
            }
            None => {
                let back = CellStyle::new(Rgb::new(90, 110, 200), bg);
                fb.fill_rect(x + 1, y + 1, inner_w, 1, '░', back);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "BEST", label);
        y += 1;
        match snap.best_score {
            Some(best) => {
                fb.put_u32(panel_x, y, best, value);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y += 2;

        fb.put_str(panel_x, y, "TRIALS", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.trials, value);
        y += 2;

        fb.put_str(panel_x, y, "MATCHED", label);
        y += 1;
        let end = fb.put_u32(panel_x, y, snap.matched_pairs, value);
        let end = fb.put_str(end, y, "/", value);
        fb.put_u32(end, y, snap.pair_count as u32, value);
        y += 2;

        // The completion banner takes the row under the board.
        let hint_end = if snap.complete {
            frame.y + frame.h
        } else {
            viewport.height
        };
        for line in ["arrows move", "space flip", "n new game", "q quit"] {
            if y >= hint_end {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_completion(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mut text = format!(" COMPLETE IN {} TRIALS ", snap.trials);
        if snap.best_score == Some(snap.trials) {
            text.push_str("- BEST! ");
        }

        // Just below the board, or on its bottom border if the terminal is too short.
        let below = frame.y + frame.h;
        let y = if below < viewport.height { below } else { below - 1 };
        let len = text.chars().count() as u16;
        let x = (frame.x + frame.w / 2).saturating_sub(len / 2);
        fb.put_str(x, y, &text, style);
    }
}

fn card_color(card: Card) -> Rgb {
    if card.suit.is_red() {
        Rgb::new(200, 30, 40)
    } else {
        Rgb::new(20, 20, 20)
    }
}
