//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{tile_style, BOARD_BG};
use crate::types::GRID_SIZE;

pub const TITLE: &str = "128";
pub const SUBTITLE: &str = "Join the tiles, get to 128!";
pub const HELP: &str = "←↑↓→ move · r restart · q quit";
pub const GAME_OVER_TEXT: &str = " GAME OVER ";
pub const STUCK_TEXT: &str = " NO MOVES · r ";

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where everything lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Left edge of the content column (title, board, help)
    pub x: u16,
    pub width: u16,
    pub title_y: u16,
    pub board_x: u16,
    pub board_y: u16,
    pub board_w: u16,
    pub board_h: u16,
    pub status_y: u16,
    pub help_y: u16,
}

/// Renders the title, the 4x4 board, and the status and help lines.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square with typical glyph aspect ratio.
        Self {
            tile_w: 6,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Compute the layout for a viewport.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let n = GRID_SIZE as u16;
        // One column/row of board background between and around tiles.
        let board_w = n * self.tile_w + n + 1;
        let board_h = n * self.tile_h + n + 1;

        let text_w = SUBTITLE.chars().count().max(HELP.chars().count()) as u16;
        let width = board_w.max(text_w);
        // title, subtitle, gap, board, gap, status, help
        let height = 3 + board_h + 3;

        let x = viewport.width.saturating_sub(width) / 2;
        let title_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };
        let board_y = title_y + 3;
        let status_y = board_y + board_h + 1;

        Layout {
            x,
            width,
            title_y,
            board_x: x + (width - board_w) / 2,
            board_y,
            board_w,
            board_h,
            status_y,
            help_y: status_y + 1,
        }
    }

    /// Top-left terminal cell of tile `(row, col)`.
    pub fn tile_origin(&self, layout: &Layout, row: u16, col: u16) -> (u16, u16) {
        (
            layout.board_x + 1 + col * (self.tile_w + 1),
            layout.board_y + 1 + row * (self.tile_h + 1),
        )
    }

    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let text = CellStyle::default();
        let dim = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));

        fb.put_str_centered(layout.x, layout.title_y, layout.width, TITLE, text.bold());
        fb.put_str_centered(layout.x, layout.title_y + 1, layout.width, SUBTITLE, dim);

        fb.fill_rect(
            layout.board_x,
            layout.board_y,
            layout.board_w,
            layout.board_h,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );

        for (r, row) in snap.board.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                let (tx, ty) = self.tile_origin(&layout, r as u16, c as u16);
                let style = tile_style(cell);
                fb.fill_rect(tx, ty, self.tile_w, self.tile_h, ' ', style);
                if let Some(value) = cell {
                    let label = value.to_string();
                    fb.put_str_centered(tx, ty + self.tile_h / 2, self.tile_w, &label, style);
                }
            }
        }

        let status = match snap.max_tile {
            Some(best) => format!("moves {}  best {}", snap.moves, best),
            None => format!("moves {}", snap.moves),
        };
        fb.put_str_centered(layout.x, layout.status_y, layout.width, &status, text);
        fb.put_str_centered(layout.x, layout.help_y, layout.width, HELP, dim);

        if snap.game_over {
            self.draw_overlay_text(fb, &layout, GAME_OVER_TEXT);
        } else if !snap.can_move {
            self.draw_overlay_text(fb, &layout, STUCK_TEXT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let y = layout.board_y + layout.board_h / 2;
        fb.put_str_centered(layout.board_x, y, layout.board_w, text, style);
    }
}
