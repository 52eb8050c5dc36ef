//! Tile colours by value.
//!
//! Each tile from 2 up to 128 has its own colour; anything else (empty cells
//! and values past the target) uses the default style.

use crate::fb::{CellStyle, Rgb};
use crate::types::Cell;

const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Board background between tiles
pub const BOARD_BG: Rgb = Rgb::new(187, 173, 160);

/// Style for a tile
pub fn tile_style(cell: Cell) -> CellStyle {
    let (bg, fg) = match cell {
        Some(2) => (Rgb::new(238, 228, 218), DARK_TEXT),
        Some(4) => (Rgb::new(237, 224, 200), DARK_TEXT),
        Some(8) => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        Some(16) => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        Some(32) => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        Some(64) => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        Some(128) => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        _ => (Rgb::new(205, 193, 180), DARK_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}
