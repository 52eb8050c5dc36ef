//! Row collapsing - slide and merge a single row toward the left
//!
//! One left-to-right pass with a one-tile `pending` buffer:
//!
//! - empty cells are skipped
//! - a tile equal to `pending` merges with it into `pending * 2`, and the
//!   buffer is cleared so the merged tile is never compared again this pass
//! - a different tile flushes `pending` and takes its place
//!
//! `[2, 2, 2, 2]` therefore becomes `[4, 4, _, _]`, never `[8, _, _, _]`.
//!
//! A pair whose sum does not fit in a `u32` (two `2^31` tiles) is treated as
//! non-mergeable.

use crate::types::Cell;

/// Collapse `row` leftward into `out` (cleared first), padded to `row.len()`.
///
/// Returns whether any position changed.
pub fn collapse_left_into(row: &[Cell], out: &mut Vec<Cell>) -> bool {
    out.clear();
    let mut pending: Cell = None;

    for &cell in row {
        let Some(value) = cell else {
            continue;
        };
        match pending {
            None => pending = Some(value),
            Some(p) if p == value => match p.checked_mul(2) {
                Some(merged) => {
                    out.push(Some(merged));
                    pending = None;
                }
                None => {
                    out.push(Some(p));
                    pending = Some(value);
                }
            },
            Some(p) => {
                out.push(Some(p));
                pending = Some(value);
            }
        }
    }

    if pending.is_some() {
        out.push(pending);
    }
    out.resize(row.len(), None);

    out.as_slice() != row
}

/// Collapse a row leftward, returning `(new_row, moved)`.
///
/// ```
/// use tui_128_core::collapse_left;
///
/// let (row, moved) = collapse_left(&[Some(2), Some(2), Some(2), Some(2)]);
/// assert_eq!(row, vec![Some(4), Some(4), None, None]);
/// assert!(moved);
/// ```
pub fn collapse_left(row: &[Cell]) -> (Vec<Cell>, bool) {
    let mut out = Vec::with_capacity(row.len());
    let moved = collapse_left_into(row, &mut out);
    (out, moved)
}
