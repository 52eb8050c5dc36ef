//! Move engine tests - full-grid shifts in every direction

use tui_128::core::{can_move, shift, Grid, SimpleRng, TileRng};
use tui_128::types::{Cell, Direction};

fn grid(rows: [[u32; 4]; 4]) -> Grid {
    let rows = rows.map(|r| r.map(|v| if v == 0 { None } else { Some(v) }));
    Grid::from_rows(&rows)
}

fn random_grid(rng: &mut SimpleRng) -> Grid {
    let mut g = Grid::new();
    for r in 0..4 {
        for c in 0..4 {
            let cell: Cell = match rng.next_range(6) {
                0 | 1 => None,
                k => Some(1 << k),
            };
            g.set(r, c, cell);
        }
    }
    g
}

#[test]
fn test_single_row_grid_moves_left() {
    let g = Grid::from_rows(&[[None, None, Some(2), Some(2)]]);
    let out = shift(&g, Direction::Left);
    assert!(out.moved);
    assert_eq!(out.grid.to_rows(), vec![vec![Some(4), None, None, None]]);
}

#[test]
fn test_each_direction_on_one_board() {
    let g = grid([
        [2, 2, 0, 4],
        [0, 0, 0, 4],
        [8, 0, 8, 0],
        [0, 0, 0, 0],
    ]);

    assert_eq!(
        shift(&g, Direction::Left).grid,
        grid([[4, 4, 0, 0], [4, 0, 0, 0], [16, 0, 0, 0], [0, 0, 0, 0]])
    );
    assert_eq!(
        shift(&g, Direction::Right).grid,
        grid([[0, 0, 4, 4], [0, 0, 0, 4], [0, 0, 0, 16], [0, 0, 0, 0]])
    );
    assert_eq!(
        shift(&g, Direction::Up).grid,
        grid([[2, 2, 8, 8], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
    );
    assert_eq!(
        shift(&g, Direction::Down).grid,
        grid([[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [8, 2, 8, 8]])
    );
}

#[test]
fn test_moved_iff_grid_changed() {
    let mut rng = SimpleRng::new(31337);
    for _ in 0..500 {
        let g = random_grid(&mut rng);
        for dir in Direction::ALL {
            let out = shift(&g, dir);
            assert_eq!(out.moved, out.grid != g, "{:?}\n{}", dir, g);
        }
    }
}

#[test]
fn test_tile_count_never_grows_and_sum_is_kept() {
    let mut rng = SimpleRng::new(99);
    for _ in 0..500 {
        let g = random_grid(&mut rng);
        let sum: u32 = g.cells().iter().flatten().sum();
        for dir in Direction::ALL {
            let out = shift(&g, dir).grid;
            assert!(out.tile_count() <= g.tile_count());
            assert_eq!(out.cells().iter().flatten().sum::<u32>(), sum);
            assert!(out.cells().iter().flatten().all(|v| v.is_power_of_two()));
        }
    }
}

#[test]
fn test_opposite_shifts_on_settled_row() {
    // Nothing to merge: right then left restores the starting grid.
    let g = grid([[2, 4, 8, 0], [0; 4], [0; 4], [0; 4]]);
    let right = shift(&g, Direction::Right).grid;
    assert_eq!(shift(&right, Direction::Left).grid, g);
}

#[test]
fn test_full_board_with_pairs_can_move() {
    // Only the 16s in the bottom row can merge, and only sideways.
    let g = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [8, 16, 16, 8]]);
    assert!(can_move(&g));
    assert!(shift(&g, Direction::Left).moved);
    assert!(shift(&g, Direction::Right).moved);
    assert!(!shift(&g, Direction::Up).moved);
    assert!(!shift(&g, Direction::Down).moved);
}
