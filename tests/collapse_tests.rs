//! Row collapse tests - scenarios and properties over every small row

use tui_128::core::collapse_left;
use tui_128::types::Cell;

const VALUES: [Cell; 4] = [None, Some(2), Some(4), Some(8)];

/// Every row of length 4 over {empty, 2, 4, 8}.
fn all_rows() -> impl Iterator<Item = [Cell; 4]> {
    (0..VALUES.len().pow(4)).map(|mut n| {
        let mut row = [None; 4];
        for cell in row.iter_mut() {
            *cell = VALUES[n % VALUES.len()];
            n /= VALUES.len();
        }
        row
    })
}

fn tiles(row: &[Cell]) -> Vec<u32> {
    row.iter().flatten().copied().collect()
}

#[test]
fn test_scenarios() {
    assert_eq!(
        collapse_left(&[Some(2), Some(2), None, None]),
        (vec![Some(4), None, None, None], true)
    );
    assert_eq!(
        collapse_left(&[Some(2), Some(4), Some(8), Some(16)]),
        (vec![Some(2), Some(4), Some(8), Some(16)], false)
    );
    assert_eq!(
        collapse_left(&[Some(2), Some(2), Some(2), Some(2)]),
        (vec![Some(4), Some(4), None, None], true)
    );
    assert_eq!(
        collapse_left(&[Some(4), Some(4), Some(8), Some(8)]),
        (vec![Some(8), Some(16), None, None], true)
    );
}

#[test]
fn test_collapsed_row_is_a_fixed_point() {
    for row in all_rows() {
        let (once, _) = collapse_left(&row);
        let has_equal_neighbours = tiles(&once).windows(2).any(|w| w[0] == w[1]);
        let (twice, moved_again) = collapse_left(&once);
        if has_equal_neighbours {
            // [2, 2, 4, _] -> [4, 4, _, _]: the fresh 4 waits for the next move.
            assert!(moved_again, "{:?}", row);
        } else {
            assert_eq!(twice, once, "{:?}", row);
            assert!(!moved_again, "{:?}", row);
        }
    }
}

#[test]
fn test_repeated_collapse_settles() {
    for row in all_rows() {
        let mut current = row.to_vec();
        let mut steps = 0;
        loop {
            let (next, moved) = collapse_left(&current);
            if !moved {
                break;
            }
            current = next;
            steps += 1;
            assert!(steps <= row.len(), "{:?} never settles", row);
        }
        assert_eq!(collapse_left(&current).0, current);
    }
}

#[test]
fn test_length_is_preserved_and_tiles_are_packed_left() {
    for row in all_rows() {
        let (out, _) = collapse_left(&row);
        assert_eq!(out.len(), row.len());
        let packed = out.iter().take_while(|c| c.is_some()).count();
        assert_eq!(packed, tiles(&out).len(), "{:?} -> {:?}", row, out);
    }
}

#[test]
fn test_merges_are_exact_pairs() {
    for row in all_rows() {
        let before = tiles(&row);
        let (out, _) = collapse_left(&row);
        let after = tiles(&out);

        assert!(after.len() <= before.len(), "{:?}", row);
        // Each merge turns two equal tiles into one of twice the value,
        // so the sum is conserved and the count drops by one per merge.
        assert_eq!(
            after.iter().sum::<u32>(),
            before.iter().sum::<u32>(),
            "{:?}",
            row
        );
        let merges = before.len() - after.len();
        assert!(merges <= before.len() / 2, "{:?}", row);
    }
}

#[test]
fn test_moved_iff_row_changed() {
    for row in all_rows() {
        let (out, moved) = collapse_left(&row);
        assert_eq!(moved, out.as_slice() != row.as_slice(), "{:?}", row);
    }
}

#[test]
fn test_merged_tile_never_merges_twice() {
    // A naive fold would produce [8, _, _, _] here.
    assert_eq!(
        collapse_left(&[Some(2), Some(2), Some(4), None]).0,
        vec![Some(4), Some(4), None, None]
    );
    assert_eq!(
        collapse_left(&[Some(4), Some(2), Some(2), None]).0,
        vec![Some(4), Some(4), None, None]
    );
}
