//! Row-major index math and neighbor lookup
//!
//! The quilt section is a flat row-major sequence: `index = row * width +
//! col`. Constraints consult up to five earlier positions: the three cells
//! touching from the previous row (up-left, up, up-right), the left
//! neighbor, and the left-left neighbor. Positions beyond a grid or row edge
//! are absent; there is no wraparound.

use crate::io::configuration::NEIGHBORHOOD_SPAN;

/// Convert a flat index to `(row, col)`
///
/// `width` must be non-zero; all callers guard the zero-area grid before
/// any index math.
pub const fn position_of(index: usize, width: usize) -> (usize, usize) {
    (index / width, index % width)
}

/// Convert `(row, col)` to a flat index
pub const fn index_of(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}

/// Identifiers at the up-to-5 constraining positions for `index`
///
/// Order: up-left, up, up-right, left, left-left. Positions outside the grid
/// or across a row edge yield `None`, as do positions not yet present in
/// `cells` (the sequence built so far).
pub fn neighbor_ids(cells: &[u32], index: usize, width: usize) -> [Option<u32>; NEIGHBORHOOD_SPAN] {
    if width == 0 {
        return [None; NEIGHBORHOOD_SPAN];
    }

    let (row, col) = position_of(index, width);

    let up_left = if row > 0 && col > 0 {
        cells.get(index - width - 1).copied()
    } else {
        None
    };
    let up = if row > 0 {
        cells.get(index - width).copied()
    } else {
        None
    };
    let up_right = if row > 0 && col + 1 < width {
        cells.get(index - width + 1).copied()
    } else {
        None
    };
    let left = if col > 0 {
        cells.get(index - 1).copied()
    } else {
        None
    };
    let left_left = if col > 1 {
        cells.get(index - 2).copied()
    } else {
        None
    };

    [up_left, up, up_right, left, left_left]
}
