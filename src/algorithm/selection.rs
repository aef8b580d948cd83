//! Rejection-sampling tile selection under neighbor constraints
//!
//! A candidate identifier is drawn uniformly from the fabric's range and
//! rejected while it is a reserved blank, repeats any touching identifier,
//! or repeats a touching hue class. The loop is bounded: exhausting the
//! attempt ceiling reports the caller's fabric misconfiguration instead of
//! hanging.

use crate::io::configuration::{HUE_CHECKED_NEIGHBORS, MAX_SELECTION_ATTEMPTS, NEIGHBORHOOD_SPAN};
use crate::io::error::{QuiltError, Result};
use crate::io::fabric::FabricSpec;
use crate::spatial::grid::neighbor_ids;
use rand::Rng;

/// Identifiers occupying the constraining positions around one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborContext {
    /// Up-left, up, up-right, left, left-left; absent positions are `None`
    pub touching_ids: [Option<u32>; NEIGHBORHOOD_SPAN],
}

impl NeighborContext {
    /// Context with no occupied neighbor positions
    pub const fn empty() -> Self {
        Self {
            touching_ids: [None; NEIGHBORHOOD_SPAN],
        }
    }

    /// Capture the context for `index` from the sequence built so far
    pub fn at(cells: &[u32], index: usize, width: usize) -> Self {
        Self {
            touching_ids: neighbor_ids(cells, index, width),
        }
    }

    /// Hue classes of the hue-checked neighbors
    ///
    /// Only the first four positions participate: the left-left neighbor is
    /// compared by raw identifier alone, never by hue.
    pub fn touching_hues(&self, fabric: &FabricSpec) -> [Option<u32>; HUE_CHECKED_NEIGHBORS] {
        let [up_left, up, up_right, left, _] = self.touching_ids;
        [up_left, up, up_right, left].map(|id| id.map(|tile| fabric.hue_of(tile)))
    }
}

/// Select one tile identifier satisfying all neighbor constraints
///
/// Draws uniformly from `[1, tile_count]` and rejects candidates that are
/// excluded by the fabric, equal to any touching identifier, or share a hue
/// class with any hue-checked neighbor. `index` names the cell being filled
/// for error reporting only.
///
/// # Errors
///
/// Returns [`QuiltError::SelectionExhausted`] when the attempt ceiling is
/// reached, which indicates fabric parameters whose exclusion pressure
/// leaves no acceptable candidate.
pub fn select_tile<R: Rng + ?Sized>(
    fabric: &FabricSpec,
    neighbors: &NeighborContext,
    index: usize,
    rng: &mut R,
) -> Result<u32> {
    let touching_hues = neighbors.touching_hues(fabric);

    for _ in 0..MAX_SELECTION_ATTEMPTS {
        let candidate = rng.random_range(1..=fabric.tile_count);
        let candidate_hue = fabric.hue_of(candidate);

        if fabric.excluded_ids.contains(&candidate)
            || neighbors.touching_ids.contains(&Some(candidate))
            || touching_hues.contains(&Some(candidate_hue))
        {
            continue;
        }

        return Ok(candidate);
    }

    Err(QuiltError::SelectionExhausted {
        index,
        attempts: MAX_SELECTION_ATTEMPTS,
    })
}
