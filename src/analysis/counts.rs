//! Tile occurrence counting over the persisted grid

use crate::io::error::Result;
use crate::io::store::{GridStore, KeyValueStore};
use std::collections::HashMap;

/// Frequency of each tile identifier in the persisted grid
///
/// Identifiers absent from the grid are absent from the map; there is no
/// zero-fill. The summary is derived on demand and never persisted.
///
/// # Errors
///
/// Returns only the underlying store's native read failure.
pub fn tile_counts<S: KeyValueStore>(store: &GridStore<S>) -> Result<HashMap<u32, usize>> {
    let cells = store.load()?;

    let mut counts = HashMap::new();
    for id in cells {
        *counts.entry(id).or_insert(0) += 1;
    }

    Ok(counts)
}
