//! Grid building and regeneration over a persisted snapshot
//!
//! The builder walks the section in row-major order, reusing any identifier
//! the snapshot already holds at a position and selecting fresh identifiers
//! for the rest. The accumulated prefix is persisted after every cell, so an
//! interrupted build leaves a valid prefix rather than a gap. Regeneration
//! drops the snapshot first and rebuilds every cell.

use crate::algorithm::selection::{NeighborContext, select_tile};
use crate::io::configuration::MAX_GRID_CELLS;
use crate::io::error::{Result, invalid_parameter};
use crate::io::fabric::FabricSpec;
use crate::io::store::{GridStore, KeyValueStore};
use rand::{SeedableRng, rngs::StdRng};

/// Fills quilt sections cell by cell against an injected snapshot store
#[derive(Debug)]
pub struct QuiltBuilder<S: KeyValueStore> {
    store: GridStore<S>,
    rng: StdRng,
}

impl<S: KeyValueStore> QuiltBuilder<S> {
    /// Create a builder with a deterministic seed for reproducible layouts
    pub fn new(store: GridStore<S>, seed: u64) -> Self {
        Self {
            store,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Snapshot store backing this builder
    pub const fn store(&self) -> &GridStore<S> {
        &self.store
    }

    /// Consume the builder and return its snapshot store
    pub fn into_store(self) -> GridStore<S> {
        self.store
    }

    /// Fill a `width * height` section, reusing the persisted prefix
    ///
    /// Positions already held by the snapshot are reused verbatim with no
    /// re-validation, even if the fabric changed between calls. Remaining
    /// positions are selected from the neighbor context of the sequence
    /// built so far, never from a stale persisted tail. Every placed cell
    /// rewrites the full snapshot; the write amplification buys a
    /// crash-consistent prefix.
    ///
    /// # Errors
    ///
    /// Returns an error when the fabric fails validation, the section
    /// exceeds the cell ceiling, selection exhausts its attempts, or the
    /// backing store fails natively.
    pub fn build(&mut self, fabric: &FabricSpec, width: usize, height: usize) -> Result<Vec<u32>> {
        fabric.validate()?;

        let cell_count = width.checked_mul(height).unwrap_or(usize::MAX);
        if cell_count > MAX_GRID_CELLS {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &format!("section exceeds {MAX_GRID_CELLS} cells"),
            ));
        }

        let persisted = self.store.load()?;
        let mut cells = Vec::with_capacity(cell_count);

        for index in 0..cell_count {
            let tile = match persisted.get(index) {
                Some(&id) => id,
                None => {
                    let neighbors = NeighborContext::at(&cells, index, width);
                    select_tile(fabric, &neighbors, index, &mut self.rng)?
                }
            };

            cells.push(tile);
            self.store.save(&cells)?;
        }

        Ok(cells)
    }

    /// Discard the persisted snapshot and build a fresh section
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::build`], plus the store's native
    /// removal failure.
    pub fn regenerate(
        &mut self,
        fabric: &FabricSpec,
        width: usize,
        height: usize,
    ) -> Result<Vec<u32>> {
        self.store.clear()?;
        self.build(fabric, width, height)
    }
}
