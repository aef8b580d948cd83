//! Fabric parameter bundles and the named fabric catalog
//!
//! A fabric names one tile collection: how many distinct tile identifiers it
//! offers, which identifiers are reserved blanks that must never be placed,
//! and how many hue classes partition the identifier space.

use crate::io::configuration::MIN_HUE_WIDTH;
use crate::io::error::{Result, invalid_parameter, unknown_fabric};
use std::collections::{HashMap, HashSet};

/// Generation parameters for one fabric
#[derive(Debug, Clone)]
pub struct FabricSpec {
    /// Number of hue classes; identifiers map to a class via modulo
    pub hue_width: u32,
    /// Reserved identifiers that are never selected
    pub excluded_ids: HashSet<u32>,
    /// Distinct tile identifiers, numbered `1..=tile_count`
    pub tile_count: u32,
}

impl FabricSpec {
    /// Create a fabric spec from its three generation parameters
    pub fn new(
        hue_width: u32,
        excluded_ids: impl IntoIterator<Item = u32>,
        tile_count: u32,
    ) -> Self {
        Self {
            hue_width,
            excluded_ids: excluded_ids.into_iter().collect(),
            tile_count,
        }
    }

    /// Hue class of a tile identifier under this fabric
    pub const fn hue_of(&self, tile_id: u32) -> u32 {
        tile_id % self.hue_width
    }

    /// Validate the documented generation preconditions
    ///
    /// With fewer than five hue classes the four hue-checked neighbors can
    /// cover every class and leave no acceptable candidate, so selection
    /// would reject forever. Exclusions must also leave at least one
    /// selectable identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::QuiltError::InvalidParameter`] when `hue_width` is
    /// below the minimum, `tile_count` is zero, or the exclusion set covers
    /// the entire identifier space.
    pub fn validate(&self) -> Result<()> {
        if self.hue_width < MIN_HUE_WIDTH {
            return Err(invalid_parameter(
                "hue_width",
                &self.hue_width,
                &format!("must be at least {MIN_HUE_WIDTH}"),
            ));
        }

        if self.tile_count == 0 {
            return Err(invalid_parameter(
                "tile_count",
                &self.tile_count,
                &"fabric must offer at least one tile",
            ));
        }

        let excluded_in_range = (1..=self.tile_count)
            .filter(|id| self.excluded_ids.contains(id))
            .count();
        if excluded_in_range >= self.tile_count as usize {
            return Err(invalid_parameter(
                "excluded_ids",
                &excluded_in_range,
                &"exclusions cover every tile identifier",
            ));
        }

        Ok(())
    }
}

/// Static lookup from fabric name to generation parameters
#[derive(Debug, Clone)]
pub struct FabricCatalog {
    entries: HashMap<String, FabricSpec>,
}

impl FabricCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Catalog of the built-in fabrics
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert("rainbow", FabricSpec::new(5, [], 20));
        catalog.insert("meadow", FabricSpec::new(6, [4, 11], 24));
        catalog.insert("harvest", FabricSpec::new(7, [21], 28));
        catalog
    }

    /// Add or replace a fabric entry
    pub fn insert(&mut self, name: &str, spec: FabricSpec) {
        self.entries.insert(name.to_owned(), spec);
    }

    /// Look up a fabric by name
    ///
    /// # Errors
    ///
    /// Returns [`crate::QuiltError::UnknownFabric`] when no entry carries the
    /// requested name.
    pub fn get(&self, name: &str) -> Result<&FabricSpec> {
        self.entries.get(name).ok_or_else(|| unknown_fabric(&name))
    }

    /// Names of all cataloged fabrics, sorted for stable display
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FabricCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
