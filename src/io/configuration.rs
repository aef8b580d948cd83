//! Algorithm constants and runtime configuration defaults

/// Store slot holding the serialized grid snapshot
pub const STORE_KEY: &str = "imageList";

// Below this the neighbor hue exclusions can cover every hue class
/// Minimum hue cardinality a fabric may declare
pub const MIN_HUE_WIDTH: u32 = 5;

// Generous ceiling so failure indicates misconfiguration, not bad luck
/// Maximum rejected candidates per cell before selection fails
pub const MAX_SELECTION_ATTEMPTS: usize = 10_000;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed cell count for a quilt section
pub const MAX_GRID_CELLS: usize = 1_000_000;

/// Number of neighbor positions consulted for identity constraints
pub const NEIGHBORHOOD_SPAN: usize = 5;

/// Number of neighbor positions consulted for hue constraints
///
/// The left-left neighbor is deliberately exempt from the hue check; only its
/// raw identifier is compared.
pub const HUE_CHECKED_NEIGHBORS: usize = 4;

// Default values for configurable parameters
/// Default quilt section width in tiles
pub const DEFAULT_SECTION_WIDTH: usize = 8;

/// Default quilt section height in tiles
pub const DEFAULT_SECTION_HEIGHT: usize = 8;

/// Default directory for the file-backed store
pub const DEFAULT_STORE_DIR: &str = "quilt-data";

/// Default fabric used when none is named on the command line
pub const DEFAULT_FABRIC: &str = "rainbow";
