//! Constraint-based quilt tile grid generation with persistent layouts
//!
//! The system fills a rectangular quilt section with tile identifiers drawn by
//! rejection sampling, so that no cell repeats an identifier or a hue class
//! with its already-placed neighbors, and persists the grid after every placed
//! cell so repeated renders are stable until explicitly regenerated.

#![forbid(unsafe_code)]

/// Core algorithm implementation including tile selection and grid building
pub mod algorithm;
/// Derived summaries computed from the persisted grid
pub mod analysis;
/// Input/output operations, persistence, fabric catalog, and error handling
pub mod io;
/// Row-major grid geometry and neighbor lookup
pub mod spatial;

pub use io::error::{QuiltError, Result};
