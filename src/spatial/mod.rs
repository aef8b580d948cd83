//! Spatial structure of the quilt section
//!
//! This module contains the row-major grid geometry:
//! - Index/position conversion
//! - Neighbor lookup for adjacency constraints

/// Row-major index math and neighbor lookup
pub mod grid;
