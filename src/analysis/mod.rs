/// Tile occurrence counting over the persisted grid
pub mod counts;
