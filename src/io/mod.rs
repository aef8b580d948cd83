/// Command-line interface and processing orchestration
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for grid generation and persistence operations
pub mod error;
/// Fabric parameter bundles and the named fabric catalog
pub mod fabric;
/// Key-value persistence and the grid snapshot adapter
pub mod store;
