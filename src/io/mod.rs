/// Command-line interface and batch rendering
pub mod cli;
/// Generator constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export and output naming
pub mod image;
/// Batch progress display
pub mod progress;
