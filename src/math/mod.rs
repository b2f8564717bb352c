//! Mathematical utilities for the generator

/// Seeded linear congruential sequence and its derived draws
pub mod sequence;
