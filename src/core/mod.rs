//! Shared constants for the simulation core.

pub mod constants;

pub use constants::*;
