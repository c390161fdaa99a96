//! # Config Crate
//!
//! Centralized configuration constants for the textcad pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ROW_SPACING, SPREAD_SPACING};
//!
//! // Default layout for the third command, second of three repetitions
//! let x = (1.0 - (3.0 - 1.0) / 2.0) * SPREAD_SPACING;
//! let z = 2.0 * ROW_SPACING;
//! assert_eq!((x, z), (0.0, 6.0));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Script Compatible**: Defaults match the documented command grammar
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
