//! # Config Crate
//!
//! Centralized configuration constants for the growth mesh generator.
//! All tolerances, sampling ranges and safety limits are defined here so
//! the geometry crates never carry literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_GROWTH_COUNT, SEED_COORDINATE_RANGE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Seed points are drawn from [-range, range) on every axis
//! let x: f64 = 0.25;
//! assert!(x.abs() <= SEED_COORDINATE_RANGE);
//! assert!(DEFAULT_GROWTH_COUNT > 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
