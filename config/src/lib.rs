//! # Config Crate
//!
//! Centralized configuration constants for the lathe pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_DIVISIONS, DEFAULT_TOLERANCE, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Revolution defaults used by the editor layer
//! let divisions: Option<u32> = None;
//! assert_eq!(divisions.unwrap_or(DEFAULT_DIVISIONS), 20);
//! assert!(DEFAULT_TOLERANCE > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Editor Compatible**: Defaults match the interactive lathe editor
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
