//! # Configuration Constants
//!
//! Centralized constants for the lathe pipeline. Revolution defaults,
//! precision values and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Revolution**: Defaults for flattening, simplification and sweeping
//! - **Path**: Profile path requirements and the editor's initial path
//! - **Limits**: Maximum values for safety bounds

use std::f64::consts::{PI, TAU};

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. whether a sweep covers a full turn.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Allowed deviation from unit length for generated normals.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_UNIT_TOLERANCE;
///
/// let length: f64 = 1.0 + 1e-9;
/// assert!((length - 1.0).abs() < NORMAL_UNIT_TOLERANCE);
/// ```
pub const NORMAL_UNIT_TOLERANCE: f64 = 1e-6;

// =============================================================================
// REVOLUTION CONSTANTS
// =============================================================================

/// Default flattening tolerance.
///
/// Upper bound on the flatness measure of a Bezier segment before it is
/// emitted as a straight chord. Smaller values produce more points.
pub const DEFAULT_TOLERANCE: f64 = 0.15;

/// Default simplification distance.
///
/// Points closer than this to the chord of their retained neighbours are
/// dropped by the polyline simplifier.
pub const DEFAULT_SIMPLIFY_EPSILON: f64 = 0.04;

/// Default number of angular steps around the axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DIVISIONS;
///
/// // One more column than divisions is generated (seam column).
/// let columns = DEFAULT_DIVISIONS + 1;
/// assert_eq!(columns, 21);
/// ```
pub const DEFAULT_DIVISIONS: u32 = 20;

/// Default sweep start angle in radians.
pub const DEFAULT_START_ANGLE: f64 = 0.0;

/// Default sweep end angle in radians (full turn).
pub const DEFAULT_END_ANGLE: f64 = TAU;

/// Cap the start of the profile by default.
pub const DEFAULT_CAP_START: bool = true;

/// Cap the end of the profile by default.
pub const DEFAULT_CAP_END: bool = true;

/// Default smoothing threshold in degrees.
pub const DEFAULT_SMOOTHING_MAX_ANGLE_DEGREES: f64 = 30.0;

/// Default smoothing threshold in radians.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SMOOTHING_MAX_ANGLE, DEFAULT_SMOOTHING_MAX_ANGLE_DEGREES};
///
/// let expected = DEFAULT_SMOOTHING_MAX_ANGLE_DEGREES.to_radians();
/// assert!((DEFAULT_SMOOTHING_MAX_ANGLE - expected).abs() < 1e-12);
/// ```
pub const DEFAULT_SMOOTHING_MAX_ANGLE: f64 = DEFAULT_SMOOTHING_MAX_ANGLE_DEGREES / 180.0 * PI;

/// Largest accepted smoothing threshold (fully smooth shading).
pub const MAX_SMOOTHING_ANGLE: f64 = PI;

// =============================================================================
// PATH CONSTANTS
// =============================================================================

/// Minimum number of points a profile path must contain.
///
/// One start point plus the two controls and end point of one cubic.
pub const MIN_PATH_POINTS: usize = 4;

/// Number of points consumed by one cubic curveto group.
pub const POINTS_PER_CURVE: usize = 3;

/// Profile the editor shows before the user draws anything.
pub const DEFAULT_PROFILE_PATH: &str =
    "M14.4 24.35C27.3 33.85 16.8 44.75 15.3 45.55C13.8 46.35 17.8 52.05 21.1 55.05";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum subdivision depth while flattening a single cubic segment.
///
/// The flatness measure shrinks by roughly 16x per subdivision, so this is
/// only reached for vanishingly small tolerances.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FLATTEN_DEPTH;
///
/// // Worst case number of chords emitted for one segment.
/// let chords = 1u64 << MAX_FLATTEN_DEPTH;
/// assert_eq!(chords, 65_536);
/// ```
pub const MAX_FLATTEN_DEPTH: u32 = 16;

/// Maximum number of vertices in a single generated mesh.
///
/// Safety limit to prevent memory exhaustion from extreme parameters.
pub const MAX_VERTICES: usize = 10_000_000;

/// Number of vertices addressable by 16-bit index buffers.
pub const U16_INDEX_LIMIT: usize = u16::MAX as usize + 1;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks whether a sweep from `start` to `end` covers exactly one turn.
///
/// # Example
///
/// ```rust
/// use config::constants::is_full_turn;
///
/// assert!(is_full_turn(0.0, std::f64::consts::TAU));
/// assert!(is_full_turn(1.0, 1.0 - std::f64::consts::TAU));
/// assert!(!is_full_turn(0.0, std::f64::consts::PI));
/// ```
#[inline]
pub fn is_full_turn(start: f64, end: f64) -> bool {
    approx_equal((end - start).abs(), TAU)
}
