//! # Revolution Parameters
//!
//! Everything the pipeline needs besides the path itself. The struct is
//! threaded by reference through the stages; nothing is cached between
//! invocations.

use crate::error::LatheError;
use config::constants::{
    is_full_turn, DEFAULT_CAP_END, DEFAULT_CAP_START, DEFAULT_DIVISIONS, DEFAULT_END_ANGLE,
    DEFAULT_SIMPLIFY_EPSILON, DEFAULT_SMOOTHING_MAX_ANGLE, DEFAULT_START_ANGLE,
    DEFAULT_TOLERANCE, MAX_SMOOTHING_ANGLE,
};
use serde::{Deserialize, Serialize};

/// Parameters for flattening, simplifying, sweeping and shading a profile.
///
/// Deserializes from camelCase JSON; missing fields take the editor
/// defaults and unknown fields are rejected.
///
/// # Example
///
/// ```rust
/// use lathe_mesh::RevolutionParams;
///
/// let params = RevolutionParams {
///     divisions: 8,
///     cap_end: false,
///     ..RevolutionParams::default()
/// };
/// assert!(params.validate().is_ok());
/// assert!(params.is_full_turn());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct RevolutionParams {
    /// Flattening error bound (> 0)
    pub tolerance: f64,
    /// Simplification distance (>= 0)
    pub simplify_epsilon: f64,
    /// Angular steps around the axis (>= 1)
    pub divisions: u32,
    /// Sweep start in radians
    pub start_angle: f64,
    /// Sweep end in radians (!= start_angle)
    pub end_angle: f64,
    /// Close the profile start with an apex on the axis
    pub cap_start: bool,
    /// Close the profile end with an apex on the axis
    pub cap_end: bool,
    /// Normal smoothing threshold in radians, within [0, PI]
    pub smoothing_max_angle: f64,
}

impl Default for RevolutionParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            simplify_epsilon: DEFAULT_SIMPLIFY_EPSILON,
            divisions: DEFAULT_DIVISIONS,
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            cap_start: DEFAULT_CAP_START,
            cap_end: DEFAULT_CAP_END,
            smoothing_max_angle: DEFAULT_SMOOTHING_MAX_ANGLE,
        }
    }
}

impl RevolutionParams {
    /// Sets the smoothing threshold from degrees.
    pub fn with_smoothing_degrees(mut self, degrees: f64) -> Self {
        self.smoothing_max_angle = degrees.to_radians();
        self
    }

    /// True if the sweep covers exactly one full turn.
    pub fn is_full_turn(&self) -> bool {
        is_full_turn(self.start_angle, self.end_angle)
    }

    /// Sweep angle at fraction `u` of the way from start to end.
    #[inline]
    pub fn angle_at(&self, u: f64) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) * u
    }

    /// Checks every field against its valid domain.
    pub fn validate(&self) -> Result<(), LatheError> {
        validate_tolerance(self.tolerance)?;
        validate_simplify_epsilon(self.simplify_epsilon)?;
        validate_sweep(self.divisions, self.start_angle, self.end_angle)?;
        validate_smoothing_angle(self.smoothing_max_angle)
    }
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<(), LatheError> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(LatheError::parameter(format!(
            "tolerance must be a positive number, got {tolerance}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_simplify_epsilon(epsilon: f64) -> Result<(), LatheError> {
    if !(epsilon.is_finite() && epsilon >= 0.0) {
        return Err(LatheError::parameter(format!(
            "simplify epsilon must be zero or positive, got {epsilon}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_sweep(divisions: u32, start: f64, end: f64) -> Result<(), LatheError> {
    if divisions < 1 {
        return Err(LatheError::parameter("divisions must be at least 1"));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(LatheError::parameter("sweep angles must be finite"));
    }
    if start == end {
        return Err(LatheError::parameter(format!(
            "start and end angle are both {start}, sweep is degenerate"
        )));
    }
    Ok(())
}

pub(crate) fn validate_smoothing_angle(angle: f64) -> Result<(), LatheError> {
    if !(0.0..=MAX_SMOOTHING_ANGLE).contains(&angle) {
        return Err(LatheError::parameter(format!(
            "smoothing angle must be within [0, PI] radians, got {angle}"
        )));
    }
    Ok(())
}
