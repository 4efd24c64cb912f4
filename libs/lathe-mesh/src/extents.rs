//! # Extents
//!
//! Axis-aligned bounds of the lathed positions, used by the renderer to
//! frame the camera.

use crate::error::LatheError;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Componentwise minimum and maximum of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub min: DVec3,
    pub max: DVec3,
}

impl Extents {
    /// Midpoint of the box.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths of the box.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}

/// Scans `positions` for their bounding box.
///
/// # Errors
///
/// Returns a parameter error for an empty slice.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lathe_mesh::compute_extents;
///
/// let extents = compute_extents(&[DVec3::new(1.0, -2.0, 0.0), DVec3::new(-1.0, 2.0, 3.0)]).unwrap();
/// assert_eq!(extents.min, DVec3::new(-1.0, -2.0, 0.0));
/// assert_eq!(extents.max, DVec3::new(1.0, 2.0, 3.0));
/// ```
pub fn compute_extents(positions: &[DVec3]) -> Result<Extents, LatheError> {
    let (first, rest) = positions
        .split_first()
        .ok_or_else(|| LatheError::parameter("cannot compute extents of zero positions"))?;

    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(min, max), &p| (min.min(p), max.max(p)));
    Ok(Extents { min, max })
}
