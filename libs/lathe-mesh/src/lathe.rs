//! # Lathe Generator
//!
//! Revolves a 2D profile around the vertical (Y) axis.
//!
//! ## Layout
//!
//! The output is a grid of `divisions + 1` columns, one per sweep angle.
//! Each column holds, in order:
//!
//! 1. the start cap apex `(0, first.y, 0)` if `cap_start`
//! 2. every profile point rotated by the column angle
//! 3. the end cap apex `(0, last.y, 0)` if `cap_end`
//!
//! Adjacent columns are joined by a strip of `quads_down` quads, two
//! triangles each. For a full turn the last column repeats the first
//! column's positions exactly, so the seam closes in 3D while keeping
//! separate texture coordinates (`u = 0` and `u = 1`).

use crate::error::LatheError;
use crate::mesh::RawMesh;
use crate::params::{validate_sweep, RevolutionParams};
use config::constants::MAX_VERTICES;
use glam::{DMat3, DVec2, DVec3};

/// Number of vertices per column for a profile of `profile_len` points.
#[inline]
pub fn points_per_column(profile_len: usize, cap_start: bool, cap_end: bool) -> usize {
    profile_len + usize::from(cap_start) + usize::from(cap_end)
}

/// Sweeps `profile` around the Y axis.
///
/// Only the sweep fields of `params` are used (divisions, angles, caps).
///
/// # Errors
///
/// Returns a parameter error when:
/// - `divisions` is zero or the sweep angles are equal or not finite
/// - the profile has fewer than two points or zero arc length
/// - the grid would exceed the vertex limit
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use lathe_mesh::{lathe_profile, RevolutionParams};
///
/// let profile = [DVec2::new(1.0, 0.0), DVec2::new(1.0, 2.0)];
/// let params = RevolutionParams {
///     divisions: 4,
///     cap_start: false,
///     cap_end: false,
///     ..RevolutionParams::default()
/// };
/// let raw = lathe_profile(&profile, &params).unwrap();
/// assert_eq!(raw.vertex_count(), 5 * 2);
/// assert_eq!(raw.triangle_count(), 2 * 4 * 1);
/// ```
pub fn lathe_profile(profile: &[DVec2], params: &RevolutionParams) -> Result<RawMesh, LatheError> {
    validate_sweep(params.divisions, params.start_angle, params.end_angle)?;
    let vcoords = arc_length_fractions(profile)?;

    let divisions = params.divisions as usize;
    let column_height = points_per_column(profile.len(), params.cap_start, params.cap_end);
    let quads_down = column_height - 1;

    let vertex_count = divisions
        .checked_add(1)
        .and_then(|columns| columns.checked_mul(column_height))
        .filter(|&count| count <= MAX_VERTICES)
        .ok_or_else(|| {
            LatheError::parameter(format!(
                "{} divisions of a {}-point profile exceed the {MAX_VERTICES} vertex limit",
                params.divisions,
                profile.len()
            ))
        })?;

    let first = profile[0];
    let last = profile[profile.len() - 1];
    let full_turn = params.is_full_turn();

    let mut positions = Vec::with_capacity(vertex_count);
    let mut texcoords = Vec::with_capacity(vertex_count);

    for division in 0..=divisions {
        let u = division as f64 / divisions as f64;

        if full_turn && division == divisions {
            // Close the seam with bit-identical positions.
            positions.extend_from_within(..column_height);
        } else {
            let rotation = DMat3::from_rotation_y(params.angle_at(u));
            if params.cap_start {
                positions.push(DVec3::new(0.0, first.y, 0.0));
            }
            positions.extend(profile.iter().map(|p| rotation * DVec3::new(p.x, p.y, 0.0)));
            if params.cap_end {
                positions.push(DVec3::new(0.0, last.y, 0.0));
            }
        }

        if params.cap_start {
            texcoords.push(DVec2::new(u, 0.0));
        }
        texcoords.extend(vcoords.iter().map(|&v| DVec2::new(u, v)));
        if params.cap_end {
            texcoords.push(DVec2::new(u, 1.0));
        }
    }

    let mut indices = Vec::with_capacity(divisions * quads_down * 6);
    for division in 0..divisions {
        let column1 = (division * column_height) as u32;
        let column2 = column1 + column_height as u32;
        for quad in 0..quads_down as u32 {
            indices.extend_from_slice(&[column1 + quad, column1 + quad + 1, column2 + quad]);
            indices.extend_from_slice(&[column1 + quad + 1, column2 + quad + 1, column2 + quad]);
        }
    }

    log::debug!(
        "Lathed {} profile points into {} vertices, {} triangles",
        profile.len(),
        positions.len(),
        indices.len() / 3
    );
    Ok(RawMesh::indexed(positions, texcoords, indices))
}

/// Cumulative arc length at each profile point divided by the total.
///
/// The first value is exactly 0 and the last exactly 1.
pub fn arc_length_fractions(profile: &[DVec2]) -> Result<Vec<f64>, LatheError> {
    if profile.len() < 2 {
        return Err(LatheError::parameter(format!(
            "profile needs at least 2 points, got {}",
            profile.len()
        )));
    }

    let mut lengths = Vec::with_capacity(profile.len());
    let mut total = 0.0;
    lengths.push(0.0);
    for pair in profile.windows(2) {
        total += pair[0].distance(pair[1]);
        lengths.push(total);
    }

    if !(total.is_finite() && total > 0.0) {
        return Err(LatheError::parameter(format!(
            "profile arc length must be positive and finite, got {total}"
        )));
    }

    Ok(lengths.into_iter().map(|length| length / total).collect())
}
