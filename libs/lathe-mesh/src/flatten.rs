//! # Curve Flattener
//!
//! Adaptive subdivision of cubic Bézier segments into a polyline. A
//! segment that is flat enough contributes its two endpoints; otherwise
//! it is split at `t = 0.5` and both halves are flattened in turn.
//!
//! Consecutive duplicate points are expected in the output. The
//! simplifier collapses them.

use crate::error::LatheError;
use crate::params::validate_tolerance;
use config::constants::MAX_FLATTEN_DEPTH;
use glam::DVec2;
use lathe_parser::{BezierSegment, ProfilePath};

/// Flattens every segment of `path` into a single polyline.
///
/// # Errors
///
/// Returns a parameter error if `tolerance` is not a positive number.
pub fn flatten_path(path: &ProfilePath, tolerance: f64) -> Result<Vec<DVec2>, LatheError> {
    validate_tolerance(tolerance)?;

    let mut points = Vec::new();
    for segment in path.segments() {
        flatten_segment(segment, tolerance, 0, &mut points);
    }

    log::debug!(
        "Flattened {} segment(s) into {} points (tolerance {tolerance})",
        path.segment_count(),
        points.len()
    );
    Ok(points)
}

fn flatten_segment(segment: &BezierSegment, tolerance: f64, depth: u32, out: &mut Vec<DVec2>) {
    // NaN flatness counts as flat.
    let flatness = flatness(segment);
    if depth >= MAX_FLATTEN_DEPTH || flatness < tolerance || flatness.is_nan() {
        out.push(segment.start);
        out.push(segment.end);
        return;
    }

    let (left, right) = split_segment(segment, 0.5);
    flatten_segment(&left, tolerance, depth + 1, out);
    flatten_segment(&right, tolerance, depth + 1, out);
}

/// Squared deviation of the control points from the chord, maximized per
/// axis and summed over both axes.
///
/// Zero for a segment whose control points sit at the thirds of its chord.
pub fn flatness(segment: &BezierSegment) -> f64 {
    let [p1, p2, p3, p4] = segment.points();
    let u = 3.0 * p2 - 2.0 * p1 - p4;
    let v = 3.0 * p3 - 2.0 * p4 - p1;
    let u = u * u;
    let v = v * v;
    u.max(v).element_sum()
}

/// Splits a segment at parameter `t` with De Casteljau's construction.
pub fn split_segment(segment: &BezierSegment, t: f64) -> (BezierSegment, BezierSegment) {
    let [p1, p2, p3, p4] = segment.points();

    let q1 = p1.lerp(p2, t);
    let q2 = p2.lerp(p3, t);
    let q3 = p3.lerp(p4, t);

    let r1 = q1.lerp(q2, t);
    let r2 = q2.lerp(q3, t);

    let mid = r1.lerp(r2, t);

    (
        BezierSegment::new(p1, q1, r1, mid),
        BezierSegment::new(mid, r2, q3, p4),
    )
}
