//! # Polyline Simplifier
//!
//! Douglas-Peucker reduction of the flattened profile. Consecutive
//! duplicates are collapsed first, then the farthest point of each span is
//! kept whenever it lies more than `epsilon` from the span's chord.

use crate::error::LatheError;
use crate::params::validate_simplify_epsilon;
use glam::DVec2;

/// Reduces `points` to the subset that keeps the shape within `epsilon`.
///
/// The first and last points are always kept. Fewer than two input points
/// produce an empty polyline; input made of one repeated point produces
/// that point twice.
///
/// # Errors
///
/// Returns a parameter error if `epsilon` is negative or not finite.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use lathe_mesh::simplify_polyline;
///
/// let line = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.01), DVec2::new(2.0, 0.0)];
/// let simplified = simplify_polyline(&line, 0.1).unwrap();
/// assert_eq!(simplified, vec![DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0)]);
/// ```
pub fn simplify_polyline(points: &[DVec2], epsilon: f64) -> Result<Vec<DVec2>, LatheError> {
    validate_simplify_epsilon(epsilon)?;

    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mut unique = points.to_vec();
    unique.dedup();
    if unique.len() < 2 {
        return Ok(vec![points[0], points[points.len() - 1]]);
    }

    let last = unique.len() - 1;
    let mut keep = vec![false; unique.len()];
    keep[0] = true;
    keep[last] = true;

    // Spans are inclusive index ranges whose endpoints are already kept.
    let mut spans = vec![(0, last)];
    while let Some((start, end)) = spans.pop() {
        if end - start < 2 {
            continue;
        }

        let (a, b) = (unique[start], unique[end]);
        let mut max_dist_sq = 0.0;
        let mut max_index = start;
        for (i, &p) in unique.iter().enumerate().take(end).skip(start + 1) {
            let dist_sq = distance_to_segment_sq(p, a, b);
            if dist_sq > max_dist_sq {
                max_dist_sq = dist_sq;
                max_index = i;
            }
        }

        if max_index != start && max_dist_sq.sqrt() > epsilon {
            keep[max_index] = true;
            spans.push((max_index, end));
            spans.push((start, max_index));
        }
    }

    let simplified: Vec<DVec2> = unique
        .into_iter()
        .zip(keep)
        .filter_map(|(p, kept)| kept.then_some(p))
        .collect();

    log::debug!(
        "Simplified {} points to {} (epsilon {epsilon})",
        points.len(),
        simplified.len()
    );
    Ok(simplified)
}

/// Squared distance from `p` to the segment `a`-`b`.
///
/// Falls back to the distance to `a` when the segment has zero length.
pub fn distance_to_segment_sq(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance_squared(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_squared(a + ab * t)
}
