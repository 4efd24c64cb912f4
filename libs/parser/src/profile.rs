//! # Profile Path
//!
//! Cubic Bezier segments making up the 2D profile that gets revolved.

use glam::DVec2;

// =============================================================================
// BEZIER SEGMENT
// =============================================================================

/// One cubic Bezier: start point, two control points, end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    /// Start point (on the curve).
    pub start: DVec2,
    /// First control point.
    pub control1: DVec2,
    /// Second control point.
    pub control2: DVec2,
    /// End point (on the curve).
    pub end: DVec2,
}

impl BezierSegment {
    /// Creates a segment from its four control points.
    pub const fn new(start: DVec2, control1: DVec2, control2: DVec2, end: DVec2) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Control points in order.
    pub fn points(&self) -> [DVec2; 4] {
        [self.start, self.control1, self.control2, self.end]
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use lathe_parser::BezierSegment;
    ///
    /// let seg = BezierSegment::new(DVec2::ZERO, DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0));
    /// assert_eq!(seg.point_at(0.0), DVec2::ZERO);
    /// assert_eq!(seg.point_at(1.0), DVec2::new(10.0, 10.0));
    /// ```
    pub fn point_at(&self, t: f64) -> DVec2 {
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        self.start * (mt2 * mt)
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.end * (t2 * t)
    }

    fn offset(&self, delta: DVec2) -> Self {
        Self::new(
            self.start - delta,
            self.control1 - delta,
            self.control2 - delta,
            self.end - delta,
        )
    }
}

// =============================================================================
// PROFILE PATH
// =============================================================================

/// An ordered chain of cubic segments sharing endpoints.
///
/// Segment `i`'s end is always segment `i + 1`'s start, and there is at
/// least one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePath {
    segments: Vec<BezierSegment>,
}

impl ProfilePath {
    /// Builds a path from segments without normalizing it.
    ///
    /// Returns `None` when `segments` is empty or two neighbours do not
    /// share their endpoint exactly.
    pub fn from_segments(segments: Vec<BezierSegment>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        let chained = segments.windows(2).all(|pair| pair[0].end == pair[1].start);
        chained.then_some(Self { segments })
    }

    /// Builds a path from a start point followed by cubic groups of three
    /// points.
    ///
    /// The caller guarantees `points.len() >= 4` and
    /// `(points.len() - 1) % 3 == 0`.
    pub(crate) fn from_points(points: &[DVec2]) -> Self {
        let segments = points
            .windows(4)
            .step_by(3)
            .map(|w| BezierSegment::new(w[0], w[1], w[2], w[3]))
            .collect();
        Self { segments }
    }

    /// Translates the path next to the revolution axis.
    ///
    /// Subtracts `min.x` from every x so the profile touches the axis, and
    /// centers y on zero (subtracting `min.y + (max.y - min.y) / 2`).
    pub fn normalized(&self) -> Self {
        let (min, max) = self.bounds();
        let half_range_y = (max.y - min.y) * 0.5;
        let delta = DVec2::new(min.x, min.y + half_range_y);
        Self {
            segments: self.segments.iter().map(|s| s.offset(delta)).collect(),
        }
    }

    /// The cubic segments in order.
    #[inline]
    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// Number of cubic segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// First point of the path.
    pub fn start(&self) -> DVec2 {
        self.segments[0].start
    }

    /// Last point of the path.
    pub fn end(&self) -> DVec2 {
        self.segments[self.segments.len() - 1].end
    }

    /// All control and end points, shared endpoints listed once.
    pub fn points(&self) -> Vec<DVec2> {
        let mut points = Vec::with_capacity(1 + self.segments.len() * 3);
        points.push(self.start());
        for s in &self.segments {
            points.extend_from_slice(&[s.control1, s.control2, s.end]);
        }
        points
    }

    /// Axis-aligned bounds of all control points as `(min, max)`.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let points = self.points();
        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> BezierSegment {
        BezierSegment::new(
            DVec2::new(a.0, a.1),
            DVec2::new(b.0, b.1),
            DVec2::new(c.0, c.1),
            DVec2::new(d.0, d.1),
        )
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(ProfilePath::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn test_from_segments_rejects_gap() {
        let a = segment((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        let b = segment((4.0, 0.0), (5.0, 0.0), (6.0, 0.0), (7.0, 0.0));
        assert!(ProfilePath::from_segments(vec![a, b]).is_none());
    }

    #[test]
    fn test_points_share_endpoints() {
        let a = segment((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        let b = segment((3.0, 0.0), (4.0, 1.0), (5.0, 1.0), (6.0, 2.0));
        let path = ProfilePath::from_segments(vec![a, b]).unwrap();
        assert_eq!(path.points().len(), 7);
        assert_eq!(path.end(), DVec2::new(6.0, 2.0));
    }

    #[test]
    fn test_normalized_anchors_and_centers() {
        let path = ProfilePath::from_segments(vec![segment(
            (2.0, 4.0),
            (5.0, 6.0),
            (3.0, 10.0),
            (8.0, 14.0),
        )])
        .unwrap();
        let (min, max) = path.normalized().bounds();
        assert_relative_eq!(min.x, 0.0);
        assert_relative_eq!(max.x, 6.0);
        assert_relative_eq!(min.y, -5.0);
        assert_relative_eq!(max.y, 5.0);
    }

    #[test]
    fn test_point_at_midpoint() {
        let seg = segment((0.0, 0.0), (0.0, 0.0), (10.0, 0.0), (10.0, 10.0));
        let mid = seg.point_at(0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 1.25);
    }
}
