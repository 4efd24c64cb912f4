use approx::assert_abs_diff_eq;
use config::constants::NORMAL_UNIT_TOLERANCE;
use glam::{DVec2, DVec3};
use lathe_mesh::lathe::points_per_column;
use lathe_mesh::simplify::distance_to_segment_sq;
use lathe_mesh::{
    flatten_path, generate_from_profile, generate_normals, lathe_profile, simplify_polyline,
    BezierSegment, ProfilePath, RevolutionParams,
};
use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

fn s_curve() -> BezierSegment {
    BezierSegment::new(
        DVec2::new(1.0, -4.0),
        DVec2::new(6.0, -3.0),
        DVec2::new(-2.0, 2.0),
        DVec2::new(3.0, 4.0),
    )
}

fn path(segments: Vec<BezierSegment>) -> ProfilePath {
    ProfilePath::from_segments(segments).unwrap()
}

/// Straight wall at x = 2 from y = -1 to y = 1.
fn cylinder_wall() -> ProfilePath {
    path(vec![BezierSegment::new(
        DVec2::new(2.0, -1.0),
        DVec2::new(2.0, -1.0 / 3.0),
        DVec2::new(2.0, 1.0 / 3.0),
        DVec2::new(2.0, 1.0),
    )])
}

/// Points of a half circle of radius 3, strictly convex.
fn arc(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let a = -PI / 2.0 + PI * i as f64 / (count - 1) as f64;
            DVec2::new(1.0 + 3.0 * a.cos(), 3.0 * a.sin())
        })
        .collect()
}

fn sweep(divisions: u32, caps: bool) -> RevolutionParams {
    RevolutionParams {
        divisions,
        start_angle: 0.0,
        end_angle: TAU,
        cap_start: caps,
        cap_end: caps,
        ..RevolutionParams::default()
    }
}

// =============================================================================
// FLATTENER
// =============================================================================

#[test]
fn flatten_point_count_is_monotonic_in_tolerance() {
    let profile = path(vec![s_curve()]);
    let mut previous = 0;
    for tolerance in [100.0, 10.0, 1.0, 0.5, 0.15, 0.01, 0.001] {
        let count = flatten_path(&profile, tolerance).unwrap().len();
        assert!(count >= previous, "tolerance {tolerance}: {count} < {previous}");
        previous = count;
    }
}

#[test]
fn flattened_points_lie_on_curve() {
    let segment = s_curve();
    let points = flatten_path(&path(vec![segment]), 0.05).unwrap();

    let samples: Vec<DVec2> = (0..=8192).map(|i| segment.point_at(i as f64 / 8192.0)).collect();
    for p in points {
        let nearest = samples
            .iter()
            .map(|s| s.distance(p))
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 0.01, "{p} is {nearest} away from the curve");
    }
}

#[test]
fn flatten_chains_segments() {
    let first = s_curve();
    let second = BezierSegment::new(
        first.end,
        DVec2::new(5.0, 5.0),
        DVec2::new(6.0, 6.0),
        DVec2::new(4.0, 8.0),
    );
    let points = flatten_path(&path(vec![first, second]), 0.15).unwrap();
    assert_eq!(points[0], first.start);
    assert_eq!(*points.last().unwrap(), second.end);
    assert!(points.contains(&first.end));
}

// =============================================================================
// SIMPLIFIER
// =============================================================================

fn wave() -> Vec<DVec2> {
    (0..200)
        .map(|i| {
            let x = i as f64 * 0.05;
            DVec2::new(x, (x * 1.7).sin() + 0.1 * (x * 9.0).sin())
        })
        .collect()
}

#[test]
fn simplified_is_subsequence_within_epsilon() {
    let input = wave();
    let epsilon = 0.05;
    let output = simplify_polyline(&input, epsilon).unwrap();

    assert!(output.len() >= 2);
    assert_eq!(output[0], input[0]);
    assert_eq!(output.last(), input.last());

    // Walk the input, matching kept points in order.
    let mut kept = Vec::new();
    let mut next = 0;
    for (i, p) in input.iter().enumerate() {
        if next < output.len() && *p == output[next] {
            kept.push(i);
            next += 1;
        }
    }
    assert_eq!(next, output.len(), "output is not a subsequence");

    for span in kept.windows(2) {
        let (a, b) = (input[span[0]], input[span[1]]);
        for &p in &input[span[0] + 1..span[1]] {
            let distance = distance_to_segment_sq(p, a, b).sqrt();
            assert!(distance <= epsilon, "dropped point {p} is {distance} from its chord");
        }
    }
}

#[test]
fn simplify_is_idempotent() {
    let once = simplify_polyline(&wave(), 0.05).unwrap();
    let twice = simplify_polyline(&once, 0.05).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn zero_epsilon_keeps_taut_polyline() {
    let taut = arc(32);
    assert_eq!(simplify_polyline(&taut, 0.0).unwrap(), taut);
}

// =============================================================================
// LATHE GENERATOR
// =============================================================================

#[test]
fn triangle_count_matches_grid() {
    let profile = arc(9);
    for (divisions, caps) in [(1, false), (3, true), (20, false), (33, true)] {
        let raw = lathe_profile(&profile, &sweep(divisions, caps)).unwrap();
        let quads_down = points_per_column(profile.len(), caps, caps) - 1;
        assert_eq!(raw.triangle_count(), 2 * divisions as usize * quads_down);

        let count = raw.vertex_count() as u32;
        assert!(raw.indices().unwrap().iter().all(|&i| i < count));
    }
}

#[test]
fn full_turn_closes_seam() {
    let profile = arc(9);
    let divisions = 12;
    let raw = lathe_profile(&profile, &sweep(divisions, true)).unwrap();
    let column = points_per_column(profile.len(), true, true);
    let last = divisions as usize * column;

    for row in 0..column {
        assert_eq!(raw.positions()[row], raw.positions()[last + row]);
        assert_eq!(raw.texcoords()[row].x, 0.0);
        assert_eq!(raw.texcoords()[last + row].x, 1.0);
        assert_eq!(raw.texcoords()[row].y, raw.texcoords()[last + row].y);
    }
}

#[test]
fn negative_full_turn_closes_seam() {
    let profile = arc(5);
    let params = RevolutionParams {
        start_angle: PI,
        end_angle: PI - TAU,
        ..sweep(7, false)
    };
    let raw = lathe_profile(&profile, &params).unwrap();
    let last = 7 * profile.len();
    for row in 0..profile.len() {
        assert_eq!(raw.positions()[row], raw.positions()[last + row]);
    }
}

// =============================================================================
// NORMAL GENERATOR
// =============================================================================

#[test]
fn normals_are_unit_length() {
    let profile = path(vec![s_curve()]);
    for angle in [0.0, 0.3, PI / 2.0, PI] {
        let params = RevolutionParams {
            smoothing_max_angle: angle,
            ..sweep(16, true)
        };
        let output = generate_from_profile(&profile, &params).unwrap();
        for n in output.mesh.normals() {
            assert_abs_diff_eq!(n.length(), 1.0, epsilon = NORMAL_UNIT_TOLERANCE);
        }
    }
}

#[test]
fn zero_angle_is_faceted() {
    let raw = lathe_profile(&arc(7), &sweep(10, false)).unwrap();
    let mesh = generate_normals(&raw, 0.0).unwrap();
    assert!(mesh.validate());

    for tri in mesh.triangles() {
        let [v1, v2, v3] = tri.map(|i| mesh.positions()[i as usize]);
        let face = (v1 - v2).cross(v3 - v2).normalize();
        for &i in tri {
            let n = mesh.normals()[i as usize];
            assert_abs_diff_eq!(n.dot(face), 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn full_angle_shares_one_normal_per_position() {
    let profile = arc(7);
    let raw = lathe_profile(&profile, &sweep(10, false)).unwrap();
    let mesh = generate_normals(&raw, PI).unwrap();

    // Only texcoords split vertices: one per raw vertex.
    assert_eq!(mesh.vertex_count(), raw.vertex_count());

    let mut by_position: HashMap<[u64; 3], DVec3> = HashMap::new();
    for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
        let key = [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
        let shared = *by_position.entry(key).or_insert(*n);
        assert_abs_diff_eq!(shared.dot(*n), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn capped_cylinder_normals_face_outward() {
    let output = generate_from_profile(&cylinder_wall(), &sweep(20, true)).unwrap();
    let mesh = &output.mesh;

    // Each column loses its two apex-to-apex triangles.
    assert_eq!(mesh.triangle_count(), 2 * 20 * 3 - 2 * 20);

    for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
        assert!(p.dot(*n) > 0.0, "normal {n} at {p} points inward");
    }
}

#[test]
fn hard_edge_between_wall_and_cap() {
    let output = generate_from_profile(&cylinder_wall(), &sweep(20, true)).unwrap();
    let mesh = &output.mesh;

    for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
        if p.y.abs() == 1.0 && p.length_squared() > 1.0 + 1e-9 {
            // Rim vertices are either pure cap (axial) or pure wall (radial).
            let axial = n.x.abs() < 1e-9 && n.z.abs() < 1e-9;
            let radial = n.y.abs() < 1e-9;
            assert!(axial || radial, "rim normal {n} is blended");
        }
    }
}
