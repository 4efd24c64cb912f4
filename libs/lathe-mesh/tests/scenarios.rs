use lathe_mesh::{generate, generate_batch, ErrorKind, LatheError, LatheRequest, RevolutionParams};
use std::f64::consts::TAU;

fn uncapped(divisions: u32) -> RevolutionParams {
    RevolutionParams {
        divisions,
        start_angle: 0.0,
        end_angle: TAU,
        cap_start: false,
        cap_end: false,
        ..RevolutionParams::default()
    }
}

fn kind(result: Result<lathe_mesh::LatheOutput, LatheError>) -> ErrorKind {
    result.err().expect("expected an error").kind()
}

#[test]
fn single_cubic_full_turn() {
    let output = generate("M0 0C0 0 10 0 10 10", &uncapped(4)).unwrap();
    let mesh = &output.mesh;

    assert!(mesh.vertex_count() > 0);
    assert_eq!(mesh.indices_u32().len() % 3, 0);
    assert!(mesh.validate());
    assert!(output.extents.min.y <= output.extents.max.y);
    assert_eq!(mesh.positions_f32().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.normals_f32().len(), mesh.vertex_count() * 3);
    assert_eq!(mesh.texcoords_f32().len(), mesh.vertex_count() * 2);
}

#[test]
fn zero_divisions_is_parameter_error() {
    let result = generate("M0 0C0 0 10 0 10 10", &uncapped(0));
    assert_eq!(kind(result), ErrorKind::Parameter);
}

#[test]
fn unknown_command_is_malformed_path() {
    let result = generate("X0 0", &RevolutionParams::default());
    assert_eq!(kind(result), ErrorKind::MalformedPath);
}

#[test]
fn equal_angles_is_parameter_error() {
    let params = RevolutionParams {
        start_angle: 1.5,
        end_angle: 1.5,
        ..uncapped(4)
    };
    assert_eq!(kind(generate("M0 0C0 0 10 0 10 10", &params)), ErrorKind::Parameter);
}

#[test]
fn too_few_points_is_malformed_path() {
    assert_eq!(kind(generate("M0 0 C1 1", &uncapped(4))), ErrorKind::MalformedPath);
    assert_eq!(kind(generate("", &uncapped(4))), ErrorKind::MalformedPath);
}

#[test]
fn bad_number_is_malformed_path() {
    let result = generate("M0 - C1 1 2 2 3 3", &uncapped(4));
    assert_eq!(kind(result), ErrorKind::MalformedPath);
}

#[test]
fn extents_centered_vertically() {
    // Normalization centers the profile's control points on y = 0.
    let output = generate("M0 0C0 0 10 0 10 10", &uncapped(8)).unwrap();
    assert!((output.extents.min.y + 5.0).abs() < 1e-9);
    assert!((output.extents.max.y - 5.0).abs() < 1e-9);
    assert!((output.extents.max.x - 10.0).abs() < 1e-9);
}

#[test]
fn relative_and_absolute_paths_agree() {
    let absolute = generate("M0 0C0 0 10 0 10 10", &uncapped(6)).unwrap();
    let relative = generate("m0 0c0 0 10 0 10 10", &uncapped(6)).unwrap();
    assert_eq!(absolute, relative);
}

#[test]
fn batch_preserves_order() {
    let requests = vec![
        LatheRequest::new("M0 0C0 0 10 0 10 10", uncapped(4)),
        LatheRequest::new("X0 0", uncapped(4)),
        LatheRequest::new("M0 0C0 0 10 0 10 10", uncapped(0)),
        LatheRequest::new("M0 0C0 5 5 10 10 10", RevolutionParams::default()),
    ];

    let results = generate_batch(&requests);
    assert_eq!(results.len(), requests.len());
    for (request, result) in requests.iter().zip(&results) {
        assert_eq!(*result, generate(&request.path, &request.params));
    }
    assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::MalformedPath);
    assert_eq!(results[2].as_ref().unwrap_err().kind(), ErrorKind::Parameter);
}

#[test]
fn deterministic_output() {
    let params = RevolutionParams::default();
    let first = generate("M0 0C0 5 5 10 10 10C15 10 20 5 20 0", &params).unwrap();
    let second = generate("M0 0C0 5 5 10 10 10C15 10 20 5 20 0", &params).unwrap();
    assert_eq!(first, second);
}
