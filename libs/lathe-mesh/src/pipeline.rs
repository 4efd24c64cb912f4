//! # Pipeline
//!
//! Parser → Flattener → Simplifier → Lathe → Normals, in one synchronous
//! pass. Extents are taken from the lathed positions before shading.

use crate::error::LatheError;
use crate::extents::{compute_extents, Extents};
use crate::flatten::flatten_path;
use crate::lathe::lathe_profile;
use crate::mesh::FinalMesh;
use crate::normals::generate_normals;
use crate::params::RevolutionParams;
use crate::simplify::simplify_polyline;
use lathe_parser::{parse_path, ProfilePath};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct LatheOutput {
    /// Shaded, deduplicated mesh
    pub mesh: FinalMesh,
    /// Bounds of the unshaded lathe positions
    pub extents: Extents,
}

/// Runs the whole pipeline on a path string.
///
/// Parameters are validated before the path is parsed, so a bad parameter
/// is reported even when the path is also malformed.
///
/// # Example
///
/// ```rust
/// use lathe_mesh::{generate, RevolutionParams};
///
/// let params = RevolutionParams { divisions: 4, ..RevolutionParams::default() };
/// let output = generate("M0 0C0 0 10 0 10 10", &params).unwrap();
/// assert!(output.mesh.vertex_count() > 0);
/// assert!(output.extents.min.y <= output.extents.max.y);
/// ```
pub fn generate(path: &str, params: &RevolutionParams) -> Result<LatheOutput, LatheError> {
    params.validate()?;
    let profile = parse_path(path)?;
    generate_from_profile(&profile, params)
}

/// Runs the pipeline on an already parsed profile.
///
/// The profile is used as given; it is not normalized again.
pub fn generate_from_profile(
    profile: &ProfilePath,
    params: &RevolutionParams,
) -> Result<LatheOutput, LatheError> {
    params.validate()?;

    let flattened = flatten_path(profile, params.tolerance)?;
    let simplified = simplify_polyline(&flattened, params.simplify_epsilon)?;
    let raw = lathe_profile(&simplified, params)?;
    let extents = compute_extents(raw.positions())?;
    let mesh = generate_normals(&raw, params.smoothing_max_angle)?;

    Ok(LatheOutput { mesh, extents })
}

/// One independent job for [`generate_batch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct LatheRequest {
    pub path: String,
    #[serde(default)]
    pub params: RevolutionParams,
}

impl LatheRequest {
    pub fn new(path: impl Into<String>, params: RevolutionParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }
}

/// Runs independent requests in parallel.
///
/// Results come back in request order; one failing request does not
/// affect the others.
pub fn generate_batch(requests: &[LatheRequest]) -> Vec<Result<LatheOutput, LatheError>> {
    log::debug!("Generating batch of {} lathe meshes", requests.len());
    requests
        .par_iter()
        .map(|request| generate(&request.path, &request.params))
        .collect()
}
