//! # Lathe Mesh
//!
//! Turns a 2D profile path into a smoothly shaded solid of revolution.
//!
//! ## Architecture
//!
//! ```text
//! path string → lathe-parser (ProfilePath)
//!             → flatten (polyline)
//!             → simplify (polyline)
//!             → lathe (RawMesh) ──→ extents
//!             → normals (FinalMesh)
//! ```
//!
//! Every stage is a pure function of its inputs. Nothing is cached between
//! calls; changing the path or the parameters means calling [`generate`]
//! again.
//!
//! ## Usage
//!
//! ```rust
//! use lathe_mesh::{generate, RevolutionParams};
//!
//! let output = generate("M0 0C0 0 10 0 10 10", &RevolutionParams::default()).unwrap();
//! let positions: Vec<f32> = output.mesh.positions_f32();
//! let indices: Vec<u32> = output.mesh.indices_u32();
//! assert_eq!(indices.len() % 3, 0);
//! assert_eq!(positions.len(), output.mesh.vertex_count() * 3);
//! ```

pub mod cursor;
pub mod error;
pub mod extents;
pub mod flatten;
pub mod lathe;
pub mod mesh;
pub mod normals;
pub mod params;
pub mod pipeline;
pub mod simplify;

pub use cursor::TriangleCursor;
pub use error::{ErrorKind, LatheError};
pub use extents::{compute_extents, Extents};
pub use flatten::flatten_path;
pub use lathe::lathe_profile;
pub use mesh::{FinalMesh, RawMesh};
pub use normals::generate_normals;
pub use params::RevolutionParams;
pub use pipeline::{generate, generate_batch, generate_from_profile, LatheOutput, LatheRequest};
pub use simplify::simplify_polyline;

pub use lathe_parser::{parse_path, BezierSegment, ProfilePath};
