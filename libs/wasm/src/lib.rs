//! WASM-facing entry points for the lathe pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The curve editor calls [`lathe`] on every edit and hands
//! the returned buffers to the renderer. Native tests use
//! [`lathe_internal`], which returns Rust types instead of `JsValue`s.
//!
//! ```
//! let handle = lathe_wasm::lathe_internal("M0 0C0 0 10 0 10 10", "{}").unwrap();
//! assert!(handle.vertex_count() > 0);
//! ```

use config::constants::DEFAULT_PROFILE_PATH;
use lathe_mesh::{generate, RevolutionParams};
use wasm_bindgen::prelude::*;

mod diagnostics;
mod handle;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use handle::LatheHandle;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn initialize() {
    init_panic_hook();
    init_logger();
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "lathe-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    // A second initialization keeps the logger already installed.
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

/// Returns the path the editor starts with.
///
/// # Examples
/// ```
/// assert!(lathe_wasm::default_profile_path().starts_with('M'));
/// ```
#[wasm_bindgen]
pub fn default_profile_path() -> String {
    DEFAULT_PROFILE_PATH.to_string()
}

/// Returns the default revolution parameters as camelCase JSON.
///
/// # Examples
/// ```
/// let json = lathe_wasm::default_params_json();
/// assert!(json.contains("\"divisions\":20"));
/// ```
#[wasm_bindgen]
pub fn default_params_json() -> String {
    serde_json::to_string(&RevolutionParams::default()).unwrap_or_default()
}

/// Revolves `path` with the parameters in `params_json` and returns the
/// mesh buffers.
///
/// Missing parameter fields take their defaults; an empty string means all
/// defaults.
///
/// # Errors
/// Throws a [`Diagnostic`] describing the failure.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const handle = lathe("M0 0C0 0 10 0 10 10", '{"divisions": 32}');
/// //   console.log("Triangles:", handle.triangle_count);
/// // } catch (diag) {
/// //   console.error(diag.message);
/// // }
/// ```
#[wasm_bindgen]
pub fn lathe(path: &str, params_json: &str) -> Result<LatheHandle, JsValue> {
    lathe_internal(path, params_json).map_err(JsValue::from)
}

/// Internal implementation of [`lathe`].
pub fn lathe_internal(path: &str, params_json: &str) -> Result<LatheHandle, Diagnostic> {
    let params = parse_params(params_json)?;
    let output = generate(path, &params).map_err(|err| {
        log::debug!("Lathe failed: {err}");
        Diagnostic::from(err)
    })?;
    Ok(LatheHandle::from(output))
}

/// Reads revolution parameters from JSON, treating blank input as defaults.
pub fn parse_params(params_json: &str) -> Result<RevolutionParams, Diagnostic> {
    if params_json.trim().is_empty() {
        return Ok(RevolutionParams::default());
    }
    Ok(serde_json::from_str(params_json)?)
}
