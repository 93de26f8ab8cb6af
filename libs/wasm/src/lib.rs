//! WASM-facing entry points for the growth mesh generator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use `generate_mesh_internal`, which returns
//! Rust error types and does not need a JS host.
//!
//! ```
//! let mesh = growth_mesh_wasm::generate_mesh_internal(7, 3).unwrap();
//! assert_eq!(mesh.triangle_count(), 10);
//! ```

use config::constants::DEFAULT_GROWTH_COUNT;
use growth_mesh::{build_random_mesh, GrowthError};
use rand::{rngs::StdRng, SeedableRng};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "growth-mesh-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the growth count the generator uses when none is given.
///
/// # Examples
/// ```
/// assert_eq!(growth_mesh_wasm::default_growth_count(), 50);
/// ```
#[wasm_bindgen]
pub fn default_growth_count() -> u32 {
    u32::try_from(DEFAULT_GROWTH_COUNT).unwrap_or(u32::MAX)
}

/// Grows a mesh from `seed` and returns it as render buffers.
///
/// The same seed and growth count always produce the same mesh.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when growth fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript: const mesh = generate_mesh(42n, 50);
/// ```
#[wasm_bindgen]
pub fn generate_mesh(seed: u64, growth_count: u32) -> Result<MeshHandle, JsValue> {
    generate_mesh_internal(seed, growth_count).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only variant of [`generate_mesh`] returning Rust errors.
///
/// # Errors
/// Propagates any [`GrowthError`] from the build.
pub fn generate_mesh_internal(seed: u64, growth_count: u32) -> Result<MeshHandle, GrowthError> {
    let count = usize::try_from(growth_count).map_err(|_| GrowthError::TooManyTriangles {
        count: usize::MAX,
        max: config::constants::MAX_TRIANGLES,
    })?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mesh = build_random_mesh(count, &mut rng)?;
    Ok(MeshHandle::from_mesh(&mesh))
}
