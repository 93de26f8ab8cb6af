//! Procedural growth of closed triangle meshes.
//!
//! A mesh starts as a random, outward-oriented tetrahedron and grows one
//! face at a time: a face is replaced by three faces meeting at a point
//! sampled above it, unless the new edges would pass through the rest of
//! the mesh. Randomness is always injected by the caller, so a seeded
//! generator reproduces a mesh bit for bit.
//!
//! ```rust
//! use growth_mesh::build_random_mesh;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mesh = build_random_mesh(10, &mut rng).unwrap();
//!
//! assert_eq!(mesh.triangle_count(), 24);
//! assert_eq!(mesh.positions().len(), mesh.normals().len());
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod growth;
pub mod mesh;
pub mod tetrahedron;

pub use error::{GrowthError, GrowthResult};
pub use export::MeshBuffers;
pub use growth::{
    build_random_mesh, build_random_mesh_with_config, grow_step, GrowthCandidate, GrowthConfig,
    GrowthEngine, GrowthStep,
};
#[cfg(feature = "parallel")]
pub use growth::build_random_meshes;
pub use mesh::{Mesh, Triangle};
pub use tetrahedron::tetrahedron;
