//! # Growth Errors
//!
//! Error types for mesh growth operations.
//!
//! ## Error Policy
//!
//! - Collision rejections are NOT errors; they are retried silently
//! - A failed build never returns a partial mesh
//! - Errors include context for debugging

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while seeding or growing a mesh.
///
/// ## Example
///
/// ```rust
/// use growth_mesh::{build_random_mesh, GrowthError};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// match build_random_mesh(3, &mut rng) {
///     Ok(mesh) => assert_eq!(mesh.triangle_count(), 10),
///     Err(GrowthError::DegenerateGeometry { message }) => eprintln!("degenerate: {message}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrowthError {
    /// Input of the wrong shape reached an operation.
    ///
    /// Wrong arity, coplanar seed points or an empty mesh. These are
    /// programming errors on the caller's side.
    #[error("Contract violation: {message}")]
    ContractViolation {
        /// What was wrong with the input
        message: String,
    },

    /// A linear solve was singular.
    ///
    /// Raised by the circumcenter computation for collinear input. Aborts
    /// the whole build.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Which solve failed
        message: String,
    },

    /// A growth step exhausted its retry budget.
    #[error("Growth step {step} stalled after {attempts} rejected candidates")]
    GrowthStalled {
        /// Zero-based index of the stalled step
        step: usize,
        /// Number of candidates that were tried
        attempts: usize,
    },

    /// A growth configuration value was rejected.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Which value was rejected and why
        message: String,
    },

    /// The requested growth would exceed the triangle limit.
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Triangle count the build would produce
        count: usize,
        /// Configured maximum
        max: usize,
    },
}

impl GrowthError {
    /// Creates a contract violation error.
    pub fn contract(message: impl Into<String>) -> Self {
        Self::ContractViolation {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for growth operations.
pub type GrowthResult<T> = Result<T, GrowthError>;

// =============================================================================
// TESTS
// =============================================================================
