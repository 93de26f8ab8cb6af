//! Runtime configuration for mesh growth.

use config::constants::{DEFAULT_MAX_GROWTH_ATTEMPTS, INTERSECTION_EPSILON, SEED_COORDINATE_RANGE};

use crate::error::{GrowthError, GrowthResult};

/// Configuration for growing a mesh.
///
/// # Example
///
/// ```rust
/// use growth_mesh::GrowthConfig;
///
/// let config = GrowthConfig::new().with_max_attempts(500).with_seed_range(2.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_attempts_per_step, Some(500));
///
/// // Retry forever, as long as it takes
/// assert_eq!(GrowthConfig::unbounded().max_attempts_per_step, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthConfig {
    /// Candidates tried per step before giving up; `None` retries forever.
    pub max_attempts_per_step: Option<usize>,
    /// Tolerance of the collision test.
    pub intersection_tolerance: f64,
    /// Seed coordinates are drawn from `[-seed_range, seed_range)`.
    pub seed_range: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            max_attempts_per_step: Some(DEFAULT_MAX_GROWTH_ATTEMPTS),
            intersection_tolerance: INTERSECTION_EPSILON,
            seed_range: SEED_COORDINATE_RANGE,
        }
    }
}

impl GrowthConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that never gives up on a step.
    ///
    /// Dense meshes can then retry indefinitely; callers running
    /// interactively should prefer a cap.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_attempts_per_step: None,
            ..Self::default()
        }
    }

    /// Sets the retry cap per growth step.
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts_per_step = Some(attempts);
        self
    }

    /// Sets the collision test tolerance.
    #[must_use]
    pub const fn with_intersection_tolerance(mut self, tolerance: f64) -> Self {
        self.intersection_tolerance = tolerance;
        self
    }

    /// Sets the half-width of the seed coordinate range.
    #[must_use]
    pub const fn with_seed_range(mut self, range: f64) -> Self {
        self.seed_range = range;
        self
    }

    /// Checks every value.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidConfig`] for a zero retry cap, a negative
    /// or non-finite tolerance, or a non-positive seed range.
    pub fn validate(&self) -> GrowthResult<()> {
        if self.max_attempts_per_step == Some(0) {
            return Err(GrowthError::invalid_config(
                "max_attempts_per_step must be at least 1",
            ));
        }
        if !self.intersection_tolerance.is_finite() || self.intersection_tolerance < 0.0 {
            return Err(GrowthError::invalid_config(format!(
                "intersection_tolerance must be finite and >= 0: {}",
                self.intersection_tolerance
            )));
        }
        if !self.seed_range.is_finite() || self.seed_range <= 0.0 {
            return Err(GrowthError::invalid_config(format!(
                "seed_range must be finite and positive: {}",
                self.seed_range
            )));
        }
        Ok(())
    }
}
