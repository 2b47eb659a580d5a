//! Configuration for the solver: gravity and the containing circle.

use crate::boundary::CircleBoundary;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Default gravity, pointing down in screen space (+y).
pub const DEFAULT_GRAVITY: (f32, f32) = (0.0, 1000.0);
/// Default boundary center.
pub const DEFAULT_BOUNDARY_CENTER: (f32, f32) = (600.0, 400.0);
/// Default boundary radius.
pub const DEFAULT_BOUNDARY_RADIUS: f32 = 300.0;

/// Simulation constants, fixed for the lifetime of a [`Solver`](crate::Solver).
///
/// # Builder Pattern
/// ```
/// use ballpit::config::SolverConfig;
/// use ballpit::vec::Vec2;
///
/// let config: SolverConfig<f64> = SolverConfig::new()
///     .with_gravity(Vec2::new(0.0, 9.81))
///     .with_boundary(Vec2::new(0.0, 0.0), 50.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<F: Float> {
    /// Constant acceleration applied to every particle. Default: (0, 1000).
    pub gravity: Vec2<F>,
    /// Containment circle. Default: center (600, 400), radius 300.
    pub boundary: CircleBoundary<F>,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            gravity: Vec2::new(F::from_f32(DEFAULT_GRAVITY.0), F::from_f32(DEFAULT_GRAVITY.1)),
            boundary: CircleBoundary::new(
                Vec2::new(
                    F::from_f32(DEFAULT_BOUNDARY_CENTER.0),
                    F::from_f32(DEFAULT_BOUNDARY_CENTER.1),
                ),
                F::from_f32(DEFAULT_BOUNDARY_RADIUS),
            ),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the boundary circle.
    pub fn with_boundary(mut self, center: Vec2<F>, radius: F) -> Self {
        self.boundary = CircleBoundary::new(center, radius);
        self
    }

    /// Check that every constant is usable.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::NonFiniteGravity);
        }
        self.boundary.validate()
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
