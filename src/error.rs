//! Error types for solver construction and spawning.

use thiserror::Error;

/// Errors raised when the host hands the solver unusable input.
///
/// Stepping never fails; only construction and [`spawn`](crate::Solver::spawn)
/// validate their arguments.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    /// Radius must be positive and finite.
    #[error("particle radius must be positive and finite")]
    InvalidRadius,

    /// Spawn position contains NaN or an infinity.
    #[error("particle position must be finite")]
    NonFinitePosition,

    /// Boundary radius must be positive and finite, with a finite center.
    #[error("boundary must have a finite center and a positive, finite radius")]
    InvalidBoundary,

    /// Gravity contains NaN or an infinity.
    #[error("gravity must be finite")]
    NonFiniteGravity,
}

impl PhysicsError {
    /// Every variant describes a bad argument rather than a runtime failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PhysicsError::InvalidRadius
                | PhysicsError::NonFinitePosition
                | PhysicsError::InvalidBoundary
                | PhysicsError::NonFiniteGravity
        )
    }
}
