//! Step observer trait for monitoring the phases of a solver step.

/// Hooks fired by [`Solver::advance_observed`](crate::Solver::advance_observed).
///
/// Implement this to count, profile or debug steps. All methods default to
/// no-ops, and they fire in phase order.
pub trait StepObserver {
    /// Called after gravity has been added to every particle.
    fn on_gravity(&mut self) {}

    /// Called after the boundary pass with the number of particles it moved.
    fn on_boundary(&mut self, _corrected: usize) {}

    /// Called after the collision pass with the number of overlapping pairs.
    fn on_collisions(&mut self, _resolved: usize) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. [`Solver::advance`](crate::Solver::advance) uses it.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
