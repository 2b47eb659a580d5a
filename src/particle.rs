//! Circular Verlet bodies with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A circular body integrated with position Verlet.
///
/// Velocity is never stored: it is the difference between `pos` and
/// `prev_pos`, so any positional correction made between steps shows up
/// as a velocity change on the next integration.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    radius: F,
}

impl<F: Float> Particle<F> {
    /// A particle at rest at `pos`.
    pub fn new(pos: Vec2<F>, radius: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            radius,
        }
    }

    pub fn radius(&self) -> F {
        self.radius
    }

    /// Accumulate an acceleration for the current step.
    pub fn accelerate(&mut self, acc: Vec2<F>) {
        self.acceleration += acc;
    }

    /// Advance one step of length `dt` and clear the accumulated acceleration.
    pub fn update_position(&mut self, dt: F) {
        let displacement = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        self.pos = self.pos + displacement + self.acceleration.scale(dt * dt);
        self.acceleration = Vec2::zero();
    }

    /// Movement over the last step, i.e. velocity times `dt`.
    pub fn displacement(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn velocity(&self, dt: F) -> Vec2<F> {
        if dt.is_near_zero(F::from_f32(1e-30)) {
            return Vec2::zero();
        }
        self.displacement().scale(F::one() / dt)
    }
}
