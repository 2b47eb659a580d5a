//! Circular containment constraint.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Keeps every particle's edge inside a circle.
///
/// Correction is positional and inelastic: the particle is moved back onto
/// the largest circle it fits in, and the next integration step sees the
/// shortened displacement as lost velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleBoundary<F: Float> {
    pub center: Vec2<F>,
    pub radius: F,
}

impl<F: Float> CircleBoundary<F> {
    pub fn new(center: Vec2<F>, radius: F) -> Self {
        CircleBoundary { center, radius }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius <= F::zero() {
            return Err(PhysicsError::InvalidBoundary);
        }
        Ok(())
    }

    /// Distance from the center a particle of `radius` may reach.
    pub fn allowed_distance(&self, radius: F) -> F {
        self.radius - radius
    }

    /// Whether a particle's edge lies inside the boundary.
    pub fn contains(&self, particle: &Particle<F>) -> bool {
        particle.pos.distance(self.center) <= self.allowed_distance(particle.radius())
    }

    /// Pull `particle` back inside. Returns true if it was moved.
    ///
    /// A particle at least as wide as the boundary has no room to move and
    /// is pinned to the center.
    pub fn constrain(&self, particle: &mut Particle<F>) -> bool {
        let allowed = self.allowed_distance(particle.radius());
        if allowed <= F::zero() {
            if particle.pos == self.center {
                return false;
            }
            log::trace!("boundary: radius {:?} does not fit, pinning to center", particle.radius());
            particle.pos = self.center;
            return true;
        }
        let to_particle = particle.pos - self.center;
        let dist = to_particle.length();
        if dist <= allowed {
            return false;
        }
        particle.pos = self.center + to_particle.scale(allowed / dist);
        true
    }

    /// Apply [`constrain`](Self::constrain) to every particle. Returns how many moved.
    pub fn constrain_all(&self, particles: &mut [Particle<F>]) -> usize {
        let mut moved = 0;
        for p in particles.iter_mut() {
            if self.constrain(p) {
                moved += 1;
            }
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> CircleBoundary<f64> {
        CircleBoundary::new(Vec2::new(600.0, 400.0), 300.0)
    }

    #[test]
    fn inside_particle_untouched() {
        let mut p = Particle::new(Vec2::new(500.0, 400.0), 15.0);
        assert!(!arena().constrain(&mut p));
        assert_eq!(p.pos, Vec2::new(500.0, 400.0));
    }

    #[test]
    fn outside_particle_clamped_along_ray() {
        let mut p = Particle::new(Vec2::new(600.0, 1000.0), 15.0);
        assert!(arena().constrain(&mut p));
        assert!((p.pos.x - 600.0).abs() < 1e-9);
        assert!((p.pos.y - 685.0).abs() < 1e-9);
        // Previous position is kept so the correction becomes velocity.
        assert_eq!(p.prev_pos, Vec2::new(600.0, 1000.0));
    }

    #[test]
    fn oversized_particle_at_center_is_skipped() {
        let mut p = Particle::new(Vec2::new(600.0, 400.0), 350.0);
        assert!(!arena().constrain(&mut p));
        assert_eq!(p.pos, Vec2::new(600.0, 400.0));
    }

    #[test]
    fn oversized_particle_off_center_is_pinned() {
        let mut p = Particle::new(Vec2::new(700.0, 400.0), 400.0);
        assert!(arena().constrain(&mut p));
        assert_eq!(p.pos, Vec2::new(600.0, 400.0));
    }

    #[test]
    fn validate_rejects_bad_radius() {
        assert!(arena().validate().is_ok());
        let bad = CircleBoundary::new(Vec2::new(0.0, 0.0), 0.0f64);
        assert_eq!(bad.validate(), Err(PhysicsError::InvalidBoundary));
        let nan = CircleBoundary::new(Vec2::new(f64::NAN, 0.0), 1.0);
        assert_eq!(nan.validate(), Err(PhysicsError::InvalidBoundary));
    }

    #[test]
    fn constrain_all_counts_moves() {
        let mut ps = [
            Particle::new(Vec2::new(600.0, 400.0), 10.0),
            Particle::new(Vec2::new(1000.0, 400.0), 10.0),
            Particle::new(Vec2::new(600.0, 0.0), 10.0),
        ];
        assert_eq!(arena().constrain_all(&mut ps), 2);
        for p in &ps[1..] {
            assert!((p.pos.distance(Vec2::new(600.0, 400.0)) - 290.0).abs() < 1e-9);
        }
    }
}
