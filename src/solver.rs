//! Fixed-timestep Verlet solver for circles in a circular arena.

use crate::boundary::CircleBoundary;
use crate::collision;
use crate::config::SolverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Handle returned by [`Solver::spawn`].
///
/// Particles are never removed, so a handle stays valid for the solver's
/// lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub usize);

impl ParticleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a renderer needs to draw one particle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleView<F: Float> {
    pub position: Vec2<F>,
    pub radius: F,
}

impl<F: Float> From<&Particle<F>> for ParticleView<F> {
    fn from(p: &Particle<F>) -> Self {
        ParticleView { position: p.pos, radius: p.radius() }
    }
}

/// Owns every particle and advances them one fixed step at a time.
///
/// A step runs four passes in order: gravity, boundary, collisions,
/// integration. The two corrective passes are also exposed on their own.
#[derive(Clone, Debug)]
pub struct Solver<F: Float> {
    config: SolverConfig<F>,
    particles: AllocVec<Particle<F>>,
}

impl<F: Float> Solver<F> {
    pub fn new(config: SolverConfig<F>) -> Result<Self, PhysicsError> {
        if let Err(e) = config.validate() {
            log::warn!("rejected solver config {:?}: {}", config, e);
            return Err(e);
        }
        log::debug!(
            "solver created: gravity {:?}, boundary {:?} r={:?}",
            config.gravity,
            config.boundary.center,
            config.boundary.radius
        );
        Ok(Solver { config, particles: AllocVec::new() })
    }

    /// Add a resting particle at `position`.
    pub fn spawn(&mut self, position: impl Into<Vec2<F>>, radius: F) -> Result<ParticleId, PhysicsError> {
        let position = position.into();
        if !radius.is_finite() || radius <= F::zero() {
            log::warn!("spawn rejected: radius {:?}", radius);
            return Err(PhysicsError::InvalidRadius);
        }
        if !position.is_finite() {
            log::warn!("spawn rejected: position {:?}", position);
            return Err(PhysicsError::NonFinitePosition);
        }
        let id = ParticleId(self.particles.len());
        self.particles.push(Particle::new(position, radius));
        log::debug!("spawned particle {} at {:?} r={:?}", id.0, position, radius);
        Ok(id)
    }

    /// Run one full step of length `dt`.
    pub fn advance(&mut self, dt: F) {
        self.advance_observed(dt, &mut NoOpStepObserver);
    }

    /// Run one full step, reporting each pass to `observer`.
    pub fn advance_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        self.apply_gravity();
        observer.on_gravity();

        let corrected = self.apply_boundary();
        observer.on_boundary(corrected);

        let resolved = self.resolve_collisions();
        observer.on_collisions(resolved);

        self.integrate(dt);
        observer.on_integrate();

        log::trace!(
            "step dt={:?}: {} particles, {} boundary corrections, {} collisions",
            dt,
            self.particles.len(),
            corrected,
            resolved
        );
        observer.on_step_complete();
    }

    /// Add gravity to every particle's acceleration.
    pub(crate) fn apply_gravity(&mut self) {
        let gravity = self.config.gravity;
        for p in self.particles.iter_mut() {
            p.accelerate(gravity);
        }
    }

    /// Pull escaping particles back inside the boundary. Returns how many moved.
    pub fn apply_boundary(&mut self) -> usize {
        self.config.boundary.constrain_all(&mut self.particles)
    }

    /// One pass of pairwise separation. Returns the number of overlapping pairs.
    pub fn resolve_collisions(&mut self) -> usize {
        collision::resolve_all(&mut self.particles)
    }

    /// Verlet-integrate every particle over `dt`.
    pub(crate) fn integrate(&mut self, dt: F) {
        for p in self.particles.iter_mut() {
            p.update_position(dt);
        }
    }

    pub fn particles(&self) -> impl Iterator<Item = ParticleView<F>> + '_ {
        self.particles.iter().map(ParticleView::from)
    }

    pub fn particle(&self, id: ParticleId) -> Option<ParticleView<F>> {
        self.particles.get(id.0).map(ParticleView::from)
    }

    /// Full integration state of a particle, read-only.
    pub fn state(&self, id: ParticleId) -> Option<&Particle<F>> {
        self.particles.get(id.0)
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn config(&self) -> &SolverConfig<F> { &self.config }
    pub fn gravity(&self) -> Vec2<F> { self.config.gravity }
    pub fn boundary(&self) -> &CircleBoundary<F> { &self.config.boundary }
}

impl<F: Float> Default for Solver<F> {
    fn default() -> Self {
        Solver { config: SolverConfig::default(), particles: AllocVec::new() }
    }
}
