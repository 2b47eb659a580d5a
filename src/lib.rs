//! Fixed-timestep Verlet physics for circles in a circular arena.
//!
//! `ballpit` advances circular bodies under constant gravity, pushes
//! overlapping pairs apart, and keeps every body inside a bounding circle.
//! Velocity is implicit in consecutive positions, so positional corrections
//! feed straight back into motion.
//!
//! # Features
//!
//! - **Verlet integration**: position-based, no explicit velocity state
//! - **Circular boundary**: inelastic positional containment
//! - **Pairwise collisions**: single-pass, equal-and-opposite separation
//! - **Observable**: watch each phase of a step via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Example
//! ```
//! use ballpit::{Solver, Vec2};
//!
//! let mut solver: Solver<f64> = Solver::default();
//! solver.spawn(Vec2::new(500.0, 400.0), 15.0).unwrap();
//! for _ in 0..10 {
//!     solver.advance(0.01);
//! }
//! let ball = solver.particles().next().unwrap();
//! assert!(ball.position.y > 400.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod boundary;
pub mod collision;
pub mod solver;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use boundary::CircleBoundary;
pub use solver::{ParticleId, ParticleView, Solver};
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
