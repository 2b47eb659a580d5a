//! Pairwise overlap resolution between circles.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Separate two particles if their circles overlap. Returns true if they did.
///
/// Each particle moves half the penetration depth along the center axis,
/// `a` away from `b` and `b` away from `a`, so the pair's midpoint is
/// unchanged. Coincident centers have no axis; they are split along +x.
pub fn resolve_pair<F: Float>(a: &mut Particle<F>, b: &mut Particle<F>) -> bool {
    let axis = a.pos - b.pos;
    let dist_sq = axis.length_sq();
    let min_dist = a.radius() + b.radius();
    if dist_sq >= min_dist.squared() {
        return false;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist.is_near_zero(F::from_f32(1e-10)) {
        log::trace!("collision: coincident centers, separating along +x");
        Vec2::unit_x()
    } else {
        axis.scale(F::one() / dist)
    };
    let delta = F::half() * (min_dist - dist);
    let correction = normal.scale(delta);

    a.pos += correction;
    b.pos -= correction;
    true
}

/// One pass over every unordered pair `(i, k)` with `i < k`, `i` outermost.
///
/// Returns the number of overlapping pairs corrected. Corrections are
/// applied immediately, so later pairs see earlier adjustments and chained
/// overlaps may survive a single pass.
pub fn resolve_all<F: Float>(particles: &mut [Particle<F>]) -> usize {
    let mut resolved = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                resolved += 1;
            }
        }
    }
    resolved
}
