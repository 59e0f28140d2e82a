//! Distance constraints between pairs of particles in an arena.

use crate::config::validate_stiffness;
use crate::error::RopeError;
use crate::float::Float;
use crate::particle::Particle;

/// Keeps particles `a` and `b` at `rest_length` apart.
///
/// Holds indices into the owning particle slice rather than references, so
/// any number of constraints can share a particle.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
    stiffness: F,
}

impl<F: Float> DistanceConstraint<F> {
    /// Link `a` and `b` at their current separation.
    pub fn between(
        a: usize,
        b: usize,
        particles: &[Particle<F>],
        stiffness: F,
    ) -> Result<Self, RopeError> {
        validate_stiffness(stiffness)?;
        let count = particles.len();
        let pa = particles.get(a).ok_or(RopeError::ParticleOutOfBounds { index: a, count })?;
        let pb = particles.get(b).ok_or(RopeError::ParticleOutOfBounds { index: b, count })?;
        Ok(DistanceConstraint {
            a,
            b,
            rest_length: pa.pos.distance(pb.pos),
            stiffness,
        })
    }

    pub fn a(&self) -> usize {
        self.a
    }

    pub fn b(&self) -> usize {
        self.b
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    pub fn stiffness(&self) -> F {
        self.stiffness
    }

    /// Current separation minus rest length; positive when stretched.
    /// `None` if either index is outside `particles`.
    pub fn error(&self, particles: &[Particle<F>]) -> Option<F> {
        let pa = particles.get(self.a)?;
        let pb = particles.get(self.b)?;
        Some(pa.pos.distance(pb.pos) - self.rest_length)
    }

    /// One relaxation step: move both ends halfway toward the rest length,
    /// scaled by stiffness. Fixed or dragged ends stay put without handing
    /// their share to the other end. Coincident ends, and indices outside
    /// `particles`, are skipped.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let (pa, pb) = match (particles.get(self.a), particles.get(self.b)) {
            (Some(pa), Some(pb)) => (pa.pos, pb.pos),
            _ => return,
        };
        let delta = pa - pb;
        let dist = delta.length();
        if dist == F::zero() {
            return;
        }

        let correction = (self.rest_length - dist) / dist;
        let offset = delta.scale(correction * F::half() * self.stiffness);

        if !particles[self.a].is_immovable() {
            particles[self.a].pos += offset;
        }
        if !particles[self.b].is_immovable() {
            particles[self.b].pos -= offset;
        }
    }
}
