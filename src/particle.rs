//! Verlet particles: position-based dynamics with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;
use crate::config::Bounds;

/// Default collision / hit-test radius for rope particles.
pub const DEFAULT_RADIUS: f32 = 5.0;

/// A Verlet particle. Velocity is never stored; it is the difference between
/// `pos` and `prev_pos`.
///
/// A `fixed` particle is immune to integration, forces, constraint
/// corrections and boundary clamping. A `dragged` particle skips integration,
/// forces and constraint corrections while the caller writes its position
/// directly, but it still respects the bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub radius: F,
    pub mass: F,
    pub fixed: bool,
    pub dragged: bool,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest with unit mass and the default radius.
    pub fn new(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            radius: F::from_f32(DEFAULT_RADIUS),
            mass: F::one(),
            fixed: false,
            dragged: false,
        }
    }

    /// A particle that never moves.
    pub fn anchored(pos: Vec2<F>) -> Self {
        Particle { fixed: true, ..Particle::new(pos) }
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    /// Particles that neither integrate nor take constraint corrections.
    pub fn is_immovable(&self) -> bool {
        self.fixed || self.dragged
    }

    /// Advance one Verlet step. Damping scales the implied displacement, not
    /// a separate velocity field.
    pub fn integrate(&mut self, dt: F, gravity: F, damping: F) {
        if self.is_immovable() {
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(damping);
        self.prev_pos = self.pos;
        self.pos += velocity;
        self.pos.y = self.pos.y + gravity * dt * dt;
    }

    /// Keep the particle's disc inside `bounds`. On contact the previous
    /// position is mirrored across the clamped one and scaled by
    /// `restitution`, so the implied velocity on that axis reverses and
    /// shrinks.
    pub fn clamp_to_bounds(&mut self, bounds: &Bounds<F>, restitution: F) {
        if self.fixed {
            return;
        }
        let (x, prev_x) = clamp_axis(
            self.pos.x,
            self.prev_pos.x,
            bounds.min.x + self.radius,
            bounds.max.x - self.radius,
            restitution,
        );
        let (y, prev_y) = clamp_axis(
            self.pos.y,
            self.prev_pos.y,
            bounds.min.y + self.radius,
            bounds.max.y - self.radius,
            restitution,
        );
        self.pos = Vec2::new(x, y);
        self.prev_pos = Vec2::new(prev_x, prev_y);
    }

    /// Direct write used while dragging. `prev_pos` is left alone, so on
    /// release the particle keeps the velocity implied by the last move.
    pub fn set_position(&mut self, pos: Vec2<F>) {
        self.pos = pos;
    }

    /// Impulse-style nudge: `force / mass` is added straight to the position.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        if self.is_immovable() {
            return;
        }
        self.pos += force.scale(F::one() / self.mass);
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}

fn clamp_axis<F: Float>(pos: F, prev: F, low: F, high: F, restitution: F) -> (F, F) {
    if pos > high {
        (high, high + (high - prev) * restitution)
    } else if pos < low {
        (low, low + (low - prev) * restitution)
    } else {
        (pos, prev)
    }
}
