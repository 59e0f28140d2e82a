//! Rope built from a chain of Verlet particles and distance constraints.

use crate::config::{Bounds, RopeConfig, SolverConfig};
use crate::constraint::DistanceConstraint;
use crate::error::RopeError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::render::{Color, ParticleGeometry, RenderFrame, SegmentGeometry};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A single rope: an arena of particles plus one constraint per adjacent pair.
///
/// Particle 0 is the anchor end; index order is also render order. Topology
/// is fixed at construction. To change the segment count or length, build a
/// new `Rope`.
#[derive(Clone, Debug)]
pub struct Rope<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    segment_length: F,
    drag_radius: F,
    particle_color: Color,
    rope_color: Color,
}

impl<F: Float> Rope<F> {
    /// Lay out `config.segments + 1` particles along +X from `origin`,
    /// `config.segment_length` apart, and link each neighbouring pair.
    pub fn new(origin: Vec2<F>, config: &RopeConfig<F>) -> Result<Self, RopeError> {
        config.validate()?;

        let segments = config.segments;
        let mut particles = AllocVec::with_capacity(segments + 1);
        for i in 0..=segments {
            let pos = Vec2::new(
                origin.x + F::from_usize(i) * config.segment_length,
                origin.y,
            );
            let mut particle = Particle::new(pos)
                .with_radius(config.particle_radius)
                .with_mass(config.particle_mass);
            particle.fixed = i == 0 && config.anchor_fixed;
            particles.push(particle);
        }

        let mut constraints = AllocVec::with_capacity(segments);
        for i in 0..segments {
            constraints.push(DistanceConstraint::between(i, i + 1, &particles, config.stiffness)?);
        }

        Ok(Rope {
            particles,
            constraints,
            segment_length: config.segment_length,
            drag_radius: config.drag_radius,
            particle_color: config.particle_color,
            rope_color: config.rope_color,
        })
    }

    /// Advance one frame: integrate, relax `config.iterations` times, then
    /// keep everything inside `bounds`.
    pub fn step<O: StepObserver>(
        &mut self,
        config: &SolverConfig<F>,
        bounds: &Bounds<F>,
        observer: &mut O,
    ) {
        for p in self.particles.iter_mut() {
            p.integrate(config.dt, config.gravity, config.damping);
        }
        observer.on_integrate();

        for i in 0..config.iterations {
            self.sweep();
            observer.on_constraint_iteration(i);
        }

        for p in self.particles.iter_mut() {
            p.clamp_to_bounds(bounds, config.restitution);
        }
        observer.on_bounds();

        observer.on_step_complete();
    }

    /// Run constraint sweeps without integrating or clamping.
    pub fn relax(&mut self, iterations: usize) {
        for _ in 0..iterations {
            self.sweep();
        }
    }

    // Index order matters: each sweep carries a correction one link further
    // from where it started.
    fn sweep(&mut self) {
        for c in self.constraints.iter() {
            c.solve(&mut self.particles);
        }
    }

    /// Closest non-fixed particle strictly within `max_radius` of `point`.
    /// Ties go to the lower index.
    pub fn find_nearest_draggable(&self, point: Vec2<F>, max_radius: F) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (i, p) in self.particles.iter().enumerate() {
            if p.fixed {
                continue;
            }
            let dist = p.pos.distance(point);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.filter(|&(_, dist)| dist < max_radius).map(|(i, _)| i)
    }

    /// First non-fixed particle in index order within `radius` of `point`.
    /// This is the click hit-test; it does not look for the closest match.
    pub fn particle_under(&self, point: Vec2<F>, radius: F) -> Option<usize> {
        self.particles
            .iter()
            .position(|p| !p.fixed && p.pos.distance(point) < radius)
    }

    /// Move a particle to `point`.
    ///
    /// With `Some(index)` that particle is moved, or nothing happens if the
    /// index is out of range. With `None` the nearest draggable particle
    /// within the rope's drag radius is moved. Returns the moved index. The
    /// `dragged` flag is left to the caller (`set_dragged`).
    pub fn drag_to(&mut self, point: Vec2<F>, index: Option<usize>) -> Option<usize> {
        let target = match index {
            Some(i) if i < self.particles.len() => i,
            Some(_) => return None,
            None => self.find_nearest_draggable(point, self.drag_radius)?,
        };
        self.particles[target].set_position(point);
        Some(target)
    }

    /// Mark a particle as held by the user. Returns false for a bad index.
    pub fn set_dragged(&mut self, index: usize, dragged: bool) -> bool {
        match self.particles.get_mut(index) {
            Some(p) => {
                p.dragged = dragged;
                true
            }
            None => false,
        }
    }

    /// Hand every particle back to the simulation.
    pub fn release_all(&mut self) {
        for p in self.particles.iter_mut() {
            p.dragged = false;
        }
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        for p in self.particles.iter_mut() {
            p.apply_force(force);
        }
    }

    pub fn apply_force_at(&mut self, index: usize, force: Vec2<F>) -> bool {
        match self.particles.get_mut(index) {
            Some(p) => {
                p.apply_force(force);
                true
            }
            None => false,
        }
    }

    /// Sum of squared frame-to-frame displacements. Zero once the rope has
    /// fully settled.
    pub fn motion(&self) -> F {
        self.particles
            .iter()
            .fold(F::zero(), |acc, p| acc + p.velocity_raw().length_sq())
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Endpoint pairs of every link, in constraint order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.constraints
            .iter()
            .map(move |c| (self.particles[c.a()].pos, self.particles[c.b()].pos))
    }

    /// Geometry snapshot for a renderer.
    pub fn render_frame(&self) -> RenderFrame<F> {
        RenderFrame {
            particles: self
                .particles
                .iter()
                .map(|p| ParticleGeometry {
                    pos: p.pos,
                    radius: p.radius,
                    fixed: p.fixed,
                    dragged: p.dragged,
                })
                .collect(),
            segments: self
                .segments()
                .map(|(a, b)| SegmentGeometry { a, b })
                .collect(),
            particle_color: self.particle_color,
            rope_color: self.rope_color,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn segment_length(&self) -> F {
        self.segment_length
    }

    pub fn drag_radius(&self) -> F {
        self.drag_radius
    }

    pub fn particle_color(&self) -> Color {
        self.particle_color
    }

    pub fn rope_color(&self) -> Color {
        self.rope_color
    }

    pub fn particle(&self, index: usize) -> Option<&Particle<F>> {
        self.particles.get(index)
    }

    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle<F>> {
        self.particles.get_mut(index)
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn constraints(&self) -> &[DistanceConstraint<F>] {
        &self.constraints
    }
}
