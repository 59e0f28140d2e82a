//! Headless driver: one rope, its tunable parameters and the user's grip.
//!
//! A windowing front end feeds input events and the frame tick into a
//! `Simulation` and draws `Simulation::rope().render_frame()`.

use crate::config::{Bounds, ParamRanges, RopeConfig, SolverConfig};
use crate::error::RopeError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::rope::Rope;
use crate::vec::Vec2;

pub struct Simulation<F: Float> {
    rope: Rope<F>,
    origin: Vec2<F>,
    rope_config: RopeConfig<F>,
    solver: SolverConfig<F>,
    bounds: Bounds<F>,
    ranges: ParamRanges<F>,
    paused: bool,
    held: Option<usize>,
}

impl<F: Float> Simulation<F> {
    /// Build the initial rope. The simulation starts paused.
    pub fn new(
        origin: Vec2<F>,
        rope_config: RopeConfig<F>,
        solver: SolverConfig<F>,
        bounds: Bounds<F>,
    ) -> Result<Self, RopeError> {
        solver.validate()?;
        let rope = Rope::new(origin, &rope_config)?;
        Ok(Simulation {
            rope,
            origin,
            rope_config,
            solver,
            bounds,
            ranges: ParamRanges::default(),
            paused: true,
            held: None,
        })
    }

    pub fn with_ranges(mut self, ranges: ParamRanges<F>) -> Self {
        self.ranges = ranges;
        self
    }

    /// One frame tick. Returns whether the rope was stepped.
    pub fn frame<O: StepObserver>(&mut self, observer: &mut O) -> bool {
        if self.paused {
            return false;
        }
        self.rope.step(&self.solver, &self.bounds, observer);
        true
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_gravity(&mut self, gravity: F) {
        self.solver.gravity = self.ranges.gravity.clamp(gravity);
    }

    pub fn set_damping(&mut self, damping: F) {
        self.solver.damping = self.ranges.damping.clamp(damping);
    }

    pub fn set_iterations(&mut self, iterations: usize) -> Result<(), RopeError> {
        if iterations == 0 {
            return Err(RopeError::InvalidIterations);
        }
        self.solver.iterations = iterations;
        Ok(())
    }

    pub fn set_bounds(&mut self, bounds: Bounds<F>) {
        self.bounds = bounds;
    }

    /// Change the segment count. Rebuilds the rope and drops any grip.
    pub fn set_segments(&mut self, segments: usize) -> Result<(), RopeError> {
        let mut config = self.rope_config.clone();
        config.segments = self.ranges.segments.clamp(segments);
        self.rebuild(config)
    }

    /// Change the segment length. Rebuilds the rope and drops any grip.
    pub fn set_segment_length(&mut self, length: F) -> Result<(), RopeError> {
        let mut config = self.rope_config.clone();
        config.segment_length = self.ranges.segment_length.clamp(length);
        self.rebuild(config)
    }

    /// Replace the rope with a fresh one built from the current parameters.
    pub fn reset(&mut self) -> Result<(), RopeError> {
        self.rebuild(self.rope_config.clone())
    }

    // On error nothing changes: the old rope, config and grip survive.
    fn rebuild(&mut self, config: RopeConfig<F>) -> Result<(), RopeError> {
        self.rope = Rope::new(self.origin, &config)?;
        self.rope_config = config;
        self.held = None;
        Ok(())
    }

    /// Start dragging the first particle within `hit_radius` of `point`.
    /// Any particle still held from an earlier press is let go first.
    pub fn press(&mut self, point: Vec2<F>, hit_radius: F) -> Option<usize> {
        if let Some(old) = self.held.take() {
            self.rope.set_dragged(old, false);
        }
        let index = self.rope.particle_under(point, hit_radius)?;
        self.rope.set_dragged(index, true);
        self.held = Some(index);
        Some(index)
    }

    /// Move the held particle, if any, to `point`.
    pub fn drag(&mut self, point: Vec2<F>) -> Option<usize> {
        let index = self.held?;
        self.rope.drag_to(point, Some(index))
    }

    /// Let go of whatever is held.
    pub fn release(&mut self) {
        self.held = None;
        self.rope.release_all();
    }

    pub fn held(&self) -> Option<usize> {
        self.held
    }

    pub fn rope(&self) -> &Rope<F> {
        &self.rope
    }

    pub fn rope_mut(&mut self) -> &mut Rope<F> {
        &mut self.rope
    }

    pub fn rope_config(&self) -> &RopeConfig<F> {
        &self.rope_config
    }

    pub fn solver(&self) -> &SolverConfig<F> {
        &self.solver
    }

    pub fn bounds(&self) -> &Bounds<F> {
        &self.bounds
    }

    pub fn ranges(&self) -> &ParamRanges<F> {
        &self.ranges
    }
}
