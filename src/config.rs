//! Configuration types for the rope and the per-frame solver.

use crate::error::RopeError;
use crate::float::Float;
use crate::particle::DEFAULT_RADIUS;
use crate::render::Color;
use crate::vec::Vec2;

/// Search radius used by `Rope::drag_to` when no particle index is given.
pub const DEFAULT_DRAG_RADIUS: f32 = 50.0;

/// Largest segment count a `RopeConfig` accepts.
pub const MAX_SEGMENTS: usize = 100_000;

/// Fraction of the impact velocity kept (and reversed) on a wall hit.
pub const DEFAULT_RESTITUTION: f32 = 0.5;

/// Per-frame simulation parameters.
///
/// # Builder Pattern
/// ```
/// use strand::config::SolverConfig;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(8)
///     .with_gravity(0.8)
///     .with_damping(0.98);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<F: Float> {
    /// Constraint sweeps per step. More sweeps propagate tension further
    /// along the chain, so the rope looks stiffer. Default: 5.
    pub iterations: usize,
    /// Downward (+Y) acceleration. Default: 0.5.
    pub gravity: F,
    /// Multiplier on the implied velocity each step. Values at or above 1.0
    /// add energy. Default: 0.99.
    pub damping: F,
    /// Time step; 1.0 is one frame. Default: 1.0.
    pub dt: F,
    /// Wall bounce factor in [0, 1]. Default: 0.5.
    pub restitution: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 5,
            gravity: F::half(),
            damping: F::from_f32(0.99),
            dt: F::one(),
            restitution: F::from_f32(DEFAULT_RESTITUTION),
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn validate(&self) -> Result<(), RopeError> {
        if self.iterations == 0 {
            return Err(RopeError::InvalidIterations);
        }
        if !self.damping.is_finite() || self.damping < F::zero() {
            return Err(RopeError::InvalidDamping);
        }
        if !self.dt.is_finite() || self.dt <= F::zero() {
            return Err(RopeError::InvalidTimeStep);
        }
        if !(self.restitution >= F::zero() && self.restitution <= F::one()) {
            return Err(RopeError::InvalidRestitution);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction parameters for a `Rope`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RopeConfig<F: Float> {
    /// Number of links; the rope has `segments + 1` particles.
    pub segments: usize,
    pub segment_length: F,
    /// Pin particle 0 in place.
    pub anchor_fixed: bool,
    pub stiffness: F,
    pub particle_radius: F,
    pub particle_mass: F,
    /// Search radius for nearest-particle drags.
    pub drag_radius: F,
    /// Passed through to `RenderFrame`. Default: white.
    pub particle_color: Color,
    /// Passed through to `RenderFrame`. Default: light gray.
    pub rope_color: Color,
}

impl<F: Float> RopeConfig<F> {
    pub fn new(segments: usize, segment_length: F) -> Self {
        RopeConfig {
            segments,
            segment_length,
            anchor_fixed: true,
            stiffness: F::one(),
            particle_radius: F::from_f32(DEFAULT_RADIUS),
            particle_mass: F::one(),
            drag_radius: F::from_f32(DEFAULT_DRAG_RADIUS),
            particle_color: Color::WHITE,
            rope_color: Color::LIGHT_GRAY,
        }
    }

    pub fn with_anchor_fixed(mut self, anchor_fixed: bool) -> Self {
        self.anchor_fixed = anchor_fixed;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_drag_radius(mut self, radius: F) -> Self {
        self.drag_radius = radius;
        self
    }

    pub fn with_colors(mut self, particle_color: Color, rope_color: Color) -> Self {
        self.particle_color = particle_color;
        self.rope_color = rope_color;
        self
    }

    pub fn validate(&self) -> Result<(), RopeError> {
        if self.segments == 0 || self.segments > MAX_SEGMENTS {
            return Err(RopeError::InvalidSegmentCount);
        }
        if !self.segment_length.is_finite() || self.segment_length <= F::zero() {
            return Err(RopeError::InvalidSegmentLength);
        }
        validate_stiffness(self.stiffness)?;
        if !self.particle_mass.is_finite() || self.particle_mass <= F::zero() {
            return Err(RopeError::InvalidMass);
        }
        if !self.particle_radius.is_finite() || self.particle_radius < F::zero() {
            return Err(RopeError::InvalidRadius);
        }
        if !self.drag_radius.is_finite() || self.drag_radius <= F::zero() {
            return Err(RopeError::InvalidRadius);
        }
        Ok(())
    }
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        RopeConfig::new(15, F::from_f32(35.0))
    }
}

pub(crate) fn validate_stiffness<F: Float>(stiffness: F) -> Result<(), RopeError> {
    if stiffness > F::zero() && stiffness <= F::one() {
        Ok(())
    } else {
        Err(RopeError::InvalidStiffness)
    }
}

/// Axis-aligned region particles are kept inside.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    /// `[0, width] x [0, height]`, usually the viewport in world units.
    pub fn new(width: F, height: F) -> Self {
        Bounds { min: Vec2::zero(), max: Vec2::new(width, height) }
    }

    pub fn from_corners(min: Vec2<F>, max: Vec2<F>) -> Self {
        Bounds { min, max }
    }

    /// No walls at all.
    pub fn unbounded() -> Self {
        let inf = F::infinity();
        Bounds { min: Vec2::new(-inf, -inf), max: Vec2::new(inf, inf) }
    }

    pub fn width(&self) -> F {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> F {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: Vec2<F>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Inclusive `[min, max]` range for one tunable parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Range { min, max }
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Ranges the interactive driver clamps user input into.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamRanges<F: Float> {
    pub gravity: Range<F>,
    pub damping: Range<F>,
    pub segments: Range<usize>,
    pub segment_length: Range<F>,
}

impl<F: Float> Default for ParamRanges<F> {
    fn default() -> Self {
        ParamRanges {
            gravity: Range::new(F::from_f32(0.1), F::from_f32(2.5)),
            damping: Range::new(F::from_f32(0.85), F::one()),
            segments: Range::new(2, 5000),
            segment_length: Range::new(F::from_f32(15.0), F::from_f32(187.0)),
        }
    }
}
