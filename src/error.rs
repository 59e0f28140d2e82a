//! Error types for rope construction and configuration.

use core::fmt;

use crate::config::MAX_SEGMENTS;

/// Configuration and construction errors.
///
/// The per-frame path never produces these; they signal a caller bug at
/// build time.
#[derive(Debug, Clone, PartialEq)]
pub enum RopeError {
    /// Segment count is zero or above `MAX_SEGMENTS`.
    InvalidSegmentCount,
    /// Segment length must be positive and finite.
    InvalidSegmentLength,
    /// Stiffness must be in (0, 1].
    InvalidStiffness,
    /// Mass must be positive and finite.
    InvalidMass,
    /// Particle radius and drag radius must be non-negative and finite.
    InvalidRadius,
    /// At least one constraint iteration per step.
    InvalidIterations,
    /// Damping must be finite and non-negative.
    InvalidDamping,
    /// Time step must be positive and finite.
    InvalidTimeStep,
    /// Restitution must be in [0, 1].
    InvalidRestitution,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for RopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RopeError::InvalidSegmentCount => {
                write!(f, "segment count must be between 1 and {}", MAX_SEGMENTS)
            }
            RopeError::InvalidSegmentLength => write!(f, "segment length must be positive and finite"),
            RopeError::InvalidStiffness => write!(f, "stiffness must be in (0, 1]"),
            RopeError::InvalidMass => write!(f, "mass must be positive and finite"),
            RopeError::InvalidRadius => write!(f, "radius must be non-negative and finite"),
            RopeError::InvalidIterations => write!(f, "at least one constraint iteration is required"),
            RopeError::InvalidDamping => write!(f, "damping must be finite and non-negative"),
            RopeError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
            RopeError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            RopeError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
