//! Plain geometry handed to an external renderer.
//!
//! Positions are in world units. Camera transforms are the renderer's
//! business; colours are carried through from `RopeConfig` untouched.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Opaque RGB colour. Physics never reads it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(200, 200, 200);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleGeometry<F: Float> {
    pub pos: Vec2<F>,
    pub radius: F,
    pub fixed: bool,
    pub dragged: bool,
}

/// One rope link, drawn as a line from `a` to `b`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentGeometry<F: Float> {
    pub a: Vec2<F>,
    pub b: Vec2<F>,
}

/// Everything needed to draw one rope, in render order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderFrame<F: Float> {
    pub particles: AllocVec<ParticleGeometry<F>>,
    pub segments: AllocVec<SegmentGeometry<F>>,
    pub particle_color: Color,
    pub rope_color: Color,
}

impl<F: Float> RenderFrame<F> {
    /// Particle centres as `[x0, y0, x1, y1, ...]`.
    pub fn flat_positions(&self) -> AllocVec<F> {
        let mut out = AllocVec::with_capacity(self.particles.len() * 2);
        for p in &self.particles {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    /// Segment endpoints as `[ax0, ay0, bx0, by0, ...]`.
    pub fn flat_segments(&self) -> AllocVec<F> {
        let mut out = AllocVec::with_capacity(self.segments.len() * 4);
        for s in &self.segments {
            out.extend_from_slice(&[s.a.x, s.a.y, s.b.x, s.b.y]);
        }
        out
    }
}
