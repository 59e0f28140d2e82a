//! World/screen coordinate mapping with pan and zoom.

use crate::float::Float;
use crate::vec::Vec2;

const ZOOM_STEP: f32 = 1.2;

/// A 2D camera centred on `center`. The viewport centre on screen shows
/// `center` in world space; `zoom` is screen pixels per world unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera<F: Float> {
    pub center: Vec2<F>,
    zoom: F,
    min_zoom: F,
    max_zoom: F,
    viewport: Vec2<F>,
}

impl<F: Float> Camera<F> {
    /// Camera at the world origin, zoom 1, zoom limits 0.2..=3.0.
    pub fn new(viewport_width: F, viewport_height: F) -> Self {
        Camera {
            center: Vec2::zero(),
            zoom: F::one(),
            min_zoom: F::from_f32(0.2),
            max_zoom: F::from_f32(3.0),
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    pub fn with_zoom_limits(mut self, min_zoom: F, max_zoom: F) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
        self
    }

    pub fn zoom(&self) -> F {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: F) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn set_viewport(&mut self, width: F, height: F) {
        self.viewport = Vec2::new(width, height);
    }

    fn half_viewport(&self) -> Vec2<F> {
        self.viewport.scale(F::half())
    }

    pub fn world_to_screen(&self, world: Vec2<F>) -> Vec2<F> {
        (world - self.center).scale(self.zoom) + self.half_viewport()
    }

    pub fn screen_to_world(&self, screen: Vec2<F>) -> Vec2<F> {
        (screen - self.half_viewport()).scale(F::one() / self.zoom) + self.center
    }

    /// Convert a screen-space distance (e.g. a click tolerance in pixels)
    /// into world units.
    pub fn screen_to_world_distance(&self, distance: F) -> F {
        distance / self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * F::from_f32(ZOOM_STEP));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / F::from_f32(ZOOM_STEP));
    }

    /// Drag the view by a mouse movement measured in screen pixels. The
    /// world follows the cursor, so the centre moves the opposite way.
    pub fn pan_by_screen(&mut self, delta: Vec2<F>) {
        self.center -= delta.scale(F::one() / self.zoom);
    }

    pub fn reset(&mut self) {
        self.center = Vec2::zero();
        self.zoom = F::one().clamp(self.min_zoom, self.max_zoom);
    }
}
