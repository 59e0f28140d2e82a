use strand::{
    Bounds, Camera, NoOpStepObserver, RopeConfig, Simulation, SolverConfig, Vec2,
};
use wasm_bindgen::prelude::*;

/// Click tolerance in screen pixels.
const HIT_RADIUS_PX: f32 = 25.0;

// ---- Rope Demo ----

#[wasm_bindgen]
pub struct RopeDemo {
    sim: Simulation<f32>,
    camera: Camera<f32>,
}

#[wasm_bindgen]
impl RopeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<RopeDemo, JsValue> {
        let sim = Simulation::new(
            Vec2::new(0.0, 0.0),
            RopeConfig::default(),
            SolverConfig::new(),
            Bounds::new(width, height),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(RopeDemo { sim, camera: Camera::new(width, height) })
    }

    pub fn update(&mut self) {
        self.sim.frame(&mut NoOpStepObserver);
    }

    pub fn toggle_pause(&mut self) {
        self.sim.toggle_pause();
    }

    pub fn is_paused(&self) -> bool {
        self.sim.is_paused()
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.sim.reset().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.sim.set_gravity(gravity);
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.sim.set_damping(damping);
    }

    pub fn set_segments(&mut self, segments: usize) -> Result<(), JsValue> {
        self.sim
            .set_segments(segments)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_segment_length(&mut self, length: f32) -> Result<(), JsValue> {
        self.sim
            .set_segment_length(length)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Mouse down at screen coordinates. Returns true if a particle was grabbed.
    pub fn press(&mut self, sx: f32, sy: f32) -> bool {
        let world = self.camera.screen_to_world(Vec2::new(sx, sy));
        let radius = self.camera.screen_to_world_distance(HIT_RADIUS_PX);
        self.sim.press(world, radius).is_some()
    }

    pub fn drag(&mut self, sx: f32, sy: f32) {
        let world = self.camera.screen_to_world(Vec2::new(sx, sy));
        self.sim.drag(world);
    }

    pub fn release(&mut self) {
        self.sim.release();
    }

    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.camera.pan_by_screen(Vec2::new(dx, dy));
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    pub fn zoom(&self) -> f32 {
        self.camera.zoom()
    }

    /// Returns flat [x0, y0, x1, y1, ...] particle centres in screen space
    pub fn positions(&self) -> Vec<f32> {
        let rope = self.sim.rope();
        let mut out = Vec::with_capacity(rope.len() * 2);
        for p in rope.particles() {
            let s = self.camera.world_to_screen(p.pos);
            out.push(s.x);
            out.push(s.y);
        }
        out
    }

    /// Index of the particle being dragged, or -1.
    pub fn held(&self) -> i32 {
        self.sim.held().map_or(-1, |i| i as i32)
    }

    pub fn particle_count(&self) -> usize {
        self.sim.rope().len()
    }
}
