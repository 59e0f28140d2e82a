//! Verlet rope simulation with iterative distance constraints.
//!
//! `strand` simulates a single chain of point masses linked by distance
//! constraints. Particles are integrated with position Verlet (velocity is
//! implied by the last displacement), links are relaxed Gauss–Seidel style a
//! configurable number of times per frame, and particles are kept inside an
//! axis-aligned region with a lossy bounce. Any particle can be grabbed and
//! moved while the rest of the rope keeps simulating.
//!
//! # Features
//!
//! - **Verlet integration**: gravity and damping with no explicit velocity
//! - **Iterative relaxation**: more sweeps per frame give a stiffer rope
//! - **Interaction**: nearest-particle picking, drag and release
//! - **Render data**: plain geometry snapshots, no drawing code
//! - **Driver**: headless `Simulation` with parameter ranges and rebuilds
//! - **Observable**: monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use strand::{Bounds, NoOpStepObserver, Rope, RopeConfig, SolverConfig, Vec2};
//!
//! let mut rope: Rope<f32> = Rope::new(Vec2::new(100.0, 50.0), &RopeConfig::new(10, 20.0)).unwrap();
//! let solver = SolverConfig::new();
//! let bounds = Bounds::new(800.0, 600.0);
//! for _ in 0..60 {
//!     rope.step(&solver, &bounds, &mut NoOpStepObserver);
//! }
//! assert_eq!(rope.particle(0).unwrap().pos, Vec2::new(100.0, 50.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod rope;
pub mod render;
pub mod camera;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::DistanceConstraint;
pub use rope::Rope;
pub use render::{Color, RenderFrame, ParticleGeometry, SegmentGeometry};
pub use camera::Camera;
pub use simulation::Simulation;
pub use config::{Bounds, ParamRanges, Range, RopeConfig, SolverConfig};
pub use observer::{StepObserver, NoOpStepObserver, StepCounter};
pub use error::RopeError;
