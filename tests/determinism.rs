use strand::{Bounds, NoOpStepObserver, Rope, RopeConfig, SolverConfig, Vec2};

#[test]
fn rope_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut rope: Rope<f32> = Rope::new(Vec2::new(100.0, 40.0), &RopeConfig::new(25, 18.0)).unwrap();
        let solver = SolverConfig::new().with_gravity(0.8).with_iterations(8);
        let bounds = Bounds::new(640.0, 480.0);
        for frame in 0..120 {
            if frame == 30 {
                rope.set_dragged(25, true);
            }
            if (30..60).contains(&frame) {
                rope.drag_to(Vec2::new(300.0 + frame as f32, 200.0), Some(25));
            }
            if frame == 60 {
                rope.release_all();
            }
            rope.step(&solver, &bounds, &mut NoOpStepObserver);
        }
        rope.positions()
    }).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
