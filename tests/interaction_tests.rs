use strand::{Bounds, Color, NoOpStepObserver, Rope, RopeConfig, SolverConfig, Vec2};

fn five_particle_rope() -> Rope<f64> {
    // Particles at (0,0), (50,0), (100,0), (150,0), (200,0); index 0 fixed.
    Rope::new(Vec2::new(0.0, 0.0), &RopeConfig::new(4, 50.0)).unwrap()
}

#[test]
fn nearest_draggable_picks_closest() {
    let rope = five_particle_rope();
    assert_eq!(rope.find_nearest_draggable(Vec2::new(102.0, 0.0), 30.0), Some(2));
    assert_eq!(rope.find_nearest_draggable(Vec2::new(140.0, 10.0), 30.0), Some(3));
}

#[test]
fn nearest_draggable_respects_radius() {
    let rope = five_particle_rope();
    // Closest is index 2 at distance 25; exactly on the radius does not count.
    assert_eq!(rope.find_nearest_draggable(Vec2::new(125.0, 0.0), 25.0), None);
    assert_eq!(rope.find_nearest_draggable(Vec2::new(125.0, 0.0), 25.5), Some(2));
    assert_eq!(rope.find_nearest_draggable(Vec2::new(100.0, 400.0), 50.0), None);
}

#[test]
fn nearest_draggable_breaks_ties_by_index() {
    let rope = five_particle_rope();
    assert_eq!(rope.find_nearest_draggable(Vec2::new(75.0, 0.0), 30.0), Some(1));
}

#[test]
fn fixed_particles_are_never_picked() {
    let rope = five_particle_rope();
    // Right on top of the anchor: the next particle is too far away.
    assert_eq!(rope.find_nearest_draggable(Vec2::new(0.0, 0.0), 30.0), None);
    assert_eq!(rope.particle_under(Vec2::new(0.0, 0.0), 30.0), None);

    let mut all_fixed = five_particle_rope();
    for i in 0..all_fixed.len() {
        all_fixed.particle_mut(i).unwrap().fixed = true;
    }
    assert_eq!(all_fixed.find_nearest_draggable(Vec2::new(100.0, 0.0), 1000.0), None);
}

#[test]
fn particle_under_returns_first_hit() {
    let rope = five_particle_rope();
    // Both 1 and 2 are within 60; the hit-test takes the lower index even
    // though 2 is closer.
    assert_eq!(rope.particle_under(Vec2::new(90.0, 0.0), 60.0), Some(1));
    assert_eq!(rope.find_nearest_draggable(Vec2::new(90.0, 0.0), 60.0), Some(2));
}

#[test]
fn drag_by_index_moves_only_that_particle() {
    let mut rope = five_particle_rope();
    let before = rope.positions();

    assert_eq!(rope.drag_to(Vec2::new(500.0, 500.0), Some(4)), Some(4));

    let after = rope.positions();
    assert_eq!(after[4], Vec2::new(500.0, 500.0));
    assert_eq!(&after[..4], &before[..4]);
    // The caller owns the dragged flag.
    assert!(!rope.particle(4).unwrap().dragged);
    // History is untouched so the rope can be flung.
    assert_eq!(rope.particle(4).unwrap().prev_pos, Vec2::new(200.0, 0.0));
}

#[test]
fn drag_with_bad_index_is_a_no_op() {
    let mut rope = five_particle_rope();
    let before = rope.positions();

    assert_eq!(rope.drag_to(Vec2::new(101.0, 0.0), Some(99)), None);
    assert_eq!(rope.positions(), before);
    assert!(!rope.set_dragged(99, true));
}

#[test]
fn drag_without_index_uses_nearest_within_default_radius() {
    let mut rope = five_particle_rope();
    assert_eq!(rope.drag_radius(), 50.0);

    assert_eq!(rope.drag_to(Vec2::new(160.0, 40.0), None), Some(3));
    assert_eq!(rope.particle(3).unwrap().pos, Vec2::new(160.0, 40.0));

    let before = rope.positions();
    assert_eq!(rope.drag_to(Vec2::new(100.0, 300.0), None), None);
    assert_eq!(rope.positions(), before);
}

#[test]
fn drag_radius_is_configurable() {
    let config = RopeConfig::new(4, 50.0).with_drag_radius(10.0);
    let mut rope: Rope<f64> = Rope::new(Vec2::new(0.0, 0.0), &config).unwrap();

    assert_eq!(rope.drag_to(Vec2::new(100.0, 20.0), None), None);
    assert_eq!(rope.drag_to(Vec2::new(100.0, 5.0), None), Some(2));
}

#[test]
fn drag_overrides_physics_and_pulls_neighbour() {
    let mut rope = five_particle_rope();
    let target = Vec2::new(500.0, 500.0);

    rope.drag_to(target, Some(4));
    assert!(rope.set_dragged(4, true));
    let neighbour_before = rope.particle(3).unwrap().pos.distance(target);

    let solver = SolverConfig::new().with_gravity(0.5).with_damping(0.99).with_iterations(5);
    rope.step(&solver, &Bounds::new(1600.0, 900.0), &mut NoOpStepObserver);

    assert_eq!(rope.particle(4).unwrap().pos, target);
    let neighbour_after = rope.particle(3).unwrap().pos.distance(target);
    assert!(
        neighbour_after < neighbour_before,
        "particle 3 should be pulled toward the dragged end: {} -> {}",
        neighbour_before,
        neighbour_after,
    );
}

#[test]
fn release_all_is_idempotent() {
    let mut rope = five_particle_rope();
    rope.set_dragged(2, true);
    rope.set_dragged(4, true);
    rope.drag_to(Vec2::new(300.0, 10.0), Some(4));

    rope.release_all();
    let once = rope.particles().to_vec();
    rope.release_all();
    let twice = rope.particles().to_vec();

    assert_eq!(once, twice);
    assert!(twice.iter().all(|p| !p.dragged));
    assert_eq!(twice[4].pos, Vec2::new(300.0, 10.0));
}

#[test]
fn released_particle_rejoins_simulation() {
    let mut rope = five_particle_rope();
    rope.set_dragged(4, true);
    rope.drag_to(Vec2::new(200.0, 100.0), Some(4));

    let solver = SolverConfig::new();
    let bounds = Bounds::new(1600.0, 900.0);
    rope.step(&solver, &bounds, &mut NoOpStepObserver);
    assert_eq!(rope.particle(4).unwrap().pos, Vec2::new(200.0, 100.0));

    rope.release_all();
    rope.step(&solver, &bounds, &mut NoOpStepObserver);
    assert_ne!(rope.particle(4).unwrap().pos, Vec2::new(200.0, 100.0));
}

#[test]
fn render_frame_mirrors_rope_state() {
    let mut rope = five_particle_rope();
    rope.set_dragged(3, true);

    let frame = rope.render_frame();
    assert_eq!(frame.particles.len(), 5);
    assert_eq!(frame.segments.len(), 4);
    assert!(frame.particles[0].fixed);
    assert!(frame.particles[3].dragged);
    assert_eq!(frame.particles[2].radius, 5.0);
    assert_eq!(frame.segments[1].a, Vec2::new(50.0, 0.0));
    assert_eq!(frame.segments[1].b, Vec2::new(100.0, 0.0));

    assert_eq!(frame.flat_positions()[..4], [0.0, 0.0, 50.0, 0.0]);
    assert_eq!(frame.flat_segments()[4..8], [50.0, 0.0, 100.0, 0.0]);
    assert_eq!(frame.particle_color, Color::WHITE);
    assert_eq!(frame.rope_color, Color::LIGHT_GRAY);
}

#[test]
fn colours_pass_through_without_affecting_physics() {
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);
    let config = RopeConfig::new(4, 50.0).with_colors(red, blue);
    let mut coloured: Rope<f64> = Rope::new(Vec2::new(0.0, 0.0), &config).unwrap();
    let mut plain = five_particle_rope();

    let frame = coloured.render_frame();
    assert_eq!(frame.particle_color, red);
    assert_eq!(frame.rope_color, blue);
    assert_eq!(coloured.rope_color(), blue);

    let solver = SolverConfig::new();
    let bounds = Bounds::new(1600.0, 900.0);
    for _ in 0..20 {
        coloured.step(&solver, &bounds, &mut NoOpStepObserver);
        plain.step(&solver, &bounds, &mut NoOpStepObserver);
    }
    assert_eq!(coloured.positions(), plain.positions());
}
