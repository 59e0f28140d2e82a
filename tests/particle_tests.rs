use strand::{Bounds, Particle, Vec2};

#[test]
fn free_fall_accumulates_gravity() {
    let mut p: Particle<f64> = Particle::new(Vec2::new(0.0, 0.0));

    p.integrate(1.0, 0.5, 1.0);
    assert_eq!(p.pos, Vec2::new(0.0, 0.5));
    assert_eq!(p.prev_pos, Vec2::new(0.0, 0.0));

    // Second step carries the implied velocity plus another gravity kick.
    p.integrate(1.0, 0.5, 1.0);
    assert_eq!(p.pos, Vec2::new(0.0, 1.5));
    assert_eq!(p.prev_pos, Vec2::new(0.0, 0.5));
}

#[test]
fn damping_scales_displacement() {
    let mut p: Particle<f64> = Particle::new(Vec2::new(10.0, 0.0));
    p.prev_pos = Vec2::new(0.0, 0.0);

    p.integrate(1.0, 0.0, 0.5);

    assert_eq!(p.pos, Vec2::new(15.0, 0.0));
    assert_eq!(p.prev_pos, Vec2::new(10.0, 0.0));
}

#[test]
fn fixed_particle_ignores_everything() {
    let mut p: Particle<f32> = Particle::anchored(Vec2::new(-20.0, 5.0));
    p.prev_pos = Vec2::new(-30.0, 0.0);
    let before = p.clone();

    p.integrate(1.0, 2.5, 0.99);
    p.apply_force(Vec2::new(1000.0, 1000.0));
    // Well outside the bounds, but fixed particles are never clamped.
    p.clamp_to_bounds(&Bounds::new(100.0, 100.0), 0.5);

    assert_eq!(p, before);
}

#[test]
fn dragged_particle_skips_integration_but_is_clamped() {
    let mut p: Particle<f64> = Particle::new(Vec2::new(50.0, 50.0));
    p.dragged = true;

    p.integrate(1.0, 0.5, 0.99);
    p.apply_force(Vec2::new(3.0, 3.0));
    assert_eq!(p.pos, Vec2::new(50.0, 50.0));

    p.set_position(Vec2::new(150.0, 50.0));
    p.clamp_to_bounds(&Bounds::new(100.0, 100.0), 0.5);
    assert_eq!(p.pos.x, 95.0);
}

#[test]
fn set_position_keeps_history_for_fling() {
    let mut p: Particle<f64> = Particle::new(Vec2::new(0.0, 0.0));
    p.set_position(Vec2::new(10.0, 0.0));
    assert_eq!(p.prev_pos, Vec2::new(0.0, 0.0));

    // The move is read back as velocity on the next step.
    p.integrate(1.0, 0.0, 1.0);
    assert_eq!(p.pos, Vec2::new(20.0, 0.0));
}

#[test]
fn floor_contact_reverses_and_halves_velocity() {
    let mut p: Particle<f64> = Particle::new(Vec2::new(50.0, 100.0));
    p.prev_pos = Vec2::new(50.0, 90.0);

    p.clamp_to_bounds(&Bounds::new(100.0, 100.0), 0.5);

    assert_eq!(p.pos, Vec2::new(50.0, 95.0));
    assert_eq!(p.prev_pos, Vec2::new(50.0, 97.5));
    assert!(p.velocity_raw().y < 0.0, "should now be moving up");
}

#[test]
fn left_wall_contact_uses_radius() {
    let mut p: Particle<f64> = Particle::new(Vec2::new(-3.0, 50.0)).with_radius(5.0);
    p.prev_pos = Vec2::new(2.0, 50.0);

    p.clamp_to_bounds(&Bounds::new(100.0, 100.0), 0.5);

    assert_eq!(p.pos.x, 5.0);
    assert_eq!(p.prev_pos.x, 6.5);
    assert_eq!(p.pos.y, 50.0);
}

#[test]
fn zero_restitution_stops_on_contact() {
    let mut p: Particle<f64> = Particle::new(Vec2::new(120.0, 50.0)).with_radius(0.0);
    p.prev_pos = Vec2::new(90.0, 50.0);

    p.clamp_to_bounds(&Bounds::new(100.0, 100.0), 0.0);

    assert_eq!(p.pos.x, 100.0);
    assert_eq!(p.velocity_raw().x, 0.0);
}

#[test]
fn apply_force_divides_by_mass() {
    let mut p: Particle<f64> = Particle::new(Vec2::new(1.0, 1.0)).with_mass(2.0);
    p.apply_force(Vec2::new(4.0, -2.0));
    assert_eq!(p.pos, Vec2::new(3.0, 0.0));
    // Impulse only: history is untouched.
    assert_eq!(p.prev_pos, Vec2::new(1.0, 1.0));
}
