use approx::assert_abs_diff_eq;
use ballpit::{Solver, SolverConfig, Vec2};

const CENTER: Vec2<f64> = Vec2 { x: 600.0, y: 400.0 };

fn weightless() -> SolverConfig<f64> {
    SolverConfig::new().with_gravity(Vec2::zero())
}

#[test]
fn escaped_particle_lands_on_inner_circle() {
    let mut solver = Solver::new(weightless()).unwrap();
    let id = solver.spawn(Vec2::new(1000.0, 700.0), 15.0).unwrap();

    assert_eq!(solver.apply_boundary(), 1);

    let pos = solver.particle(id).unwrap().position;
    assert_abs_diff_eq!(pos.distance(CENTER), 285.0, epsilon = 1e-9);
    // Still on the ray from the center through the spawn point (direction 4:3).
    let dir = (pos - CENTER).normalize();
    assert_abs_diff_eq!(dir.x, 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(dir.y, 0.6, epsilon = 1e-12);
}

#[test]
fn particle_on_the_limit_is_untouched() {
    let mut solver = Solver::new(weightless()).unwrap();
    let id = solver.spawn(Vec2::new(885.0, 400.0), 15.0).unwrap();
    assert_eq!(solver.apply_boundary(), 0);
    assert_eq!(solver.particle(id).unwrap().position, Vec2::new(885.0, 400.0));
}

#[test]
fn correction_becomes_inward_velocity() {
    let mut solver = Solver::new(weightless()).unwrap();
    let id = solver.spawn(Vec2::new(1000.0, 400.0), 15.0).unwrap();

    solver.advance(0.01);

    let p = solver.state(id).unwrap();
    assert_abs_diff_eq!(p.prev_pos.x, 885.0, epsilon = 1e-9);
    assert!(p.displacement().x < 0.0);
    assert!(p.pos.distance(CENTER) <= 285.0);
}

#[test]
fn custom_boundary_is_respected() {
    let config = weightless().with_boundary(Vec2::new(0.0, 0.0), 50.0);
    let mut solver = Solver::new(config).unwrap();
    let id = solver.spawn(Vec2::new(0.0, -80.0), 5.0).unwrap();

    solver.apply_boundary();

    assert_abs_diff_eq!(solver.particle(id).unwrap().position.y, -45.0, epsilon = 1e-9);
    assert!(solver.boundary().contains(solver.state(id).unwrap()));
}

#[test]
fn oversized_particle_at_center_does_not_panic() {
    let mut solver = Solver::new(weightless()).unwrap();
    let id = solver.spawn(CENTER, 400.0).unwrap();
    solver.advance(0.01);
    assert_eq!(solver.particle(id).unwrap().position, CENTER);
}

#[test]
fn oversized_particle_off_center_settles_at_center() {
    let mut solver = Solver::new(weightless()).unwrap();
    let id = solver.spawn((700.0, 400.0), 400.0).unwrap();

    for _ in 0..6 {
        solver.advance(0.01);
    }

    let p = solver.state(id).unwrap();
    assert_eq!(p.pos, CENTER);
    assert_eq!(p.displacement(), Vec2::zero());
}
