use arena_core::{Target, Vec3, VehicleState, WorldSnapshot};
use arena_maneuver::{DodgeControl, DodgePhase, FixOrientation};

fn world_at(t: f32, grounded: bool) -> WorldSnapshot {
    WorldSnapshot {
        self_vehicle: VehicleState {
            wheel_contact: grounded,
            ..Default::default()
        },
        elapsed_time: t,
        ..Default::default()
    }
}

#[test]
fn phases_follow_the_clock() {
    let mut dodge = DodgeControl::default();
    assert!(dodge.begin(&world_at(10.0, true), None));

    let jumping = dodge.control(&world_at(10.05, false));
    assert_eq!(dodge.phase(10.05), DodgePhase::Jumping);
    assert!(jumping.jump);
    assert_eq!(jumping.throttle, 1.0);

    let second = dodge.control(&world_at(10.15, false));
    assert!(second.jump);
    assert_eq!(second.pitch, -1.0);

    // Past the second jump the stick stays on the aim with jump released.
    let unjumping = dodge.control(&world_at(10.20, false));
    assert_eq!(dodge.phase(10.20), DodgePhase::Unjumping);
    assert!(!unjumping.jump);
    assert_eq!(unjumping.pitch, -1.0);
    assert_eq!(unjumping.yaw, 0.0);

    let air = world_at(11.1, false);
    let done = dodge.control(&air);
    assert!(!dodge.is_dodging());
    assert_eq!(dodge.phase(11.1), DodgePhase::Ready);
    assert_eq!(done, FixOrientation::default().control(&air.self_vehicle));
}

#[test]
fn aiming_points_the_stick_at_the_live_target() {
    let mut dodge = DodgeControl::default();
    let mut world = world_at(0.0, true);
    world.ball.position = Vec3::new(0.0, 500.0, 93.0);
    assert!(dodge.begin(&world, Some(Target::Ball)));

    world.self_vehicle.wheel_contact = false;
    world.elapsed_time = 0.11;
    let cmd = dodge.control(&world);
    assert!(!cmd.jump);
    assert!(cmd.pitch.abs() < 1e-6);
    assert!((cmd.yaw - 1.0).abs() < 1e-6);
}

#[test]
fn begin_is_refused_mid_air_mid_dodge_and_during_cooldown() {
    let mut dodge = DodgeControl::default();
    assert!(!dodge.begin(&world_at(0.0, false), None));
    assert!(!dodge.is_dodging());

    assert!(dodge.begin(&world_at(1.0, true), None));
    assert!(!dodge.begin(&world_at(1.01, true), None));

    // Touching down after the aim phase ends the dodge early.
    dodge.control(&world_at(1.2, true));
    assert!(!dodge.is_dodging());

    assert!(!dodge.can_dodge(&world_at(1.5, true)));
    assert!(dodge.can_dodge(&world_at(1.8, true)));
}

#[test]
fn reset_abandons_the_dodge() {
    let mut dodge = DodgeControl::default();
    assert!(dodge.begin(&world_at(3.0, true), None));
    dodge.reset();
    assert!(!dodge.is_dodging());
    assert!(dodge.can_dodge(&world_at(3.0, true)));
}
