use arena_core::{Orientation, Vec3, VehicleState};
use arena_maneuver::{
    reach_point_with_timing_and_velocity, FixOrientation, SteerTowardPoint,
    SteerTowardPointWithTiming,
};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -5000.0f32..5000.0
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), 0.0f32..2000.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn velocity() -> impl Strategy<Value = Vec3> {
    (-2300.0f32..2300.0, -2300.0f32..2300.0, -500.0f32..500.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn car() -> impl Strategy<Value = VehicleState> {
    (
        vec3(),
        velocity(),
        (-1.5f32..1.5, -3.1f32..3.1, -3.1f32..3.1),
        any::<bool>(),
    )
        .prop_map(|(position, velocity, (p, y, r), wheel_contact)| VehicleState {
            position,
            velocity,
            angular_velocity: Vec3::new(p, y, r),
            orientation: Orientation::from_euler(p, y, r),
            wheel_contact,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn steering_stays_in_range(car in car(), target in vec3(), slide in any::<bool>(), boost in any::<bool>()) {
        let cmd = SteerTowardPoint { target, slide, boost }.control(&car);
        prop_assert!(cmd.is_within_limits());
        prop_assert!((-1.0..=1.0).contains(&cmd.steer));
        prop_assert!((-1.0..=1.0).contains(&cmd.throttle));
    }

    #[test]
    fn timed_controllers_stay_in_range(
        car in car(),
        target in vec3(),
        eta in 0.0f32..6.0,
        arrival in 0.0f32..2300.0,
        slide in any::<bool>(),
    ) {
        let timed = SteerTowardPointWithTiming::new(target, eta).with_slide(slide).control(&car);
        prop_assert!(timed.is_within_limits());

        let arrive = reach_point_with_timing_and_velocity(&car, target, eta, arrival, slide);
        prop_assert!(arrive.is_within_limits());
    }

    #[test]
    fn recovery_stays_in_range(car in car(), face in proptest::option::of(vec3())) {
        let cmd = FixOrientation { face, ..FixOrientation::default() }.control(&car);
        prop_assert!(cmd.is_within_limits());
    }
}

#[test]
fn target_to_the_side_at_rest_gets_full_steer_and_throttle() {
    let car = VehicleState::default();
    let cmd = SteerTowardPoint::new(Vec3::new(0.0, 1000.0, 0.0)).control(&car);
    assert!((cmd.steer - 1.0).abs() < 1e-6);
    assert_eq!(cmd.throttle, 1.0);
}
