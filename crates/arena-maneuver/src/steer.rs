use std::f32::consts::PI;

use arena_core::arena::THROTTLE_MAX_SPEED;
use arena_core::math::{angle_between, flat, project_len, signed_angle_flat, UP};
use arena_core::{ActuationCommand, VehicleState};
use arena_route::Route;
use glam::Vec3;

use crate::turning::turn_radius;

/// Heading error (radians) past which a sliding approach pulls the handbrake.
pub const REQUIRED_SLIDE_ANGLE: f32 = 1.6;
/// Boost is never requested at or above this speed.
const BOOST_SPEED_CAP: f32 = 2000.0;
/// Boost needs the car's up axis within this angle of world up.
const BOOST_MAX_TILT: f32 = PI * 0.3;
/// Sliding is pointless this close to the target.
const MIN_SLIDE_DISTANCE: f32 = 300.0;
/// Inside this share of the squared turning radius the target is reachable by smooth steering.
const INNER_CIRCLE_SHARE: f32 = 0.3;
const CREEP_THROTTLE: f32 = 0.05;
const DEFAULT_ALPHA: f32 = 1.3;
/// Overspeed tolerated before braking.
const BRAKE_BAND: f32 = 75.0;
const MIN_ETA: f32 = 1.0 / 120.0;

/// Steer response to a heading error: `clamp(e + e^3, -1, 1)`.
///
/// Linear near zero for fine corrections, saturating quickly for large errors.
pub fn steer_correction_smooth(angle: f32) -> f32 {
    (angle + angle * angle * angle).clamp(-1.0, 1.0)
}

/// Whether a heading error is small enough, for the distance left, to count as "ahead".
///
/// The tolerance widens as the target gets closer, capped at about 0.42 rad.
pub fn is_heading_towards(angle: f32, distance: f32) -> bool {
    let slack = if distance > 0.0 {
        (300.0 / distance).min(0.4)
    } else {
        0.4
    };
    angle.abs() < 0.02 + slack
}

fn hard_steer(angle: f32) -> f32 {
    if angle > 0.0 {
        1.0
    } else if angle < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn boost_allowed(car: &VehicleState, drifting: bool, angle: f32, distance: f32) -> bool {
    car.wheel_contact
        && !car.on_wall
        && !drifting
        && car.speed() < BOOST_SPEED_CAP
        && is_heading_towards(angle, distance)
        && angle_between(car.orientation.up, UP) < BOOST_MAX_TILT
}

/// Drive toward a point as fast as allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteerTowardPoint {
    pub target: Vec3,
    /// Pull the handbrake for large heading errors.
    pub slide: bool,
    pub boost: bool,
}

impl SteerTowardPoint {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            slide: false,
            boost: false,
        }
    }

    pub fn with_slide(mut self, slide: bool) -> Self {
        self.slide = slide;
        self
    }

    pub fn with_boost(mut self, boost: bool) -> Self {
        self.boost = boost;
        self
    }

    /// Centre of the car's current turning circle on the side of `angle`, or `None` when the
    /// car's speed puts no finite constraint on turning.
    pub fn turning_circle(car: &VehicleState, angle: f32) -> Option<(Vec3, f32)> {
        let radius = turn_radius(car.forward_speed());
        if !(radius.is_finite() && radius > 0.0) {
            return None;
        }
        let side = if angle > 0.0 { 1.0 } else { -1.0 };
        let centre = flat(car.position + car.orientation.right * radius * side);
        Some((centre, radius))
    }

    pub fn control(&self, car: &VehicleState) -> ActuationCommand {
        let car_to_point = self.target - car.position;
        let angle = signed_angle_flat(car.orientation.front, car_to_point);

        let mut cmd = ActuationCommand::default();
        let mut smooth = true;
        if self.slide && angle.abs() > REQUIRED_SLIDE_ANGLE {
            cmd.drift = true;
            smooth = false;
        }

        // A target inside the turning circle cannot be reached by steering alone: oversteer
        // and creep until it is well inside, where smooth steering works again.
        let mut too_close = false;
        if let Some((centre, radius)) = Self::turning_circle(car, angle) {
            let d2 = flat(self.target).distance_squared(centre);
            if d2 < radius * radius {
                too_close = true;
                smooth = d2 < radius * radius * INNER_CIRCLE_SHARE;
            }
        }

        cmd.steer = if smooth {
            steer_correction_smooth(angle)
        } else {
            hard_steer(angle)
        };
        cmd.throttle = if too_close { CREEP_THROTTLE } else { 1.0 };
        cmd.boost = self.boost && boost_allowed(car, cmd.drift, angle, car_to_point.length());
        cmd
    }
}

/// Drive toward a point, regulating speed to arrive after `eta` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteerTowardPointWithTiming {
    pub target: Vec3,
    pub eta: f32,
    pub slide: bool,
    /// Blend between current speed (`0`) and the average speed needed (`1`); values above one
    /// overshoot to converge faster.
    pub alpha: f32,
}

impl SteerTowardPointWithTiming {
    pub fn new(target: Vec3, eta: f32) -> Self {
        Self {
            target,
            eta,
            slide: false,
            alpha: DEFAULT_ALPHA,
        }
    }

    pub fn with_slide(mut self, slide: bool) -> Self {
        self.slide = slide;
        self
    }

    /// Forward speed this controller aims for right now.
    pub fn target_speed(&self, car: &VehicleState) -> f32 {
        let car_to_point = self.target - car.position;
        let speed = project_len(car.velocity, car_to_point);
        let average = car_to_point.length() / self.eta.max(MIN_ETA);
        (1.0 - self.alpha) * speed + self.alpha * average
    }

    pub fn control(&self, car: &VehicleState) -> ActuationCommand {
        let car_to_point = self.target - car.position;
        let dist = car_to_point.length();
        let angle = signed_angle_flat(car.orientation.front, car_to_point);

        let mut cmd = ActuationCommand::default();
        let sliding = self.slide && dist > MIN_SLIDE_DISTANCE && angle.abs() > REQUIRED_SLIDE_ANGLE;
        cmd.drift = sliding;
        cmd.steer = if sliding {
            hard_steer(angle)
        } else {
            steer_correction_smooth(angle)
        };

        let speed = project_len(car.velocity, car_to_point);
        let target = self.target_speed(car);
        if speed < target {
            cmd.throttle = 1.0;
            cmd.boost = target > THROTTLE_MAX_SPEED && boost_allowed(car, cmd.drift, angle, dist);
        } else if speed - target > BRAKE_BAND {
            cmd.throttle = -1.0;
        }
        cmd
    }
}

/// Drive to `target` so as to arrive after `eta` seconds moving at `arrival_speed`.
///
/// Throttle comes from the acceleration a constant-jerk profile needs now, normalised by the
/// throttle's remaining headroom; boost is requested when that exceeds full throttle. Large
/// heading errors scale the demand up so the car commits to the turn.
pub fn reach_point_with_timing_and_velocity(
    car: &VehicleState,
    target: Vec3,
    eta: f32,
    arrival_speed: f32,
    slide: bool,
) -> ActuationCommand {
    let car_to_point = flat(target - car.position);
    let dist = car_to_point.length();
    let angle = signed_angle_flat(car.orientation.front, car_to_point);

    let mut cmd = ActuationCommand::default();
    let sliding = slide && dist > MIN_SLIDE_DISTANCE && angle.abs() > REQUIRED_SLIDE_ANGLE;
    cmd.drift = sliding;
    cmd.steer = if sliding {
        hard_steer(angle)
    } else {
        steer_correction_smooth(angle)
    };

    let eta = eta.max(MIN_ETA);
    let speed = project_len(car.velocity, car_to_point);
    let mut accel = -2.0 * (2.0 * speed * eta + eta * arrival_speed - 3.0 * dist) / (eta * eta);
    if angle.abs() > 1.0 {
        accel *= angle * angle;
    }
    let force = accel / (THROTTLE_MAX_SPEED - speed).max(1.0);

    cmd.throttle = force.clamp(-1.0, 1.0);
    cmd.boost = force > 1.0 && boost_allowed(car, cmd.drift, angle, dist);
    cmd
}

/// Drive toward the route's next waypoint, boosting when sensible.
pub fn follow_route(car: &VehicleState, route: &Route) -> ActuationCommand {
    SteerTowardPoint::new(route.first())
        .with_boost(true)
        .control(car)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Orientation;

    fn car_at_rest() -> VehicleState {
        VehicleState::default()
    }

    #[test]
    fn smooth_curve_is_odd_and_saturates() {
        assert_eq!(steer_correction_smooth(0.0), 0.0);
        assert!((steer_correction_smooth(0.1) - 0.101).abs() < 1e-6);
        assert_eq!(steer_correction_smooth(-0.1), -steer_correction_smooth(0.1));
        assert_eq!(steer_correction_smooth(2.0), 1.0);
        assert_eq!(steer_correction_smooth(-2.0), -1.0);
    }

    #[test]
    fn heading_tolerance_widens_when_close() {
        assert!(is_heading_towards(0.3, 1000.0));
        assert!(!is_heading_towards(0.3, 5000.0));
        assert!(is_heading_towards(0.0, 0.0));
    }

    #[test]
    fn target_to_the_right_steers_right_at_full_throttle() {
        let cmd = SteerTowardPoint::new(Vec3::new(0.0, 1000.0, 0.0)).control(&car_at_rest());
        assert!((cmd.steer - 1.0).abs() < 1e-6);
        assert_eq!(cmd.throttle, 1.0);
        assert!(!cmd.drift);
        assert!(!cmd.boost);
    }

    #[test]
    fn slide_pulls_handbrake_for_targets_behind() {
        let cmd = SteerTowardPoint::new(Vec3::new(-1000.0, -10.0, 0.0))
            .with_slide(true)
            .control(&car_at_rest());
        assert!(cmd.drift);
        assert_eq!(cmd.steer, -1.0);
    }

    #[test]
    fn boost_only_when_heading_at_target() {
        let ahead = SteerTowardPoint::new(Vec3::new(3000.0, 0.0, 0.0)).with_boost(true);
        assert!(ahead.control(&car_at_rest()).boost);

        let aside = SteerTowardPoint::new(Vec3::new(0.0, 3000.0, 0.0)).with_boost(true);
        assert!(!aside.control(&car_at_rest()).boost);

        let mut tilted = car_at_rest();
        tilted.orientation = Orientation::from_euler(0.0, 0.0, 1.5);
        assert!(!ahead.control(&tilted).boost);

        let mut on_wall = car_at_rest();
        on_wall.on_wall = true;
        assert!(!ahead.control(&on_wall).boost);
    }

    #[test]
    fn target_inside_turning_circle_creeps_with_hard_steer() {
        let mut car = car_at_rest();
        car.velocity = Vec3::new(1000.0, 0.0, 0.0);
        let r = turn_radius(1000.0);
        // Inside the right-hand turning circle but outside its inner share.
        let target = Vec3::new(0.0, r * 0.3, 0.0);
        let circle = SteerTowardPoint::turning_circle(&car, 1.0);
        assert!(circle.is_some());

        let cmd = SteerTowardPoint::new(target).control(&car);
        assert_eq!(cmd.throttle, CREEP_THROTTLE);
        assert_eq!(cmd.steer, 1.0);
    }

    #[test]
    fn timed_approach_brakes_when_early() {
        let mut car = car_at_rest();
        car.velocity = Vec3::new(1400.0, 0.0, 0.0);
        let cmd = SteerTowardPointWithTiming::new(Vec3::new(1000.0, 0.0, 0.0), 5.0).control(&car);
        assert_eq!(cmd.throttle, -1.0);
        assert!(!cmd.boost);
    }

    #[test]
    fn timed_approach_boosts_when_late() {
        let cmd = SteerTowardPointWithTiming::new(Vec3::new(3000.0, 0.0, 0.0), 1.0)
            .control(&car_at_rest());
        assert_eq!(cmd.throttle, 1.0);
        assert!(cmd.boost);
    }

    #[test]
    fn timed_approach_coasts_inside_band() {
        let mut car = car_at_rest();
        car.velocity = Vec3::new(500.0, 0.0, 0.0);
        // target speed ~469, a little under the current 500
        let cmd = SteerTowardPointWithTiming::new(Vec3::new(1000.0, 0.0, 0.0), 2.1).control(&car);
        assert_eq!(cmd.throttle, 0.0);
    }

    #[test]
    fn arrival_speed_controller_pushes_when_far_and_brakes_when_close() {
        let far = reach_point_with_timing_and_velocity(
            &car_at_rest(),
            Vec3::new(2000.0, 0.0, 0.0),
            1.0,
            0.0,
            false,
        );
        assert_eq!(far.throttle, 1.0);
        assert!(far.boost);

        let mut fast = car_at_rest();
        fast.velocity = Vec3::new(1200.0, 0.0, 0.0);
        let close = reach_point_with_timing_and_velocity(
            &fast,
            Vec3::new(300.0, 0.0, 0.0),
            1.0,
            0.0,
            false,
        );
        assert_eq!(close.throttle, -1.0);
    }

    #[test]
    fn follow_route_heads_for_first_waypoint() {
        let route = Route::new(
            Vec3::ZERO,
            vec![Vec3::new(0.0, -2000.0, 0.0), Vec3::new(3000.0, 0.0, 0.0)],
            true,
        );
        let cmd = follow_route(&car_at_rest(), &route);
        assert_eq!(cmd.steer, -1.0);
    }
}
