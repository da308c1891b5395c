use arena_core::math::{flat, signed_angle_flat, UP};
use arena_core::{ActuationCommand, VehicleState};
use glam::Vec3;

/// Air-roll controller that brings the car back wheels-down.
///
/// Pitch and roll are driven toward zero and yaw toward facing `face`, each by an independent
/// proportional-derivative corrector with a cubic term. The yaw output is scaled by how upright
/// the car already is, so it does not fight the pitch/roll recovery while upside down.
///
/// Angular velocity is read with the same handedness as the steering inputs: nose-up rate is
/// `-w.right`, right-roll rate is `-w.front` and right-yaw rate is `w.up`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixOrientation {
    /// Point to face once upright; `None` faces along the flattened velocity.
    pub face: Option<Vec3>,
    /// Proportional gain on each angle error.
    pub strength: f32,
    /// Derivative gain on each angular rate.
    pub damping: f32,
}

impl Default for FixOrientation {
    fn default() -> Self {
        Self {
            face: None,
            strength: 0.5,
            damping: 0.15,
        }
    }
}

impl FixOrientation {
    pub fn facing(point: Vec3) -> Self {
        Self {
            face: Some(point),
            ..Self::default()
        }
    }

    fn correct(&self, error: f32, rate: f32) -> f32 {
        let e = error * self.strength;
        (e + e * e * e - self.damping * rate).clamp(-1.0, 1.0)
    }

    /// Heading error toward the facing target, `0.0` when there is nothing to face.
    pub fn yaw_error(&self, car: &VehicleState) -> f32 {
        let dir = match self.face {
            Some(p) => flat(p - car.position),
            None => flat(car.velocity),
        };
        signed_angle_flat(car.orientation.front, dir)
    }

    pub fn control(&self, car: &VehicleState) -> ActuationCommand {
        let o = &car.orientation;
        let w = car.angular_velocity;

        let pitch_rate = -w.dot(o.right);
        let roll_rate = -w.dot(o.front);
        let yaw_rate = w.dot(o.up);

        let upright = o.up.dot(UP).clamp(0.0, 1.0);

        ActuationCommand {
            pitch: self.correct(-o.pitch(), pitch_rate),
            roll: self.correct(-o.roll(), roll_rate),
            yaw: self.correct(self.yaw_error(car), yaw_rate) * upright,
            ..ActuationCommand::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Orientation;

    #[test]
    fn level_and_still_needs_no_input() {
        let cmd = FixOrientation::default().control(&VehicleState::default());
        assert_eq!(cmd, ActuationCommand::default());
    }

    #[test]
    fn nose_up_pitches_down_and_right_roll_rolls_left() {
        let car = VehicleState {
            orientation: Orientation::from_euler(0.6, 0.0, 0.4),
            wheel_contact: false,
            ..Default::default()
        };
        let cmd = FixOrientation::default().control(&car);
        assert!(cmd.pitch < 0.0);
        assert!(cmd.roll < 0.0);
    }

    #[test]
    fn rising_nose_is_damped() {
        let car = VehicleState {
            angular_velocity: -Vec3::Y * 3.0,
            ..Default::default()
        };
        let cmd = FixOrientation::default().control(&car);
        assert!(cmd.pitch < 0.0);
    }

    #[test]
    fn yaw_is_suppressed_upside_down() {
        let face = Vec3::new(0.0, 2000.0, 0.0);
        let upright = VehicleState::default();
        assert!(FixOrientation::facing(face).control(&upright).yaw > 0.0);

        let upside_down = VehicleState {
            orientation: Orientation::from_euler(0.0, 0.0, std::f32::consts::PI),
            ..Default::default()
        };
        assert_eq!(FixOrientation::facing(face).control(&upside_down).yaw, 0.0);
    }
}
