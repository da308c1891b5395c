//! Small geometry helpers on top of `glam`.
//!
//! World axes follow the simulator: `x` across the field, `y` toward the orange goal, `z` up.
//! The frame is left-handed, so with the vehicle facing `+x` and `+z` up, its right side points
//! at `+y`. A positive signed angle means "turn right", matching the sign of a positive steer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

pub const UP: Vec3 = Vec3::Z;

/// Projects `v` onto the ground plane.
pub fn flat(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Signed angle on the ground plane from `from` to `to`, in `(-PI, PI]`.
///
/// Returns `0.0` when either vector has no horizontal component.
pub fn signed_angle_flat(from: Vec3, to: Vec3) -> f32 {
    let a = flat(from);
    let b = flat(to);
    if a.length_squared() <= f32::EPSILON || b.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    let cross = a.x * b.y - a.y * b.x;
    cross.atan2(a.dot(b))
}

/// Unsigned angle between two vectors; `0.0` if either is degenerate.
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Heading of a vector on the ground plane (angle from `+x`).
pub fn heading(v: Vec3) -> f32 {
    v.y.atan2(v.x)
}

/// Wraps an angle into `[-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a < -PI {
        a += TAU;
    }
    a
}

/// Length of `v` projected onto `onto`, signed. `0.0` for a degenerate `onto`.
pub fn project_len(v: Vec3, onto: Vec3) -> f32 {
    let len = onto.length();
    if len <= f32::EPSILON {
        return 0.0;
    }
    v.dot(onto) / len
}

/// An orthonormal vehicle frame.
///
/// Invariant: the three axes are unit length and mutually orthogonal. Constructors only ever
/// produce such frames; `is_orthonormal` lets tests and input validation check foreign data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Orientation {
    pub const IDENTITY: Self = Self {
        front: Vec3::X,
        right: Vec3::Y,
        up: Vec3::Z,
    };

    /// Builds the frame from the simulator's Euler angles (radians).
    pub fn from_euler(pitch: f32, yaw: f32, roll: f32) -> Self {
        let (sp, cp) = pitch.sin_cos();
        let (sy, cy) = yaw.sin_cos();
        let (sr, cr) = roll.sin_cos();

        Self {
            front: Vec3::new(cp * cy, cp * sy, sp),
            right: Vec3::new(cy * sp * sr - cr * sy, sy * sp * sr + cr * cy, -cp * sr),
            up: Vec3::new(-cr * cy * sp - sr * sy, -cr * sy * sp + sr * cy, cp * cr),
        }
    }

    /// Nose-up angle.
    pub fn pitch(&self) -> f32 {
        self.front.z.clamp(-1.0, 1.0).asin()
    }

    pub fn yaw(&self) -> f32 {
        heading(self.front)
    }

    /// Right-side-down angle.
    pub fn roll(&self) -> f32 {
        (-self.right.z).atan2(self.up.z)
    }

    /// Expresses a world-space vector in this frame as `(front, right, up)` components.
    pub fn to_local(&self, v: Vec3) -> Vec3 {
        Vec3::new(v.dot(self.front), v.dot(self.right), v.dot(self.up))
    }

    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.front)
            && unit(self.right)
            && unit(self.up)
            && self.front.dot(self.right).abs() <= tolerance
            && self.front.dot(self.up).abs() <= tolerance
            && self.right.dot(self.up).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn signed_angle_is_positive_to_the_right() {
        assert!((signed_angle_flat(Vec3::X, Vec3::Y) - FRAC_PI_2).abs() < 1e-6);
        assert!((signed_angle_flat(Vec3::X, -Vec3::Y) + FRAC_PI_2).abs() < 1e-6);
        assert_eq!(signed_angle_flat(Vec3::ZERO, Vec3::Y), 0.0);
        assert_eq!(signed_angle_flat(Vec3::X, Vec3::Z), 0.0);
    }

    #[test]
    fn euler_round_trips_through_frame() {
        let o = Orientation::from_euler(0.3, -1.2, 0.4);
        assert!(o.is_orthonormal(1e-5));
        assert!((o.pitch() - 0.3).abs() < 1e-5);
        assert!((o.yaw() + 1.2).abs() < 1e-5);
        assert!((o.roll() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn wrap_angle_stays_in_range() {
        assert!((wrap_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert_eq!(wrap_angle(0.25), 0.25);
    }
}
