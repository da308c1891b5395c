//! Static field geometry.
//!
//! Arena dimensions are an immutable value handed to whatever needs them at construction, so
//! tests can shrink or stretch the field freely.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

use crate::{ConfigError, Team};

pub const BALL_RADIUS: f32 = 92.75;
pub const GRAVITY: f32 = -650.0;

/// Top forward speed reachable with throttle alone.
pub const THROTTLE_MAX_SPEED: f32 = 1410.0;
pub const SUPERSONIC_SPEED: f32 = 2200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Distance from the centre to a side wall (`|x|`).
    pub half_width: f32,
    /// Distance from the centre to a back wall (`|y|`).
    pub half_length: f32,
    pub height: f32,
    pub goal_half_width: f32,
    pub goal_height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_width: 4096.0,
            half_length: 5120.0,
            height: 2044.0,
            goal_half_width: 892.755,
            goal_height: 642.775,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("half_width", self.half_width),
            ("half_length", self.half_length),
            ("height", self.height),
            ("goal_half_width", self.goal_half_width),
            ("goal_height", self.goal_height),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        if self.goal_half_width >= self.half_width {
            return Err(ConfigError::InvalidDimension {
                name: "goal_half_width",
                value: self.goal_half_width,
            });
        }
        Ok(())
    }

    /// Centre of the goal line `team` defends.
    pub fn own_goal(&self, team: Team) -> Vec3 {
        Vec3::new(0.0, team.sign() * self.half_length, 0.0)
    }

    pub fn opponent_goal(&self, team: Team) -> Vec3 {
        self.own_goal(team.opponent())
    }

    /// Whether `point` lies inside the playable box shrunk by `margin` on every side.
    pub fn contains(&self, point: Vec3, margin: f32) -> bool {
        point.x.abs() <= self.half_width - margin
            && point.y.abs() <= self.half_length - margin
            && point.z >= -margin
            && point.z <= self.height - margin
    }

    /// Whether `point` is inside a goal mouth (past a back wall, between the posts).
    pub fn in_goal_mouth(&self, point: Vec3) -> bool {
        point.x.abs() < self.goal_half_width && point.z < self.goal_height
    }

    /// Whether `point` is closer to `team`'s goal line than `other` is.
    pub fn is_closer_to_own_goal(&self, point: Vec3, other: Vec3, team: Team) -> bool {
        let sign = team.sign();
        point.y * sign > other.y * sign
    }
}
