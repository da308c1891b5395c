#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The single per-tick output handed back to the host.
///
/// Analog axes are in `[-1, 1]`; the flags are plain booleans. `Default` is the neutral command.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActuationCommand {
    pub throttle: f32,
    pub steer: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub jump: bool,
    pub boost: bool,
    /// Handbrake / powerslide.
    pub drift: bool,
}

fn axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

impl ActuationCommand {
    /// No input at all: coast, no steer, no buttons.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Clamps every analog axis into its legal range, mapping NaN to `0.0`.
    pub fn sanitized(self) -> Self {
        Self {
            throttle: axis(self.throttle),
            steer: axis(self.steer),
            pitch: axis(self.pitch),
            yaw: axis(self.yaw),
            roll: axis(self.roll),
            ..self
        }
    }

    pub fn is_within_limits(&self) -> bool {
        [self.throttle, self.steer, self.pitch, self.yaw, self.roll]
            .iter()
            .all(|v| (-1.0..=1.0).contains(v))
    }
}
