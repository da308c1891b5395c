//! Ball prediction adapter.
//!
//! The bot only consumes prediction through [`BallPredictor`]; a host with a better physics model
//! plugs its own implementation in. [`Ballistics`] is a small reference model: gravity plus
//! restitution bounces against the arena box, integrated in fixed steps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arena::{BALL_RADIUS, GRAVITY};
use crate::{ArenaConfig, BallState, ConfigError};

/// When a ball first reaches a given height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    pub time: f32,
    /// `false` when the height is never reached on the current arc; `time` is then the apex.
    pub feasible: bool,
}

pub trait BallPredictor {
    /// Pure, deterministic prediction `dt` seconds ahead. `dt <= 0` returns the input unchanged.
    fn advance(&self, ball: &BallState, dt: f32) -> BallState;

    fn time_to_reach_height(&self, ball: &BallState, height: f32) -> Arrival;
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ballistics {
    pub gravity: f32,
    /// Fraction of normal speed kept after a bounce.
    pub restitution: f32,
    /// Integration step in seconds.
    pub step: f32,
    pub arena: ArenaConfig,
}

impl Default for Ballistics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: 0.6,
            step: 1.0 / 120.0,
            arena: ArenaConfig::default(),
        }
    }
}

/// Vertical speed below which a floor contact settles into rolling.
const SETTLE_SPEED: f32 = 10.0;
/// Smallest integration step honoured by [`Ballistics::advance`].
const MIN_STEP: f32 = 1e-4;

/// Furthest ahead [`Ballistics`] predicts, in seconds. Longer requests are clamped, and arrivals
/// beyond it are reported infeasible.
pub const PREDICTION_HORIZON: f32 = 10.0;

impl Ballistics {
    pub fn new(arena: ArenaConfig) -> Self {
        Self {
            arena,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arena.validate()?;
        if !self.gravity.is_finite() || self.gravity >= 0.0 {
            return Err(ConfigError::InvalidBallistics {
                name: "gravity",
                value: self.gravity,
            });
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidBallistics {
                name: "restitution",
                value: self.restitution,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidBallistics {
                name: "step",
                value: self.step,
            });
        }
        Ok(())
    }

    fn integrate(&self, ball: &mut BallState, h: f32) {
        ball.velocity.z += self.gravity * h;
        ball.position += ball.velocity * h;

        let floor = BALL_RADIUS;
        if ball.position.z < floor {
            ball.position.z = floor;
            if ball.velocity.z < 0.0 {
                ball.velocity.z = -ball.velocity.z * self.restitution;
                if ball.velocity.z < SETTLE_SPEED {
                    ball.velocity.z = 0.0;
                }
            }
        }

        let ceiling = self.arena.height - BALL_RADIUS;
        if ball.position.z > ceiling {
            ball.position.z = ceiling;
            if ball.velocity.z > 0.0 {
                ball.velocity.z = -ball.velocity.z * self.restitution;
            }
        }

        let side = self.arena.half_width - BALL_RADIUS;
        if ball.position.x.abs() > side {
            ball.position.x = side.copysign(ball.position.x);
            if ball.velocity.x * ball.position.x > 0.0 {
                ball.velocity.x = -ball.velocity.x * self.restitution;
            }
        }

        let back = self.arena.half_length - BALL_RADIUS;
        if ball.position.y.abs() > back && !self.arena.in_goal_mouth(ball.position) {
            ball.position.y = back.copysign(ball.position.y);
            if ball.velocity.y * ball.position.y > 0.0 {
                ball.velocity.y = -ball.velocity.y * self.restitution;
            }
        }
    }
}

impl BallPredictor for Ballistics {
    fn advance(&self, ball: &BallState, dt: f32) -> BallState {
        let mut out = *ball;
        if !(dt > 0.0) {
            return out;
        }

        let dt = dt.min(PREDICTION_HORIZON);
        let step = self.step.max(MIN_STEP);
        let steps = (dt / step).ceil() as u32;
        let mut remaining = dt;
        for _ in 0..steps {
            let h = remaining.min(step);
            if h <= 0.0 {
                break;
            }
            self.integrate(&mut out, h);
            remaining -= h;
        }
        out
    }

    /// Solves the free-flight arc analytically (bounces are ignored) for the first
    /// non-negative time the ball centre is at `height`.
    fn time_to_reach_height(&self, ball: &BallState, height: f32) -> Arrival {
        let arrival = self.solve_height(ball, height);
        if arrival.time <= PREDICTION_HORIZON {
            arrival
        } else {
            Arrival {
                time: PREDICTION_HORIZON,
                feasible: false,
            }
        }
    }
}

impl Ballistics {
    fn solve_height(&self, ball: &BallState, height: f32) -> Arrival {
        let a = 0.5 * self.gravity;
        let b = ball.velocity.z;
        let c = ball.position.z - height;

        if a.abs() <= f32::EPSILON {
            if b.abs() > f32::EPSILON && -c / b >= 0.0 {
                return Arrival {
                    time: -c / b,
                    feasible: true,
                };
            }
            return Arrival {
                time: 0.0,
                feasible: c.abs() <= f32::EPSILON,
            };
        }

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return Arrival {
                time: (-b / self.gravity).max(0.0),
                feasible: false,
            };
        }

        let sq = disc.sqrt();
        let r1 = (-b - sq) / (2.0 * a);
        let r2 = (-b + sq) / (2.0 * a);
        let (lo, hi) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };

        if lo >= 0.0 {
            Arrival {
                time: lo,
                feasible: true,
            }
        } else if hi >= 0.0 {
            Arrival {
                time: hi,
                feasible: true,
            }
        } else {
            Arrival {
                time: 0.0,
                feasible: false,
            }
        }
    }
}
