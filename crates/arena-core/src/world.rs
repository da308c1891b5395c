#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

use crate::arena::SUPERSONIC_SPEED;
use crate::{BallPredictor, Ballistics, Orientation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Team {
    #[default]
    Blue,
    Orange,
}

impl Team {
    /// Sign of the `y` coordinate of the goal this team defends.
    pub fn sign(self) -> f32 {
        match self {
            Team::Blue => -1.0,
            Team::Orange => 1.0,
        }
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Orange,
            Team::Orange => Team::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VehicleState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub orientation: Orientation,
    /// Boost energy in `[0, 100]`.
    pub boost: f32,
    pub wheel_contact: bool,
    pub on_wall: bool,
    pub team: Team,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            orientation: Orientation::IDENTITY,
            boost: 33.0,
            wheel_contact: true,
            on_wall: false,
            team: Team::Blue,
        }
    }
}

impl VehicleState {
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Velocity component along the vehicle's nose.
    pub fn forward_speed(&self) -> f32 {
        self.velocity.dot(self.orientation.front)
    }

    pub fn is_supersonic(&self) -> bool {
        self.speed() >= SUPERSONIC_SPEED
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl BallState {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Predicts the ball `dt` seconds ahead with the default [`Ballistics`] model.
    ///
    /// `advance(0.0)` returns `self` unchanged. Prediction is a forward integration, so
    /// `advance(a).advance(b)` is close to, but not guaranteed to equal, `advance(a + b)`.
    pub fn advance(&self, dt: f32) -> BallState {
        Ballistics::default().advance(self, dt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoostPad {
    pub location: Vec3,
    pub is_full_boost: bool,
    pub is_active: bool,
    /// Seconds until an inactive pad comes back.
    pub respawn_countdown: f32,
}

impl Default for BoostPad {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            is_full_boost: false,
            is_active: true,
            respawn_countdown: 0.0,
        }
    }
}

/// Immutable view of the world for one tick. Owned by the host; the bot only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldSnapshot {
    pub self_vehicle: VehicleState,
    pub ball: BallState,
    pub opponents: Vec<VehicleState>,
    pub teammates: Vec<VehicleState>,
    pub boost_pads: Vec<BoostPad>,
    /// Game clock in seconds. The only clock time-driven maneuvers consult.
    pub elapsed_time: f32,
    pub is_kickoff_pause: bool,
}

impl WorldSnapshot {
    pub fn team(&self) -> Team {
        self.self_vehicle.team
    }

    pub fn car_to_ball(&self) -> Vec3 {
        self.ball.position - self.self_vehicle.position
    }

    /// Opponent nearest to the ball, if any.
    pub fn nearest_opponent_to_ball(&self) -> Option<&VehicleState> {
        let ball = self.ball.position;
        self.opponents.iter().min_by(|a, b| {
            a.position
                .distance_squared(ball)
                .total_cmp(&b.position.distance_squared(ball))
        })
    }
}

/// Something a maneuver can aim at, resolved against the live snapshot each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Target {
    Point(Vec3),
    /// Wherever the ball currently is.
    Ball,
}

impl Target {
    pub fn resolve(&self, world: &WorldSnapshot) -> Vec3 {
        match *self {
            Target::Point(p) => p,
            Target::Ball => world.ball.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_opponent_picks_closest_to_ball() {
        let world = WorldSnapshot {
            ball: BallState::new(Vec3::new(1000.0, 0.0, 93.0), Vec3::ZERO),
            opponents: vec![
                VehicleState {
                    position: Vec3::new(-2000.0, 0.0, 17.0),
                    ..Default::default()
                },
                VehicleState {
                    position: Vec3::new(800.0, 0.0, 17.0),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let nearest = world.nearest_opponent_to_ball().map(|o| o.position.x);
        assert_eq!(nearest, Some(800.0));
    }

    #[test]
    fn supersonic_from_speed_alone() {
        let mut car = VehicleState {
            velocity: Vec3::new(1500.0, 1500.0, 0.0),
            ..Default::default()
        };
        assert!(!car.is_supersonic());
        car.velocity = Vec3::new(0.0, 2200.0, 0.0);
        assert!(car.is_supersonic());
    }

    #[test]
    fn target_resolves_against_live_ball() {
        let mut world = WorldSnapshot::default();
        world.ball.position = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Target::Ball.resolve(&world), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Target::Point(Vec3::X).resolve(&world), Vec3::X);
    }
}
