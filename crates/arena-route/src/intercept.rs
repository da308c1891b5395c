use arena_core::arena::{BALL_RADIUS, THROTTLE_MAX_SPEED};
use arena_core::math::flat;
use arena_core::{BallPredictor, BallState, WorldSnapshot};

/// Highest ball centre a grounded car can still touch.
const GROUND_REACH: f32 = 250.0;
const STEP: f32 = 1.0 / 60.0;

/// The predicted ball state the car is expected to meet first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept {
    pub time: f32,
    pub ball: BallState,
    /// `false` when nothing within the horizon was reachable; `ball` is then the last prediction.
    pub reachable: bool,
}

/// Scans the ball's predicted path for the first state the car can reach by driving.
///
/// Reachability is a distance/time check at the better of the car's current speed and full
/// throttle speed, limited to balls low enough to hit from the ground.
pub fn intercept(world: &WorldSnapshot, predictor: &dyn BallPredictor, horizon: f32) -> Intercept {
    let car = &world.self_vehicle;
    let speed = car.speed().max(THROTTLE_MAX_SPEED);
    let car_flat = flat(car.position);

    let mut ball = world.ball;
    let mut t = 0.0;
    while t <= horizon {
        let dist = (flat(ball.position).distance(car_flat) - BALL_RADIUS).max(0.0);
        if ball.position.z <= GROUND_REACH && dist <= speed * t {
            return Intercept {
                time: t,
                ball,
                reachable: true,
            };
        }
        ball = predictor.advance(&ball, STEP);
        t += STEP;
    }

    Intercept {
        time: horizon,
        ball,
        reachable: false,
    }
}
