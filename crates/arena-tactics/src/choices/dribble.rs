use std::f32::consts::PI;

use arena_core::arena::BALL_RADIUS;
use arena_core::math::{angle_between, UP};
use arena_core::{ActuationCommand, BallPredictor, Color, DebugSink, TickContext, WorldSnapshot};
use arena_maneuver::SteerTowardPointWithTiming;
use arena_utility::{Choice, ChoiceError};

use crate::curves::fix;
use crate::Field;

/// Every 1500 uu of opponent distance from the ball is worth 0.09.
const OPPONENT_DISTANCE_WEIGHT: f32 = 0.00006;
/// How far past the landing point (away from the opponent goal) to arrive.
const LANDING_BIAS: f32 = 20.0;

/// Catch a falling ball: scores when the ball is airborne and high above the car, more so with
/// no opponent near it. Drives to arrive under the ball's landing point on time.
#[derive(Debug, Clone)]
pub struct Dribble {
    field: Field,
}

impl Dribble {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

impl Choice for Dribble {
    fn name(&self) -> &'static str {
        "Dribble"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        let ball = world.ball.position;
        if ball.z <= BALL_RADIUS + 25.0 {
            return Ok(0.0);
        }

        let opponent = world
            .nearest_opponent_to_ball()
            .map_or(0.0, |o| o.position.distance(ball) * OPPONENT_DISTANCE_WEIGHT);

        let above = angle_between(world.car_to_ball(), UP);
        let overhead = fix(1.0 - 1.5 * above / PI);

        Ok(fix(0.76 * overhead + opponent))
    }

    fn act(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError> {
        let predictor = &self.field.ballistics;
        let eta = predictor
            .time_to_reach_height(&world.ball, BALL_RADIUS + 1.0)
            .time
            .max(0.0);
        let landing = predictor.advance(&world.ball, eta).position;

        let bias = (landing - self.field.opponent_goal()).normalize_or_zero() * LANDING_BIAS;
        let dest = landing + bias;

        let car = &world.self_vehicle;
        debug.line(ctx.tick, car.position, dest, Color::YELLOW);
        debug.line(ctx.tick, world.ball.position, dest, Color::YELLOW);

        Ok(SteerTowardPointWithTiming::new(dest, eta)
            .with_slide(true)
            .control(car))
    }
}
