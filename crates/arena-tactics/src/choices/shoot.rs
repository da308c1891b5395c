use arena_core::arena::BALL_RADIUS;
use arena_core::{
    ActuationCommand, BallPredictor, Color, DebugSink, Target, TickContext, Vec3, WorldSnapshot,
};
use arena_maneuver::{DodgeControl, SteerTowardPoint};
use arena_route::{intercept, AimCone};
use arena_utility::{Choice, ChoiceError};

use crate::curves::{fix, remap};
use crate::Field;

/// Half-width of the target between the posts, a little inside them.
const AIM_HALF_WIDTH: f32 = 820.0;
const INTERCEPT_HORIZON: f32 = 4.0;
/// Dodge into the ball when it is about this close a quarter second from now.
const DODGE_RANGE: f32 = 240.0 + 92.0;
const DODGE_LOOKAHEAD: f32 = 0.25;

/// Attack: scores higher the deeper the ball is about to be in the opponent half, with a small
/// bonus when the car is already lined up behind it.
#[derive(Debug, Clone)]
pub struct ShootAtGoal {
    field: Field,
    dodge: DodgeControl,
}

impl ShootAtGoal {
    pub fn new(field: Field, dodge: DodgeControl) -> Self {
        Self { field, dodge }
    }

    fn aim_cone(&self, ball: Vec3) -> AimCone {
        AimCone::toward_goal(ball, self.field.opponent_goal(), AIM_HALF_WIDTH)
    }
}

impl Choice for ShootAtGoal {
    fn name(&self) -> &'static str {
        "ShootAtGoal"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        let predictor = &self.field.ballistics;
        let ball_soon = predictor.advance(&world.ball, 1.0);
        let half = self.field.arena.half_length;
        let sign = self.field.sign();
        let attacking = fix(remap(sign * half, -sign * half, 0.0, 1.1, ball_soon.position.y));

        let hit = intercept(world, predictor, INTERCEPT_HORIZON).ball.position;
        let in_position = self
            .aim_cone(hit)
            .contains_direction(hit - world.self_vehicle.position);

        Ok(fix(attacking + if in_position { 0.06 } else { 0.0 }))
    }

    fn act(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError> {
        if self.dodge.is_dodging() {
            return Ok(self.dodge.control(world));
        }

        let predictor = &self.field.ballistics;
        let car = &world.self_vehicle;
        let hit = intercept(world, predictor, INTERCEPT_HORIZON).ball.position;
        let cone = self.aim_cone(hit);

        let ball_soon = predictor.advance(&world.ball, DODGE_LOOKAHEAD).position;
        let car_soon = car.position + car.velocity * DODGE_LOOKAHEAD;
        let soon = ball_soon - car_soon;
        if soon.length() < DODGE_RANGE
            && cone.contains_direction(soon)
            && self.dodge.begin(world, Some(Target::Ball))
        {
            return Ok(self.dodge.control(world));
        }

        debug.line(ctx.tick, hit, hit + cone.center_direction() * 500.0, Color::YELLOW);

        if let Some(goto) = cone.goto_point(car.position, hit, &self.field.arena) {
            debug.line(ctx.tick, car.position, goto, Color::YELLOW);
            return Ok(SteerTowardPoint::new(goto)
                .with_slide(true)
                .with_boost(true)
                .control(car));
        }

        // No line-up point inside the arena: push the ball from behind if we are goal-side of
        // it, otherwise retreat toward our own goal.
        let goal_side = (car.position.y - hit.y) * self.field.sign() > 0.0;
        if goal_side {
            let goal_to_ball = (hit - self.field.opponent_goal()).normalize_or_zero();
            let behind_ball = hit + goal_to_ball * BALL_RADIUS;
            debug.line(ctx.tick, car.position, behind_ball, Color::YELLOW);
            Ok(SteerTowardPoint::new(behind_ball)
                .with_boost(true)
                .control(car))
        } else {
            Ok(SteerTowardPoint::new(self.field.own_goal())
                .with_slide(true)
                .control(car))
        }
    }

    fn reset(&mut self) {
        self.dodge.reset();
    }
}
