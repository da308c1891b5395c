use std::f32::consts::PI;

use arena_core::math::signed_angle_flat;
use arena_core::{ActuationCommand, Color, DebugSink, TickContext, Vec3, WorldSnapshot};
use arena_maneuver::follow_route;
use arena_utility::{Choice, ChoiceError};

use super::best_landing_route;
use crate::curves::{fix, inv_lerp, remap, smooth_stop};
use crate::Field;

fn draw_route(debug: &mut dyn DebugSink, tick: u64, from: Vec3, points: &[Vec3], color: Color) {
    let mut prev = from;
    for p in points {
        debug.line(tick, prev, *p, color);
        prev = *p;
    }
}

/// Clear: ball in our half with the car between it and our goal. Plays the ball's next landing
/// toward whichever upfield corner has the best route.
#[derive(Debug, Clone)]
pub struct ClearBall {
    field: Field,
    aims: Vec<Vec3>,
}

impl ClearBall {
    pub fn new(field: Field) -> Self {
        let up = -field.sign();
        let aims = vec![
            Vec3::new(4000.0, 300.0 * up, 0.0),
            Vec3::new(-4000.0, 300.0 * up, 0.0),
            Vec3::new(2000.0, 2500.0 * up, 0.0),
            Vec3::new(-2000.0, 2500.0 * up, 0.0),
            Vec3::new(0.0, 5000.0 * up, 0.0),
        ];
        Self { field, aims }
    }

    pub fn aims(&self) -> &[Vec3] {
        &self.aims
    }
}

impl Choice for ClearBall {
    fn name(&self) -> &'static str {
        "ClearBall"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        let ball = world.ball.position;
        let goal_to_ball = ball - self.field.own_goal();
        let car_to_ball = world.car_to_ball();

        let ang = signed_angle_flat(car_to_ball, goal_to_ball).abs();
        let aligned = smooth_stop(2, fix(inv_lerp(PI * 0.6, 0.0, ang)));

        let half = self.field.arena.half_length;
        let sign = self.field.sign();
        let own_half = fix(remap(-sign * half, sign * half, -0.2, 1.2, ball.y));

        Ok(own_half * aligned)
    }

    fn act(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError> {
        let route = best_landing_route(&self.field, world, &self.aims);
        let car = &world.self_vehicle;
        draw_route(debug, ctx.tick, car.position, route.points(), Color::rgb(0, 170, 255));
        Ok(follow_route(car, &route))
    }
}

/// Save: ball in our half and travelling at our goal. Plays the ball's next landing out toward
/// the side walls.
#[derive(Debug, Clone)]
pub struct SaveGoal {
    field: Field,
    aims: Vec<Vec3>,
}

impl SaveGoal {
    pub fn new(field: Field) -> Self {
        let own = field.sign();
        let aims = vec![
            Vec3::new(4000.0, 0.0, 0.0),
            Vec3::new(-4000.0, 0.0, 0.0),
            Vec3::new(4000.0, 3000.0 * own, 0.0),
            Vec3::new(-4000.0, 3000.0 * own, 0.0),
            Vec3::new(1900.0, 4900.0 * own, 0.0),
            Vec3::new(-1900.0, 4900.0 * own, 0.0),
            Vec3::new(4000.0, 4900.0 * own, 0.0),
            Vec3::new(-4000.0, 4900.0 * own, 0.0),
        ];
        Self { field, aims }
    }

    pub fn aims(&self) -> &[Vec3] {
        &self.aims
    }
}

impl Choice for SaveGoal {
    fn name(&self) -> &'static str {
        "SaveGoal"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        let ball = world.ball;
        let ball_to_goal = self.field.own_goal() - ball.position;

        let ang = signed_angle_flat(ball_to_goal, ball.velocity).abs();
        let incoming = smooth_stop(2, fix(inv_lerp(PI * 0.4, 0.0, ang)));

        let half = self.field.arena.half_length;
        let sign = self.field.sign();
        let own_half = fix(remap(-sign * half, sign * half, 0.0, 1.4, ball.position.y));

        Ok(fix(0.5 * own_half + 0.5 * own_half * incoming))
    }

    fn act(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError> {
        let route = best_landing_route(&self.field, world, &self.aims);
        let car = &world.self_vehicle;
        draw_route(debug, ctx.tick, car.position, route.points(), Color::RED);
        Ok(follow_route(car, &route))
    }
}
