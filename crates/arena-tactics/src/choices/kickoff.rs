use arena_core::math::project_len;
use arena_core::{ActuationCommand, Color, DebugSink, Target, TickContext, Vec3, WorldSnapshot};
use arena_maneuver::{DodgeControl, SteerTowardPoint};
use arena_utility::{Choice, ChoiceError};

use crate::Field;

/// Distance from the ball centre at which a dodge started now connects.
const DODGE_REACH: f32 = 190.0;
/// Seconds from dodge start to the flip's strongest moment.
const DODGE_LEAD: f32 = 0.3;
/// Spawns this far back dodge once on the way in to gain speed.
const FAR_SPAWN: f32 = 3900.0;
const FAR_SPAWN_MIN_SPEED: f32 = 730.0;
/// Spawns beyond this `|y|` (and off the centre line) pick up the pad in front of them first.
const CORNER_SPAWN_Y: f32 = 2880.0;
const CORNER_PAD_Y: f32 = 2790.0;

/// Kickoff: scores `2` during the kickoff pause or with the ball resting at the centre spot.
#[derive(Debug, Clone)]
pub struct KickOff {
    field: Field,
    dodge: DodgeControl,
}

impl KickOff {
    pub fn new(field: Field, dodge: DodgeControl) -> Self {
        Self { field, dodge }
    }
}

impl Choice for KickOff {
    fn name(&self) -> &'static str {
        "KickOff"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        let ball = world.ball.position;
        let centred = ball.x == 0.0 && ball.y == 0.0;
        Ok(if world.is_kickoff_pause || centred { 2.0 } else { 0.0 })
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

        let car = &world.self_vehicle;
        debug.line(ctx.tick, car.position, world.ball.position, Color::WHITE);

        let car_to_ball = world.ball.position - car.position;
        let dist = car_to_ball.length();
        let speed = project_len(car.velocity, car_to_ball);

        let close_enough = dist - DODGE_REACH < speed * DODGE_LEAD;
        let far_and_fast = dist > FAR_SPAWN && speed > FAR_SPAWN_MIN_SPEED;
        if (close_enough || far_and_fast) && self.dodge.begin(world, Some(Target::Ball)) {
            return Ok(self.dodge.control(world));
        }

        let p = car.position;
        if p.x.abs() > 200.0 && p.y.abs() > CORNER_SPAWN_Y {
            let pad = Vec3::new(0.0, self.field.sign() * CORNER_PAD_Y, 0.0);
            return Ok(SteerTowardPoint::new(pad).with_boost(true).control(car));
        }

        Ok(SteerTowardPoint::new(world.ball.position)
            .with_boost(true)
            .control(car))
    }

    fn reset(&mut self) {
        self.dodge.reset();
    }
}
