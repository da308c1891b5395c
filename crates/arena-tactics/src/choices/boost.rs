use arena_core::math::{flat, signed_angle_flat};
use arena_core::{ActuationCommand, Color, DebugSink, TickContext, Vec3, WorldSnapshot};
use arena_maneuver::SteerTowardPoint;
use arena_utility::{ArbiterConfig, Choice, ChoiceError, UtilityArbiter};

use crate::curves::{dist_01, face_ang_01, fix, smooth_stop};
use crate::Field;

/// Drive over one boost pad, identified by its index in the snapshot's pad list.
#[derive(Debug, Clone)]
pub struct SpecificBoostPad {
    field: Field,
    index: usize,
    location: Vec3,
    is_full_boost: bool,
}

impl SpecificBoostPad {
    pub fn new(field: Field, index: usize, location: Vec3, is_full_boost: bool) -> Self {
        Self {
            field,
            index,
            location,
            is_full_boost,
        }
    }

    pub fn location(&self) -> Vec3 {
        self.location
    }
}

impl Choice for SpecificBoostPad {
    fn name(&self) -> &'static str {
        "SpecificBoostPad"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        let Some(pad) = world.boost_pads.get(self.index) else {
            return Err(ChoiceError::StaleCache(format!(
                "boost pad {} is missing from the snapshot",
                self.index
            )));
        };
        if !pad.is_active {
            return Ok(0.0);
        }

        let car = &world.self_vehicle;
        let car_to_pad = flat(self.location - car.position);
        let near = 1.0 - dist_01(car.position.distance(self.location));
        let facing = face_ang_01(signed_angle_flat(car.orientation.front, car_to_pad));
        let size = if self.is_full_boost { 1.0 } else { 0.6 };
        let on_the_way_back =
            if self.field.arena.is_closer_to_own_goal(self.location, car.position, self.field.team) {
                1.0
            } else {
                0.95
            };

        Ok(fix(near * facing * size * on_the_way_back))
    }

    fn act(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError> {
        let car = &world.self_vehicle;
        debug.line(ctx.tick, car.position, self.location, Color::rgb(0, 180, 0));
        Ok(SteerTowardPoint::new(self.location)
            .with_slide(true)
            .with_boost(self.is_full_boost)
            .control(car))
    }
}

/// Refuel: `-0.5` with an empty tank, otherwise rising as boost runs low.
///
/// Acting delegates to a nested arbiter with one [`SpecificBoostPad`] per pad, built on
/// [`Choice::enter`] from the snapshot's pad list. When that list later changes size under an
/// active choice, the nested roster is stale and is rebuilt by [`Choice::reinitialize`].
pub struct CollectBoost {
    field: Field,
    pads: Option<UtilityArbiter>,
}

impl CollectBoost {
    pub fn new(field: Field) -> Self {
        Self { field, pads: None }
    }

    fn build_pads(&self, world: &WorldSnapshot) -> Option<UtilityArbiter> {
        let choices: Vec<Box<dyn Choice>> = world
            .boost_pads
            .iter()
            .enumerate()
            .map(|(i, pad)| {
                Box::new(SpecificBoostPad::new(
                    self.field,
                    i,
                    pad.location,
                    pad.is_full_boost,
                )) as Box<dyn Choice>
            })
            .collect();
        UtilityArbiter::new(choices, ArbiterConfig { switch_threshold: 0.0 }).ok()
    }
}

impl Choice for CollectBoost {
    fn name(&self) -> &'static str {
        "CollectBoost"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        if world.boost_pads.is_empty() {
            return Ok(f32::NEG_INFINITY);
        }
        let boost = world.self_vehicle.boost;
        if boost <= 0.0 {
            return Ok(-0.5);
        }
        Ok(fix(1.0 - smooth_stop(4, boost / 100.0)))
    }

    fn act(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError> {
        let Some(pads) = self
            .pads
            .as_mut()
            .filter(|p| p.len() == world.boost_pads.len())
        else {
            return Err(ChoiceError::StaleCache(format!(
                "expected a roster for {} boost pads",
                world.boost_pads.len()
            )));
        };

        match pads.evaluate(ctx, world, debug) {
            Ok(cmd) => Ok(cmd),
            Err(err) => Err(ChoiceError::Failed(err.to_string())),
        }
    }

    fn enter(&mut self, world: &WorldSnapshot) {
        let current = self
            .pads
            .as_ref()
            .is_some_and(|p| p.len() == world.boost_pads.len());
        if !current {
            self.pads = self.build_pads(world);
        }
    }

    fn reset(&mut self) {
        if let Some(pads) = self.pads.as_mut() {
            pads.reset();
        }
    }

    fn reinitialize(&mut self, world: &WorldSnapshot) {
        tracing::debug!(pads = world.boost_pads.len(), "rebuilding boost pad roster");
        self.pads = self.build_pads(world);
    }
}
