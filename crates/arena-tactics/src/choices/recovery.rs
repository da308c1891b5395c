use arena_core::{ActuationCommand, DebugSink, TickContext, WorldSnapshot};
use arena_maneuver::FixOrientation;
use arena_utility::{Choice, ChoiceError};

/// Land on the wheels: `1` while airborne, `0` on the ground.
#[derive(Debug, Clone, Default)]
pub struct FixAirOrientation {
    control: FixOrientation,
}

impl FixAirOrientation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Choice for FixAirOrientation {
    fn name(&self) -> &'static str {
        "LandOnWheels"
    }

    fn score(&mut self, _ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError> {
        Ok(if world.self_vehicle.wheel_contact { 0.0 } else { 1.0 })
    }

    fn act(
        &mut self,
        _ctx: &TickContext,
        world: &WorldSnapshot,
        _debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError> {
        Ok(self.control.control(&world.self_vehicle))
    }
}
