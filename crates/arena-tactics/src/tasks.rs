//! Leaves for behavior trees built from this roster.

use arena_bt::{Task, TaskStatus};
use arena_core::{
    ActuationCommand, Color, DebugSink, PolicyError, Target, TickContext, WorldSnapshot,
};
use arena_maneuver::{DodgeControl, FixOrientation, SteerTowardPoint};

/// Drives toward a target until within `arrival_radius` of it.
#[derive(Debug, Clone, PartialEq)]
pub struct GoTo {
    pub target: Target,
    pub arrival_radius: f32,
}

impl GoTo {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            arrival_radius: 150.0,
        }
    }

    pub fn with_arrival_radius(mut self, radius: f32) -> Self {
        self.arrival_radius = radius;
        self
    }
}

impl Task for GoTo {
    fn name(&self) -> &'static str {
        "GoTo"
    }

    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<TaskStatus, PolicyError> {
        let car = &world.self_vehicle;
        let target = self.target.resolve(world);
        if car.position.distance(target) <= self.arrival_radius {
            return Ok(TaskStatus::Success);
        }

        debug.line(ctx.tick, car.position, target, Color::WHITE);
        Ok(TaskStatus::Action(
            SteerTowardPoint::new(target).with_boost(true).control(car),
        ))
    }
}

/// One dodge from start to finish.
///
/// Fails on the first tick if the dodge is refused (airborne, mid-dodge or cooling down).
#[derive(Debug, Clone, PartialEq)]
pub struct Dodge {
    pub aim: Option<Target>,
    control: DodgeControl,
    started: bool,
}

impl Dodge {
    pub fn new(aim: Option<Target>) -> Self {
        Self::with_control(aim, DodgeControl::default())
    }

    pub fn with_control(aim: Option<Target>, control: DodgeControl) -> Self {
        Self {
            aim,
            control,
            started: false,
        }
    }
}

impl Task for Dodge {
    fn name(&self) -> &'static str {
        "Dodge"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &WorldSnapshot,
        _debug: &mut dyn DebugSink,
    ) -> Result<TaskStatus, PolicyError> {
        if !self.started {
            if !self.control.begin(world, self.aim) {
                return Ok(TaskStatus::Failure);
            }
            self.started = true;
        }

        let command = self.control.control(world);
        if self.control.is_dodging() {
            Ok(TaskStatus::Action(command))
        } else {
            self.started = false;
            Ok(TaskStatus::Success)
        }
    }

    fn reset(&mut self) {
        self.control.reset();
        self.started = false;
    }
}

/// Rights the car in the air; succeeds once the wheels touch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecoverOrientation {
    pub control: FixOrientation,
}

impl Task for RecoverOrientation {
    fn name(&self) -> &'static str {
        "RecoverOrientation"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &WorldSnapshot,
        _debug: &mut dyn DebugSink,
    ) -> Result<TaskStatus, PolicyError> {
        let car = &world.self_vehicle;
        if car.wheel_contact {
            return Ok(TaskStatus::Success);
        }
        Ok(TaskStatus::Action(self.control.control(car)))
    }
}

/// Idles for `seconds` of game time, measured from the first tick it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Wait {
    pub seconds: f32,
    started_at: Option<f32>,
}

impl Wait {
    pub fn new(seconds: f32) -> Self {
        Self {
            seconds,
            started_at: None,
        }
    }
}

impl Task for Wait {
    fn name(&self) -> &'static str {
        "Wait"
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &WorldSnapshot,
        _debug: &mut dyn DebugSink,
    ) -> Result<TaskStatus, PolicyError> {
        let now = world.elapsed_time;
        let start = *self.started_at.get_or_insert(now);
        if now - start >= self.seconds {
            self.started_at = None;
            return Ok(TaskStatus::Success);
        }
        Ok(TaskStatus::Action(ActuationCommand::neutral()))
    }

    fn reset(&mut self) {
        self.started_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{NullDebugSink, Vec3};

    fn tick(task: &mut dyn Task, world: &WorldSnapshot) -> TaskStatus {
        task.tick(&TickContext::new(0, 0.0), world, &mut NullDebugSink)
            .unwrap()
    }

    #[test]
    fn go_to_succeeds_inside_arrival_radius() {
        let mut world = WorldSnapshot::default();
        world.ball.position = Vec3::new(1000.0, 0.0, 93.0);
        let mut task = GoTo::new(Target::Ball);
        assert!(matches!(tick(&mut task, &world), TaskStatus::Action(_)));

        world.self_vehicle.position = Vec3::new(950.0, 0.0, 17.0);
        assert_eq!(tick(&mut task, &world), TaskStatus::Success);
    }

    #[test]
    fn wait_counts_game_time_from_first_tick() {
        let mut task = Wait::new(1.0);
        let mut world = WorldSnapshot {
            elapsed_time: 5.0,
            ..Default::default()
        };
        assert_eq!(
            tick(&mut task, &world),
            TaskStatus::Action(ActuationCommand::neutral())
        );
        world.elapsed_time = 5.5;
        assert!(matches!(tick(&mut task, &world), TaskStatus::Action(_)));
        world.elapsed_time = 6.0;
        assert_eq!(tick(&mut task, &world), TaskStatus::Success);
    }

    #[test]
    fn dodge_fails_when_airborne() {
        let mut world = WorldSnapshot::default();
        world.self_vehicle.wheel_contact = false;
        let mut task = Dodge::new(None);
        assert_eq!(tick(&mut task, &world), TaskStatus::Failure);
    }

    #[test]
    fn dodge_runs_to_completion() {
        let mut world = WorldSnapshot {
            elapsed_time: 1.0,
            ..Default::default()
        };
        let mut task = Dodge::new(Some(Target::Ball));
        match tick(&mut task, &world) {
            TaskStatus::Action(cmd) => assert!(cmd.jump),
            other => panic!("expected an action, got {other:?}"),
        }

        world.self_vehicle.wheel_contact = false;
        world.elapsed_time = 1.5;
        assert!(matches!(tick(&mut task, &world), TaskStatus::Action(_)));

        world.elapsed_time = 2.1;
        assert_eq!(tick(&mut task, &world), TaskStatus::Success);
    }

    #[test]
    fn recover_orientation_finishes_on_wheels() {
        let mut world = WorldSnapshot::default();
        world.self_vehicle.wheel_contact = false;
        let mut task = RecoverOrientation::default();
        assert!(matches!(tick(&mut task, &world), TaskStatus::Action(_)));
        world.self_vehicle.wheel_contact = true;
        assert_eq!(tick(&mut task, &world), TaskStatus::Success);
    }
}
