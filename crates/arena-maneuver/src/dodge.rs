use arena_core::math::flat;
use arena_core::{ActuationCommand, Target, VehicleState, WorldSnapshot};

use crate::orientation::FixOrientation;

/// Phase of a dodge, derived from the time since it began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DodgePhase {
    Ready,
    Jumping,
    Aiming,
    SecondJump,
    Unjumping,
    WaitFlip,
    Finishing,
}

/// End offsets of each phase, in seconds from the start of the dodge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DodgeTimings {
    pub jumping: f32,
    pub aiming: f32,
    pub second_jump: f32,
    pub unjumping: f32,
    pub wait_flip: f32,
    pub finishing: f32,
}

impl Default for DodgeTimings {
    fn default() -> Self {
        Self {
            jumping: 0.10,
            aiming: 0.13,
            second_jump: 0.18,
            unjumping: 0.30,
            wait_flip: 0.46,
            finishing: 1.0,
        }
    }
}

impl DodgeTimings {
    pub fn phase_at(&self, elapsed: f32) -> DodgePhase {
        if elapsed < self.jumping {
            DodgePhase::Jumping
        } else if elapsed < self.aiming {
            DodgePhase::Aiming
        } else if elapsed < self.second_jump {
            DodgePhase::SecondJump
        } else if elapsed < self.unjumping {
            DodgePhase::Unjumping
        } else if elapsed < self.wait_flip {
            DodgePhase::WaitFlip
        } else if elapsed < self.finishing {
            DodgePhase::Finishing
        } else {
            DodgePhase::Ready
        }
    }
}

/// Timed jump-and-flip.
///
/// `begin` arms the dodge at the snapshot's clock; every later `control` call derives the phase
/// from `world.elapsed_time` alone, so ticks may be skipped or arrive late. Once the dodge is
/// over, or the wheels touch down after the aim phase, control falls through to
/// [`FixOrientation`].
#[derive(Debug, Clone, PartialEq)]
pub struct DodgeControl {
    pub timings: DodgeTimings,
    /// Seconds after a dodge ends before another may begin.
    pub cooldown: f32,
    pub recovery: FixOrientation,
    aim: Option<Target>,
    started_at: Option<f32>,
    ended_at: Option<f32>,
}

impl Default for DodgeControl {
    fn default() -> Self {
        Self::new(DodgeTimings::default(), 0.5)
    }
}

impl DodgeControl {
    pub fn new(timings: DodgeTimings, cooldown: f32) -> Self {
        Self {
            timings,
            cooldown,
            recovery: FixOrientation::default(),
            aim: None,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn is_dodging(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn phase(&self, now: f32) -> DodgePhase {
        match self.started_at {
            Some(start) => self.timings.phase_at((now - start).max(0.0)),
            None => DodgePhase::Ready,
        }
    }

    pub fn can_dodge(&self, world: &WorldSnapshot) -> bool {
        let cooled = self
            .ended_at
            .map_or(true, |end| world.elapsed_time - end >= self.cooldown);
        !self.is_dodging() && world.self_vehicle.wheel_contact && cooled
    }

    /// Starts a dodge toward `aim` (`None` flips forward). Returns `false` and changes nothing
    /// when a dodge is not allowed right now.
    pub fn begin(&mut self, world: &WorldSnapshot, aim: Option<Target>) -> bool {
        if !self.can_dodge(world) {
            return false;
        }
        self.aim = aim;
        self.started_at = Some(world.elapsed_time);
        tracing::trace!(at = world.elapsed_time, "dodge started");
        true
    }

    /// Abandons any dodge in progress. The cooldown from the last finished dodge still applies.
    pub fn reset(&mut self) {
        self.aim = None;
        self.started_at = None;
    }

    fn finish(&mut self, now: f32) {
        self.started_at = None;
        self.aim = None;
        self.ended_at = Some(now);
        tracing::trace!(at = now, "dodge finished");
    }

    /// Stick direction for the flip: forward by default, otherwise toward the aim target.
    fn aim_inputs(&self, world: &WorldSnapshot) -> (f32, f32) {
        let car = &world.self_vehicle;
        let Some(target) = self.aim else {
            return (-1.0, 0.0);
        };
        let to_target = flat(target.resolve(world) - car.position);
        let local = car.orientation.to_local(to_target);
        let dir = glam::Vec2::new(local.x, local.y).normalize_or_zero();
        if dir == glam::Vec2::ZERO {
            return (-1.0, 0.0);
        }
        (-dir.x, dir.y)
    }

    pub fn control(&mut self, world: &WorldSnapshot) -> ActuationCommand {
        let now = world.elapsed_time;
        let car: &VehicleState = &world.self_vehicle;

        let Some(start) = self.started_at else {
            return self.recovery.control(car);
        };
        let elapsed = (now - start).max(0.0);
        let phase = self.timings.phase_at(elapsed);

        let landed_early = elapsed >= self.timings.aiming && car.wheel_contact;
        if phase == DodgePhase::Ready || landed_early {
            self.finish(now);
            return self.recovery.control(car);
        }

        let (pitch, yaw) = self.aim_inputs(world);
        let aimed = |jump: bool| ActuationCommand {
            throttle: 1.0,
            pitch,
            yaw,
            jump,
            ..ActuationCommand::default()
        };

        match phase {
            DodgePhase::Jumping => ActuationCommand {
                throttle: 1.0,
                jump: true,
                ..ActuationCommand::default()
            },
            DodgePhase::Aiming => aimed(false),
            DodgePhase::SecondJump => aimed(true),
            DodgePhase::Unjumping => aimed(false),
            DodgePhase::WaitFlip => ActuationCommand {
                throttle: 1.0,
                ..ActuationCommand::default()
            },
            DodgePhase::Finishing | DodgePhase::Ready => ActuationCommand {
                throttle: 1.0,
                ..self.recovery.control(car)
            },
        }
    }
}
