use crate::{ActuationCommand, DebugSink, NullDebugSink, Policy, TickContext, WorldSnapshot};

/// Drives one [`Policy`] once per host tick.
///
/// The brain is the last line of defence toward the host: whatever the policy does, every tick
/// yields a syntactically valid command. Policy errors are logged and replaced with
/// [`ActuationCommand::neutral`]; successful commands are sanitised before they leave.
pub struct Brain<D = NullDebugSink>
where
    D: DebugSink,
{
    pub policy: Box<dyn Policy>,
    pub debug: D,
    tick: u64,
    last_time: Option<f32>,
    faults: u64,
}

impl Brain<NullDebugSink> {
    pub fn new(policy: Box<dyn Policy>) -> Self {
        Self::with_debug(policy, NullDebugSink)
    }
}

impl<D> Brain<D>
where
    D: DebugSink,
{
    pub fn with_debug(policy: Box<dyn Policy>, debug: D) -> Self {
        Self {
            policy,
            debug,
            tick: 0,
            last_time: None,
            faults: 0,
        }
    }

    pub fn tick(&mut self, world: &WorldSnapshot) -> ActuationCommand {
        let dt_seconds = self
            .last_time
            .map(|t| (world.elapsed_time - t).max(0.0))
            .unwrap_or(0.0);
        self.last_time = Some(world.elapsed_time);

        let ctx = TickContext::new(self.tick, dt_seconds);
        self.tick = self.tick.wrapping_add(1);

        match self.policy.tick(&ctx, world, &mut self.debug) {
            Ok(command) => command.sanitized(),
            Err(err) => {
                self.faults = self.faults.saturating_add(1);
                tracing::warn!(tick = ctx.tick, error = %err, "policy fault; emitting neutral command");
                ActuationCommand::neutral()
            }
        }
    }

    /// Number of ticks evaluated so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Number of ticks that ended in an unrecovered policy fault.
    pub fn faults(&self) -> u64 {
        self.faults
    }

    pub fn reset(&mut self) {
        self.policy.reset();
        self.last_time = None;
    }
}
