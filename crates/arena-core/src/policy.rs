use crate::{ActuationCommand, DebugSink, PolicyError, TickContext, WorldSnapshot};

/// A decision procedure evaluated once per tick.
///
/// Implementations own all of their cross-tick state (active choice, tree cursor, timers).
pub trait Policy: 'static {
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, PolicyError>;

    /// Drop any in-progress state so the next tick starts from a clean baseline.
    fn reset(&mut self) {}
}
