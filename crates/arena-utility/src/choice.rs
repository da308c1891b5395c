use arena_core::{ActuationCommand, DebugSink, TickContext, WorldSnapshot};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// Internal cache no longer matches the snapshot (e.g. a different boost pad roster).
    /// The arbiter reinitializes the choice and retries once.
    #[error("stale cache: {0}")]
    StaleCache(String),

    #[error("{0}")]
    Failed(String),
}

/// A candidate behavior in a [`UtilityArbiter`](crate::UtilityArbiter) roster.
///
/// Scores are compared as-is: they are not clamped to `[0, 1]`, and a NaN score never wins.
/// State a choice keeps while active must be dropped in [`reset`](Choice::reset), which the
/// arbiter calls when switching away.
pub trait Choice: 'static {
    fn name(&self) -> &'static str;

    fn score(&mut self, ctx: &TickContext, world: &WorldSnapshot) -> Result<f32, ChoiceError>;

    fn act(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ChoiceError>;

    /// Called when the arbiter switches to this choice.
    fn enter(&mut self, _world: &WorldSnapshot) {}

    /// Called when the arbiter switches away from this choice.
    fn reset(&mut self) {}

    /// Rebuild internal caches from `world` after a [`ChoiceError::StaleCache`].
    fn reinitialize(&mut self, _world: &WorldSnapshot) {}
}
