use arena_core::{DebugSink, PolicyError, TickContext, WorldSnapshot};

use crate::status::TaskStatus;

/// A leaf of the tree: the only kind of node that drives the vehicle.
///
/// A task may span many ticks by returning [`TaskStatus::Action`]. The tree calls
/// [`reset`](Task::reset) whenever the task is left without acting, including when an ancestor
/// aborts, so no timer or counter survives into the next activation.
pub trait Task: 'static {
    fn name(&self) -> &'static str {
        "task"
    }

    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<TaskStatus, PolicyError>;

    fn reset(&mut self) {}
}

/// Instant check against the snapshot: `Success` when the predicate holds, else `Failure`.
pub struct Condition {
    name: &'static str,
    predicate: fn(&WorldSnapshot) -> bool,
}

impl Condition {
    pub fn new(name: &'static str, predicate: fn(&WorldSnapshot) -> bool) -> Self {
        Self { name, predicate }
    }
}

impl Task for Condition {
    fn name(&self) -> &'static str {
        self.name
    }

    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &WorldSnapshot,
        _debug: &mut dyn DebugSink,
    ) -> Result<TaskStatus, PolicyError> {
        Ok(TaskStatus::from_bool((self.predicate)(world)))
    }
}
