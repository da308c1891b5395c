use arena_bt::{Task, TaskStatus};
use arena_core::{DebugSink, PolicyError, TickContext, WorldSnapshot};

use crate::UtilityArbiter;

/// Utility arbiter as a behavior tree leaf.
///
/// Each tick it runs one arbiter evaluation and returns `Action` with the active choice's
/// command. With a minimum score set, it returns `Failure` instead when no choice reaches it,
/// leaving the decision to fallbacks elsewhere in the tree.
pub struct ArbiterTask {
    arbiter: UtilityArbiter,
    min_score: Option<f32>,
}

impl ArbiterTask {
    pub fn new(arbiter: UtilityArbiter) -> Self {
        Self {
            arbiter,
            min_score: None,
        }
    }

    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn arbiter(&self) -> &UtilityArbiter {
        &self.arbiter
    }
}

impl Task for ArbiterTask {
    fn name(&self) -> &'static str {
        "arbiter"
    }

    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<TaskStatus, PolicyError> {
        let index = self.arbiter.select(ctx, world)?;
        if let Some(min) = self.min_score {
            if self.arbiter.scores()[index] < min {
                return Ok(TaskStatus::Failure);
            }
        }
        let cmd = self.arbiter.act_active(ctx, world, debug)?;
        Ok(TaskStatus::Action(cmd))
    }

    fn reset(&mut self) {
        self.arbiter.reset();
    }
}
