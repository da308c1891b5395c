use arena_core::{
    ActuationCommand, DebugEvent, DebugSink, Policy, PolicyError, TickContext, WorldSnapshot,
};
use thiserror::Error;

use crate::choice::{Choice, ChoiceError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArbiterConfig {
    /// Margin by which a challenger must beat the active choice before the arbiter switches.
    pub switch_threshold: f32,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            switch_threshold: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArbiterError {
    #[error("utility arbiter needs at least one choice")]
    EmptyRoster,

    #[error("switch threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f32),

    #[error("choice `{choice}` failed: {source}")]
    Choice {
        choice: &'static str,
        #[source]
        source: ChoiceError,
    },
}

impl From<ArbiterError> for PolicyError {
    fn from(err: ArbiterError) -> Self {
        match err {
            ArbiterError::Choice { choice, source } => PolicyError::Choice {
                choice,
                message: source.to_string(),
            },
            other => PolicyError::Choice {
                choice: "arbiter",
                message: other.to_string(),
            },
        }
    }
}

fn sanitize(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}

/// Scores a fixed roster of choices each tick and delegates to one of them.
///
/// Selection: `best` is the first choice with the highest score. The active choice from the
/// previous tick is kept while `score(active) + switch_threshold >= score(best)`; otherwise the
/// arbiter resets the active choice, enters `best`, and makes it active.
pub struct UtilityArbiter {
    choices: Vec<Box<dyn Choice>>,
    config: ArbiterConfig,
    active: Option<usize>,
    scores: Vec<f32>,
}

impl UtilityArbiter {
    pub fn new(choices: Vec<Box<dyn Choice>>, config: ArbiterConfig) -> Result<Self, ArbiterError> {
        if choices.is_empty() {
            return Err(ArbiterError::EmptyRoster);
        }
        let threshold = config.switch_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ArbiterError::InvalidThreshold(threshold));
        }
        let scores = vec![f32::NEG_INFINITY; choices.len()];
        Ok(Self {
            choices,
            config,
            active: None,
            scores,
        })
    }

    pub fn config(&self) -> ArbiterConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_name(&self) -> Option<&'static str> {
        self.active
            .and_then(|i| self.choices.get(i))
            .map(|c| c.name())
    }

    /// Scores from the most recent selection, in roster order.
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    pub fn last_best_score(&self) -> f32 {
        self.scores
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    fn score_choice(
        &mut self,
        index: usize,
        ctx: &TickContext,
        world: &WorldSnapshot,
    ) -> Result<f32, ArbiterError> {
        let choice = &mut self.choices[index];
        match choice.score(ctx, world) {
            Ok(s) => Ok(sanitize(s)),
            Err(ChoiceError::StaleCache(reason)) => {
                tracing::warn!(choice = choice.name(), %reason, "stale choice cache while scoring; reinitializing");
                choice.reinitialize(world);
                match choice.score(ctx, world) {
                    Ok(s) => Ok(sanitize(s)),
                    Err(ChoiceError::StaleCache(_)) => Ok(f32::NEG_INFINITY),
                    Err(source) => Err(ArbiterError::Choice {
                        choice: choice.name(),
                        source,
                    }),
                }
            }
            Err(source) => Err(ArbiterError::Choice {
                choice: choice.name(),
                source,
            }),
        }
    }

    /// Scores every choice and applies the switching rule. Returns the active index.
    pub fn select(&mut self, ctx: &TickContext, world: &WorldSnapshot) -> Result<usize, ArbiterError> {
        for i in 0..self.choices.len() {
            self.scores[i] = self.score_choice(i, ctx, world)?;
        }

        let mut best = 0;
        for (i, &s) in self.scores.iter().enumerate() {
            if s > self.scores[best] {
                best = i;
            }
        }

        if let Some(active) = self.active {
            if self.scores[active] + self.config.switch_threshold >= self.scores[best] {
                return Ok(active);
            }
        }

        if let Some(old) = self.active {
            self.choices[old].reset();
        }
        self.choices[best].enter(world);
        tracing::debug!(
            tick = ctx.tick,
            from = self.active.map(|i| self.choices[i].name()),
            to = self.choices[best].name(),
            score = self.scores[best],
            "switching active choice"
        );
        self.active = Some(best);
        Ok(best)
    }

    fn act_choice(
        &mut self,
        index: usize,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ArbiterError> {
        let choice = &mut self.choices[index];
        match choice.act(ctx, world, debug) {
            Ok(cmd) => Ok(cmd),
            Err(ChoiceError::StaleCache(reason)) => {
                tracing::warn!(choice = choice.name(), %reason, "stale choice cache while acting; reinitializing");
                choice.reinitialize(world);
                match choice.act(ctx, world, debug) {
                    Ok(cmd) => Ok(cmd),
                    Err(ChoiceError::StaleCache(_)) => Ok(ActuationCommand::neutral()),
                    Err(source) => Err(ArbiterError::Choice {
                        choice: choice.name(),
                        source,
                    }),
                }
            }
            Err(source) => Err(ArbiterError::Choice {
                choice: choice.name(),
                source,
            }),
        }
    }

    /// Runs the active choice for this tick; neutral if nothing has been selected yet.
    pub fn act_active(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ArbiterError> {
        let Some(index) = self.active else {
            return Ok(ActuationCommand::neutral());
        };
        debug.emit(DebugEvent::status(ctx.tick, self.choices[index].name()));
        self.act_choice(index, ctx, world, debug)
    }

    /// Selects a choice and returns its command for this tick.
    pub fn evaluate(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, ArbiterError> {
        self.select(ctx, world)?;
        self.act_active(ctx, world, debug)
    }

    /// Drops the active choice (resetting it); the next tick selects from scratch.
    pub fn reset(&mut self) {
        if let Some(active) = self.active.take() {
            self.choices[active].reset();
        }
        self.scores.fill(f32::NEG_INFINITY);
    }
}

impl Policy for UtilityArbiter {
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, PolicyError> {
        Ok(self.evaluate(ctx, world, debug)?)
    }

    fn reset(&mut self) {
        UtilityArbiter::reset(self);
    }
}
