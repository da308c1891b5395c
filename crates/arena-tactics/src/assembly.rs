//! Turns a [`BotConfig`] into a ready [`Brain`].

use arena_bt::{BehaviorTree, Condition, TreeNode};
use arena_core::{Brain, DebugSink, Policy, Target, Team};
use arena_utility::{Choice, UtilityArbiter};

use crate::choices::{
    ClearBall, CollectBoost, Dribble, FixAirOrientation, KickOff, SaveGoal, ShootAtGoal,
};
use crate::tasks::{Dodge, GoTo, RecoverOrientation};
use crate::{AssemblyError, BotConfig, Field, PolicyKind};

/// The field facts `config` describes, seen from `team`'s side.
pub fn field_for(config: &BotConfig, team: Team) -> Field {
    Field::new(config.arena, config.ballistics(), team)
}

/// Every tactic in the order the arbiter breaks ties in.
pub fn standard_roster(config: &BotConfig, team: Team) -> Vec<Box<dyn Choice>> {
    let field = field_for(config, team);
    vec![
        Box::new(KickOff::new(field, config.dodge_control())),
        Box::new(ShootAtGoal::new(field, config.dodge_control())),
        Box::new(ClearBall::new(field)),
        Box::new(SaveGoal::new(field)),
        Box::new(CollectBoost::new(field)),
        Box::new(Dribble::new(field)),
        Box::new(FixAirOrientation::new()),
    ]
}

/// Chase the ball forever: land first when airborne, dodge into the ball on arrival, and drive
/// through it while the dodge is unavailable.
pub fn default_tree() -> TreeNode {
    TreeNode::repeat_until_failure(TreeNode::selector(vec![
        TreeNode::sequence(vec![
            TreeNode::task(Condition::new("Airborne", |w| !w.self_vehicle.wheel_contact)),
            TreeNode::task(RecoverOrientation::default()),
        ]),
        TreeNode::sequence(vec![
            TreeNode::task(GoTo::new(Target::Ball)),
            TreeNode::task(Dodge::new(Some(Target::Ball))),
        ]),
        TreeNode::task(GoTo::new(Target::Ball).with_arrival_radius(0.0)),
    ]))
}

pub fn build_arbiter(config: &BotConfig, team: Team) -> Result<UtilityArbiter, AssemblyError> {
    Ok(UtilityArbiter::new(
        standard_roster(config, team),
        config.arbiter_config(),
    )?)
}

pub fn build_tree(config: &BotConfig) -> Result<BehaviorTree, AssemblyError> {
    Ok(BehaviorTree::new(default_tree())?.with_max_steps(config.tree.max_steps_per_tick)?)
}

pub fn build_policy(config: &BotConfig, team: Team) -> Result<Box<dyn Policy>, AssemblyError> {
    config.validate()?;
    let policy: Box<dyn Policy> = match config.policy {
        PolicyKind::Utility => Box::new(build_arbiter(config, team)?),
        PolicyKind::BehaviorTree => Box::new(build_tree(config)?),
    };
    tracing::debug!(policy = ?config.policy, ?team, "assembled policy");
    Ok(policy)
}

pub fn build_brain(config: &BotConfig, team: Team) -> Result<Brain, AssemblyError> {
    Ok(Brain::new(build_policy(config, team)?))
}

pub fn build_brain_with_debug<D>(
    config: &BotConfig,
    team: Team,
    debug: D,
) -> Result<Brain<D>, AssemblyError>
where
    D: DebugSink,
{
    Ok(Brain::with_debug(build_policy(config, team)?, debug))
}
