use arena_core::{
    ActuationCommand, ArenaConfig, BallState, Ballistics, Brain, Team, Vec3, VehicleState,
    WorldSnapshot,
};
use arena_tactics::choices::{ClearBall, SaveGoal};
use arena_tactics::{
    build_brain, build_brain_with_debug, build_policy, BotConfig, Field, PolicyKind,
};
use arena_utility::{ArbiterConfig, Choice, UtilityArbiter};
use arena_tools::VecDebugSink;

fn kickoff_world(t: f32) -> WorldSnapshot {
    WorldSnapshot {
        self_vehicle: VehicleState {
            position: Vec3::new(0.0, -4608.0, 17.0),
            ..Default::default()
        },
        ball: BallState::new(Vec3::new(0.0, 0.0, 93.0), Vec3::ZERO),
        elapsed_time: t,
        is_kickoff_pause: t < 0.5,
        ..Default::default()
    }
}

#[test]
fn both_policies_assemble_from_defaults() {
    let mut config = BotConfig::default();
    assert!(build_policy(&config, Team::Blue).is_ok());
    config.policy = PolicyKind::BehaviorTree;
    assert!(build_policy(&config, Team::Orange).is_ok());
}

#[test]
fn invalid_config_fails_assembly() {
    let mut config = BotConfig::default();
    config.arena.half_width = -1.0;
    assert!(build_brain(&config, Team::Blue).is_err());
}

#[test]
fn utility_brain_plays_the_kickoff() {
    let mut brain =
        build_brain_with_debug(&BotConfig::default(), Team::Blue, VecDebugSink::default())
            .unwrap();

    for i in 0..60 {
        let cmd = brain.tick(&kickoff_world(i as f32 / 60.0));
        assert!(cmd.is_within_limits());
        assert!(cmd.throttle > 0.0);
    }
    assert_eq!(brain.faults(), 0);
    assert!(brain.debug.statuses().all(|s| s == "KickOff"));
}

#[test]
fn tree_brain_chases_the_ball() {
    let config = BotConfig {
        policy: PolicyKind::BehaviorTree,
        ..Default::default()
    };
    let mut brain = build_brain_with_debug(&config, Team::Blue, VecDebugSink::default()).unwrap();

    let world = kickoff_world(1.0);
    let cmd = brain.tick(&world);
    assert!(cmd.throttle > 0.0);
    assert_eq!(brain.debug.statuses().collect::<Vec<_>>(), vec!["GoTo"]);
}

fn tree_config() -> BotConfig {
    BotConfig {
        policy: PolicyKind::BehaviorTree,
        ..Default::default()
    }
}

#[test]
fn tree_brain_dodges_into_the_ball_on_arrival() {
    let mut brain =
        build_brain_with_debug(&tree_config(), Team::Blue, VecDebugSink::default()).unwrap();

    let mut world = kickoff_world(1.0);
    world.self_vehicle.position = Vec3::new(0.0, -60.0, 17.0);
    let cmd = brain.tick(&world);

    assert_ne!(cmd, ActuationCommand::neutral());
    assert!(cmd.jump);
    assert_eq!(brain.faults(), 0);
    assert_eq!(brain.debug.statuses().collect::<Vec<_>>(), vec!["Dodge"]);
}

#[test]
fn tree_brain_drives_through_the_ball_while_dodge_cools_down() {
    let mut brain =
        build_brain_with_debug(&tree_config(), Team::Blue, VecDebugSink::default()).unwrap();

    let mut world = kickoff_world(1.0);
    world.self_vehicle.position = Vec3::new(0.0, -60.0, 17.0);
    brain.tick(&world);

    // Wheels down after the aim phase ends the dodge; the next one is still cooling down.
    world.elapsed_time = 1.2;
    let cmd = brain.tick(&world);

    assert!(cmd.throttle > 0.0);
    assert!(!cmd.jump);
    assert_eq!(brain.faults(), 0);
    assert_eq!(
        brain.debug.statuses().collect::<Vec<_>>(),
        vec!["Dodge", "GoTo"]
    );
}

#[test]
fn tree_brain_recovers_when_airborne() {
    let mut brain =
        build_brain_with_debug(&tree_config(), Team::Blue, VecDebugSink::default()).unwrap();

    let mut world = kickoff_world(1.0);
    world.self_vehicle.position.z = 500.0;
    world.self_vehicle.wheel_contact = false;
    brain.tick(&world);

    assert_eq!(brain.faults(), 0);
    assert_eq!(
        brain.debug.statuses().collect::<Vec<_>>(),
        vec!["RecoverOrientation"]
    );
}

#[test]
fn zero_gravity_config_is_rejected() {
    assert!(BotConfig::from_yaml_str("ballistics:\n  gravity: 0.0\n").is_err());
}

#[test]
fn weightless_ball_prediction_still_returns_a_command() {
    let field = Field::new(
        ArenaConfig::default(),
        Ballistics {
            gravity: 0.0,
            ..Ballistics::default()
        },
        Team::Blue,
    );
    let roster: Vec<Box<dyn Choice>> = vec![
        Box::new(ClearBall::new(field)),
        Box::new(SaveGoal::new(field)),
    ];
    let arbiter = UtilityArbiter::new(roster, ArbiterConfig::default()).unwrap();
    let mut brain = Brain::new(Box::new(arbiter));

    let world = WorldSnapshot {
        self_vehicle: VehicleState {
            position: Vec3::new(0.0, -4000.0, 17.0),
            ..Default::default()
        },
        ball: BallState::new(Vec3::new(0.0, -2000.0, 600.0), Vec3::new(0.0, 0.0, -1.0e-4)),
        elapsed_time: 3.0,
        ..Default::default()
    };
    let cmd = brain.tick(&world);
    assert!(cmd.is_within_limits());
    assert_eq!(brain.faults(), 0);
}
