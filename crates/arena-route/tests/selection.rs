use arena_core::{ArenaConfig, Vec3, VehicleState, WorldSnapshot};
use arena_route::{pick_best, ArenaRoutePlanner, Route, RoutePlanner};

#[test]
fn feasible_route_wins_over_shorter_infeasible_one() {
    let short_blocked = Route::new(Vec3::ZERO, vec![Vec3::new(100.0, 0.0, 0.0)], false);
    let long_clear = Route::new(Vec3::ZERO, vec![Vec3::new(500.0, 0.0, 0.0)], true);

    let best = pick_best([short_blocked, long_clear.clone()]);
    assert_eq!(best, Some(long_clear));
}

#[test]
fn shortest_feasible_candidate_is_selected() {
    let planner = ArenaRoutePlanner::new(ArenaConfig::default());
    let world = WorldSnapshot {
        self_vehicle: VehicleState {
            position: Vec3::new(0.0, -1000.0, 17.0),
            ..Default::default()
        },
        ..Default::default()
    };

    let candidates = [
        Vec3::new(3000.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 8000.0, 0.0),
    ]
    .map(|target| planner.find_route(&world, target));

    let best = pick_best(candidates).map(|r| r.destination());
    assert_eq!(best, Some(Vec3::ZERO));
}

#[test]
fn no_candidates_means_no_route() {
    assert_eq!(pick_best(Vec::<Route>::new()), None);
}
