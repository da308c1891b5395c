use arena_core::arena::BALL_RADIUS;
use arena_core::math::flat;
use arena_core::{ArenaConfig, BallPredictor, WorldSnapshot};
use glam::Vec3;

use crate::Route;

/// Distance from the car's centre to its nose when touching the ball.
const CAR_NOSE: f32 = 60.0;
/// How far behind the contact point the car lines up before driving through the ball.
const APPROACH_DISTANCE: f32 = 600.0;
/// Cosine of the largest angle between car→contact and the shot line that counts as lined up.
const LINED_UP_COS: f32 = 0.866;

pub trait RoutePlanner {
    /// Plans from the vehicle's current position to `target`.
    fn find_route(&self, world: &WorldSnapshot, target: Vec3) -> Route;
}

/// Plans straight-line routes inside the arena box.
///
/// A route is infeasible when any waypoint falls outside the arena shrunk by `margin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaRoutePlanner {
    pub arena: ArenaConfig,
    pub margin: f32,
}

impl ArenaRoutePlanner {
    pub fn new(arena: ArenaConfig) -> Self {
        Self {
            arena,
            margin: 50.0,
        }
    }

    fn all_inside(&self, points: &[Vec3]) -> bool {
        points.iter().all(|p| self.arena.contains(*p, self.margin))
    }
}

impl RoutePlanner for ArenaRoutePlanner {
    fn find_route(&self, world: &WorldSnapshot, target: Vec3) -> Route {
        let start = world.self_vehicle.position;
        let waypoints = vec![target];
        let feasible = self.all_inside(&waypoints);
        Route::new(start, waypoints, feasible)
    }
}

/// Plans a strike on the ball at its next landing so that it travels toward `aim`.
///
/// The route lines the car up behind the landing point on the ball→aim line (skipped when the
/// car is already lined up) and then drives through the contact point.
pub fn find_route_to_next_ball_landing(
    planner: &ArenaRoutePlanner,
    world: &WorldSnapshot,
    predictor: &dyn BallPredictor,
    aim: Vec3,
) -> Route {
    let arrival = predictor.time_to_reach_height(&world.ball, BALL_RADIUS + 1.0);
    let landing = flat(predictor.advance(&world.ball, arrival.time.max(0.0)).position);

    let car = flat(world.self_vehicle.position);
    let mut shot_dir = flat(aim - landing).normalize_or_zero();
    if shot_dir == Vec3::ZERO {
        shot_dir = (landing - car).normalize_or_zero();
    }

    let contact = landing - shot_dir * (BALL_RADIUS + CAR_NOSE);
    let approach = contact - shot_dir * APPROACH_DISTANCE;

    let car_to_contact = (contact - car).normalize_or_zero();
    let lined_up = car_to_contact.dot(shot_dir) >= LINED_UP_COS;

    let waypoints = if lined_up {
        vec![contact]
    } else {
        vec![approach, contact]
    };
    let feasible = planner.all_inside(&waypoints);
    Route::new(world.self_vehicle.position, waypoints, feasible)
}
