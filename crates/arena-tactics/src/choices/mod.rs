//! The standard roster of utility choices.
//!
//! Scores deliberately leave the unit range in places (kickoff scores `2`, an empty tank scores
//! `-0.5`); the arbiter compares them as they are.

mod boost;
mod dribble;
mod goal;
mod kickoff;
mod recovery;
mod shoot;

pub use boost::{CollectBoost, SpecificBoostPad};
pub use dribble::Dribble;
pub use goal::{ClearBall, SaveGoal};
pub use kickoff::KickOff;
pub use recovery::FixAirOrientation;
pub use shoot::ShootAtGoal;

use arena_core::{Vec3, WorldSnapshot};
use arena_route::{find_route_to_next_ball_landing, pick_best, ArenaRoutePlanner, Route};

use crate::Field;

/// Best route (per the usual feasibility-then-length rule) to strike the ball's next landing
/// toward any of `aims`.
pub(crate) fn best_landing_route(field: &Field, world: &WorldSnapshot, aims: &[Vec3]) -> Route {
    let planner = ArenaRoutePlanner::new(field.arena);
    let candidates = aims
        .iter()
        .map(|aim| find_route_to_next_ball_landing(&planner, world, &field.ballistics, *aim));
    pick_best(candidates).unwrap_or_else(|| {
        Route::new(
            world.self_vehicle.position,
            vec![world.ball.position],
            false,
        )
    })
}
