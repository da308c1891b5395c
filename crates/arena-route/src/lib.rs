//! Route planning primitives: candidate routes, the selection policy between them, ball
//! interception, and aim cones for lining up shots.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod aim;
pub mod intercept;
pub mod planner;
pub mod route;

pub use aim::AimCone;
pub use intercept::{intercept, Intercept};
pub use planner::{find_route_to_next_ball_landing, ArenaRoutePlanner, RoutePlanner};
pub use route::{pick_best, Route};
