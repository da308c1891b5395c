//! Maneuver primitives.
//!
//! Each primitive turns the current vehicle state plus a target into one [`ActuationCommand`]
//! per tick. Stateless controllers are plain values with a `control` method; the only timed one,
//! [`DodgeControl`], reads the game clock from the snapshot and never from the wall clock.
//!
//! [`ActuationCommand`]: arena_core::ActuationCommand

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod dodge;
pub mod orientation;
pub mod steer;
pub mod turning;

pub use dodge::{DodgeControl, DodgePhase, DodgeTimings};
pub use orientation::FixOrientation;
pub use steer::{
    follow_route, is_heading_towards, reach_point_with_timing_and_velocity,
    steer_correction_smooth, SteerTowardPoint, SteerTowardPointWithTiming,
};
pub use turning::{curvature, turn_radius};
