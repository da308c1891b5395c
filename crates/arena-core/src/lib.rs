//! Deterministic, per-tick decision kernel primitives for an arena vehicle bot.
//!
//! This crate holds the vocabulary every other `arena-*` crate speaks: the immutable world
//! snapshot delivered by the host each tick, the single actuation command returned to it, the
//! ball prediction adapter, and the `Brain` driver that turns policy faults into a safe neutral
//! command.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod arena;
pub mod brain;
pub mod command;
pub mod debug;
pub mod error;
pub mod math;
pub mod policy;
pub mod predict;
pub mod tick;
pub mod world;

pub use arena::ArenaConfig;
pub use brain::Brain;
pub use command::ActuationCommand;
pub use debug::{Color, DebugEvent, DebugShape, DebugSink, NullDebugSink};
pub use error::{ConfigError, PolicyError};
pub use math::Orientation;
pub use policy::Policy;
pub use predict::{Arrival, BallPredictor, Ballistics, PREDICTION_HORIZON};
pub use tick::TickContext;
pub use world::{BallState, BoostPad, Target, Team, VehicleState, WorldSnapshot};

pub use glam::Vec3;
