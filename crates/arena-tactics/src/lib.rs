//! The concrete bot: tactical choices, tree tasks, scoring curves and assembly.
//!
//! [`build_brain`] is the entry point: it reads a [`BotConfig`], builds either the utility
//! roster or the default behavior tree, and wraps it in a [`Brain`](arena_core::Brain).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod assembly;
pub mod choices;
pub mod config;
pub mod curves;
pub mod error;
mod field;
pub mod tasks;

pub use assembly::{
    build_arbiter, build_brain, build_brain_with_debug, build_policy, build_tree, default_tree,
    field_for, standard_roster,
};
pub use config::{
    ArbiterSettings, BallisticsSettings, BotConfig, DodgeSettings, PolicyKind, TreeSettings,
};
pub use error::AssemblyError;
pub use field::Field;
pub use tasks::{Dodge, GoTo, RecoverOrientation, Wait};
