//! Umbrella crate that re-exports the `arena-*` building blocks.
//!
//! Most users want [`tactics::build_brain`] and a [`core::WorldSnapshot`] per host tick; the
//! lower layers are exposed for hosts that assemble their own roster or tree.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use arena_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use arena_tools as tools;

#[cfg(feature = "route")]
#[cfg_attr(docsrs, doc(cfg(feature = "route")))]
pub use arena_route as route;

#[cfg(feature = "maneuver")]
#[cfg_attr(docsrs, doc(cfg(feature = "maneuver")))]
pub use arena_maneuver as maneuver;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use arena_bt as bt;

#[cfg(feature = "utility")]
#[cfg_attr(docsrs, doc(cfg(feature = "utility")))]
pub use arena_utility as utility;

#[cfg(feature = "tactics")]
#[cfg_attr(docsrs, doc(cfg(feature = "tactics")))]
pub use arena_tactics as tactics;
