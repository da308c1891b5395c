//! Utility arbitration.
//!
//! Every tick the arbiter scores a fixed roster of [`Choice`]s and lets one of them drive. The
//! active choice is kept unless another beats it by more than the switch threshold, and ties are
//! broken by roster order, so identical inputs always select the same choice.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod arbiter;
pub mod choice;
#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub mod bt;

pub use arbiter::{ArbiterConfig, ArbiterError, UtilityArbiter};
pub use choice::{Choice, ChoiceError};
#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use bt::ArbiterTask;
