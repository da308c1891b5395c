//! Tooling around the bot's observational debug channel.
//!
//! This crate is intentionally lightweight. Rendering into a game overlay belongs to the host;
//! here we only record events or forward them to `tracing`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{DebugLog, TracingDebugSink, VecDebugSink};
