//! Observational debug channel.
//!
//! Policies may describe what they are doing (lines toward targets, status text). Sinks only
//! record or forward; nothing emitted here may feed back into a decision.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DebugShape {
    Line { from: Vec3, to: Vec3, color: Color },
    Status { text: Cow<'static, str> },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DebugEvent {
    pub tick: u64,
    pub shape: DebugShape,
}

impl DebugEvent {
    pub fn line(tick: u64, from: Vec3, to: Vec3, color: Color) -> Self {
        Self {
            tick,
            shape: DebugShape::Line { from, to, color },
        }
    }

    pub fn status(tick: u64, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            shape: DebugShape::Status { text: text.into() },
        }
    }
}

pub trait DebugSink {
    fn emit(&mut self, event: DebugEvent);

    fn line(&mut self, tick: u64, from: Vec3, to: Vec3, color: Color) {
        self.emit(DebugEvent::line(tick, from, to, color));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullDebugSink;

impl DebugSink for NullDebugSink {
    fn emit(&mut self, _event: DebugEvent) {}
}
