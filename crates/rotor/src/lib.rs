//! Angle tracking and value mapping for on-screen rotary controls.
//!
//! [`ContinuousRotary`] maps a stepped numeric range onto a partial sweep,
//! [`DiscreteRotary`] snaps among labels placed around a full circle, and
//! [`RotorInput`] feeds either one from pointer, key, wheel and
//! direct-select events. Every operation is a pure computation over the
//! caller's current value; only the in-flight drag gesture is held here.

pub mod angle;
pub mod continuous;
pub mod discrete;
pub mod error;
pub mod geometry;
pub mod input;
pub mod macros;
pub mod session;

pub use continuous::{ContinuousRotary, RangeCommand, RangeConfig};
pub use discrete::{AngleOverride, DiscreteRotary, Label, SelectionConfig, SelectorCommand};
pub use error::{ConfigError, RotaryError};
pub use geometry::{Bounds, Point};
pub use input::{
    Command, Direction, DragState, Extreme, HitArea, InputEvent, Key, Outcome, Rotary, RotorInput,
};
pub use session::DragSession;
