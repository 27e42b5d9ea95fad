//! Optional observer hooks live here.
//!
//! Keep extensions read-only and avoid coupling them into state transitions.

pub mod plugins;

pub use plugins::{SliderContext, SliderEvent, SliderPlugin};
