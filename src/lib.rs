//! carousel-rs: headless, responsive carousel widget.
//!
//! The crate owns the slide-position state machine, breakpoint-driven
//! reconfiguration and navigation state of a draggable carousel. Hosts feed it
//! input events and measurements, and receive a materialized `SliderFrame`
//! describing classes, widths and the strip offset to apply.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SliderOptions, SliderWidget};
pub use error::{SliderError, SliderResult};
