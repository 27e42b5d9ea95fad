use serde::{Deserialize, Serialize};

use crate::core::ShiftDirection;
use crate::interaction::SlidePhaseKind;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderContext {
    pub viewport_width: u32,
    pub active_profile_index: usize,
    pub current_index: usize,
    pub item_count: usize,
    pub item_size_px: f64,
    pub offset_px: f64,
    pub phase: SlidePhaseKind,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    Configured { profile_index: usize },
    DragStarted { pointer_x: f64 },
    DragEnded { displacement_px: f64 },
    ShiftRequested { direction: ShiftDirection },
    RequestDropped,
    Jumped { index: usize },
    Settled { index: usize },
    DriftCorrected { from_px: f64, to_px: f64 },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read slider context without mutating widget
/// internals directly.
pub trait SliderPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SliderEvent, context: SliderContext);
}
