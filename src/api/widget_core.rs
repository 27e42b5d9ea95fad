use indexmap::IndexMap;

use crate::core::{BreakpointTable, ConfigurationProfile, ElementSelectors};
use crate::extensions::SliderPlugin;
use crate::interaction::SlidePhase;
use crate::render::SliderFrame;

use super::SliderBehavior;

/// Mutable position state, reset on every reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SliderState {
    pub(super) current_index: usize,
    pub(super) item_size: f64,
    pub(super) item_count: usize,
    pub(super) offset_px: f64,
    pub(super) phase: SlidePhase,
}

impl SliderState {
    #[must_use]
    pub(super) fn reset(item_size: f64, item_count: usize) -> Self {
        Self {
            current_index: 0,
            item_size,
            item_count,
            offset_px: 0.0,
            phase: SlidePhase::Idle,
        }
    }
}

/// Internal widget state used by the public facade (`SliderWidget`).
pub(super) struct WidgetCore {
    pub(super) elements: ElementSelectors,
    pub(super) table: BreakpointTable,
    pub(super) behavior: SliderBehavior,
    pub(super) viewport_width: u32,
    pub(super) active_profile_index: usize,
    pub(super) active_profile: ConfigurationProfile,
    pub(super) state: SliderState,
    pub(super) frame: SliderFrame,
    /// Observers in registration order, keyed by id.
    pub(super) plugins: IndexMap<String, Box<dyn SliderPlugin>>,
}
