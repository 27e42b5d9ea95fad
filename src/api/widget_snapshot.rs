use serde::{Deserialize, Serialize};

use crate::core::ConfigurationProfile;
use crate::interaction::SlidePhaseKind;
use crate::render::{SliderFrame, SliderSurface};

use super::SliderWidget;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub viewport_width: u32,
    pub active_profile_index: usize,
    pub active_profile: ConfigurationProfile,
    pub current_index: usize,
    pub item_count: usize,
    pub item_size_px: f64,
    pub offset_px: f64,
    pub phase: SlidePhaseKind,
    pub last_aligned_index: usize,
    pub frame: SliderFrame,
}

impl<S: SliderSurface> SliderWidget<S> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            viewport_width: self.core.viewport_width,
            active_profile_index: self.core.active_profile_index,
            active_profile: self.core.active_profile,
            current_index: self.current_index(),
            item_count: self.item_count(),
            item_size_px: self.item_size(),
            offset_px: self.offset_px(),
            phase: self.core.state.phase.kind(),
            last_aligned_index: self.last_aligned_index(),
            frame: self.core.frame.clone(),
        }
    }
}
