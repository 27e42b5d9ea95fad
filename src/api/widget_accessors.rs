use crate::core::{BreakpointTable, ConfigurationProfile, last_aligned_index, paging_indices};
use crate::interaction::SlidePhase;
use crate::render::{CLASS_LOADED, SliderSurface};

use super::{SliderBehavior, SliderWidget};

impl<S: SliderSurface> SliderWidget<S> {
    /// Logical index of the first visible item.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.core.state.current_index
    }

    /// Outer width of one item, including margins.
    #[must_use]
    pub fn item_size(&self) -> f64 {
        self.core.state.item_size
    }

    /// Number of loaded items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.core.state.item_count
    }

    /// Current strip translation in pixels (`<= 0` once settled).
    #[must_use]
    pub fn offset_px(&self) -> f64 {
        self.core.state.offset_px
    }

    #[must_use]
    pub fn phase(&self) -> SlidePhase {
        self.core.state.phase
    }

    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.core.state.phase.is_settling()
    }

    #[must_use]
    pub fn active_profile(&self) -> ConfigurationProfile {
        self.core.active_profile
    }

    #[must_use]
    pub fn active_profile_index(&self) -> usize {
        self.core.active_profile_index
    }

    #[must_use]
    pub fn breakpoints(&self) -> &BreakpointTable {
        &self.core.table
    }

    #[must_use]
    pub fn behavior(&self) -> &SliderBehavior {
        &self.core.behavior
    }

    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.core.viewport_width
    }

    /// Last shift-aligned index under the active profile.
    #[must_use]
    pub fn last_aligned_index(&self) -> usize {
        last_aligned_index(
            self.core.state.item_count,
            self.core.active_profile.items_per_shift,
        )
    }

    /// Indices that carry a paging indicator under the active profile.
    #[must_use]
    pub fn paging_indices(&self) -> Vec<usize> {
        paging_indices(
            self.core.state.item_count,
            self.core.active_profile.items_per_shift,
        )
        .collect()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.core.frame.container.has_class(CLASS_LOADED)
    }
}
