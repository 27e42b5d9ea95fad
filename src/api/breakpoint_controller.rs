use tracing::{debug, trace, warn};

use crate::core::ViewportProvider;
use crate::render::{CLASS_GRABBING, CLASS_LOADED, CLASS_SHIFTING, SliderSurface};

use super::widget_core::SliderState;
use super::widget_init::measure_item_size;
use super::{SliderEvent, SliderWidget};

impl<S: SliderSurface> SliderWidget<S> {
    /// Handles a viewport resize notification.
    ///
    /// When a profile covers the new width the slider is fully reconfigured,
    /// which also abandons any drag or settle in flight. Returns `false` when
    /// no profile matches and the active configuration is kept.
    pub fn resize<P: ViewportProvider + ?Sized>(&mut self, provider: &P) -> bool {
        let viewport_width = provider.viewport_width();
        self.core.viewport_width = viewport_width;
        let Some(profile_index) = self.core.table.resolve(viewport_width) else {
            trace!(viewport_width, "no breakpoint covers viewport width");
            return false;
        };

        let item_size = match measure_item_size(provider, &self.core.elements) {
            Ok(item_size) => item_size,
            Err(err) => {
                warn!(error = %err, "keeping previous item size after failed measurement");
                self.core.state.item_size
            }
        };
        self.reconfigure(profile_index, item_size);
        true
    }

    /// Applies profile `profile_index` from scratch: resets position state,
    /// resizes strip and view, and rebuilds navigation.
    pub(super) fn reconfigure(&mut self, profile_index: usize, item_size: f64) {
        let Some(profile) = self.core.table.get(profile_index).copied() else {
            warn!(profile_index, "ignoring reconfiguration to unknown profile");
            return;
        };
        debug!(
            profile_index,
            items_per_view = profile.items_per_view,
            items_per_shift = profile.items_per_shift,
            item_size,
            "reconfiguring slider"
        );

        self.core.frame.container.classes.remove(CLASS_LOADED);

        self.core.active_profile_index = profile_index;
        self.core.active_profile = profile;
        let item_count = self.core.state.item_count;
        self.core.state = SliderState::reset(item_size, item_count);

        let frame = &mut self.core.frame;
        frame.strip.width_px = Some(item_size * item_count as f64);
        frame.strip.classes.remove(CLASS_SHIFTING);
        frame.view.width_px = Some(item_size * profile.items_per_view as f64);
        frame.view.classes.remove(CLASS_GRABBING);
        self.set_strip_offset(0.0);

        self.rebuild_navigation();

        self.core.frame.container.classes.add(CLASS_LOADED);
        self.emit_event(SliderEvent::Configured { profile_index });
    }
}
