use crate::extensions::SliderContext;
use crate::render::SliderSurface;

use super::{SliderEvent, SliderWidget};

impl<S: SliderSurface> SliderWidget<S> {
    pub(super) fn plugin_context(&self) -> SliderContext {
        let state = &self.core.state;
        SliderContext {
            viewport_width: self.core.viewport_width,
            active_profile_index: self.core.active_profile_index,
            current_index: state.current_index,
            item_count: state.item_count,
            item_size_px: state.item_size,
            offset_px: state.offset_px,
            phase: state.phase.kind(),
        }
    }

    pub(super) fn emit_event(&mut self, event: SliderEvent) {
        if self.core.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in self.core.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
