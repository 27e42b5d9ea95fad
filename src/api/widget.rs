use crate::error::SliderResult;
use crate::render::{SliderFrame, SliderSurface};

use super::SliderEvent;
use super::widget_core::WidgetCore;

/// Main facade consumed by host applications.
///
/// `SliderWidget` owns the breakpoint table, the position state machine and
/// the materialized frame, and pushes that frame to its surface on `render`.
/// Every input method mutates state only; nothing reaches the host until
/// `render` is called.
pub struct SliderWidget<S: SliderSurface> {
    pub(super) surface: S,
    pub(super) core: WidgetCore,
}

impl<S: SliderSurface> SliderWidget<S> {
    /// Validates the current frame and hands it to the surface.
    pub fn render(&mut self) -> SliderResult<()> {
        self.core.frame.validate()?;
        self.surface.apply(&self.core.frame)?;
        self.emit_event(SliderEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn frame(&self) -> &SliderFrame {
        &self.core.frame
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub(super) fn set_strip_offset(&mut self, offset_px: f64) {
        self.core.state.offset_px = offset_px;
        self.core.frame.strip.left_px = Some(offset_px);
    }
}
