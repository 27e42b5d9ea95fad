use tracing::trace;

use crate::interaction::{DragRelease, GestureSource, SlidePhase};
use crate::render::{CLASS_GRABBING, SliderSurface};

use super::{SliderEvent, SliderWidget};

impl<S: SliderSurface> SliderWidget<S> {
    pub fn pointer_down(&mut self, x: f64) -> bool {
        if !self.core.behavior.mouse_drag {
            return false;
        }
        self.gesture_start(GestureSource::Mouse, x)
    }

    pub fn pointer_move(&mut self, x: f64) -> bool {
        self.gesture_move(GestureSource::Mouse, x)
    }

    pub fn pointer_up(&mut self) -> bool {
        self.gesture_end(GestureSource::Mouse)
    }

    pub fn touch_start(&mut self, x: f64) -> bool {
        if !self.core.behavior.touch_drag {
            return false;
        }
        self.gesture_start(GestureSource::Touch, x)
    }

    pub fn touch_move(&mut self, x: f64) -> bool {
        self.gesture_move(GestureSource::Touch, x)
    }

    pub fn touch_end(&mut self) -> bool {
        self.gesture_end(GestureSource::Touch)
    }

    fn gesture_start(&mut self, source: GestureSource, pointer_x: f64) -> bool {
        if !pointer_x.is_finite() {
            return false;
        }
        let phase = self.core.state.phase;
        if phase != SlidePhase::Idle {
            trace!(phase = ?phase.kind(), "ignoring gesture start");
            return false;
        }
        self.core.state.phase = phase.begin_drag(source, self.core.state.offset_px, pointer_x);
        self.core.frame.view.classes.add(CLASS_GRABBING);
        self.emit_event(SliderEvent::DragStarted { pointer_x });
        true
    }

    fn gesture_move(&mut self, source: GestureSource, pointer_x: f64) -> bool {
        let SlidePhase::Dragging(mut gesture) = self.core.state.phase else {
            return false;
        };
        if gesture.source != source || !pointer_x.is_finite() {
            return false;
        }
        let delta = gesture.advance(pointer_x);
        self.core.state.phase = SlidePhase::Dragging(gesture);
        self.set_strip_offset(self.core.state.offset_px + delta);
        true
    }

    fn gesture_end(&mut self, source: GestureSource) -> bool {
        let SlidePhase::Dragging(gesture) = self.core.state.phase else {
            return false;
        };
        if gesture.source != source {
            return false;
        }
        self.core.frame.view.classes.remove(CLASS_GRABBING);

        let displacement_px = gesture.displacement(self.core.state.offset_px);
        self.emit_event(SliderEvent::DragEnded { displacement_px });

        match DragRelease::classify(displacement_px, self.core.behavior.drag_threshold_px) {
            DragRelease::Shift(direction) => {
                self.request_shift(direction, gesture.start_offset_px);
            }
            DragRelease::SnapBack => {
                trace!(displacement_px, "drag below threshold, snapping back");
                self.core.state.phase = SlidePhase::Idle;
                self.set_strip_offset(gesture.start_offset_px);
            }
        }
        true
    }
}
