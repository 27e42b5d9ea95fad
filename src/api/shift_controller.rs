use tracing::{debug, trace};

use crate::core::{ShiftDirection, apply_shift_limit, canonical_offset, resolve_jump_target};
use crate::interaction::SettleTarget;
use crate::render::{CLASS_GRABBING, CLASS_SHIFTING, SliderSurface};

use super::{SliderEvent, SliderWidget};

/// Offsets closer than this are treated as the same position when deciding
/// whether a transition will run.
const OFFSET_EPSILON_PX: f64 = 1e-6;

fn same_offset(a: f64, b: f64) -> bool {
    (a - b).abs() <= OFFSET_EPSILON_PX
}

impl<S: SliderSurface> SliderWidget<S> {
    /// Previous-button click.
    pub fn click_prev(&mut self) -> bool {
        self.shift(ShiftDirection::Backward)
    }

    /// Next-button click.
    pub fn click_next(&mut self) -> bool {
        self.shift(ShiftDirection::Forward)
    }

    /// Paging indicator click.
    pub fn click_paging(&mut self, index: usize) -> bool {
        self.jump_to(i64::try_from(index).unwrap_or(i64::MAX))
    }

    /// Shifts by one page from the current strip offset.
    ///
    /// Returns `false` when the request is dropped because a settle is in
    /// flight.
    pub fn shift(&mut self, direction: ShiftDirection) -> bool {
        let start_offset_px = self.core.state.offset_px;
        self.request_shift(direction, start_offset_px)
    }

    /// Jumps directly to `raw_index`, resolving out-of-range targets to the
    /// ends of the sequence.
    pub fn jump_to(&mut self, raw_index: i64) -> bool {
        if self.drop_if_settling() {
            return false;
        }
        let state = self.core.state;
        let index = resolve_jump_target(
            raw_index,
            state.item_count,
            self.core.active_profile.wrap_around,
        );
        self.emit_event(SliderEvent::Jumped { index });
        self.begin_settle(SettleTarget {
            index,
            offset_px: canonical_offset(index, state.item_size),
        })
    }

    /// Animation completion notification from the host.
    ///
    /// Ignored unless a settle is in flight.
    pub fn transition_end(&mut self) -> bool {
        if !self.core.state.phase.is_settling() {
            trace!("ignoring transition end outside of a settle");
            return false;
        }
        self.complete_settle()
    }

    pub(super) fn request_shift(
        &mut self,
        direction: ShiftDirection,
        start_offset_px: f64,
    ) -> bool {
        if self.drop_if_settling() {
            return false;
        }
        let state = self.core.state;
        let profile = self.core.active_profile;
        let step = profile.items_per_shift as f64 * state.item_size;
        let raw_index = i64::try_from(state.current_index).unwrap_or(i64::MAX)
            + direction.index_sign() * i64::try_from(profile.items_per_shift).unwrap_or(1);

        let outcome = apply_shift_limit(
            raw_index,
            state.item_count,
            profile.items_per_shift,
            profile.wrap_around,
        );
        // Stepping from a resting offset lands on the target page exactly.
        let from_rest = same_offset(
            start_offset_px,
            canonical_offset(state.current_index, state.item_size),
        );
        let offset_px = if outcome.corrected() || from_rest {
            canonical_offset(outcome.index(), state.item_size)
        } else {
            start_offset_px + direction.offset_sign() * step
        };
        trace!(?direction, raw_index, ?outcome, offset_px, "shift resolved");

        self.emit_event(SliderEvent::ShiftRequested { direction });
        self.begin_settle(SettleTarget {
            index: outcome.index(),
            offset_px,
        })
    }

    fn drop_if_settling(&mut self) -> bool {
        if self.core.state.phase.is_settling() {
            debug!("dropping navigation request while a settle is in flight");
            self.emit_event(SliderEvent::RequestDropped);
            return true;
        }
        false
    }

    fn begin_settle(&mut self, target: SettleTarget) -> bool {
        let Some(phase) = self.core.state.phase.begin_settle(target) else {
            return false;
        };
        if self.core.state.phase.gesture().is_some() {
            // A settle started mid-drag abandons the gesture.
            self.core.frame.view.classes.remove(CLASS_GRABBING);
        }
        let unchanged = same_offset(self.core.state.offset_px, target.offset_px);
        self.core.state.phase = phase;
        self.core.state.current_index = target.index;
        self.set_strip_offset(target.offset_px);

        if unchanged {
            // No transition will run, so no completion notification will follow.
            self.complete_settle();
        } else {
            self.core.frame.strip.classes.add(CLASS_SHIFTING);
        }
        true
    }

    fn complete_settle(&mut self) -> bool {
        let (phase, landed) = self.core.state.phase.finish_settle();
        let Some(target) = landed else {
            return false;
        };
        self.core.state.phase = phase;
        self.core.frame.strip.classes.remove(CLASS_SHIFTING);
        self.sync_navigation();

        let index = self.core.state.current_index;
        let canonical = canonical_offset(index, self.core.state.item_size);
        let settled = self.core.state.offset_px;
        if settled != canonical {
            debug!(
                from_px = settled,
                to_px = canonical,
                target_px = target.offset_px,
                "correcting settle drift"
            );
            self.set_strip_offset(canonical);
            self.emit_event(SliderEvent::DriftCorrected {
                from_px: settled,
                to_px: canonical,
            });
        }
        self.emit_event(SliderEvent::Settled { index });
        true
    }
}
