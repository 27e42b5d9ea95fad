use serde::{Deserialize, Serialize};

use crate::core::ShiftDirection;

/// Pointer family that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureSource {
    Mouse,
    Touch,
}

/// Transient drag-tracking scalars, alive only between gesture start and end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub source: GestureSource,
    pub start_offset_px: f64,
    pub start_pointer_x: f64,
    pub last_pointer_x: f64,
}

impl DragGesture {
    #[must_use]
    pub fn start(source: GestureSource, strip_offset_px: f64, pointer_x: f64) -> Self {
        Self {
            source,
            start_offset_px: strip_offset_px,
            start_pointer_x: pointer_x,
            last_pointer_x: pointer_x,
        }
    }

    /// Records a pointer sample and returns the offset delta to apply.
    ///
    /// The strip follows the pointer: moving right yields a positive delta.
    pub fn advance(&mut self, pointer_x: f64) -> f64 {
        let delta = self.last_pointer_x - pointer_x;
        self.last_pointer_x = pointer_x;
        -delta
    }

    /// Net strip displacement since the gesture began.
    #[must_use]
    pub fn displacement(&self, strip_offset_px: f64) -> f64 {
        strip_offset_px - self.start_offset_px
    }
}

/// Decision taken when a drag is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragRelease {
    Shift(ShiftDirection),
    SnapBack,
}

impl DragRelease {
    /// Strict comparison: a displacement of exactly `threshold_px` snaps back.
    #[must_use]
    pub fn classify(displacement_px: f64, threshold_px: f64) -> Self {
        if displacement_px < -threshold_px {
            Self::Shift(ShiftDirection::Forward)
        } else if displacement_px > threshold_px {
            Self::Shift(ShiftDirection::Backward)
        } else {
            Self::SnapBack
        }
    }
}

/// Where an in-flight settle will land.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettleTarget {
    pub index: usize,
    pub offset_px: f64,
}

/// Position state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum SlidePhase {
    #[default]
    Idle,
    Dragging(DragGesture),
    Settling(SettleTarget),
}

impl SlidePhase {
    #[must_use]
    pub fn kind(&self) -> SlidePhaseKind {
        match self {
            Self::Idle => SlidePhaseKind::Idle,
            Self::Dragging(_) => SlidePhaseKind::Dragging,
            Self::Settling(_) => SlidePhaseKind::Settling,
        }
    }

    #[must_use]
    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Settling(_))
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&DragGesture> {
        match self {
            Self::Dragging(gesture) => Some(gesture),
            _ => None,
        }
    }

    /// `Idle → Dragging`. Any other phase ignores the gesture.
    #[must_use]
    pub fn begin_drag(self, source: GestureSource, strip_offset_px: f64, pointer_x: f64) -> Self {
        match self {
            Self::Idle => Self::Dragging(DragGesture::start(source, strip_offset_px, pointer_x)),
            other => other,
        }
    }

    /// `Idle/Dragging → Settling`; returns `None` while a settle is in flight.
    #[must_use]
    pub fn begin_settle(self, target: SettleTarget) -> Option<Self> {
        match self {
            Self::Settling(_) => None,
            Self::Idle | Self::Dragging(_) => Some(Self::Settling(target)),
        }
    }

    /// `Settling → Idle`; returns the landed target, if any.
    #[must_use]
    pub fn finish_settle(self) -> (Self, Option<SettleTarget>) {
        match self {
            Self::Settling(target) => (Self::Idle, Some(target)),
            other => (other, None),
        }
    }
}

/// Payload-free phase tag exposed in snapshots and plugin contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlidePhaseKind {
    Idle,
    Dragging,
    Settling,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_deltas_accumulate_into_displacement() {
        let mut gesture = DragGesture::start(GestureSource::Mouse, -400.0, 300.0);
        let mut offset = -400.0;
        offset += gesture.advance(280.0);
        offset += gesture.advance(240.0);
        assert_eq!(offset, -460.0);
        assert_eq!(gesture.displacement(offset), -60.0);
        assert_eq!(gesture.last_pointer_x, 240.0);
    }

    #[test]
    fn release_threshold_is_strict() {
        assert_eq!(
            DragRelease::classify(-51.0, 50.0),
            DragRelease::Shift(ShiftDirection::Forward)
        );
        assert_eq!(DragRelease::classify(-50.0, 50.0), DragRelease::SnapBack);
        assert_eq!(DragRelease::classify(50.0, 50.0), DragRelease::SnapBack);
        assert_eq!(
            DragRelease::classify(50.5, 50.0),
            DragRelease::Shift(ShiftDirection::Backward)
        );
    }

    #[test]
    fn settling_rejects_reentry() {
        let target = SettleTarget {
            index: 2,
            offset_px: -200.0,
        };
        let settling = SlidePhase::Idle.begin_settle(target).expect("idle accepts");
        assert!(settling.begin_settle(target).is_none());
        assert_eq!(
            settling.begin_drag(GestureSource::Touch, 0.0, 0.0),
            settling
        );
        let (idle, landed) = settling.finish_settle();
        assert_eq!(idle, SlidePhase::Idle);
        assert_eq!(landed, Some(target));
        assert_eq!(SlidePhase::Idle.finish_settle(), (SlidePhase::Idle, None));
    }
}
