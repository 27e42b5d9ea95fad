//! End-of-sequence arithmetic shared by shifts, jumps, buttons and paging.
//!
//! Indices are signed on input because a shift may step past either end
//! before the policy pulls it back.

use serde::{Deserialize, Serialize};

/// Last index that is a multiple of `items_per_shift`.
///
/// Equals `item_count - item_count % items_per_shift` when the remainder is
/// nonzero, and `item_count - items_per_shift` otherwise.
#[must_use]
pub fn last_aligned_index(item_count: usize, items_per_shift: usize) -> usize {
    let shift = items_per_shift.max(1);
    if item_count == 0 {
        return 0;
    }
    shift * ((item_count - 1) / shift)
}

/// Result of applying the limit policy to a raw shifted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitOutcome {
    InRange(usize),
    Wrapped(usize),
    Clamped(usize),
}

impl LimitOutcome {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::InRange(index) | Self::Wrapped(index) | Self::Clamped(index) => index,
        }
    }

    /// Whether the policy replaced the raw index.
    #[must_use]
    pub fn corrected(self) -> bool {
        !matches!(self, Self::InRange(_))
    }
}

/// Limit policy applied after a shift mutates the index.
#[must_use]
pub fn apply_shift_limit(
    raw_index: i64,
    item_count: usize,
    items_per_shift: usize,
    wrap_around: bool,
) -> LimitOutcome {
    let last_aligned = last_aligned_index(item_count, items_per_shift);
    let count = i64::try_from(item_count).unwrap_or(i64::MAX);
    if raw_index < 0 {
        if wrap_around {
            LimitOutcome::Wrapped(last_aligned)
        } else {
            LimitOutcome::Clamped(0)
        }
    } else if raw_index >= count {
        if wrap_around {
            LimitOutcome::Wrapped(0)
        } else {
            LimitOutcome::Clamped(last_aligned)
        }
    } else {
        LimitOutcome::InRange(usize::try_from(raw_index).unwrap_or(0))
    }
}

/// Target index for a direct jump.
///
/// Unlike shifts, jumps resolve out-of-range targets to the absolute ends of
/// the sequence rather than to the last shift-aligned index.
#[must_use]
pub fn resolve_jump_target(raw_index: i64, item_count: usize, wrap_around: bool) -> usize {
    let last = item_count.saturating_sub(1);
    let count = i64::try_from(item_count).unwrap_or(i64::MAX);
    if raw_index < 0 {
        if wrap_around { last } else { 0 }
    } else if raw_index >= count {
        if wrap_around { 0 } else { last }
    } else {
        usize::try_from(raw_index).unwrap_or(0)
    }
}

/// Indices that receive a paging indicator.
pub fn paging_indices(item_count: usize, items_per_shift: usize) -> impl Iterator<Item = usize> {
    (0..item_count).step_by(items_per_shift.max(1))
}

/// Strip offset that shows `index` as the first visible item.
#[must_use]
pub fn canonical_offset(index: usize, item_size: f64) -> f64 {
    -(index as f64 * item_size)
}
