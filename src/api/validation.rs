use indexmap::IndexSet;
use tracing::trace;

use crate::error::{SliderError, SliderResult};

use super::SliderBehavior;

pub(super) fn validate_behavior(behavior: &SliderBehavior) -> SliderResult<()> {
    if !behavior.drag_threshold_px.is_finite() || behavior.drag_threshold_px < 0.0 {
        return Err(SliderError::InvalidData(
            "drag threshold must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

/// Builds the tab-trap set, dropping empty names.
pub(super) fn tab_trap_fields<I, N>(names: I) -> IndexSet<String>
where
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    let fields: IndexSet<String> = names
        .into_iter()
        .map(Into::into)
        .filter(|name: &String| !name.is_empty())
        .collect();
    trace!(count = fields.len(), "tab trap fields");
    fields
}

pub(super) fn validate_item_size(item_size_px: f64) -> SliderResult<f64> {
    if !item_size_px.is_finite() || item_size_px <= 0.0 {
        return Err(SliderError::InvalidData(format!(
            "item size must be finite and > 0, got {item_size_px}"
        )));
    }
    Ok(item_size_px)
}
