mod class_list;
mod frame;
mod null_surface;

pub use class_list::ClassList;
pub use frame::{
    CLASS_ACTIVE, CLASS_CONTROL, CLASS_GRABBING, CLASS_HIDE, CLASS_INDEX, CLASS_LOADED,
    CLASS_PAGING, CLASS_SHIFTING, ControlFrame, ElementFrame, PagingFrame, PagingIndicatorFrame,
    SliderFrame,
};
pub use null_surface::NullSurface;

use crate::error::SliderResult;

/// Contract implemented by any host binding.
///
/// Surfaces receive a fully materialized `SliderFrame` so host code never
/// reaches into slider state, and slider code never touches host elements.
pub trait SliderSurface {
    fn apply(&mut self, frame: &SliderFrame) -> SliderResult<()>;
}
