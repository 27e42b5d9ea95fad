use crate::core::{last_aligned_index, paging_indices};
use crate::render::{
    CLASS_ACTIVE, CLASS_CONTROL, CLASS_HIDE, CLASS_INDEX, CLASS_PAGING, ClassList, ControlFrame,
    ElementFrame, PagingFrame, PagingIndicatorFrame, SliderSurface,
};

use super::SliderWidget;

impl<S: SliderSurface> SliderWidget<S> {
    /// Drops every navigation handle and builds the ones the active profile
    /// enables.
    pub(super) fn rebuild_navigation(&mut self) {
        let profile = self.core.active_profile;
        let frame = &mut self.core.frame;
        frame.prev = None;
        frame.next = None;
        frame.paging = None;

        if profile.show_buttons {
            frame.prev = Some(build_control("prev", !profile.wrap_around));
            frame.next = Some(build_control("next", false));
        }
        if profile.show_paging {
            frame.paging = Some(build_paging(
                self.core.state.item_count,
                profile.items_per_shift,
            ));
        }
        self.sync_navigation();
    }

    /// Refreshes the active paging indicator and button visibility.
    pub(super) fn sync_navigation(&mut self) {
        let index = self.core.state.current_index;
        let profile = self.core.active_profile;
        let frame = &mut self.core.frame;

        if let Some(paging) = frame.paging.as_mut() {
            for indicator in &mut paging.indicators {
                indicator
                    .element
                    .classes
                    .set(CLASS_ACTIVE, indicator.index == index);
            }
        }

        if profile.wrap_around {
            return;
        }
        let last_aligned = last_aligned_index(self.core.state.item_count, profile.items_per_shift);
        if let Some(prev) = frame.prev.as_mut() {
            prev.element.classes.set(CLASS_HIDE, index == 0);
        }
        if let Some(next) = frame.next.as_mut() {
            next.element.classes.set(CLASS_HIDE, index == last_aligned);
        }
    }
}

fn build_control(name: &'static str, hidden: bool) -> ControlFrame {
    let mut classes = ClassList::new().with(CLASS_CONTROL).with(name);
    classes.set(CLASS_HIDE, hidden);
    ControlFrame {
        element: ElementFrame {
            id: Some(name.to_owned()),
            ..ElementFrame::with_classes(classes)
        },
    }
}

fn build_paging(item_count: usize, items_per_shift: usize) -> PagingFrame {
    let indicators = paging_indices(item_count, items_per_shift)
        .map(|index| {
            let mut classes = ClassList::new().with(CLASS_INDEX).with(index.to_string());
            classes.set(CLASS_ACTIVE, index == 0);
            PagingIndicatorFrame {
                index,
                element: ElementFrame::with_classes(classes),
            }
        })
        .collect();
    PagingFrame {
        element: ElementFrame::with_classes(ClassList::new().with(CLASS_PAGING)),
        indicators,
    }
}
