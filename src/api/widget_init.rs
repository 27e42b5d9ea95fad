use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{BreakpointTable, ElementSelectors, LoadLimit, ViewportProvider};
use crate::error::{SliderError, SliderResult};
use crate::render::{ElementFrame, SliderFrame, SliderSurface};

use super::validation::{tab_trap_fields, validate_behavior, validate_item_size};
use super::widget_core::{SliderState, WidgetCore};
use super::{SliderOptions, SliderWidget};

impl<S: SliderSurface> SliderWidget<S> {
    /// Binds a slider to the host elements named in `options`.
    ///
    /// Measures the first item, trims the item set to the load limit, then
    /// applies the profile matching the current viewport width (the first
    /// profile when none matches).
    pub fn try_new<P: ViewportProvider>(
        surface: S,
        options: SliderOptions,
        provider: &mut P,
    ) -> SliderResult<Self> {
        validate_behavior(&options.behavior)?;
        let mut behavior = options.behavior;
        behavior.tab_trap_fields = tab_trap_fields(behavior.tab_trap_fields);
        let table = BreakpointTable::new(options.breakpoints.iter().copied())?;
        let elements = options.elements;

        for (role, selector) in elements.roles() {
            if !provider.resolve(selector) {
                return Err(SliderError::MissingElement {
                    role,
                    selector: selector.to_owned(),
                });
            }
        }

        let available = provider.item_count(&elements.strip, &elements.items);
        if available == 0 {
            return Err(SliderError::NoItems {
                selector: elements.items.clone(),
            });
        }
        let item_size = measure_item_size(provider, &elements)?;

        let item_count = LoadLimit::apply(options.load_limit, available);
        if item_count < available {
            debug!(available, item_count, "trimming items to load limit");
            provider.truncate_items(&elements.strip, &elements.items, item_count);
        }

        let viewport_width = provider.viewport_width();
        let profile_index = table.resolve(viewport_width).unwrap_or(0);
        let active_profile = table.profiles()[profile_index];

        let mut widget = Self {
            surface,
            core: WidgetCore {
                elements,
                table,
                behavior,
                viewport_width,
                active_profile_index: profile_index,
                active_profile,
                state: SliderState::reset(item_size, item_count),
                frame: SliderFrame {
                    container: ElementFrame::default(),
                    view: ElementFrame::default(),
                    strip: ElementFrame::default(),
                    prev: None,
                    next: None,
                    paging: None,
                    loaded_items: item_count,
                },
                plugins: IndexMap::new(),
            },
        };
        widget.reconfigure(profile_index, item_size);
        Ok(widget)
    }

    /// Permissive form of [`SliderWidget::try_new`].
    ///
    /// Construction problems are logged and yield `None`; the host page keeps
    /// working without a slider.
    pub fn mount<P: ViewportProvider>(
        surface: S,
        options: SliderOptions,
        provider: &mut P,
    ) -> Option<Self> {
        match Self::try_new(surface, options, provider) {
            Ok(widget) => Some(widget),
            Err(err) => {
                warn!(error = %err, "slider not constructed");
                None
            }
        }
    }
}

/// Outer width of the first item.
pub(super) fn measure_item_size<P: ViewportProvider + ?Sized>(
    provider: &P,
    elements: &ElementSelectors,
) -> SliderResult<f64> {
    let item = provider
        .item_box(&elements.strip, &elements.items, 0)
        .ok_or_else(|| SliderError::NoItems {
            selector: elements.items.clone(),
        })?;
    validate_item_size(item.outer_width_px()?)
}
