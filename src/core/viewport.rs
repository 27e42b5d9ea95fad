use indexmap::IndexSet;

use crate::core::ItemBox;

/// Host-side measurement source for a slider.
///
/// Implementations wrap whatever element tree the host renders into: a DOM,
/// a retained widget tree, or the in-memory [`StaticViewport`].
pub trait ViewportProvider {
    /// Whether `selector` names an existing element.
    fn resolve(&self, selector: &str) -> bool;

    /// Number of item elements under the strip.
    fn item_count(&self, strip: &str, items: &str) -> usize;

    /// Computed box of the item at `index`.
    fn item_box(&self, strip: &str, items: &str, index: usize) -> Option<ItemBox>;

    /// Current global viewport width in CSS pixels.
    fn viewport_width(&self) -> u32;

    /// Removes every item at or after `len` from the strip.
    fn truncate_items(&mut self, strip: &str, items: &str, len: usize);
}

/// In-memory viewport used by headless hosts, tools and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticViewport {
    elements: IndexSet<String>,
    items: Vec<ItemBox>,
    viewport_width: u32,
}

impl StaticViewport {
    #[must_use]
    pub fn new(viewport_width: u32) -> Self {
        Self {
            viewport_width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_element(mut self, selector: impl Into<String>) -> Self {
        self.elements.insert(selector.into());
        self
    }

    /// Registers the container/view/strip selectors in one call.
    #[must_use]
    pub fn with_elements<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements.extend(selectors.into_iter().map(Into::into));
        self
    }

    /// Appends `count` identical items.
    #[must_use]
    pub fn with_uniform_items(mut self, count: usize, item: ItemBox) -> Self {
        self.items.extend(std::iter::repeat_n(item, count));
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: ItemBox) -> Self {
        self.items.push(item);
        self
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Replaces every item box, e.g. after a stylesheet change.
    pub fn restyle_items(&mut self, item: ItemBox) {
        for slot in &mut self.items {
            *slot = item.clone();
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ItemBox] {
        &self.items
    }
}

impl ViewportProvider for StaticViewport {
    fn resolve(&self, selector: &str) -> bool {
        self.elements.contains(selector)
    }

    fn item_count(&self, _strip: &str, _items: &str) -> usize {
        self.items.len()
    }

    fn item_box(&self, _strip: &str, _items: &str, index: usize) -> Option<ItemBox> {
        self.items.get(index).cloned()
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn truncate_items(&mut self, _strip: &str, _items: &str, len: usize) {
        self.items.truncate(len);
    }
}
