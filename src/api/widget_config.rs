use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::css_length::deserialize_lenient_load_limit;
use crate::core::{ConfigurationProfile, ElementSelectors, LoadLimit};
use crate::error::{SliderError, SliderResult};

/// Default net drag displacement a release must exceed to trigger a shift.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 50.0;

fn default_true() -> bool {
    true
}

fn default_drag_threshold_px() -> f64 {
    DEFAULT_DRAG_THRESHOLD_PX
}

/// Host-configurable input gates and gesture tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderBehavior {
    /// Release displacement (exclusive) required to shift.
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f64,
    /// Enables pressed-mouse dragging.
    #[serde(default = "default_true")]
    pub mouse_drag: bool,
    /// Enables touch dragging.
    #[serde(default = "default_true")]
    pub touch_drag: bool,
    /// Input names whose forward Tab advances the slider instead of moving focus.
    #[serde(default)]
    pub tab_trap_fields: IndexSet<String>,
}

impl Default for SliderBehavior {
    fn default() -> Self {
        Self {
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            mouse_drag: true,
            touch_drag: true,
            tab_trap_fields: IndexSet::new(),
        }
    }
}

/// Public slider bootstrap configuration.
///
/// This type is serializable so hosts can ship slider setup as JSON. Field
/// aliases accept the camelCase option names used by existing page scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderOptions {
    #[serde(alias = "options")]
    pub breakpoints: Vec<ConfigurationProfile>,
    #[serde(alias = "sliderElements")]
    pub elements: ElementSelectors,
    #[serde(
        default,
        alias = "slidesToLoad",
        deserialize_with = "deserialize_lenient_load_limit"
    )]
    pub load_limit: Option<LoadLimit>,
    #[serde(default)]
    pub behavior: SliderBehavior,
}

impl SliderOptions {
    #[must_use]
    pub fn new(breakpoints: Vec<ConfigurationProfile>, elements: ElementSelectors) -> Self {
        Self {
            breakpoints,
            elements,
            load_limit: None,
            behavior: SliderBehavior::default(),
        }
    }

    /// Keeps at most `limit` items; zero keeps every item.
    #[must_use]
    pub fn with_load_limit(mut self, limit: usize) -> Self {
        self.load_limit = LoadLimit::new(limit);
        self
    }

    #[must_use]
    pub fn with_drag_threshold_px(mut self, threshold_px: f64) -> Self {
        self.behavior.drag_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn with_mouse_drag(mut self, enabled: bool) -> Self {
        self.behavior.mouse_drag = enabled;
        self
    }

    #[must_use]
    pub fn with_touch_drag(mut self, enabled: bool) -> Self {
        self.behavior.touch_drag = enabled;
        self
    }

    #[must_use]
    pub fn with_tab_trap_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.behavior
            .tab_trap_fields
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Serializes options to pretty JSON.
    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON.
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse options: {e}")))
    }
}
