use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};
use crate::render::ClassList;

pub const CLASS_LOADED: &str = "loaded";
pub const CLASS_GRABBING: &str = "grabbing";
pub const CLASS_SHIFTING: &str = "shifting";
pub const CLASS_HIDE: &str = "hide";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_CONTROL: &str = "control";
pub const CLASS_PAGING: &str = "paging";
pub const CLASS_INDEX: &str = "index";

/// Observable state of one host element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementFrame {
    pub id: Option<String>,
    pub classes: ClassList,
    pub width_px: Option<f64>,
    pub left_px: Option<f64>,
}

impl ElementFrame {
    #[must_use]
    pub fn with_classes(classes: ClassList) -> Self {
        Self {
            classes,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn validate(&self, role: &str) -> SliderResult<()> {
        if let Some(width) = self.width_px {
            if !width.is_finite() || width < 0.0 {
                return Err(SliderError::InvalidData(format!(
                    "{role} width must be finite and >= 0"
                )));
            }
        }
        if let Some(left) = self.left_px {
            if !left.is_finite() {
                return Err(SliderError::InvalidData(format!(
                    "{role} offset must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Previous/next control handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlFrame {
    pub element: ElementFrame,
}

impl ControlFrame {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.element.has_class(CLASS_HIDE)
    }
}

/// One jump-to-page indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingIndicatorFrame {
    pub index: usize,
    pub element: ElementFrame,
}

impl PagingIndicatorFrame {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.element.has_class(CLASS_ACTIVE)
    }
}

/// Paging strip appended to the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingFrame {
    pub element: ElementFrame,
    pub indicators: Vec<PagingIndicatorFrame>,
}

impl PagingFrame {
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.indicators.iter().map(|indicator| indicator.index).collect()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.indicators
            .iter()
            .find(|indicator| indicator.is_active())
            .map(|indicator| indicator.index)
    }
}

/// Backend-agnostic description of everything a slider shows.
///
/// Navigation handles are optional and rebuilt wholesale on every
/// reconfiguration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderFrame {
    pub container: ElementFrame,
    pub view: ElementFrame,
    pub strip: ElementFrame,
    pub prev: Option<ControlFrame>,
    pub next: Option<ControlFrame>,
    pub paging: Option<PagingFrame>,
    pub loaded_items: usize,
}

impl SliderFrame {
    pub fn validate(&self) -> SliderResult<()> {
        self.container.validate("container")?;
        self.view.validate("view")?;
        self.strip.validate("strip")?;
        for control in [&self.prev, &self.next].into_iter().flatten() {
            control.element.validate("control")?;
        }
        if let Some(paging) = &self.paging {
            let mut previous: Option<usize> = None;
            for indicator in &paging.indicators {
                if indicator.index >= self.loaded_items {
                    return Err(SliderError::InvalidData(format!(
                        "paging indicator {} is past the last loaded item",
                        indicator.index
                    )));
                }
                if previous.is_some_and(|prev| prev >= indicator.index) {
                    return Err(SliderError::InvalidData(
                        "paging indicators must be strictly increasing".to_owned(),
                    ));
                }
                previous = Some(indicator.index);
            }
        }
        Ok(())
    }

    /// Current strip translation, `0.0` before construction.
    #[must_use]
    pub fn strip_offset_px(&self) -> f64 {
        self.strip.left_px.unwrap_or(0.0)
    }

    /// Whether an animated transition is currently requested.
    #[must_use]
    pub fn is_shifting(&self) -> bool {
        self.strip.has_class(CLASS_SHIFTING)
    }
}
