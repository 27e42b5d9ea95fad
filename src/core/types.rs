use serde::{Deserialize, Serialize};

use crate::core::css_length::parse_px_length;
use crate::error::SliderResult;

/// Selector bundle naming the host elements a slider binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSelectors {
    pub container: String,
    pub view: String,
    #[serde(alias = "wrapper")]
    pub strip: String,
    #[serde(alias = "slides")]
    pub items: String,
}

impl ElementSelectors {
    #[must_use]
    pub fn new(
        container: impl Into<String>,
        view: impl Into<String>,
        strip: impl Into<String>,
        items: impl Into<String>,
    ) -> Self {
        Self {
            container: container.into(),
            view: view.into(),
            strip: strip.into(),
            items: items.into(),
        }
    }

    /// Selectors paired with the role name used in diagnostics.
    #[must_use]
    pub fn roles(&self) -> [(&'static str, &str); 3] {
        [
            ("container", self.container.as_str()),
            ("view", self.view.as_str()),
            ("strip", self.strip.as_str()),
        ]
    }
}

/// Computed box of one item as reported by the host, in CSS pixel lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBox {
    pub margin_left: String,
    pub margin_right: String,
    pub width: String,
}

impl ItemBox {
    #[must_use]
    pub fn new(
        margin_left: impl Into<String>,
        margin_right: impl Into<String>,
        width: impl Into<String>,
    ) -> Self {
        Self {
            margin_left: margin_left.into(),
            margin_right: margin_right.into(),
            width: width.into(),
        }
    }

    /// Convenience constructor from pixel values.
    #[must_use]
    pub fn from_px(margin_left: f64, margin_right: f64, width: f64) -> Self {
        Self::new(
            format!("{margin_left}px"),
            format!("{margin_right}px"),
            format!("{width}px"),
        )
    }

    /// Outer width: margin-left + margin-right + content width.
    pub fn outer_width_px(&self) -> SliderResult<f64> {
        Ok(parse_px_length(&self.margin_left)?
            + parse_px_length(&self.margin_right)?
            + parse_px_length(&self.width)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftDirection {
    Forward,
    Backward,
}

impl ShiftDirection {
    /// Sign applied to the item index when shifting in this direction.
    #[must_use]
    pub fn index_sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Sign applied to the strip offset; moving forward translates left.
    #[must_use]
    pub fn offset_sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Backward => 1.0,
        }
    }
}
