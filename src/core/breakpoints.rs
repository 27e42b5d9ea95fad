use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{SliderError, SliderResult};

/// Breakpoint width of the synthetic profile appended to single-entry tables.
pub const FALLBACK_BREAKPOINT_PX: u32 = 500;

fn default_items_per_shift() -> usize {
    1
}

/// Behavioral parameters applied while the viewport is inside one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationProfile {
    #[serde(alias = "slidesToShow")]
    pub items_per_view: usize,
    #[serde(alias = "slidesToShift", default = "default_items_per_shift")]
    pub items_per_shift: usize,
    #[serde(alias = "showButtons", default)]
    pub show_buttons: bool,
    #[serde(alias = "showPaging", default)]
    pub show_paging: bool,
    #[serde(alias = "infinite", default)]
    pub wrap_around: bool,
    #[serde(alias = "breakpoint")]
    pub breakpoint_width_px: u32,
}

impl ConfigurationProfile {
    #[must_use]
    pub fn new(items_per_view: usize, breakpoint_width_px: u32) -> Self {
        Self {
            items_per_view,
            items_per_shift: 1,
            show_buttons: false,
            show_paging: false,
            wrap_around: false,
            breakpoint_width_px,
        }
    }

    #[must_use]
    pub fn with_items_per_shift(mut self, items_per_shift: usize) -> Self {
        self.items_per_shift = items_per_shift;
        self
    }

    #[must_use]
    pub fn with_buttons(mut self, show_buttons: bool) -> Self {
        self.show_buttons = show_buttons;
        self
    }

    #[must_use]
    pub fn with_paging(mut self, show_paging: bool) -> Self {
        self.show_paging = show_paging;
        self
    }

    #[must_use]
    pub fn with_wrap_around(mut self, wrap_around: bool) -> Self {
        self.wrap_around = wrap_around;
        self
    }

    /// Single-item profile appended when a table only has one entry.
    #[must_use]
    pub fn fallback_for(base: &Self) -> Self {
        Self {
            items_per_view: 1,
            items_per_shift: 1,
            show_buttons: base.show_buttons,
            show_paging: base.show_paging,
            wrap_around: base.wrap_around,
            breakpoint_width_px: FALLBACK_BREAKPOINT_PX,
        }
    }
}

/// Immutable, ordered set of profiles keyed by descending breakpoint width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    profiles: SmallVec<[ConfigurationProfile; 4]>,
    has_fallback: bool,
}

impl BreakpointTable {
    /// Builds a table, normalizing `items_per_shift == 0` to `1`.
    ///
    /// Single-entry tables receive the fallback profile here, once, so that
    /// repeated resolution never grows the table.
    pub fn new(profiles: impl IntoIterator<Item = ConfigurationProfile>) -> SliderResult<Self> {
        let mut profiles: SmallVec<[ConfigurationProfile; 4]> = profiles
            .into_iter()
            .map(|mut profile| {
                profile.items_per_shift = profile.items_per_shift.max(1);
                profile
            })
            .collect();
        if profiles.is_empty() {
            return Err(SliderError::EmptyBreakpointTable);
        }
        for (index, profile) in profiles.iter().enumerate() {
            if profile.items_per_view == 0 {
                return Err(SliderError::InvalidProfile {
                    index,
                    reason: "items_per_view must be >= 1".to_owned(),
                });
            }
        }
        for (index, pair) in profiles.windows(2).enumerate() {
            if pair[1].breakpoint_width_px >= pair[0].breakpoint_width_px {
                return Err(SliderError::InvalidProfile {
                    index: index + 1,
                    reason: "breakpoints must be strictly descending".to_owned(),
                });
            }
        }

        let has_fallback = profiles.len() == 1;
        if has_fallback {
            let fallback = ConfigurationProfile::fallback_for(&profiles[0]);
            profiles.push(fallback);
        }

        Ok(Self {
            profiles,
            has_fallback,
        })
    }

    #[must_use]
    pub fn profiles(&self) -> &[ConfigurationProfile] {
        &self.profiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ConfigurationProfile> {
        self.profiles.get(index)
    }

    /// Whether the synthetic single-item profile was appended.
    #[must_use]
    pub fn has_fallback(&self) -> bool {
        self.has_fallback
    }

    /// Index of the profile whose range covers `viewport_width`.
    ///
    /// Profile `i` covers `(table[i + 1].breakpoint, table[i].breakpoint]`;
    /// the last profile covers `(0, table[last].breakpoint]`. Returns `None`
    /// when the width is zero or wider than the widest breakpoint.
    #[must_use]
    pub fn resolve(&self, viewport_width: u32) -> Option<usize> {
        self.profiles.iter().enumerate().position(|(index, profile)| {
            let lower = self
                .profiles
                .get(index + 1)
                .map_or(0, |next| next.breakpoint_width_px);
            viewport_width <= profile.breakpoint_width_px && viewport_width > lower
        })
    }
}
