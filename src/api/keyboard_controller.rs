use serde::{Deserialize, Serialize};

use crate::core::ShiftDirection;
use crate::render::SliderSurface;

use super::SliderWidget;
use super::validation::tab_trap_fields;

/// Whether the host should suppress the browser's default key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyDisposition {
    Default,
    PreventDefault,
}

impl<S: SliderSurface> SliderWidget<S> {
    /// Replaces the set of input names that trap forward Tab. Empty names are
    /// ignored.
    pub fn set_tab_trap_fields<I, N>(&mut self, names: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.core.behavior.tab_trap_fields = tab_trap_fields(names);
    }

    /// Keydown inside the view.
    ///
    /// A forward Tab from a trapped input advances the slider by one page so
    /// focus can move to the next page of a multi-page form.
    pub fn key_down(
        &mut self,
        key: &str,
        shift_key: bool,
        target_name: Option<&str>,
    ) -> KeyDisposition {
        if key != "Tab" || shift_key {
            return KeyDisposition::Default;
        }
        let Some(name) = target_name else {
            return KeyDisposition::Default;
        };
        if !self.core.behavior.tab_trap_fields.contains(name) {
            return KeyDisposition::Default;
        }
        self.shift(ShiftDirection::Forward);
        KeyDisposition::PreventDefault
    }
}
