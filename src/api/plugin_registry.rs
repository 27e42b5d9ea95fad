use indexmap::map::Entry;
use tracing::debug;

use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderPlugin;
use crate::render::SliderSurface;

use super::{SliderEvent, SliderWidget};

impl<S: SliderSurface> SliderWidget<S> {
    /// Attaches an observer under its id.
    ///
    /// The new plugin immediately receives `Configured` for the active
    /// profile so it starts from the same state as plugins that saw
    /// construction. Other plugins are not notified.
    pub fn register_plugin(&mut self, mut plugin: Box<dyn SliderPlugin>) -> SliderResult<()> {
        let id = plugin.id().to_owned();
        if id.is_empty() {
            return Err(SliderError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        let context = self.plugin_context();
        match self.core.plugins.entry(id) {
            Entry::Occupied(entry) => Err(SliderError::InvalidData(format!(
                "plugin `{}` is already attached to this slider",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                debug!(plugin = entry.key().as_str(), "attaching slider plugin");
                plugin.on_event(
                    SliderEvent::Configured {
                        profile_index: context.active_profile_index,
                    },
                    context,
                );
                entry.insert(plugin);
                Ok(())
            }
        }
    }

    /// Detaches the plugin registered under `plugin_id`, keeping the
    /// notification order of the rest.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.core.plugins.shift_remove(plugin_id).is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core.plugins.contains_key(plugin_id)
    }
}
