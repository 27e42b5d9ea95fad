mod breakpoint_controller;
mod drag_controller;
mod json_contract;
mod keyboard_controller;
mod navigation_builder;
mod plugin_dispatch;
mod plugin_registry;
mod shift_controller;
mod validation;
mod widget;
mod widget_accessors;
mod widget_config;
mod widget_core;
mod widget_init;
mod widget_snapshot;

pub use crate::extensions::{SliderContext, SliderEvent};
pub use json_contract::{SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderSnapshotJsonContractV1};
pub use keyboard_controller::KeyDisposition;
pub use widget::SliderWidget;
pub use widget_config::{DEFAULT_DRAG_THRESHOLD_PX, SliderBehavior, SliderOptions};
pub use widget_snapshot::SliderSnapshot;
