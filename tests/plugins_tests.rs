use std::cell::RefCell;
use std::rc::Rc;

use carousel_rs::SliderError;
use carousel_rs::api::{SliderOptions, SliderWidget};
use carousel_rs::core::{
    ConfigurationProfile, ElementSelectors, ItemBox, ShiftDirection, StaticViewport,
};
use carousel_rs::extensions::{SliderContext, SliderEvent, SliderPlugin};
use carousel_rs::interaction::SlidePhaseKind;
use carousel_rs::render::NullSurface;

type EventLog = Rc<RefCell<Vec<(SliderEvent, SliderContext)>>>;

struct RecordingPlugin {
    id: String,
    log: EventLog,
}

impl RecordingPlugin {
    fn boxed(id: &str, log: &EventLog) -> Box<dyn SliderPlugin> {
        Box::new(Self {
            id: id.to_owned(),
            log: Rc::clone(log),
        })
    }
}

impl SliderPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: SliderEvent, context: SliderContext) {
        self.log.borrow_mut().push((event, context));
    }
}

fn build_widget() -> (SliderWidget<NullSurface>, StaticViewport) {
    let mut provider = StaticViewport::new(1200)
        .with_elements(["#container", "#view", "#wrapper"])
        .with_uniform_items(10, ItemBox::from_px(10.0, 10.0, 180.0));
    let options = SliderOptions::new(
        vec![
            ConfigurationProfile::new(4, 9999)
                .with_items_per_shift(4)
                .with_paging(true),
            ConfigurationProfile::new(2, 990).with_items_per_shift(2),
        ],
        ElementSelectors::new("#container", "#view", "#wrapper", ".slide"),
    );
    let widget =
        SliderWidget::try_new(NullSurface::default(), options, &mut provider).expect("init");
    (widget, provider)
}

fn events(log: &EventLog) -> Vec<SliderEvent> {
    log.borrow().iter().map(|(event, _)| *event).collect()
}

#[test]
fn plugin_registry_rejects_duplicate_and_empty_ids() {
    let (mut widget, _) = build_widget();
    let log = EventLog::default();

    widget
        .register_plugin(RecordingPlugin::boxed("recorder", &log))
        .expect("first registration");
    let duplicate = widget.register_plugin(RecordingPlugin::boxed("recorder", &log));
    assert!(matches!(duplicate, Err(SliderError::InvalidData(_))));
    let empty = widget.register_plugin(RecordingPlugin::boxed("", &log));
    assert!(matches!(empty, Err(SliderError::InvalidData(_))));

    assert_eq!(widget.plugin_count(), 1);
    assert!(widget.has_plugin("recorder"));
    assert!(widget.unregister_plugin("recorder"));
    assert!(!widget.unregister_plugin("recorder"));
    assert_eq!(widget.plugin_count(), 0);
}

#[test]
fn shift_cycle_emits_request_then_settle() {
    let (mut widget, _) = build_widget();
    let log = EventLog::default();
    widget
        .register_plugin(RecordingPlugin::boxed("recorder", &log))
        .expect("register");

    widget.click_next();
    widget.click_next();
    widget.transition_end();
    widget.render().expect("render");

    assert_eq!(
        events(&log),
        vec![
            SliderEvent::Configured { profile_index: 0 },
            SliderEvent::ShiftRequested {
                direction: ShiftDirection::Forward
            },
            SliderEvent::RequestDropped,
            SliderEvent::Settled { index: 4 },
            SliderEvent::Rendered,
        ]
    );

    let log = log.borrow();
    let (_, requested) = log[1];
    assert_eq!(requested.phase, SlidePhaseKind::Idle);
    assert_eq!(requested.current_index, 0);
    let (_, settled) = log[3];
    assert_eq!(settled.phase, SlidePhaseKind::Idle);
    assert_eq!(settled.current_index, 4);
    assert_eq!(settled.offset_px, -800.0);
    assert_eq!(settled.item_size_px, 200.0);
}

#[test]
fn drag_and_jump_events_are_observable() {
    let (mut widget, _) = build_widget();
    let log = EventLog::default();
    widget
        .register_plugin(RecordingPlugin::boxed("recorder", &log))
        .expect("register");

    widget.touch_start(400.0);
    widget.touch_move(420.0);
    widget.touch_end();
    widget.click_paging(8);

    assert_eq!(
        events(&log),
        vec![
            SliderEvent::Configured { profile_index: 0 },
            SliderEvent::DragStarted { pointer_x: 400.0 },
            SliderEvent::DragEnded {
                displacement_px: 20.0
            },
            SliderEvent::Jumped { index: 8 },
        ]
    );
    let log = log.borrow();
    let (_, dragging) = log[2];
    assert_eq!(dragging.phase, SlidePhaseKind::Dragging);
}

#[test]
fn resize_emits_configured_with_profile_index() {
    let (mut widget, mut provider) = build_widget();
    let log = EventLog::default();
    widget
        .register_plugin(RecordingPlugin::boxed("recorder", &log))
        .expect("register");

    provider.set_viewport_width(700);
    assert!(widget.resize(&provider));

    assert_eq!(
        events(&log),
        vec![
            SliderEvent::Configured { profile_index: 0 },
            SliderEvent::Configured { profile_index: 1 },
        ]
    );
    let (_, context) = log.borrow()[1];
    assert_eq!(context.viewport_width, 700);
    assert_eq!(context.active_profile_index, 1);
    assert_eq!(context.item_count, 10);
}

#[test]
fn late_plugin_receives_active_configuration_on_register() {
    let (mut widget, mut provider) = build_widget();
    provider.set_viewport_width(700);
    widget.resize(&provider);
    widget.click_next();
    widget.transition_end();

    let first = EventLog::default();
    widget
        .register_plugin(RecordingPlugin::boxed("first", &first))
        .expect("register first");
    let (event, context) = first.borrow()[0];
    assert_eq!(event, SliderEvent::Configured { profile_index: 1 });
    assert_eq!(context.current_index, 2);
    assert_eq!(context.offset_px, -400.0);
    assert_eq!(context.phase, SlidePhaseKind::Idle);

    let second = EventLog::default();
    widget
        .register_plugin(RecordingPlugin::boxed("second", &second))
        .expect("register second");
    assert_eq!(first.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 1);

    let rejected = EventLog::default();
    assert!(
        widget
            .register_plugin(RecordingPlugin::boxed("first", &rejected))
            .is_err()
    );
    assert!(rejected.borrow().is_empty());
}

#[test]
fn unregister_keeps_notification_order_of_remaining_plugins() {
    let (mut widget, _) = build_widget();
    let order = Rc::new(RefCell::new(Vec::new()));

    struct OrderPlugin {
        id: &'static str,
        order: Rc<RefCell<Vec<&'static str>>>,
    }

    impl SliderPlugin for OrderPlugin {
        fn id(&self) -> &str {
            self.id
        }

        fn on_event(&mut self, event: SliderEvent, _context: SliderContext) {
            if event == SliderEvent::Rendered {
                self.order.borrow_mut().push(self.id);
            }
        }
    }

    for id in ["a", "b", "c"] {
        widget
            .register_plugin(Box::new(OrderPlugin {
                id,
                order: Rc::clone(&order),
            }))
            .expect("register");
    }
    assert!(widget.unregister_plugin("b"));
    widget.render().expect("render");

    assert_eq!(*order.borrow(), vec!["a", "c"]);
}
