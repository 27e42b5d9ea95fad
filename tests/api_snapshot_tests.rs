use carousel_rs::api::{
    SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderOptions, SliderSnapshot, SliderWidget,
};
use carousel_rs::core::{ConfigurationProfile, ElementSelectors, ItemBox, StaticViewport};
use carousel_rs::interaction::SlidePhaseKind;
use carousel_rs::render::NullSurface;

fn options() -> SliderOptions {
    SliderOptions::new(
        vec![
            ConfigurationProfile::new(4, 9999)
                .with_items_per_shift(4)
                .with_buttons(true)
                .with_paging(true),
            ConfigurationProfile::new(1, 690).with_wrap_around(true),
        ],
        ElementSelectors::new("#container", "#view", "#wrapper", ".slide"),
    )
    .with_load_limit(8)
    .with_drag_threshold_px(30.0)
    .with_tab_trap_fields(["email"])
}

fn build_widget() -> SliderWidget<NullSurface> {
    let mut provider = StaticViewport::new(1200)
        .with_elements(["#container", "#view", "#wrapper"])
        .with_uniform_items(10, ItemBox::from_px(10.0, 10.0, 180.0));
    SliderWidget::try_new(NullSurface::default(), options(), &mut provider).expect("init")
}

#[test]
fn options_json_roundtrip() {
    let options = options();
    let json = options.to_json_pretty().expect("serialize");
    let parsed = SliderOptions::from_json_str(&json).expect("parse");
    assert_eq!(parsed, options);
}

#[test]
fn options_accept_camel_case_page_script_names() {
    let json = r##"{
        "options": [
            { "slidesToShow": 3, "slidesToShift": 3, "showButtons": true,
              "showPaging": false, "infinite": true, "breakpoint": 1400 },
            { "slidesToShow": 1, "breakpoint": 700 }
        ],
        "sliderElements": {
            "container": "#c", "view": "#v", "wrapper": "#w", "slides": ".s"
        },
        "slidesToLoad": "5"
    }"##;
    let options = SliderOptions::from_json_str(json).expect("parse");

    assert_eq!(options.breakpoints.len(), 2);
    let first = options.breakpoints[0];
    assert_eq!(first.items_per_view, 3);
    assert_eq!(first.items_per_shift, 3);
    assert!(first.show_buttons);
    assert!(!first.show_paging);
    assert!(first.wrap_around);
    assert_eq!(first.breakpoint_width_px, 1400);
    assert_eq!(options.breakpoints[1].items_per_shift, 1);
    assert_eq!(options.elements.strip, "#w");
    assert_eq!(options.elements.items, ".s");
    assert_eq!(options.load_limit.map(|limit| limit.get()), Some(5));
    assert_eq!(options.behavior.drag_threshold_px, 50.0);
    assert!(options.behavior.mouse_drag);
}

#[test]
fn malformed_load_limit_is_ignored() {
    for raw in [r#""abc""#, "0", "-4", "null", "true"] {
        let json = format!(
            r##"{{
                "breakpoints": [{{ "items_per_view": 1, "breakpoint_width_px": 900 }}],
                "elements": {{ "container": "#c", "view": "#v", "strip": "#w", "items": ".s" }},
                "load_limit": {raw}
            }}"##
        );
        let options = SliderOptions::from_json_str(&json).expect("parse");
        assert_eq!(options.load_limit, None, "raw limit {raw}");
    }
}

#[test]
fn invalid_options_json_is_reported() {
    let err = SliderOptions::from_json_str("{ \"breakpoints\": 3 }");
    assert!(err.is_err());
}

#[test]
fn snapshot_reflects_widget_state() {
    let mut widget = build_widget();
    widget.click_next();

    let snapshot = widget.snapshot();
    assert_eq!(snapshot.viewport_width, 1200);
    assert_eq!(snapshot.active_profile_index, 0);
    assert_eq!(snapshot.current_index, 4);
    assert_eq!(snapshot.item_count, 8);
    assert_eq!(snapshot.item_size_px, 200.0);
    assert_eq!(snapshot.offset_px, -800.0);
    assert_eq!(snapshot.phase, SlidePhaseKind::Settling);
    assert_eq!(snapshot.last_aligned_index, 4);
    assert_eq!(snapshot.frame.loaded_items, 8);
    assert_eq!(&snapshot.frame, widget.frame());
}

#[test]
fn snapshot_contract_v1_roundtrip() {
    let mut widget = build_widget();
    widget.click_next();
    widget.transition_end();

    let snapshot = widget.snapshot();
    let contract = widget
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(contract.contains(&format!(
        "\"schema_version\": {SLIDER_SNAPSHOT_JSON_SCHEMA_V1}"
    )));
    let parsed = SliderSnapshot::from_json_compat_str(&contract).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = widget.snapshot_json_pretty().expect("serialize bare");
    let parsed = SliderSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);
}

#[test]
fn snapshot_contract_rejects_unknown_schema_version() {
    let widget = build_widget();
    let contract = widget
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract")
        .replacen("\"schema_version\": 1", "\"schema_version\": 99", 1);
    assert!(SliderSnapshot::from_json_compat_str(&contract).is_err());
}

#[test]
fn render_pushes_validated_frame_to_surface() {
    let mut widget = build_widget();
    widget.render().expect("render");
    widget.click_next();
    widget.render().expect("render");

    let surface = widget.surface();
    assert_eq!(surface.frames_applied, 2);
    let last = surface.last_frame.as_ref().expect("frame applied");
    assert_eq!(last.strip_offset_px(), -800.0);
    assert!(last.is_shifting());
}
