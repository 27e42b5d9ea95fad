use carousel_rs::api::{KeyDisposition, SliderOptions, SliderSnapshot, SliderWidget};
use carousel_rs::core::{ItemBox, StaticViewport};
use carousel_rs::render::NullSurface;
use carousel_rs::telemetry::init_default_tracing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: slider_trace --input <script.json> [--output <trace.json>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceScript {
    trace_name: String,
    viewport_width: u32,
    item_count: usize,
    item: ItemBox,
    options: SliderOptions,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum TraceStep {
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp,
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    ClickPrev,
    ClickNext,
    ClickPaging { index: usize },
    TransitionEnd,
    Resize { width: u32 },
    KeyDown {
        key: String,
        #[serde(default)]
        shift_key: bool,
        #[serde(default)]
        target_name: Option<String>,
    },
}

#[derive(Debug, Clone, Serialize)]
struct TraceEntry {
    step: TraceStep,
    accepted: bool,
    snapshot: SliderSnapshot,
}

#[derive(Debug, Clone, Serialize)]
struct TraceOutput {
    trace_name: String,
    initial: SliderSnapshot,
    entries: Vec<TraceEntry>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let script: TraceScript =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
    let trace = replay(script)?;
    let json = serde_json::to_string_pretty(&trace)
        .map_err(|err| format!("failed to serialize trace: {err}"))?;

    match args.output {
        Some(path) => fs::write(&path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn replay(script: TraceScript) -> Result<TraceOutput, String> {
    let elements = &script.options.elements;
    let mut viewport = StaticViewport::new(script.viewport_width)
        .with_elements([
            elements.container.clone(),
            elements.view.clone(),
            elements.strip.clone(),
        ])
        .with_uniform_items(script.item_count, script.item.clone());

    let mut widget = SliderWidget::try_new(NullSurface::default(), script.options, &mut viewport)
        .map_err(|err| format!("slider construction failed: {err}"))?;
    widget
        .render()
        .map_err(|err| format!("initial render failed: {err}"))?;
    let initial = widget.snapshot();

    let mut entries = Vec::with_capacity(script.steps.len());
    for step in script.steps {
        let accepted = apply_step(&mut widget, &mut viewport, &step);
        widget
            .render()
            .map_err(|err| format!("render failed after {step:?}: {err}"))?;
        entries.push(TraceEntry {
            step,
            accepted,
            snapshot: widget.snapshot(),
        });
    }

    Ok(TraceOutput {
        trace_name: script.trace_name,
        initial,
        entries,
    })
}

fn apply_step(
    widget: &mut SliderWidget<NullSurface>,
    viewport: &mut StaticViewport,
    step: &TraceStep,
) -> bool {
    match step {
        TraceStep::PointerDown { x } => widget.pointer_down(*x),
        TraceStep::PointerMove { x } => widget.pointer_move(*x),
        TraceStep::PointerUp => widget.pointer_up(),
        TraceStep::TouchStart { x } => widget.touch_start(*x),
        TraceStep::TouchMove { x } => widget.touch_move(*x),
        TraceStep::TouchEnd => widget.touch_end(),
        TraceStep::ClickPrev => widget.click_prev(),
        TraceStep::ClickNext => widget.click_next(),
        TraceStep::ClickPaging { index } => widget.click_paging(*index),
        TraceStep::TransitionEnd => widget.transition_end(),
        TraceStep::Resize { width } => {
            viewport.set_viewport_width(*width);
            widget.resize(&*viewport)
        }
        TraceStep::KeyDown {
            key,
            shift_key,
            target_name,
        } => {
            let disposition = widget.key_down(key, *shift_key, target_name.as_deref());
            disposition == KeyDisposition::PreventDefault
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs { input, output })
}
