use serde::Serialize;
use wasm_bindgen::prelude::*;

use swara::render::RenderCommand;
use swara::transport::{self, SessionId};
use swara::{LabelInterval, LoadReport, PlaybackRange, RecordingTarget, SwaraError, TickOutcome, Viewer, ViewerConfig};

#[derive(Serialize)]
struct ViewerError {
    kind: &'static str,
    message: String,
    user_message: String,
    line: Option<usize>,
}

fn error_to_viewer_error(e: SwaraError) -> ViewerError {
    let user_message = e.user_message();
    match e {
        SwaraError::FormatError { line, message } => ViewerError {
            kind: "format",
            message,
            user_message,
            line: Some(line),
        },
        SwaraError::ConfigError(message) => ViewerError {
            kind: "config",
            message,
            user_message,
            line: None,
        },
        SwaraError::TransportError(message) => ViewerError {
            kind: "transport",
            message,
            user_message,
            line: None,
        },
    }
}

fn to_js_error(e: SwaraError) -> JsValue {
    let error = error_to_viewer_error(e);
    let json = serde_json::to_string(&error).unwrap_or_else(|_| format!("{{\"message\":{:?}}}", error.message));
    JsValue::from_str(&json)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

#[wasm_bindgen(start)]
pub fn start() {
    // a second init (e.g. hot reload) keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Parse a label CSV into `{ intervals, skipped }`
#[wasm_bindgen]
pub fn parse_labels(text: &str) -> Result<JsValue, JsValue> {
    let parsed = swara::parse_labels(text).map_err(to_js_error)?;
    to_js(&parsed)
}

/// Serialize `[{ startTime, endTime, text }]` back to CSV
#[wasm_bindgen]
pub fn write_labels(intervals: JsValue) -> Result<String, JsValue> {
    let intervals: Vec<LabelInterval> = serde_wasm_bindgen::from_value(intervals)?;
    swara::write_labels(&intervals).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn transpose_symbol(symbol: &str, offset: i32) -> String {
    swara::transpose_symbol(symbol, offset).to_string()
}

#[wasm_bindgen]
pub fn offset_for_base(key: &str) -> u8 {
    swara::offset_for_base(key)
}

/// Path of the generated label CSV for an upload id
#[wasm_bindgen]
pub fn download_path(audio_uid: &str) -> Result<String, JsValue> {
    let id = SessionId::new(audio_uid).map_err(to_js_error)?;
    Ok(transport::download_path(&id))
}

/// Decode the upload reply into `{ message, audio_uid }`
#[wasm_bindgen]
pub fn parse_upload_response(status: u16, body: &str) -> Result<JsValue, JsValue> {
    let receipt = transport::parse_upload_response(status, body).map_err(to_js_error)?;
    to_js(&receipt)
}

#[derive(Serialize)]
struct LoadResult<'a> {
    report: &'a LoadReport,
    commands: Vec<RenderCommand>,
}

#[derive(Serialize)]
struct TickResult {
    outcome: TickOutcome,
    commands: Vec<RenderCommand>,
}

/// Transcript viewer driven by page events.
///
/// Every event method returns the render commands the page should apply
/// (`setItems`, `highlight`, `scrollTo`).
#[wasm_bindgen]
pub struct SubtitleViewer {
    inner: Viewer<RecordingTarget>,
}

#[wasm_bindgen]
impl SubtitleViewer {
    /// Create a viewer, optionally configured from YAML
    #[wasm_bindgen(constructor)]
    pub fn new(config_yaml: Option<String>) -> Result<SubtitleViewer, JsValue> {
        let config = match config_yaml {
            Some(yaml) => ViewerConfig::from_yaml(&yaml).map_err(to_js_error)?,
            None => ViewerConfig::default(),
        };
        Ok(SubtitleViewer {
            inner: Viewer::new(RecordingTarget::new(), config),
        })
    }

    pub fn on_audio_loaded(&mut self, duration: f64) -> Result<JsValue, JsValue> {
        self.inner.on_audio_loaded(duration);
        self.commands()
    }

    pub fn on_label_file_loaded(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let report = self.inner.on_label_file_loaded(text).map_err(to_js_error)?;
        let commands = self.inner.target_mut().drain_commands();
        to_js(&LoadResult {
            report: &report,
            commands,
        })
    }

    pub fn on_playback_tick(&mut self, time: f64) -> Result<JsValue, JsValue> {
        let outcome = self.inner.on_playback_tick(time);
        let commands = self.inner.target_mut().drain_commands();
        to_js(&TickResult { outcome, commands })
    }

    pub fn on_base_selection_changed(&mut self, key: &str) -> Result<JsValue, JsValue> {
        self.inner.on_base_selection_changed(key);
        self.commands()
    }

    /// Normalize and store the range; returns `{ start, end }`
    pub fn set_play_range(&mut self, start: Option<f64>, end: Option<f64>) -> Result<JsValue, JsValue> {
        let range: PlaybackRange = self.inner.set_play_range(start, end);
        to_js(&range)
    }

    /// Clear the range; returns the time to seek to
    pub fn play_all(&mut self) -> f64 {
        self.inner.play_all()
    }

    pub fn base_key(&self) -> String {
        self.inner.base().key().to_string()
    }
}

impl SubtitleViewer {
    fn commands(&mut self) -> Result<JsValue, JsValue> {
        let commands = self.inner.target_mut().drain_commands();
        to_js(&commands)
    }
}
