//! Render target interface and display item types

use serde::Serialize;

use crate::labels::LabelInterval;
use crate::transpose::transpose_symbol;

/// One row of the rendered transcript.
///
/// # Fields
/// - `index`: Position in the transcript (0, 1, 2, ...)
/// - `text`: Swara as displayed under the current base
/// - `original_text`: Swara as written in the label file
/// - `start_time` / `end_time`: Interval bounds in seconds, for the hover tooltip
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub index: usize,
    pub text: String,
    pub original_text: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl DisplayItem {
    pub fn from_interval(index: usize, interval: &LabelInterval, offset: i32) -> Self {
        Self {
            index,
            text: transpose_symbol(&interval.text, offset).to_string(),
            original_text: interval.text.clone(),
            start_time: interval.start_time,
            end_time: interval.end_time,
        }
    }

    /// Hover text, e.g. `Start: 1.50s, End: 3.00s`.
    pub fn tooltip(&self) -> String {
        format!("Start: {:.2}s, End: {:.2}s", self.start_time, self.end_time)
    }
}

/// Vertical placement of a rendered item inside the scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBox {
    pub top: f64,
    pub height: f64,
}

/// Where the transcript is drawn.
///
/// Implementors only draw; choosing what to highlight and where to scroll is
/// done by [`super::HighlightController`]. Scrolling is expected to animate
/// and needs no completion signal.
pub trait RenderTarget {
    /// Replace all rows. Any previous highlight is gone.
    fn set_display_items(&mut self, items: &[DisplayItem]);

    /// Highlight exactly the row at `index`, or none.
    fn set_highlighted(&mut self, index: Option<usize>);

    /// Smoothly scroll the container so its top edge sits at `offset`.
    fn scroll_to(&mut self, offset: f64);

    /// Measured placement of a row, when the target can measure it.
    fn item_box(&self, _index: usize) -> Option<ItemBox> {
        None
    }

    /// Measured container height, when the target can measure it.
    fn container_height(&self) -> Option<f64> {
        None
    }
}

/// Everything a [`RenderTarget`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RenderCommand {
    SetItems { items: Vec<DisplayItem> },
    Highlight { index: Option<usize> },
    ScrollTo { offset: f64 },
}

/// Target that keeps the current visual state and logs every command.
///
/// The WebAssembly bindings forward the log to the page. The log grows until
/// [`RecordingTarget::drain_commands`] is called, so long-lived callers that
/// only need the visual state should use [`RecordingTarget::state_only`].
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    items: Vec<DisplayItem>,
    highlighted: Option<usize>,
    scroll_offset: f64,
    commands: Vec<RenderCommand>,
    state_only: bool,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the visual state without keeping a command log.
    pub fn state_only() -> Self {
        Self {
            state_only: true,
            ..Self::default()
        }
    }

    fn record(&mut self, command: RenderCommand) {
        if !self.state_only {
            self.commands.push(command);
        }
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Take the commands issued since the last call.
    pub fn drain_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderTarget for RecordingTarget {
    fn set_display_items(&mut self, items: &[DisplayItem]) {
        self.items = items.to_vec();
        self.highlighted = None;
        self.record(RenderCommand::SetItems {
            items: items.to_vec(),
        });
    }

    fn set_highlighted(&mut self, index: Option<usize>) {
        self.highlighted = index;
        self.record(RenderCommand::Highlight { index });
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
        self.record(RenderCommand::ScrollTo { offset });
    }
}
