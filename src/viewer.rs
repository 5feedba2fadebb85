//! # Transcript Viewer
//!
//! Owns the playback session, the selected base and the highlight
//! controller. An adapter forwards page events to the `on_*` methods:
//!
//! | event | method |
//! |---|---|
//! | audio loaded or recording stopped | [`Viewer::on_audio_loaded`] |
//! | label file chosen or downloaded | [`Viewer::on_label_file_loaded`] |
//! | audio `timeupdate` | [`Viewer::on_playback_tick`] |
//! | base selector changed | [`Viewer::on_base_selection_changed`] |
//! | "play range" / "play all" | [`Viewer::set_play_range`] / [`Viewer::play_all`] |
//!
//! ## Reset Points
//! - Loading audio starts a new session: duration set, transcript and
//!   highlight dropped, range cleared.
//! - Loading labels replaces the transcript only after a successful parse,
//!   resets the base to the configured default, redraws, and re-syncs at the
//!   last playback time.
//!
//! ## Example
//! ```rust
//! use swara::{RecordingTarget, Viewer, ViewerConfig};
//!
//! let mut viewer = Viewer::new(RecordingTarget::new(), ViewerConfig::default());
//! viewer.on_audio_loaded(4.0);
//! viewer.on_label_file_loaded("start,end,note\n0,2,Sa1\n2,4,Pa1\n")?;
//! viewer.on_base_selection_changed("Ga1");
//! viewer.on_playback_tick(2.5);
//!
//! let target = viewer.target();
//! assert_eq!(target.items()[0].text, "Ga(1)1");
//! assert_eq!(target.highlighted(), Some(1));
//! # Ok::<(), swara::SwaraError>(())
//! ```

use serde::Serialize;

use crate::alphabet::TonalBase;
use crate::config::ViewerConfig;
use crate::error::SwaraError;
use crate::parser::{parse_labels, ParsedLabels, SkippedRow};
use crate::playback::{PlaybackRange, PlaybackSession};
use crate::render::{HighlightChange, HighlightController, RenderTarget};

/// Result of one playback tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum TickOutcome {
    /// Playback continues; `active` is the interval covering the tick time.
    Playing {
        active: Option<usize>,
        change: HighlightChange,
    },
    /// The range end was reached. The transport should pause.
    ReachedEnd,
}

/// Summary of a successful label load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub interval_count: usize,
    pub skipped: Vec<SkippedRow>,
}

pub struct Viewer<T: RenderTarget> {
    config: ViewerConfig,
    session: PlaybackSession,
    base: TonalBase,
    range: PlaybackRange,
    controller: HighlightController<T>,
    last_time: f64,
}

impl<T: RenderTarget> Viewer<T> {
    pub fn new(target: T, config: ViewerConfig) -> Self {
        let controller = HighlightController::new(target, config.layout, config.gap_policy);
        Self {
            base: config.default_base,
            session: PlaybackSession::default(),
            range: PlaybackRange::default(),
            controller,
            config,
            last_time: 0.0,
        }
    }

    /// Start a new session for a clip of `duration` seconds.
    pub fn on_audio_loaded(&mut self, duration: f64) {
        log::info!("Audio loaded ({:.2} s), resetting session", duration);
        self.session = PlaybackSession::with_audio(duration);
        self.range = PlaybackRange::default();
        self.last_time = 0.0;
        let offset = self.offset();
        self.controller.render(&[], offset);
    }

    /// Parse and install a label file.
    ///
    /// The base goes back to the configured `default-base` (`Sa1` unless
    /// configured otherwise) before the new rows are drawn.
    ///
    /// # Errors
    /// [`SwaraError::FormatError`] if the header is wrong. The current
    /// transcript and highlight are left exactly as they were.
    pub fn on_label_file_loaded(&mut self, text: &str) -> Result<LoadReport, SwaraError> {
        let ParsedLabels { intervals, skipped } = parse_labels(text)?;
        log::info!(
            "Loaded {} label intervals ({} rows skipped)",
            intervals.len(),
            skipped.len()
        );

        let report = LoadReport {
            interval_count: intervals.len(),
            skipped,
        };
        self.session.load_intervals(intervals, self.config.lookup);
        self.base = self.config.default_base;
        self.redraw();
        Ok(report)
    }

    /// Sync highlight to the playback position.
    pub fn on_playback_tick(&mut self, time: f64) -> TickOutcome {
        if self.range.reached_end(time, self.session.duration()) {
            return TickOutcome::ReachedEnd;
        }
        self.last_time = time;
        let active = self.session.sync(time);
        let change = self.controller.apply_highlight(active);
        TickOutcome::Playing { active, change }
    }

    /// Select a new base by selector key. Unknown keys select `Sa1`.
    pub fn on_base_selection_changed(&mut self, key: &str) {
        let base = TonalBase::from_key(key).unwrap_or_else(|| {
            log::debug!("Unknown base key {:?}, falling back to Sa1", key);
            TonalBase::Sa1
        });
        self.base = base;
        self.redraw();
    }

    /// Set the playback range from user input and return it normalized.
    ///
    /// The caller seeks to `range.start` and starts playback.
    pub fn set_play_range(&mut self, start: Option<f64>, end: Option<f64>) -> PlaybackRange {
        self.range = PlaybackRange::normalize(start, end, self.session.duration());
        self.range
    }

    /// Drop any range so the whole clip plays. Returns the seek time, 0.
    pub fn play_all(&mut self) -> f64 {
        self.range = PlaybackRange::default();
        0.0
    }

    pub fn base(&self) -> TonalBase {
        self.base
    }

    pub fn range(&self) -> PlaybackRange {
        self.range
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        self.controller.target()
    }

    pub fn target_mut(&mut self) -> &mut T {
        self.controller.target_mut()
    }

    fn offset(&self) -> i32 {
        self.base.offset() as i32
    }

    /// Redraw every row, then restore the highlight at the last known time.
    fn redraw(&mut self) {
        let offset = self.offset();
        self.controller.render(self.session.intervals(), offset);
        let active = self.session.sync(self.last_time);
        self.controller.apply_highlight(active);
    }
}
