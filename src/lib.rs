pub mod alphabet;
pub mod config;
pub mod error;
pub mod labels;
pub mod parser;
pub mod playback;
pub mod render;
pub mod transport;
pub mod transpose;
pub mod viewer;

pub use alphabet::{TonalBase, ALPHABET, BASE_NAMES, REST};
pub use config::ViewerConfig;
pub use error::*;
pub use labels::{intervals_from_notes, write_labels, LabelInterval};
pub use parser::{parse_labels, ParsedLabels, SkipReason, SkippedRow};
pub use playback::{find_active_interval, find_active_interval_sorted, PlaybackRange, PlaybackSession};
pub use render::{DisplayItem, RecordingTarget, RenderTarget};
pub use transpose::{offset_for_base, transpose_labels, transpose_symbol};
pub use viewer::{LoadReport, TickOutcome, Viewer};

/// Parse a label file and return its rows as displayed under `base_key`.
///
/// Unknown base keys display the labels untransposed.
///
/// # Example
/// ```
/// let items = swara::display_transposed("start,end,note\n0,2,Sa1\n2,4,Pa\n", "Ga1")?;
/// assert_eq!(items[0].text, "Ga(1)1");
/// assert_eq!(items[1].text, "Pa");
/// # Ok::<(), swara::SwaraError>(())
/// ```
pub fn display_transposed(source: &str, base_key: &str) -> Result<Vec<DisplayItem>, SwaraError> {
    let parsed = parse_labels(source)?;
    let offset = offset_for_base(base_key) as i32;
    Ok(parsed
        .intervals
        .iter()
        .enumerate()
        .map(|(i, interval)| DisplayItem::from_interval(i, interval, offset))
        .collect())
}
