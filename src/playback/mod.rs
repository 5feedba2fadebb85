//! # Playback Module
//!
//! Keep track of which transcript entry is sounding as the clip plays.
//!
//! ## Sub-modules
//! - `index` - Active interval lookup (linear scan and binary search)
//! - `session` - PlaybackSession and PlaybackRange
//!
//! ## Key Types
//! - [`PlaybackSession`] - Clip duration, transcript, and active index
//! - [`PlaybackRange`] - User-selected start/end bounds
//! - [`Lookup`] - Which search a session uses
//!
//! ## Example
//! ```rust
//! use swara::playback::{Lookup, PlaybackSession};
//! use swara::parse_labels;
//!
//! let parsed = parse_labels("start,end,note\n0,2,Sa1\n2,4,Pa1\n").unwrap();
//!
//! let mut session = PlaybackSession::with_audio(4.0);
//! session.load_intervals(parsed.intervals, Lookup::Binary);
//!
//! assert_eq!(session.sync(2.5), Some(1));
//! assert_eq!(session.sync(4.0), None);
//! ```
//!
//! ## Interval Semantics
//!
//! Intervals are half-open, `[start, end)`, so the boundary between two
//! adjacent entries belongs to the later one.
//!
//! The transcript is expected to be ascending and non-overlapping. The linear
//! scan still gives a defined answer when it is not (first match in file
//! order); binary search is only used when the precondition holds.

mod index;
mod session;


pub use index::{find_active_interval, find_active_interval_sorted, find_with, is_sorted_disjoint, Lookup};
pub use session::{PlaybackRange, PlaybackSession};
