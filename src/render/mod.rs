//! # Render Module
//!
//! Presentation side of the transcript viewer, kept behind the
//! [`RenderTarget`] trait so the highlight logic can run without a page.
//!
//! ## Sub-modules
//! - `target` - RenderTarget trait, DisplayItem, RecordingTarget
//! - `controller` - HighlightController, centering math, gap policy
//!
//! ## Highlight Contract
//! - `render` replaces all rows and forgets the current highlight
//! - `apply_highlight` only talks to the target when the active row changes
//! - A change highlights the row and requests a smooth scroll that centers it:
//!   `offset = item_top - container_height / 2 + item_height / 2`

mod controller;
mod target;

pub use controller::{centered_scroll_offset, GapPolicy, HighlightChange, HighlightController, Layout};
pub use target::{DisplayItem, ItemBox, RecordingTarget, RenderCommand, RenderTarget};
