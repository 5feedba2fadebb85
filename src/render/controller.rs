//! Highlight controller
//!
//! Turns transcript + base into display rows, and active-index updates into
//! highlight and scroll requests on a [`RenderTarget`].

use serde::{Deserialize, Serialize};

use crate::labels::LabelInterval;

use super::target::{DisplayItem, ItemBox, RenderTarget};

/// What to do when playback is between intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapPolicy {
    /// Leave the last highlighted row highlighted.
    #[default]
    KeepLast,
    /// Remove the highlight. The scroll position is left alone.
    Clear,
}

/// Fallback geometry for targets that cannot measure their rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub container_height: f64,
    pub row_height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            container_height: 100.0,
            row_height: 25.0,
        }
    }
}

/// Visual effect of one sync step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum HighlightChange {
    /// Nothing was sent to the target.
    Unchanged,
    /// A new row was highlighted and scrolled to.
    Moved { index: usize, scroll_offset: f64 },
    /// The highlight was removed.
    Cleared,
}

/// Scroll offset that puts the middle of `item` in the middle of the container.
///
/// ```
/// use swara::render::{centered_scroll_offset, ItemBox};
///
/// let item = ItemBox { top: 250.0, height: 25.0 };
/// assert_eq!(centered_scroll_offset(item, 100.0), 212.5);
/// ```
pub fn centered_scroll_offset(item: ItemBox, container_height: f64) -> f64 {
    item.top - container_height / 2.0 + item.height / 2.0
}

pub struct HighlightController<T: RenderTarget> {
    target: T,
    layout: Layout,
    gap_policy: GapPolicy,
    item_count: usize,
    applied: Option<usize>,
}

impl<T: RenderTarget> HighlightController<T> {
    pub fn new(target: T, layout: Layout, gap_policy: GapPolicy) -> Self {
        Self {
            target,
            layout,
            gap_policy,
            item_count: 0,
            applied: None,
        }
    }

    /// Draw every interval with its text transposed by `offset`.
    ///
    /// This drops the current highlight; the next [`apply_highlight`] call
    /// always reaches the target, even for the same index as before.
    ///
    /// [`apply_highlight`]: HighlightController::apply_highlight
    pub fn render(&mut self, intervals: &[LabelInterval], offset: i32) {
        let items: Vec<DisplayItem> = intervals
            .iter()
            .enumerate()
            .map(|(i, interval)| DisplayItem::from_interval(i, interval, offset))
            .collect();

        self.item_count = items.len();
        self.applied = None;
        self.target.set_display_items(&items);
    }

    /// Highlight `active` and center it, unless it is already the applied row.
    ///
    /// Repeated calls with the same index are no-ops, so ticks landing in the
    /// same interval do not restart the scroll animation.
    pub fn apply_highlight(&mut self, active: Option<usize>) -> HighlightChange {
        match active {
            Some(index) if self.applied == Some(index) => HighlightChange::Unchanged,
            Some(index) if index >= self.item_count => {
                log::warn!(
                    "Active index {} is outside the {} rendered rows",
                    index,
                    self.item_count
                );
                HighlightChange::Unchanged
            }
            Some(index) => {
                self.target.set_highlighted(Some(index));
                let scroll_offset = centered_scroll_offset(self.item_box(index), self.container_height());
                self.target.scroll_to(scroll_offset);
                self.applied = Some(index);
                log::debug!("Highlight moved to row {} (scroll {:.1})", index, scroll_offset);
                HighlightChange::Moved { index, scroll_offset }
            }
            None => match (self.gap_policy, self.applied) {
                (GapPolicy::Clear, Some(_)) => {
                    self.target.set_highlighted(None);
                    self.applied = None;
                    HighlightChange::Cleared
                }
                _ => HighlightChange::Unchanged,
            },
        }
    }

    /// Index the target currently shows as highlighted.
    pub fn applied(&self) -> Option<usize> {
        self.applied
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    fn item_box(&self, index: usize) -> ItemBox {
        self.target.item_box(index).unwrap_or(ItemBox {
            top: index as f64 * self.layout.row_height,
            height: self.layout.row_height,
        })
    }

    fn container_height(&self) -> f64 {
        self.target
            .container_height()
            .unwrap_or(self.layout.container_height)
    }
}
