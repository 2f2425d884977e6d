//! Viewport visibility - scroll offset, clamping, and intersection events.
//!
//! The terminal shows a `height`-row window onto a taller page. Each
//! revealable block occupies a fixed row extent; a block "intersects" when
//! at least [`INTERSECTION_THRESHOLD`] of its rows are inside the window.
//! The mount loop feeds the resulting `(BlockId, is_intersecting)` pairs to
//! the reveal trackers after every scroll, resize, or extent change - the
//! trackers are idempotent, so re-delivery is harmless.
//!
//! Row-based hit testing for pointer hover also lives here: a screen row
//! maps back through the scroll offset to the block covering that page row.

use crate::types::BlockId;

/// Fraction of a block's rows that must be visible to count as
/// intersecting.
pub const INTERSECTION_THRESHOLD: f32 = 0.3;

/// A block's fixed position in page rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockExtent {
    pub id: BlockId,
    /// First page row of the block.
    pub first_row: usize,
    /// Height in rows.
    pub rows: usize,
}

impl BlockExtent {
    pub const fn new(id: BlockId, first_row: usize, rows: usize) -> Self {
        Self { id, first_row, rows }
    }
}

/// Scrollable window over the page.
pub struct Viewport {
    extents: Vec<BlockExtent>,
    page_rows: usize,
    height: usize,
    offset: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            extents: Vec::new(),
            page_rows: 0,
            height,
            offset: 0,
        }
    }

    /// Replace the block extents and total page height, re-clamping the
    /// current offset.
    pub fn set_extents(&mut self, extents: Vec<BlockExtent>, page_rows: usize) {
        self.extents = extents;
        self.page_rows = page_rows;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the window height (terminal resize), re-clamping the offset.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn page_rows(&self) -> usize {
        self.page_rows
    }

    pub fn max_offset(&self) -> usize {
        self.page_rows.saturating_sub(self.height)
    }

    /// Scroll by a row delta, clamped.
    ///
    /// Returns `true` if the offset moved, `false` at a boundary.
    pub fn scroll_by(&mut self, delta: i64) -> bool {
        let new = (self.offset as i64 + delta).clamp(0, self.max_offset() as i64) as usize;
        if new == self.offset {
            return false;
        }
        self.offset = new;
        true
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Fraction of the extent's rows inside the window, in `[0, 1]`.
    ///
    /// Zero-height extents count as fully visible when their first row is
    /// inside the window.
    pub fn visible_ratio(&self, extent: &BlockExtent) -> f32 {
        let window_start = self.offset;
        let window_end = self.offset + self.height;
        if extent.rows == 0 {
            let inside = extent.first_row >= window_start && extent.first_row < window_end;
            return if inside { 1.0 } else { 0.0 };
        }
        let start = extent.first_row.max(window_start);
        let end = (extent.first_row + extent.rows).min(window_end);
        let visible = end.saturating_sub(start);
        visible as f32 / extent.rows as f32
    }

    /// Current intersection state of every tracked block.
    pub fn intersections(&self) -> Vec<(BlockId, bool)> {
        self.extents
            .iter()
            .map(|e| (e.id, self.visible_ratio(e) >= INTERSECTION_THRESHOLD))
            .collect()
    }

    /// Map a screen row to the block covering it, for pointer hover.
    pub fn hit(&self, screen_row: u16) -> Option<BlockId> {
        let page_row = self.offset + screen_row as usize;
        self.extents
            .iter()
            .find(|e| page_row >= e.first_row && page_row < e.first_row + e.rows)
            .map(|e| e.id)
    }
}

// =============================================================================
// Tests
// =============================================================================
