// Scroll offset and normalized progress, global and per region.
use crate::model::{RegionRect, ScrollProgress, Viewport};

#[derive(Default, Debug, Clone)]
pub struct ScrollSampler {
    raw_y: f64,
    viewport: Viewport,
    doc_height: f64,
    dirty: bool,
}

impl ScrollSampler {
    pub fn record_scroll(&mut self, y: f64) {
        let y = if y.is_finite() { y } else { 0.0 };
        if y != self.raw_y {
            self.raw_y = y;
            self.dirty = true;
        }
    }

    pub fn record_layout(&mut self, viewport: Viewport, doc_height: f64) {
        let doc_height = if doc_height.is_finite() { doc_height.max(0.0) } else { 0.0 };
        if viewport != self.viewport || doc_height != self.doc_height {
            self.viewport = viewport;
            self.doc_height = doc_height;
            self.dirty = true;
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn doc_height(&self) -> f64 {
        self.doc_height
    }

    pub fn max_offset(&self) -> f64 {
        (self.doc_height - self.viewport.height).max(0.0)
    }

    /// Scroll offset clamped to the document; overscroll never leaks out.
    pub fn offset(&self) -> f64 {
        self.raw_y.clamp(0.0, self.max_offset())
    }

    /// A page with nothing to scroll reports `START`.
    pub fn page_progress(&self) -> ScrollProgress {
        let max = self.max_offset();
        if max <= 0.0 {
            return ScrollProgress::START;
        }
        ScrollProgress::new(self.offset() / max)
    }

    pub fn take_update(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Progress of a region travelling through the viewport: 0 when its top edge
/// meets the viewport bottom, 1 when its bottom edge leaves the viewport top.
pub fn region_progress(rect: RegionRect, viewport_height: f64) -> ScrollProgress {
    let travel = viewport_height + rect.height;
    if travel.is_nan() || travel <= 0.0 {
        return ScrollProgress::START;
    }
    ScrollProgress::new((viewport_height - rect.top) / travel)
}
