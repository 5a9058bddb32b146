// Per-frame gate: input listeners write here, the animation frame polls once.
use crate::model::{PointerPosition, ScrollProgress, Viewport};
use crate::state::pointer::PointerTracker;
use crate::state::scroll::ScrollSampler;

/// Everything the page renders from, captured at one animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSample {
    pub pointer: PointerPosition,
    /// Clamped scroll offset.
    pub scroll_y: f64,
    pub page_progress: ScrollProgress,
    pub viewport: Viewport,
    pub doc_height: f64,
    pub now_ms: f64,
}

#[derive(Default, Debug, Clone)]
pub struct FrameInputs {
    pub pointer: PointerTracker,
    pub scroll: ScrollSampler,
    busy_until_ms: f64,
    settling: bool,
}

impl FrameInputs {
    /// Keeps frames flowing until `until_ms` so running tweens get sampled.
    pub fn keep_alive(&mut self, until_ms: f64) {
        if until_ms > self.busy_until_ms {
            self.busy_until_ms = until_ms;
        }
    }

    pub fn sample(&self, now_ms: f64) -> FrameSample {
        FrameSample {
            pointer: self.pointer.position(),
            scroll_y: self.scroll.offset(),
            page_progress: self.scroll.page_progress(),
            viewport: self.scroll.viewport(),
            doc_height: self.scroll.doc_height(),
            now_ms,
        }
    }

    /// Called once per animation frame. Returns a sample only when something
    /// visible may have changed since the previous frame.
    pub fn poll(&mut self, now_ms: f64) -> Option<FrameSample> {
        let moved = self.pointer.take_update().is_some();
        let scrolled = self.scroll.take_update();
        let animating = now_ms <= self.busy_until_ms;
        // one extra frame after the window closes so tweens land on their end values
        let landing = self.settling && !animating;
        self.settling = animating;
        if moved || scrolled || animating || landing {
            Some(self.sample(now_ms))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frames_render_nothing() {
        let mut f = FrameInputs::default();
        assert_eq!(f.poll(16.0), None);
        assert_eq!(f.poll(32.0), None);
    }

    #[test]
    fn burst_of_events_yields_one_sample_with_latest_values() {
        let mut f = FrameInputs::default();
        f.scroll.record_layout(Viewport::new(1000.0, 800.0), 3000.0);
        for i in 0..5 {
            f.pointer.record_mouse(PointerPosition::new(i as f64 * 10.0, 5.0));
            f.scroll.record_scroll(i as f64 * 100.0);
        }
        let s = f.poll(16.0).unwrap();
        assert_eq!(s.pointer, PointerPosition::new(40.0, 5.0));
        assert_eq!(s.scroll_y, 400.0);
        assert_eq!(s.page_progress.value(), 400.0 / 2200.0);
        assert_eq!(s.viewport, Viewport::new(1000.0, 800.0));
        assert_eq!(f.poll(32.0), None);
    }

    #[test]
    fn keep_alive_renders_through_the_window_plus_one_frame() {
        let mut f = FrameInputs::default();
        f.keep_alive(40.0);
        f.keep_alive(20.0);
        assert!(f.poll(16.0).is_some());
        assert!(f.poll(32.0).is_some());
        let landing = f.poll(48.0).unwrap();
        assert_eq!(landing.now_ms, 48.0);
        assert_eq!(f.poll(64.0), None);
    }

    #[test]
    fn empty_touch_frame_is_not_rendered() {
        let mut f = FrameInputs::default();
        f.pointer.record_touch(None);
        assert_eq!(f.poll(16.0), None);
    }
}
