// Last known pointer sample from mouse and touch input.
use web_sys::TouchList;

use crate::model::PointerPosition;

#[derive(Default, Debug, Clone)]
pub struct PointerTracker {
    last: PointerPosition,
    dirty: bool,
}

impl PointerTracker {
    pub fn record_mouse(&mut self, pos: PointerPosition) {
        self.last = pos;
        self.dirty = true;
    }

    /// `first` is the primary touch point; `None` means no active touches
    /// and leaves the previous sample in place.
    pub fn record_touch(&mut self, first: Option<PointerPosition>) -> bool {
        match first {
            Some(pos) => {
                self.record_mouse(pos);
                true
            }
            None => false,
        }
    }

    pub fn position(&self) -> PointerPosition {
        self.last
    }

    /// Latest position if anything was recorded since the previous call.
    pub fn take_update(&mut self) -> Option<PointerPosition> {
        if std::mem::take(&mut self.dirty) {
            Some(self.last)
        } else {
            None
        }
    }
}

pub fn primary_touch(touches: &TouchList) -> Option<PointerPosition> {
    touches
        .item(0)
        .map(|t| PointerPosition::new(t.client_x() as f64, t.client_y() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_without_update() {
        let mut t = PointerTracker::default();
        assert_eq!(t.position(), PointerPosition::new(0.0, 0.0));
        assert_eq!(t.take_update(), None);
    }

    #[test]
    fn empty_touch_list_keeps_previous_sample() {
        let mut t = PointerTracker::default();
        t.record_mouse(PointerPosition::new(120.0, 40.0));
        t.take_update();
        assert!(!t.record_touch(None));
        assert_eq!(t.position(), PointerPosition::new(120.0, 40.0));
        assert_eq!(t.take_update(), None);
    }

    #[test]
    fn touch_overwrites_mouse() {
        let mut t = PointerTracker::default();
        t.record_mouse(PointerPosition::new(1.0, 2.0));
        assert!(t.record_touch(Some(PointerPosition::new(300.0, 500.0))));
        assert_eq!(t.position(), PointerPosition::new(300.0, 500.0));
    }

    #[test]
    fn rapid_moves_coalesce_to_latest() {
        let mut t = PointerTracker::default();
        for x in 0..10 {
            t.record_mouse(PointerPosition::new(x as f64, 0.0));
        }
        assert_eq!(t.take_update(), Some(PointerPosition::new(9.0, 0.0)));
        assert_eq!(t.take_update(), None);
    }
}
