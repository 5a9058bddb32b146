// Once-only entry animation for blocks that scroll into view.
use crate::anim::{Ease, Tween};

#[derive(Debug, Clone)]
pub struct EntryReveal {
    seen: bool,
    delay_ms: f64,
    tween: Tween,
}

impl EntryReveal {
    pub fn new(duration_ms: f64, delay_ms: f64) -> Self {
        Self {
            seen: false,
            delay_ms: delay_ms.max(0.0),
            tween: Tween::settled(0.0, duration_ms, Ease::OutCubic),
        }
    }

    pub fn seen(&self) -> bool {
        self.seen
    }

    /// Feeds one intersection notification. The first intersecting one starts
    /// the reveal and returns its settle time; later ones are ignored.
    pub fn observe(&mut self, intersecting: bool, now_ms: f64) -> Option<f64> {
        if self.seen || !intersecting {
            return None;
        }
        self.seen = true;
        self.tween.retarget(1.0, now_ms + self.delay_ms);
        Some(self.tween.ends_at())
    }

    /// 0 = entry pose, 1 = resting pose.
    pub fn mix(&self, now_ms: f64) -> f64 {
        self.tween.sample(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_until_intersecting() {
        let mut r = EntryReveal::new(800.0, 0.0);
        assert_eq!(r.observe(false, 100.0), None);
        assert_eq!(r.mix(5000.0), 0.0);
        assert!(!r.seen());
    }

    #[test]
    fn reveals_once_after_delay() {
        let mut r = EntryReveal::new(800.0, 200.0);
        assert_eq!(r.observe(true, 1000.0), Some(2000.0));
        assert_eq!(r.mix(1100.0), 0.0);
        assert!(r.mix(1600.0) > 0.0);
        assert_eq!(r.mix(2000.0), 1.0);
    }

    #[test]
    fn leaving_the_viewport_does_not_hide_again() {
        let mut r = EntryReveal::new(800.0, 0.0);
        r.observe(true, 0.0);
        assert_eq!(r.observe(false, 900.0), None);
        assert_eq!(r.observe(true, 1000.0), None);
        assert_eq!(r.mix(1000.0), 1.0);
    }
}
