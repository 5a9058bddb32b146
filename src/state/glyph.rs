// Idle/Revealed machine for one hero mark and its staggered character reveal.
use crate::anim::{Ease, Tween};
use crate::config::GlyphConfig;
use crate::model::{GlyphEvent, GlyphState};

/// Per-character reveal with a stagger. Characters appear first to last and
/// disappear last to first.
///
/// The sequence can be retargeted at any time: each character continues from
/// its current progress instead of restarting.
#[derive(Debug, Clone)]
pub struct RevealSequence {
    from: Vec<f64>,
    forward: bool,
    start_ms: f64,
    stagger_in_ms: f64,
    stagger_out_ms: f64,
    duration_ms: f64,
}

impl RevealSequence {
    pub fn new(len: usize, cfg: &GlyphConfig) -> Self {
        Self {
            from: vec![0.0; len],
            forward: false,
            start_ms: 0.0,
            stagger_in_ms: cfg.stagger_in_ms,
            stagger_out_ms: cfg.stagger_out_ms,
            duration_ms: cfg.char_duration_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.from.len()
    }

    fn delay(&self, i: usize) -> f64 {
        if self.forward {
            i as f64 * self.stagger_in_ms
        } else {
            (self.len().saturating_sub(1) - i) as f64 * self.stagger_out_ms
        }
    }

    pub fn progress(&self, i: usize, now_ms: f64) -> f64 {
        let Some(&from) = self.from.get(i) else {
            return 0.0;
        };
        let elapsed = (now_ms - self.start_ms - self.delay(i)).max(0.0);
        let step = if self.duration_ms > 0.0 {
            elapsed / self.duration_ms
        } else {
            1.0
        };
        if self.forward {
            (from + step).min(1.0)
        } else {
            (from - step).max(0.0)
        }
    }

    pub fn retarget(&mut self, forward: bool, now_ms: f64) {
        if forward == self.forward {
            return;
        }
        self.from = (0..self.len()).map(|i| self.progress(i, now_ms)).collect();
        self.forward = forward;
        self.start_ms = now_ms;
    }

    pub fn ends_at(&self) -> f64 {
        let last_delay = (0..self.len()).map(|i| self.delay(i)).fold(0.0, f64::max);
        self.start_ms + last_delay + self.duration_ms
    }
}

#[derive(Debug, Clone)]
pub struct GlyphAnimator {
    state: GlyphState,
    mark: Tween,
    chars: RevealSequence,
}

impl GlyphAnimator {
    pub fn new(word_len: usize, cfg: &GlyphConfig) -> Self {
        Self {
            state: GlyphState::Idle,
            mark: Tween::settled(0.0, cfg.mark_duration_ms, Ease::InOutQuad),
            chars: RevealSequence::new(word_len, cfg),
        }
    }

    pub fn state(&self) -> GlyphState {
        self.state
    }

    /// Applies an input event. Returns the time the resulting animation
    /// settles, or `None` when the state did not change.
    pub fn apply(&mut self, event: GlyphEvent, now_ms: f64) -> Option<f64> {
        let next = self.state.next(event);
        if next == self.state {
            return None;
        }
        self.state = next;
        let revealed = next.is_revealed();
        self.mark.retarget(if revealed { 1.0 } else { 0.0 }, now_ms);
        self.chars.retarget(revealed, now_ms);
        Some(self.settles_at())
    }

    /// 0 = Idle pose, 1 = Revealed pose.
    pub fn mark_mix(&self, now_ms: f64) -> f64 {
        self.mark.sample(now_ms)
    }

    pub fn char_progress(&self, i: usize, now_ms: f64) -> f64 {
        self.chars.progress(i, now_ms)
    }

    pub fn settles_at(&self) -> f64 {
        self.mark.ends_at().max(self.chars.ends_at())
    }
}
