//! Interpolation primitives: breakpoint tables, easing curves and a
//! retargetable tween. Everything here is a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    InOutQuad,
    OutCubic,
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Piecewise-linear mapping over ordered `(input, output)` stops.
///
/// Inputs below the first stop map to the first output and inputs above the
/// last stop map to the last output; there is no extrapolation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Breakpoints {
    stops: Vec<[f64; 2]>, // sorted by input
}

impl Breakpoints {
    pub fn new(stops: Vec<[f64; 2]>) -> SiteResult<Self> {
        if stops.is_empty() {
            return Err(SiteError::breakpoints("table needs at least one stop"));
        }
        if stops.iter().flatten().any(|v| !v.is_finite()) {
            return Err(SiteError::breakpoints("stops must be finite"));
        }
        if !stops.windows(2).all(|w| w[0][0] <= w[1][0]) {
            return Err(SiteError::breakpoints(
                "stop inputs must be in non-decreasing order",
            ));
        }
        Ok(Self { stops })
    }

    /// Two-stop table `[d0, d1] -> [r0, r1]`.
    pub fn span(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        if d0 <= d1 {
            Self {
                stops: vec![[d0, r0], [d1, r1]],
            }
        } else {
            Self {
                stops: vec![[d1, r1], [d0, r0]],
            }
        }
    }

    pub fn sample(&self, x: f64) -> f64 {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if x.is_nan() || x <= first[0] {
            return first[1];
        }
        if x >= last[0] {
            return last[1];
        }

        let idx = self.stops.partition_point(|s| s[0] <= x);
        let a = self.stops[idx - 1];
        let b = self.stops[idx];
        let denom = b[0] - a[0];
        if denom <= 0.0 {
            return a[1];
        }
        f64::lerp(&a[1], &b[1], (x - a[0]) / denom)
    }
}

impl TryFrom<Vec<[f64; 2]>> for Breakpoints {
    type Error = SiteError;

    fn try_from(stops: Vec<[f64; 2]>) -> SiteResult<Self> {
        Self::new(stops)
    }
}

impl From<Breakpoints> for Vec<[f64; 2]> {
    fn from(b: Breakpoints) -> Self {
        b.stops
    }
}

/// A single value moving toward a target over a fixed duration.
///
/// Retargeting mid-flight starts the new transition from the value sampled
/// at the retarget time, so an interrupted tween never jumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl Tween {
    pub fn settled(value: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: duration_ms.max(0.0),
            ease,
        }
    }

    pub fn ends_at(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || now_ms >= self.ends_at() {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        f64::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    /// Returns false when `to` is already the target.
    pub fn retarget(&mut self, to: f64, start_ms: f64) -> bool {
        if to == self.to {
            return false;
        }
        self.from = self.sample(start_ms);
        self.to = to;
        self.start_ms = start_ms;
        true
    }
}
