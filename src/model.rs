//! Core value types shared by the trackers, the mapper and the components.

use serde::{Deserialize, Serialize};

use crate::anim::Lerp;

/// Pointer coordinate in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width usable as a divisor; unusable widths fall back to `fallback`.
    pub fn width_or(&self, fallback: f64) -> f64 {
        if self.width.is_finite() && self.width > 0.0 {
            self.width
        } else {
            fallback
        }
    }
}

/// Normalized scroll progress, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            Self::START
        } else {
            Self(v.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Bounding box of a page region relative to the top of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionRect {
    pub top: f64,
    pub height: f64,
}

/// Derived style parameters for one element. Recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur_px: f64,
    pub rotate_deg: f64,
}

impl VisualParams {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
        blur_px: 0.0,
        rotate_deg: 0.0,
    };

    pub fn transform_style(&self) -> String {
        format!(
            "transform: translate3d({:.3}px, {:.3}px, 0) scale({:.4}) rotate({:.3}deg);",
            self.translate_x, self.translate_y, self.scale, self.rotate_deg
        )
    }

    pub fn opacity_style(&self) -> String {
        format!("opacity: {:.4};", self.opacity)
    }

    pub fn to_style(&self) -> String {
        let mut s = self.transform_style();
        s.push(' ');
        s.push_str(&self.opacity_style());
        if self.blur_px > 0.0 {
            s.push_str(&format!(" filter: blur({:.3}px);", self.blur_px));
        }
        s
    }
}

impl Default for VisualParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for VisualParams {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate_x: f64::lerp(&a.translate_x, &b.translate_x, t),
            translate_y: f64::lerp(&a.translate_y, &b.translate_y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            blur_px: f64::lerp(&a.blur_px, &b.blur_px, t),
            rotate_deg: f64::lerp(&a.rotate_deg, &b.rotate_deg, t),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphState {
    #[default]
    Idle,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphEvent {
    Enter,
    Leave,
    Tap,
}

impl GlyphState {
    pub fn next(self, event: GlyphEvent) -> Self {
        match (self, event) {
            (_, GlyphEvent::Enter) => Self::Revealed,
            (_, GlyphEvent::Leave) => Self::Idle,
            (Self::Idle, GlyphEvent::Tap) => Self::Revealed,
            (Self::Revealed, GlyphEvent::Tap) => Self::Idle,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// The two central marks of the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphKind {
    /// The `O` on the black half.
    Void,
    /// The `X` on the white half.
    System,
}

impl GlyphKind {
    pub fn word(self) -> &'static str {
        match self {
            Self::Void => "OFFLINE",
            Self::System => "XPERIENCE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Void => "The Void",
            Self::System => "The System",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Void => "[ NULL ]",
            Self::System => "[ EXE ]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_transitions() {
        use GlyphEvent::*;
        assert_eq!(GlyphState::Idle.next(Enter), GlyphState::Revealed);
        assert_eq!(GlyphState::Revealed.next(Enter), GlyphState::Revealed);
        assert_eq!(GlyphState::Revealed.next(Leave), GlyphState::Idle);
        assert_eq!(GlyphState::Idle.next(Leave), GlyphState::Idle);
        assert_eq!(GlyphState::Idle.next(Tap), GlyphState::Revealed);
        assert_eq!(GlyphState::Revealed.next(Tap), GlyphState::Idle);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ScrollProgress::new(-0.2), ScrollProgress::START);
        assert_eq!(ScrollProgress::new(1.7), ScrollProgress::END);
        assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::START);
        assert_eq!(ScrollProgress::new(0.4).value(), 0.4);
    }

    #[test]
    fn zero_width_viewport_falls_back() {
        assert_eq!(Viewport::new(0.0, 800.0).width_or(1000.0), 1000.0);
        assert_eq!(Viewport::new(f64::NAN, 800.0).width_or(1000.0), 1000.0);
        assert_eq!(Viewport::new(390.0, 800.0).width_or(1000.0), 390.0);
    }

    #[test]
    fn identity_style_has_no_filter() {
        let s = VisualParams::IDENTITY.to_style();
        assert!(s.contains("scale(1.0000)"));
        assert!(s.contains("opacity: 1.0000;"));
        assert!(!s.contains("blur"));
    }

    #[test]
    fn blurred_style_includes_filter() {
        let p = VisualParams {
            blur_px: 5.0,
            ..VisualParams::IDENTITY
        };
        assert!(p.to_style().ends_with("filter: blur(5.000px);"));
    }

    #[test]
    fn params_lerp_fieldwise() {
        let hidden = VisualParams {
            translate_y: 50.0,
            opacity: 0.0,
            ..VisualParams::IDENTITY
        };
        let mid = VisualParams::lerp(&hidden, &VisualParams::IDENTITY, 0.5);
        assert_eq!(mid.translate_y, 25.0);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.scale, 1.0);
    }
}
