//! Site tuning: breakpoint tables, timings and flags.
//!
//! The shipped values live in `site.json` and are embedded at build time.
//! Every section implements `Default` with the same values so a partial or
//! broken file still yields a working page.

use serde::{Deserialize, Serialize};

use crate::anim::Breakpoints;
use crate::error::{SiteError, SiteResult};
use crate::util::cwarn;

const EMBEDDED: &str = include_str!("../site.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Used whenever the reported viewport width cannot be divided by.
    pub fallback_viewport_width: f64,
    pub verbose_log: bool,
    pub hero: HeroConfig,
    pub manifesto: ManifestoConfig,
    pub glyph: GlyphConfig,
    pub cursor: CursorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fallback_viewport_width: 1000.0,
            verbose_log: false,
            hero: HeroConfig::default(),
            manifesto: ManifestoConfig::default(),
            glyph: GlyphConfig::default(),
            cursor: CursorConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub title_pointer_factor: f64,
    /// scroll offset (px) -> horizontal shift (px)
    pub title_shift_x: Breakpoints,
    pub title_scale: Breakpoints,
    pub title_opacity: Breakpoints,
    pub indicator_opacity: Breakpoints,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title_pointer_factor: 0.1,
            title_shift_x: Breakpoints::span(0.0, 500.0, 0.0, -200.0),
            title_scale: Breakpoints::span(0.0, 500.0, 1.0, 1.2),
            title_opacity: Breakpoints::span(0.0, 500.0, 0.2, 0.0),
            indicator_opacity: Breakpoints::span(0.0, 100.0, 1.0, 0.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestoConfig {
    /// section progress -> grid vertical shift (px)
    pub grid_shift_y: Breakpoints,
    /// One table per text lane, slowest first.
    pub lane_shift_y: Vec<Breakpoints>,
    pub reveal_duration_ms: f64,
    pub reveal_rise_px: f64,
    pub lane_delay_ms: Vec<f64>,
    pub cta_from_scale: f64,
}

impl Default for ManifestoConfig {
    fn default() -> Self {
        Self {
            grid_shift_y: Breakpoints::span(0.0, 1.0, 0.0, 200.0),
            lane_shift_y: vec![
                Breakpoints::span(0.0, 1.0, 0.0, 60.0),
                Breakpoints::span(0.0, 1.0, 0.0, 120.0),
            ],
            reveal_duration_ms: 800.0,
            reveal_rise_px: 50.0,
            lane_delay_ms: vec![0.0, 200.0],
            cta_from_scale: 0.9,
        }
    }
}

impl ManifestoConfig {
    pub fn lane_delay(&self, lane: usize) -> f64 {
        self.lane_delay_ms.get(lane).copied().unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphConfig {
    pub mark_duration_ms: f64,
    pub mark_scale: f64,
    pub mark_blur_px: f64,
    pub system_rotate_deg: f64,
    pub char_duration_ms: f64,
    pub char_blur_px: f64,
    pub stagger_in_ms: f64,
    pub stagger_out_ms: f64,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            mark_duration_ms: 400.0,
            mark_scale: 0.95,
            mark_blur_px: 5.0,
            system_rotate_deg: 90.0,
            char_duration_ms: 500.0,
            char_blur_px: 10.0,
            stagger_in_ms: 40.0,
            stagger_out_ms: 30.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfig {
    pub hover_scale: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { hover_scale: 2.5 }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> SiteResult<Self> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Embedded configuration, or defaults when it fails to parse.
    pub fn load() -> Self {
        match Self::from_json(EMBEDDED) {
            Ok(cfg) => cfg,
            Err(e) => {
                cwarn(&format!("site.json rejected, using defaults: {e}"));
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SiteResult<()> {
        if !(self.fallback_viewport_width.is_finite() && self.fallback_viewport_width > 0.0) {
            return Err(SiteError::config(
                "fallback_viewport_width must be a positive number",
            ));
        }
        if !self.hero.title_pointer_factor.is_finite() {
            return Err(SiteError::config("hero.title_pointer_factor must be finite"));
        }
        if self.manifesto.lane_shift_y.is_empty() {
            return Err(SiteError::config(
                "manifesto.lane_shift_y needs at least one table",
            ));
        }
        let durations = [
            ("manifesto.reveal_duration_ms", self.manifesto.reveal_duration_ms),
            ("glyph.mark_duration_ms", self.glyph.mark_duration_ms),
            ("glyph.char_duration_ms", self.glyph.char_duration_ms),
            ("glyph.stagger_in_ms", self.glyph.stagger_in_ms),
            ("glyph.stagger_out_ms", self.glyph.stagger_out_ms),
        ];
        for (name, v) in durations {
            if !(v.is_finite() && v >= 0.0) {
                return Err(SiteError::config(format!("{name} must be >= 0")));
            }
        }
        if self.manifesto.lane_delay_ms.iter().any(|d| !(d.is_finite() && *d >= 0.0)) {
            return Err(SiteError::config("manifesto.lane_delay_ms must be >= 0"));
        }
        Ok(())
    }
}
