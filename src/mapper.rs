//! Pure mappings from input samples to per-element visual parameters.
//!
//! Each function is independent and stateless; the same inputs always give
//! the same `VisualParams`. Breakpoint tables clamp, so no output ever leaves
//! its declared range.

use crate::anim::{Breakpoints, Lerp};
use crate::config::{CursorConfig, GlyphConfig, HeroConfig, ManifestoConfig, SiteConfig};
use crate::model::{GlyphKind, PointerPosition, ScrollProgress, Viewport, VisualParams};

/// Pointer parallax of the big background title: proportional to the
/// pointer's distance from the horizontal centre.
pub fn title_pointer_shift(
    pointer: PointerPosition,
    viewport: Viewport,
    cfg: &SiteConfig,
) -> VisualParams {
    let w = viewport.width_or(cfg.fallback_viewport_width);
    let x = if pointer.x.is_finite() {
        pointer.x.clamp(0.0, w)
    } else {
        w / 2.0
    };
    VisualParams {
        translate_x: (x - w / 2.0) * cfg.hero.title_pointer_factor,
        ..VisualParams::IDENTITY
    }
}

/// Scroll-driven drift, growth and fade of the background title.
pub fn title_scroll(scroll_y: f64, hero: &HeroConfig) -> VisualParams {
    VisualParams {
        translate_x: hero.title_shift_x.sample(scroll_y),
        scale: hero.title_scale.sample(scroll_y),
        opacity: hero.title_opacity.sample(scroll_y),
        ..VisualParams::IDENTITY
    }
}

pub fn scroll_indicator(scroll_y: f64, hero: &HeroConfig) -> VisualParams {
    VisualParams {
        opacity: hero.indicator_opacity.sample(scroll_y),
        ..VisualParams::IDENTITY
    }
}

pub fn manifesto_grid(progress: ScrollProgress, m: &ManifestoConfig) -> VisualParams {
    VisualParams {
        translate_y: m.grid_shift_y.sample(progress.value()),
        ..VisualParams::IDENTITY
    }
}

/// Lanes past the configured tables reuse the last (fastest) one.
pub fn manifesto_lane(progress: ScrollProgress, lane: usize, m: &ManifestoConfig) -> VisualParams {
    let table: Option<&Breakpoints> = m.lane_shift_y.get(lane).or(m.lane_shift_y.last());
    VisualParams {
        translate_y: table.map_or(0.0, |t| t.sample(progress.value())),
        ..VisualParams::IDENTITY
    }
}

pub fn glyph_mark(kind: GlyphKind, mix: f64, g: &GlyphConfig) -> VisualParams {
    let revealed = VisualParams {
        scale: g.mark_scale,
        opacity: 0.0,
        blur_px: g.mark_blur_px,
        rotate_deg: match kind {
            GlyphKind::Void => 0.0,
            GlyphKind::System => g.system_rotate_deg,
        },
        ..VisualParams::IDENTITY
    };
    VisualParams::lerp(&VisualParams::IDENTITY, &revealed, mix.clamp(0.0, 1.0))
}

pub fn glyph_label(mix: f64) -> VisualParams {
    VisualParams {
        opacity: 1.0 - mix.clamp(0.0, 1.0),
        ..VisualParams::IDENTITY
    }
}

pub fn glyph_char(progress: f64, g: &GlyphConfig) -> VisualParams {
    let p = progress.clamp(0.0, 1.0);
    VisualParams {
        opacity: p,
        blur_px: g.char_blur_px * (1.0 - p),
        ..VisualParams::IDENTITY
    }
}

/// Moves a block from its entry pose (`from`) to rest.
pub fn reveal_entry(mix: f64, from: &VisualParams) -> VisualParams {
    VisualParams::lerp(from, &VisualParams::IDENTITY, mix.clamp(0.0, 1.0))
}

pub fn cursor(pointer: PointerPosition, hovering: bool, c: &CursorConfig) -> VisualParams {
    VisualParams {
        translate_x: pointer.x,
        translate_y: pointer.y,
        scale: if hovering { c.hover_scale } else { 1.0 },
        ..VisualParams::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scroll::region_progress;
    use crate::model::RegionRect;

    fn cfg() -> SiteConfig {
        SiteConfig::default()
    }

    fn desktop() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    #[test]
    fn title_is_centred_when_pointer_is_centred() {
        let p = title_pointer_shift(PointerPosition::new(500.0, 300.0), desktop(), &cfg());
        assert_eq!(p.translate_x, 0.0);
    }

    #[test]
    fn title_shift_at_right_edge() {
        let p = title_pointer_shift(PointerPosition::new(1000.0, 0.0), desktop(), &cfg());
        assert_eq!(p.translate_x, 50.0);
    }

    #[test]
    fn title_shift_is_linear_in_offset_from_centre() {
        let c = cfg();
        for x in [0.0, 125.0, 250.0, 499.0, 501.0, 777.0, 1000.0] {
            let p = title_pointer_shift(PointerPosition::new(x, 0.0), desktop(), &c);
            assert!((p.translate_x - 0.1 * (x - 500.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_width_viewport_uses_fallback() {
        let p = title_pointer_shift(
            PointerPosition::new(1000.0, 0.0),
            Viewport::new(0.0, 0.0),
            &cfg(),
        );
        assert_eq!(p.translate_x, 50.0);
        assert!(p.translate_x.is_finite());
    }

    #[test]
    fn pointer_outside_viewport_is_clamped() {
        let p = title_pointer_shift(PointerPosition::new(4000.0, 0.0), desktop(), &cfg());
        assert_eq!(p.translate_x, 50.0);
    }

    #[test]
    fn title_scroll_follows_its_tables() {
        let h = HeroConfig::default();
        let top = title_scroll(0.0, &h);
        assert_eq!((top.translate_x, top.scale, top.opacity), (0.0, 1.0, 0.2));
        let half = title_scroll(250.0, &h);
        assert_eq!(half.translate_x, -100.0);
        assert!((half.scale - 1.1).abs() < 1e-12);
        let past = title_scroll(5000.0, &h);
        assert_eq!((past.translate_x, past.scale, past.opacity), (-200.0, 1.2, 0.0));
    }

    #[test]
    fn indicator_fades_over_first_hundred_pixels() {
        let h = HeroConfig::default();
        assert_eq!(scroll_indicator(0.0, &h).opacity, 1.0);
        assert_eq!(scroll_indicator(50.0, &h).opacity, 0.5);
        assert_eq!(scroll_indicator(100.0, &h).opacity, 0.0);
        assert_eq!(scroll_indicator(2500.0, &h).opacity, 0.0);
        assert_eq!(scroll_indicator(-40.0, &h).opacity, 1.0);
    }

    #[test]
    fn grid_rests_at_top_of_page() {
        let m = ManifestoConfig::default();
        let vh = 800.0;
        // manifesto sits below the sticky hero
        let at_top = region_progress(RegionRect { top: vh, height: 1200.0 }, vh);
        assert_eq!(manifesto_grid(at_top, &m).translate_y, 0.0);
    }

    #[test]
    fn parallax_outputs_clamp_outside_progress_range() {
        let m = ManifestoConfig::default();
        assert_eq!(manifesto_grid(ScrollProgress::new(-1.0), &m).translate_y, 0.0);
        assert_eq!(manifesto_grid(ScrollProgress::new(3.0), &m).translate_y, 200.0);
        assert_eq!(manifesto_lane(ScrollProgress::new(9.0), 0, &m).translate_y, 60.0);
        assert_eq!(manifesto_lane(ScrollProgress::new(9.0), 1, &m).translate_y, 120.0);
    }

    #[test]
    fn extra_lanes_reuse_the_last_table() {
        let m = ManifestoConfig::default();
        let p = ScrollProgress::new(0.5);
        assert_eq!(manifesto_lane(p, 5, &m), manifesto_lane(p, 1, &m));
    }

    #[test]
    fn idle_mark_is_identity() {
        let g = GlyphConfig::default();
        assert_eq!(glyph_mark(GlyphKind::Void, 0.0, &g), VisualParams::IDENTITY);
        assert_eq!(glyph_mark(GlyphKind::System, 0.0, &g), VisualParams::IDENTITY);
    }

    #[test]
    fn revealed_marks_fade_shrink_and_blur() {
        let g = GlyphConfig::default();
        let o = glyph_mark(GlyphKind::Void, 1.0, &g);
        assert_eq!((o.opacity, o.scale, o.blur_px, o.rotate_deg), (0.0, 0.95, 5.0, 0.0));
        let x = glyph_mark(GlyphKind::System, 1.0, &g);
        assert_eq!(x.rotate_deg, 90.0);
        assert_eq!(glyph_mark(GlyphKind::System, 4.0, &g), x);
    }

    #[test]
    fn chars_sharpen_as_they_appear() {
        let g = GlyphConfig::default();
        let hidden = glyph_char(0.0, &g);
        assert_eq!((hidden.opacity, hidden.blur_px), (0.0, 10.0));
        let shown = glyph_char(1.0, &g);
        assert_eq!((shown.opacity, shown.blur_px), (1.0, 0.0));
        assert_eq!(glyph_label(0.25).opacity, 0.75);
    }

    #[test]
    fn entry_reveal_lands_on_identity() {
        let from = VisualParams {
            translate_y: 50.0,
            opacity: 0.0,
            ..VisualParams::IDENTITY
        };
        assert_eq!(reveal_entry(0.0, &from), from);
        assert_eq!(reveal_entry(1.0, &from), VisualParams::IDENTITY);
    }

    #[test]
    fn cursor_grows_over_interactive_elements() {
        let c = CursorConfig::default();
        let p = PointerPosition::new(10.0, 20.0);
        assert_eq!(cursor(p, false, &c).scale, 1.0);
        let hot = cursor(p, true, &c);
        assert_eq!((hot.translate_x, hot.translate_y, hot.scale), (10.0, 20.0, 2.5));
    }
}
