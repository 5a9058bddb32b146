use web_sys::{MouseEvent, PointerEvent};
use yew::prelude::*;

use super::app::FrameContext;
use crate::mapper;
use crate::model::{GlyphEvent, GlyphKind};
use crate::state::GlyphAnimator;
use crate::util::{clog, now_ms};

#[function_component(BinaryMark)]
pub fn binary_mark() -> Html {
    html! {
        <div class="ox-binary-mark">
            <Glyph kind={GlyphKind::Void} />
            <Glyph kind={GlyphKind::System} />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GlyphProps {
    pub kind: GlyphKind,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    let kind = props.kind;
    let ctx = use_context::<FrameContext>();
    let cfg = ctx
        .as_ref()
        .map(|c| c.config.glyph.clone())
        .unwrap_or_default();
    let animator = {
        let cfg = cfg.clone();
        use_mut_ref(move || GlyphAnimator::new(kind.word().chars().count(), &cfg))
    };
    let Some(ctx) = ctx else {
        return html! {};
    };

    let dispatch = {
        let animator = animator.clone();
        let keep_alive = ctx.keep_alive.clone();
        Callback::from(move |event: GlyphEvent| {
            let settle = animator.borrow_mut().apply(event, now_ms());
            if let Some(until) = settle {
                clog(&format!("{kind:?} glyph -> {:?}", animator.borrow().state()));
                keep_alive.emit(until);
            }
        })
    };
    // hover comes from real pointers only; a tap already toggles through click
    let on_enter = {
        let d = dispatch.clone();
        Callback::from(move |e: PointerEvent| {
            if e.pointer_type() != "touch" {
                d.emit(GlyphEvent::Enter);
            }
        })
    };
    let on_leave = {
        let d = dispatch.clone();
        Callback::from(move |e: PointerEvent| {
            if e.pointer_type() != "touch" {
                d.emit(GlyphEvent::Leave);
            }
        })
    };
    let on_tap = dispatch.reform(|_: MouseEvent| GlyphEvent::Tap);

    let now = ctx.sample.now_ms;
    let a = animator.borrow();
    let mix = a.mark_mix(now);
    let mark = mapper::glyph_mark(kind, mix, &cfg);
    let label = mapper::glyph_label(mix);
    let chars = kind
        .word()
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let p = mapper::glyph_char(a.char_progress(i, now), &cfg);
            html! { <span key={i.to_string()} style={p.to_style()}>{ c.to_string() }</span> }
        })
        .collect::<Html>();

    let (shape, tone) = match kind {
        GlyphKind::Void => (html! { <div class="ox-ring"></div> }, "ox-void"),
        GlyphKind::System => (
            html! {
                <div class="ox-cross">
                    <div class="ox-bar ox-bar-a"></div>
                    <div class="ox-bar ox-bar-b"></div>
                </div>
            },
            "ox-system",
        ),
    };

    html! {
        <div
            class={classes!("ox-glyph", tone)}
            data-hover="true"
            onpointerenter={on_enter}
            onpointerleave={on_leave}
            onclick={on_tap}
        >
            <div class="ox-glyph-frame">
                <div class="ox-glyph-shape" style={mark.to_style()}>{ shape }</div>
                <div class="ox-glyph-text">
                    <div class="ox-word">{ chars }</div>
                </div>
            </div>
            <div class="ox-glyph-label" style={label.opacity_style()}>
                <span class="ox-label-name">{ kind.label() }</span>
                <span class="ox-label-code">{ kind.code() }</span>
            </div>
        </div>
    }
}
