use web_sys::Element;
use yew::prelude::*;

use super::{app::FrameContext, reveal::Reveal};
use crate::mapper;
use crate::model::{RegionRect, ScrollProgress, VisualParams};
use crate::state::region_progress;
use crate::util::read_scroll_y;

/// Section position in document coordinates, re-measured when layout changes.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SectionLayout {
    doc_top: f64,
    height: f64,
}

#[function_component(Manifesto)]
pub fn manifesto() -> Html {
    let ctx = use_context::<FrameContext>();
    let section = use_node_ref();
    let layout = use_state_eq(|| None::<SectionLayout>);
    {
        let section = section.clone();
        let layout = layout.clone();
        let dims = ctx
            .as_ref()
            .map(|c| (c.sample.viewport, c.sample.doc_height));
        use_effect_with(dims, move |_| {
            if let Some(el) = section.cast::<Element>() {
                let rect = el.get_bounding_client_rect();
                let scroll_y = web_sys::window().map_or(0.0, |w| read_scroll_y(&w));
                layout.set(Some(SectionLayout {
                    doc_top: rect.top() + scroll_y,
                    height: rect.height(),
                }));
            }
            || ()
        });
    }
    let Some(ctx) = ctx else {
        return html! {};
    };

    let m = &ctx.config.manifesto;
    let s = ctx.sample;
    let progress = layout.map_or(ScrollProgress::START, |l| {
        region_progress(
            RegionRect {
                top: l.doc_top - s.scroll_y,
                height: l.height,
            },
            s.viewport.height,
        )
    });
    let grid = mapper::manifesto_grid(progress, m);
    let lane = |i: usize| mapper::manifesto_lane(progress, i, m).transform_style();
    let rise = VisualParams {
        translate_y: m.reveal_rise_px,
        opacity: 0.0,
        ..VisualParams::IDENTITY
    };
    let pop = VisualParams {
        scale: m.cta_from_scale,
        opacity: 0.0,
        ..VisualParams::IDENTITY
    };

    html! {
        <section ref={section} class="ox-manifesto">
            <div class="ox-manifesto-grid" style={grid.transform_style()}></div>

            <div class="ox-manifesto-body">
                <div style={lane(0)}>
                    <Reveal from={rise} delay_ms={m.lane_delay(0)} class="ox-block">
                        <div class="ox-block-tag">{"[ 01_DISCONNECT ]"}</div>
                        <div class="ox-block-copy">
                            <h2>
                                {"Esc"}<span class="ox-stroke">{"ape"}</span>{" The"}<br />{"Algorithm."}
                            </h2>
                            <p>
                                {"We live in a world of constant noise. Signals. Notifications. The infinite scroll. \
                                  OX is the anti-platform. A physical space to engage with the tangible."}
                            </p>
                        </div>
                    </Reveal>
                </div>

                <div style={lane(1)}>
                    <Reveal from={rise} delay_ms={m.lane_delay(1)} class="ox-block ox-block-reverse">
                        <div class="ox-block-tag">{"[ 02_THE_VOID ]"}</div>
                        <div class="ox-block-copy">
                            <h2>
                                {"Ent"}<span class="ox-stroke">{"er"}</span>{" The"}<br />{"Silence."}
                            </h2>
                            <p>
                                {"State 0 is the void. It is the absence of digital clutter. \
                                  It is where creativity breathes. Reclaim your attention span."}
                            </p>
                        </div>
                    </Reveal>
                </div>

                <Reveal from={pop} class="ox-cta-row">
                    <button class="ox-cta" data-hover="true">
                        <span>{"Initiate System"}</span>
                        <div class="ox-cta-fill"></div>
                    </button>
                </Reveal>
            </div>
        </section>
    }
}
