use yew::prelude::*;

use super::{app::FrameContext, binary_mark::BinaryMark};
use crate::mapper;

#[function_component(Hero)]
pub fn hero() -> Html {
    let Some(ctx) = use_context::<FrameContext>() else {
        return html! {};
    };
    let cfg = &ctx.config;
    let s = ctx.sample;
    // title: outer layer fades, middle layer drifts/scales with scroll, inner follows the pointer
    let title_scroll = mapper::title_scroll(s.scroll_y, &cfg.hero);
    let title_pointer = mapper::title_pointer_shift(s.pointer, s.viewport, cfg);
    let indicator = mapper::scroll_indicator(s.scroll_y, &cfg.hero);

    html! {
        <section class="ox-hero">
            <div class="ox-halves">
                <div class="ox-half ox-half-void">
                    <div class="ox-state-tag ox-state-void">{"STATE: VOID [0]"}</div>
                </div>
                <div class="ox-half ox-half-system">
                    <div class="ox-state-tag ox-state-system">{"STATE: SYSTEM [X]"}</div>
                    <div class="ox-fine-grid"></div>
                </div>
            </div>

            <div class="ox-axis ox-axis-v"></div>
            <div class="ox-axis ox-axis-h"></div>

            <div class="ox-mark-row">
                <BinaryMark />
            </div>

            <div class="ox-bg-title" style={title_scroll.opacity_style()}>
                <div style={title_scroll.transform_style()}>
                    <h1 style={title_pointer.transform_style()}>{"OFFLINE"}</h1>
                </div>
            </div>

            <div class="ox-scroll-indicator" style={indicator.opacity_style()}>
                <span>{"Scroll to Initiate"}</span>
                <div class="ox-scroll-line"></div>
            </div>
        </section>
    }
}
