use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use super::app::FrameContext;
use crate::error::{SiteError, SiteResult};
use crate::mapper;
use crate::state::{DomHost, Subscriptions, dom_callback};
use crate::util::cwarn;

#[function_component(Cursor)]
pub fn cursor() -> Html {
    let ctx = use_context::<FrameContext>();
    let hovering = use_state_eq(|| false);
    {
        let hovering = hovering.clone();
        use_effect_with((), move |_| {
            let subs = match watch_hover(hovering) {
                Ok(s) => Some(s),
                Err(e) => {
                    cwarn(&format!("cursor hover tracking unavailable: {e}"));
                    None
                }
            };
            move || drop(subs)
        });
    }
    let Some(ctx) = ctx else {
        return html! {};
    };
    let p = mapper::cursor(ctx.sample.pointer, *hovering, &ctx.config.cursor);
    html! { <div class="ox-cursor" style={p.transform_style()}></div> }
}

// Anything marked `data-hover` (or inside one) counts as interactive.
fn watch_hover(hovering: UseStateHandle<bool>) -> SiteResult<Subscriptions<DomHost>> {
    let window = web_sys::window().ok_or_else(|| SiteError::dom("no global `window` exists"))?;
    let mut subs = Subscriptions::new(DomHost::new(window));
    subs.listen(
        "mouseover",
        dom_callback(move |e| {
            let hot = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("[data-hover]").ok().flatten())
                .is_some();
            hovering.set(hot);
        }),
    )?;
    Ok(subs)
}
