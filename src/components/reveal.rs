use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use super::app::FrameContext;
use crate::error::{SiteError, SiteResult};
use crate::mapper;
use crate::model::VisualParams;
use crate::state::EntryReveal;
use crate::util::{cwarn, now_ms};

#[derive(Properties, PartialEq, Clone)]
pub struct RevealProps {
    /// Pose before the block has been seen.
    pub from: VisualParams,
    #[prop_or_default]
    pub delay_ms: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Animates its children from `from` to rest the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let ctx = use_context::<FrameContext>();
    let node = use_node_ref();
    let entry = {
        let duration = ctx
            .as_ref()
            .map_or(0.0, |c| c.config.manifesto.reveal_duration_ms);
        let delay = props.delay_ms;
        use_mut_ref(move || EntryReveal::new(duration, delay))
    };
    {
        let node = node.clone();
        let entry = entry.clone();
        let keep_alive = ctx
            .as_ref()
            .map(|c| c.keep_alive.clone())
            .unwrap_or_default();
        use_effect_with((), move |_| {
            let watch = match watch_entry(&node, entry.clone(), keep_alive.clone()) {
                Ok(w) => Some(w),
                Err(e) => {
                    cwarn(&format!("reveal falls back to immediate: {e}"));
                    if let Some(until) = entry.borrow_mut().observe(true, now_ms()) {
                        keep_alive.emit(until);
                    }
                    None
                }
            };
            move || drop(watch)
        });
    }

    let now = ctx.map_or(0.0, |c| c.sample.now_ms);
    let params = mapper::reveal_entry(entry.borrow().mix(now), &props.from);
    html! {
        <div ref={node} class={props.class.clone()} style={params.to_style()}>
            { for props.children.iter() }
        </div>
    }
}

struct EntryWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for EntryWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn watch_entry(
    node: &NodeRef,
    entry: Rc<RefCell<EntryReveal>>,
    keep_alive: Callback<f64>,
) -> SiteResult<EntryWatch> {
    let target = node
        .cast::<Element>()
        .ok_or_else(|| SiteError::dom("reveal target is not mounted"))?;
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let hit = entries
                .iter()
                .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|e| e.is_intersecting());
            let settle = entry.borrow_mut().observe(hit, now_ms());
            if let Some(until) = settle {
                keep_alive.emit(until);
                // one-shot
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(SiteError::from_js)?;
    observer.observe(&target);
    Ok(EntryWatch {
        observer,
        _callback: callback,
    })
}
