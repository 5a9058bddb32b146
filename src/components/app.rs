use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use super::{
    cursor::Cursor, footer::Footer, header::Header, hero::Hero, manifesto::Manifesto,
};
use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use crate::model::PointerPosition;
use crate::state::{
    DomHost, FrameInputs, FrameSample, Subscriptions, dom_callback, primary_touch,
};
use crate::util::{FrameLoop, clog, cwarn, read_doc_height, read_scroll_y, read_viewport};

// Provide the current frame to every section (so nothing needs its own listeners for pointer/scroll)
#[derive(Clone, PartialEq)]
pub struct FrameContext {
    pub sample: FrameSample,
    pub config: Rc<SiteConfig>,
    /// Ask for frames until the given timestamp (ms).
    pub keep_alive: Callback<f64>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let sample = use_state(FrameSample::default);
    let inputs = use_mut_ref(FrameInputs::default);

    let keep_alive = {
        let inputs = inputs.clone();
        use_memo((), move |_| {
            Callback::from(move |until: f64| inputs.borrow_mut().keep_alive(until))
        })
    };

    // Mount: input listeners + frame loop, both released on unmount
    {
        let inputs = inputs.clone();
        let sample = sample.clone();
        use_effect_with((), move |_| {
            let mounted = match attach_inputs(inputs, sample) {
                Ok(m) => Some(m),
                Err(e) => {
                    cwarn(&format!("input tracking unavailable: {e}"));
                    None
                }
            };
            move || drop(mounted)
        });
    }

    let ctx = FrameContext {
        sample: *sample,
        config: props.config.clone(),
        keep_alive: (*keep_alive).clone(),
    };

    html! {
        <ContextProvider<FrameContext> context={ctx}>
            <main class="ox-page">
                <Cursor />
                <Header />
                <Hero />
                <Manifesto />
                <Footer />
            </main>
        </ContextProvider<FrameContext>>
    }
}

fn attach_inputs(
    inputs: Rc<RefCell<FrameInputs>>,
    sample: UseStateHandle<FrameSample>,
) -> SiteResult<(Subscriptions<DomHost>, FrameLoop)> {
    let window = web_sys::window().ok_or_else(|| SiteError::dom("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| SiteError::dom("window has no document"))?;

    let refresh_layout = {
        let window = window.clone();
        let document = document.clone();
        let inputs = inputs.clone();
        move || {
            let mut i = inputs.borrow_mut();
            i.scroll
                .record_layout(read_viewport(&window), read_doc_height(&document));
            i.scroll.record_scroll(read_scroll_y(&window));
        }
    };
    refresh_layout();

    let mut subs = Subscriptions::new(DomHost::new(window.clone()));
    {
        let inputs = inputs.clone();
        subs.listen(
            "mousemove",
            dom_callback(move |e| {
                if let Some(m) = e.dyn_ref::<MouseEvent>() {
                    let pos = PointerPosition::new(m.client_x() as f64, m.client_y() as f64);
                    inputs.borrow_mut().pointer.record_mouse(pos);
                }
            }),
        )?;
    }
    for event in ["touchstart", "touchmove"] {
        let inputs = inputs.clone();
        subs.listen(
            event,
            dom_callback(move |e| {
                if let Some(t) = e.dyn_ref::<TouchEvent>() {
                    inputs
                        .borrow_mut()
                        .pointer
                        .record_touch(primary_touch(&t.touches()));
                }
            }),
        )?;
    }
    // content height can change without a resize (fonts), so scroll re-reads layout too
    for event in ["scroll", "resize"] {
        let refresh = refresh_layout.clone();
        subs.listen(event, dom_callback(move |_| refresh()))?;
    }

    let frames = FrameLoop::start(&window, move |ts| {
        let next = inputs.borrow_mut().poll(ts);
        if let Some(s) = next {
            sample.set(s);
        }
    })?;
    clog(&format!("input tracking attached ({} listeners)", subs.len()));
    Ok((subs, frames))
}
