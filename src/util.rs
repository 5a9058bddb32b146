// Browser helpers: console logging, clocks, layout reads and the frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

use crate::error::{SiteError, SiteResult};
use crate::model::Viewport;

thread_local! {
    static VERBOSE: Cell<bool> = const { Cell::new(false) };
}

pub fn set_verbose(on: bool) {
    VERBOSE.with(|v| v.set(on));
}

pub fn clog(msg: &str) {
    if VERBOSE.with(|v| v.get()) {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn read_viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

pub fn read_scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn read_doc_height(document: &Document) -> f64 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// `requestAnimationFrame` loop that re-arms itself every frame.
///
/// Dropping it cancels the pending frame and releases the callback.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    pub fn start(window: &Window, mut on_frame: impl FnMut(f64) + 'static) -> SiteResult<Self> {
        let pending = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        {
            let pending = pending.clone();
            let tick_next = tick.clone();
            let win = window.clone();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                on_frame(ts);
                if let Some(cb) = tick_next.borrow().as_ref() {
                    match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(_) => pending.set(None),
                    }
                }
            }) as Box<dyn FnMut(f64)>));
        }
        // built before the first request so an error path still runs Drop
        let frames = Self {
            window: window.clone(),
            pending,
            tick,
        };
        let first = frames
            .tick
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        if let Some(res) = first {
            frames.pending.set(Some(res.map_err(SiteError::from_js)?));
        }
        Ok(frames)
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // the closure holds a handle to its own cell
        if let Ok(mut slot) = self.tick.try_borrow_mut() {
            slot.take();
        }
    }
}
