// Scoped DOM listener ownership: attached on mount, detached on unmount.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::{SiteError, SiteResult};

/// Something listeners can be attached to and detached from.
pub trait ListenerHost {
    type Callback;

    fn add(&self, event: &'static str, cb: &Self::Callback) -> SiteResult<()>;
    fn remove(&self, event: &'static str, cb: &Self::Callback);
}

/// Owns every callback it attached. `release` (or dropping the value)
/// detaches all of them.
pub struct Subscriptions<H: ListenerHost> {
    host: H,
    live: Vec<(&'static str, H::Callback)>,
}

impl<H: ListenerHost> Subscriptions<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            live: Vec::new(),
        }
    }

    /// On failure the callback is dropped and nothing is tracked.
    pub fn listen(&mut self, event: &'static str, cb: H::Callback) -> SiteResult<()> {
        self.host.add(event, &cb)?;
        self.live.push((event, cb));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn release(&mut self) {
        for (event, cb) in self.live.drain(..) {
            self.host.remove(event, &cb);
        }
    }
}

impl<H: ListenerHost> Drop for Subscriptions<H> {
    fn drop(&mut self) {
        self.release();
    }
}

pub type DomCallback = Closure<dyn FnMut(Event)>;

pub struct DomHost(EventTarget);

impl DomHost {
    pub fn new(target: impl Into<EventTarget>) -> Self {
        Self(target.into())
    }
}

impl ListenerHost for DomHost {
    type Callback = DomCallback;

    fn add(&self, event: &'static str, cb: &DomCallback) -> SiteResult<()> {
        self.0
            .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
            .map_err(SiteError::from_js)
    }

    fn remove(&self, event: &'static str, cb: &DomCallback) {
        let _ = self
            .0
            .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    }
}

pub fn dom_callback(f: impl FnMut(Event) + 'static) -> DomCallback {
    Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingHost {
        attached: Rc<RefCell<Vec<(&'static str, u32)>>>,
        refuse: Option<&'static str>,
    }

    impl ListenerHost for RecordingHost {
        type Callback = u32;

        fn add(&self, event: &'static str, cb: &u32) -> SiteResult<()> {
            if self.refuse == Some(event) {
                return Err(SiteError::dom(format!("{event} not supported")));
            }
            self.attached.borrow_mut().push((event, *cb));
            Ok(())
        }

        fn remove(&self, event: &'static str, cb: &u32) {
            let mut a = self.attached.borrow_mut();
            if let Some(pos) = a.iter().position(|e| *e == (event, *cb)) {
                a.remove(pos);
            }
        }
    }

    #[test]
    fn release_detaches_everything() {
        let host = RecordingHost::default();
        let attached = host.attached.clone();
        let mut subs = Subscriptions::new(host);
        subs.listen("mousemove", 1).unwrap();
        subs.listen("touchmove", 2).unwrap();
        subs.listen("scroll", 3).unwrap();
        assert_eq!(attached.borrow().len(), 3);
        subs.release();
        assert!(attached.borrow().is_empty());
        assert!(subs.is_empty());
    }

    #[test]
    fn drop_detaches_everything() {
        let host = RecordingHost::default();
        let attached = host.attached.clone();
        {
            let mut subs = Subscriptions::new(host);
            subs.listen("resize", 7).unwrap();
            subs.listen("touchstart", 8).unwrap();
        }
        assert!(attached.borrow().is_empty());
    }

    #[test]
    fn mount_unmount_cycles_do_not_accumulate() {
        let host = RecordingHost::default();
        let attached = host.attached.clone();
        for _ in 0..5 {
            let mut subs = Subscriptions::new(host.clone());
            subs.listen("mousemove", 1).unwrap();
            subs.listen("scroll", 2).unwrap();
            assert_eq!(attached.borrow().len(), 2);
        }
        assert!(attached.borrow().is_empty());
    }

    #[test]
    fn failed_attach_is_not_tracked() {
        let host = RecordingHost {
            refuse: Some("touchmove"),
            ..Default::default()
        };
        let attached = host.attached.clone();
        let mut subs = Subscriptions::new(host);
        subs.listen("mousemove", 1).unwrap();
        assert!(subs.listen("touchmove", 2).is_err());
        assert_eq!(subs.len(), 1);
        drop(subs);
        assert!(attached.borrow().is_empty());
    }
}
