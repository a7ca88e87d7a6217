use crate::dom;
use instant::Instant;
use ripple_core::{PresenceTick, RippleId, RipplePresence, Transition};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Paints ripple motions into the surface. Owns one element per ripple that
/// is still visible, including ones that are fading out.
pub struct RippleRenderer {
    document: web::Document,
    surface: web::HtmlElement,
    presence: RipplePresence,
    elements: SmallVec<[(RippleId, web::HtmlElement); 2]>,
}

impl RippleRenderer {
    pub fn new(document: web::Document, surface: web::HtmlElement) -> Self {
        Self {
            document,
            surface,
            presence: RipplePresence::new(),
            elements: SmallVec::new(),
        }
    }

    pub fn apply(&mut self, transition: &Transition, now: Instant) {
        if let Transition::Started { ripple, .. } = transition {
            match dom::create_ripple_element(&self.document, &self.surface, ripple) {
                Ok(el) => self.elements.push((ripple.id, el)),
                Err(e) => log::warn!("[ripple] could not create element: {e:#}"),
            }
        }
        self.presence.apply(transition, now);
    }

    pub fn needs_frames(&self) -> bool {
        self.presence.needs_frames()
    }

    pub fn tick(&mut self, now: Instant) -> PresenceTick {
        let tick = self.presence.tick(now);
        for pf in &tick.frames {
            if let Some((_, el)) = self.elements.iter().find(|(id, _)| *id == pf.id) {
                dom::apply_frame(el, &pf.frame);
            }
        }
        if !tick.finished.is_empty() {
            self.elements.retain(|(id, el)| {
                let done = tick.finished.contains(id);
                if done {
                    el.remove();
                }
                !done
            });
        }
        tick
    }

    /// Drop every ripple element at once, skipping exit fades.
    pub fn clear(&mut self) {
        for (_, el) in self.elements.drain(..) {
            el.remove();
        }
        self.presence = RipplePresence::new();
    }
}

/// requestAnimationFrame driver that runs only while something is moving.
pub struct FrameLoop {
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            callback: RefCell::new(None),
            pending: Cell::new(None),
        }
    }

    /// Install the per-frame work. `owner` is held weakly so the loop never
    /// keeps a detached surface alive.
    pub fn install<T: 'static>(&self, owner: Weak<T>, mut on_frame: impl FnMut(&T) + 'static) {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(owner) = owner.upgrade() {
                on_frame(&owner);
            }
        }) as Box<dyn FnMut()>));
    }

    /// Must be called first thing in the frame callback.
    pub fn begin_frame(&self) {
        self.pending.set(None);
    }

    pub fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let (Some(cb), Some(w)) = (callback.as_ref(), web::window()) else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => log::warn!("[ripple] requestAnimationFrame failed: {:?}", e),
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // A queued frame would otherwise call into a freed closure.
        if let (Some(handle), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
    }
}
