use crate::constants::{PRESS_EVENT, PRIMARY_BUTTON, RELEASE_EVENTS};
use crate::events::subscription::EventSubscription;
use ripple_core::{PressEvent, ReleaseListener};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Press coordinates for a pointer-down, or `None` for presses that should
/// not ripple (secondary buttons, extra touch points).
#[inline]
pub fn press_from_event(ev: &web::PointerEvent) -> Option<PressEvent> {
    if !ev.is_primary() || ev.button() != PRIMARY_BUTTON {
        return None;
    }
    Some(PressEvent::new(ev.client_x() as f32, ev.client_y() as f32))
}

pub fn listen_for_presses(
    surface: &web::HtmlElement,
    mut on_press: impl FnMut(PressEvent) + 'static,
) -> anyhow::Result<EventSubscription> {
    const PRESS: [&str; 1] = [PRESS_EVENT];
    EventSubscription::listen(surface, &PRESS, move |ev: web::Event| {
        if let Some(press) = ev.dyn_ref::<web::PointerEvent>().and_then(press_from_event) {
            on_press(press);
        }
    })
}

/// Document-wide release signal. Each subscription lives for one press.
pub struct DocumentRelease {
    document: web::Document,
    on_release: Rc<dyn Fn()>,
}

impl DocumentRelease {
    pub fn new(document: web::Document, on_release: impl Fn() + 'static) -> Self {
        Self {
            document,
            on_release: Rc::new(on_release),
        }
    }
}

impl ReleaseListener for DocumentRelease {
    type Subscription = Option<EventSubscription>;

    fn subscribe(&mut self) -> Option<EventSubscription> {
        let on_release = self.on_release.clone();
        match EventSubscription::listen(&self.document, &RELEASE_EVENTS, move |_ev: web::Event| {
            on_release()
        }) {
            Ok(sub) => Some(sub),
            Err(e) => {
                // Without a listener the ripple would never be released; release it
                // on the next microtask instead, once the caller has returned.
                log::warn!("[ripple] release listener unavailable: {e:#}");
                let on_release = self.on_release.clone();
                wasm_bindgen_futures::spawn_local(async move { on_release() });
                None
            }
        }
    }
}
