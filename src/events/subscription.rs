use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Event listener registration that removes itself on drop.
///
/// One closure is shared by every event name in `events`. The subscription
/// may be dropped from inside its own callback (a one-shot release), and
/// wasm-bindgen does not allow freeing a closure while it runs, so the
/// closure itself is released from a microtask.
pub struct EventSubscription {
    target: web::EventTarget,
    events: &'static [&'static str],
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl EventSubscription {
    pub fn listen(
        target: &web::EventTarget,
        events: &'static [&'static str],
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let mut sub = Self {
            target: target.clone(),
            events: &[],
            closure: None,
        };
        for (i, name) in events.iter().enumerate() {
            if let Err(e) =
                target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                // Unwind what was added so far through Drop.
                sub.events = &events[..i];
                sub.closure = Some(closure);
                return Err(anyhow::anyhow!("addEventListener({name}) failed: {:?}", e));
            }
        }
        sub.events = events;
        sub.closure = Some(closure);
        Ok(sub)
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let Some(closure) = self.closure.take() else {
            return;
        };
        for name in self.events {
            _ = self
                .target
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        wasm_bindgen_futures::spawn_local(async move {
            drop(closure);
        });
    }
}
