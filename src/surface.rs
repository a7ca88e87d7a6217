use crate::dom;
use crate::events::pointer::{listen_for_presses, DocumentRelease};
use crate::events::subscription::EventSubscription;
use crate::frame::{FrameLoop, RippleRenderer};
use instant::Instant;
use ripple_core::{LifecycleState, PressEvent, RippleConfig, RippleController, Transition};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// One DOM element with a ripple attached.
///
/// The press listener is only registered while the surface is enabled. The
/// document release listener belongs to the controller and lives for one
/// press at a time.
pub struct RippleSurface {
    this: Weak<RippleSurface>,
    element: web::HtmlElement,
    controller: RefCell<RippleController<DocumentRelease>>,
    renderer: RefCell<RippleRenderer>,
    frames: FrameLoop,
    press_listener: RefCell<Option<EventSubscription>>,
}

impl RippleSurface {
    pub fn attach(element: web::HtmlElement, config: RippleConfig) -> anyhow::Result<Rc<Self>> {
        let document = element
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("surface is not part of a document"))?;
        dom::prepare_surface(&element);

        let surface = Rc::new_cyclic(|weak: &Weak<Self>| {
            let on_release = weak.clone();
            let listener = DocumentRelease::new(document.clone(), move || {
                if let Some(s) = on_release.upgrade() {
                    s.release();
                }
            });
            Self {
                this: weak.clone(),
                element: element.clone(),
                controller: RefCell::new(RippleController::new(config, listener)),
                renderer: RefCell::new(RippleRenderer::new(document, element.clone())),
                frames: FrameLoop::new(),
                press_listener: RefCell::new(None),
            }
        });
        surface
            .frames
            .install(Rc::downgrade(&surface), |s: &RippleSurface| s.on_frame());
        surface.sync_press_listener()?;
        log::debug!("[ripple] attached to <{}>", element.tag_name().to_lowercase());
        Ok(surface)
    }

    pub fn state(&self) -> LifecycleState {
        self.controller.borrow().state()
    }

    pub fn is_attached(&self) -> bool {
        self.controller.borrow().is_mounted()
    }

    pub fn set_disabled(&self, disabled: bool) {
        let t = self.controller.borrow_mut().set_disabled(disabled);
        self.forward(&t);
        if let Err(e) = self.sync_press_listener() {
            log::warn!("[ripple] {e:#}");
        }
    }

    pub fn reconfigure(&self, config: RippleConfig) {
        let t = self.controller.borrow_mut().reconfigure(config);
        self.forward(&t);
        if let Err(e) = self.sync_press_listener() {
            log::warn!("[ripple] {e:#}");
        }
    }

    /// Tear down: listeners go away and visible ripples are removed without
    /// an exit fade.
    pub fn detach(&self) {
        self.press_listener.borrow_mut().take();
        _ = self.controller.borrow_mut().unmount();
        self.renderer.borrow_mut().clear();
        log::debug!("[ripple] detached");
    }

    fn sync_press_listener(&self) -> anyhow::Result<()> {
        let wanted = {
            let c = self.controller.borrow();
            c.is_mounted() && !c.is_disabled()
        };
        let mut slot = self.press_listener.borrow_mut();
        match (wanted, slot.is_some()) {
            (true, false) => {
                let this = self.this.clone();
                *slot = Some(listen_for_presses(&self.element, move |press| {
                    if let Some(s) = this.upgrade() {
                        s.press(press);
                    }
                })?);
            }
            (false, true) => {
                slot.take();
            }
            _ => {}
        }
        Ok(())
    }

    fn press(&self, press: PressEvent) {
        let metrics = dom::measure_surface(&self.element);
        let t = self.controller.borrow_mut().on_surface_press(press, metrics);
        self.forward(&t);
    }

    fn release(&self) {
        let t = self.controller.borrow_mut().on_pointer_released();
        self.forward(&t);
    }

    fn forward(&self, transition: &Transition) {
        if matches!(transition, Transition::Unchanged) {
            return;
        }
        self.renderer.borrow_mut().apply(transition, Instant::now());
        self.frames.request();
    }

    fn on_frame(&self) {
        self.frames.begin_frame();
        let now = Instant::now();
        let tick = self.renderer.borrow_mut().tick(now);
        for id in tick.settled {
            let t = self.controller.borrow_mut().on_animation_complete(id);
            if !matches!(t, Transition::Unchanged) {
                self.renderer.borrow_mut().apply(&t, now);
            }
        }
        if self.renderer.borrow().needs_frames() {
            self.frames.request();
        }
    }
}
