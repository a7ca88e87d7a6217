// Host-side tests for the pointer lifecycle controller.
// A counting listener stands in for the document-level pointer-up registration.

use ripple_core::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct CountingListener {
    live: Rc<Cell<usize>>,
    peak: Rc<Cell<usize>>,
    subscribed: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

struct Registration {
    live: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        self.dropped.set(self.dropped.get() + 1);
    }
}

impl ReleaseListener for CountingListener {
    type Subscription = Registration;

    fn subscribe(&mut self) -> Registration {
        self.live.set(self.live.get() + 1);
        self.peak.set(self.peak.get().max(self.live.get()));
        self.subscribed.set(self.subscribed.get() + 1);
        Registration {
            live: self.live.clone(),
            dropped: self.dropped.clone(),
        }
    }
}

impl CountingListener {
    fn live(&self) -> usize {
        self.live.get()
    }
}

fn surface() -> SurfaceMetrics {
    SurfaceMetrics::new(200.0, 100.0, 10.0, 10.0)
}

fn controller(config: RippleConfig) -> (RippleController<CountingListener>, CountingListener) {
    let listener = CountingListener::default();
    (RippleController::new(config, listener.clone()), listener)
}

fn started_id(t: &Transition) -> RippleId {
    match t {
        Transition::Started { ripple, .. } => ripple.id,
        other => panic!("expected Started, got {other:?}"),
    }
}

#[test]
fn press_starts_a_ripple_and_subscribes_once() {
    let (mut c, listener) = controller(RippleConfig::default());
    assert_eq!(c.state(), LifecycleState::Idle);
    assert!(c.ripple().is_none());

    let t = c.on_surface_press(PressEvent::new(50.0, 60.0), surface());
    let id = started_id(&t);

    assert_eq!(c.state(), LifecycleState::Pressed);
    assert_eq!(c.ripple().map(|r| r.id), Some(id));
    assert_eq!(c.ripple().unwrap().color, "#000");
    assert_eq!(c.press(), Some(PressEvent::new(50.0, 60.0)));
    assert_eq!(c.metrics(), Some(surface()));
    assert!(c.is_listening());
    assert_eq!(listener.live(), 1);
}

#[test]
fn release_then_complete_clears_only_after_both() {
    let (mut c, listener) = controller(RippleConfig::default());
    let id = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));

    assert_eq!(c.on_pointer_released(), Transition::Unchanged);
    assert_eq!(c.state(), LifecycleState::Released);
    assert!(c.ripple().is_some(), "ripple removed before the animation finished");
    assert_eq!(listener.live(), 0, "release subscription is one-shot");

    assert_eq!(c.on_animation_complete(id), Transition::Cleared(id));
    assert_eq!(c.state(), LifecycleState::Idle);
    assert!(c.ripple().is_none());
}

#[test]
fn complete_then_release_clears_only_after_both() {
    let (mut c, listener) = controller(RippleConfig::default());
    let id = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));

    assert_eq!(c.on_animation_complete(id), Transition::Unchanged);
    assert_eq!(c.state(), LifecycleState::AnimationDone);
    assert!(c.ripple().is_some(), "ripple removed while the pointer is still down");
    assert_eq!(listener.live(), 1);

    assert_eq!(c.on_pointer_released(), Transition::Cleared(id));
    assert_eq!(c.state(), LifecycleState::Idle);
    assert_eq!(listener.live(), 0);
}

#[test]
fn duplicate_signals_are_ignored() {
    let (mut c, listener) = controller(RippleConfig::default());
    let id = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));

    assert_eq!(c.on_pointer_released(), Transition::Unchanged);
    assert_eq!(c.on_pointer_released(), Transition::Unchanged);
    assert_eq!(c.state(), LifecycleState::Released);

    assert_eq!(c.on_animation_complete(id), Transition::Cleared(id));
    assert_eq!(c.on_animation_complete(id), Transition::Unchanged);
    assert_eq!(c.on_pointer_released(), Transition::Unchanged);
    assert_eq!(c.state(), LifecycleState::Idle);

    assert_eq!(listener.subscribed.get(), 1);
    assert_eq!(listener.dropped.get(), 1);
}

#[test]
fn double_completion_while_held_has_no_effect() {
    let (mut c, _listener) = controller(RippleConfig::default());
    let id = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));

    assert_eq!(c.on_animation_complete(id), Transition::Unchanged);
    assert_eq!(c.on_animation_complete(id), Transition::Unchanged);
    assert_eq!(c.state(), LifecycleState::AnimationDone);
}

#[test]
fn stray_signals_without_a_press_are_ignored() {
    let (mut c, listener) = controller(RippleConfig::default());
    assert_eq!(c.on_pointer_released(), Transition::Unchanged);
    assert_eq!(c.on_animation_complete(RippleId::default()), Transition::Unchanged);
    assert_eq!(c.state(), LifecycleState::Idle);
    assert_eq!(listener.subscribed.get(), 0);
}

#[test]
fn new_press_replaces_the_live_ripple() {
    let (mut c, listener) = controller(RippleConfig::default());
    let first = started_id(&c.on_surface_press(PressEvent::new(20.0, 20.0), surface()));

    let t = c.on_surface_press(PressEvent::new(150.0, 80.0), surface());
    let second = match &t {
        Transition::Started { ripple, replaced } => {
            assert_eq!(*replaced, Some(first));
            ripple.id
        }
        other => panic!("expected Started, got {other:?}"),
    };
    assert_ne!(first, second);
    assert_eq!(c.state(), LifecycleState::Pressed);

    // Old subscription went away before the new one was made.
    assert_eq!(listener.live(), 1);
    assert_eq!(listener.peak.get(), 1);
    assert_eq!(listener.subscribed.get(), 2);

    // A late completion for the replaced ripple must not touch the new one.
    assert_eq!(c.on_animation_complete(first), Transition::Unchanged);
    assert_eq!(c.state(), LifecycleState::Pressed);
}

#[test]
fn new_press_after_release_resets_both_flags() {
    let (mut c, _listener) = controller(RippleConfig::default());
    started_id(&c.on_surface_press(PressEvent::new(20.0, 20.0), surface()));
    c.on_pointer_released();
    assert_eq!(c.state(), LifecycleState::Released);

    started_id(&c.on_surface_press(PressEvent::new(30.0, 30.0), surface()));
    assert_eq!(c.state(), LifecycleState::Pressed);
    assert!(c.is_listening());
}

#[test]
fn press_on_degenerate_surface_clears_without_subscribing() {
    let (mut c, listener) = controller(RippleConfig::default());
    let first = started_id(&c.on_surface_press(PressEvent::new(20.0, 20.0), surface()));

    let collapsed = SurfaceMetrics::new(0.0, 40.0, 10.0, 10.0);
    assert_eq!(
        c.on_surface_press(PressEvent::new(20.0, 20.0), collapsed),
        Transition::Cleared(first)
    );
    assert_eq!(c.state(), LifecycleState::Idle);
    assert_eq!(listener.live(), 0);

    assert_eq!(
        c.on_surface_press(PressEvent::new(20.0, 20.0), collapsed),
        Transition::Unchanged
    );
    assert_eq!(listener.subscribed.get(), 1);
}

#[test]
fn release_only_policy_clears_on_release() {
    let config = RippleConfig::default().with_policy(TerminationPolicy::ReleaseOnly);
    let (mut c, listener) = controller(config);
    let id = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));

    assert_eq!(c.on_pointer_released(), Transition::Cleared(id));
    assert_eq!(c.state(), LifecycleState::Idle);
    assert_eq!(listener.live(), 0);
    // The renderer still reports completion later; nothing is live any more.
    assert_eq!(c.on_animation_complete(id), Transition::Unchanged);
}

#[test]
fn disabled_controller_ignores_presses() {
    let (mut c, listener) = controller(RippleConfig::default().disabled(true));
    assert_eq!(
        c.on_surface_press(PressEvent::new(50.0, 60.0), surface()),
        Transition::Unchanged
    );
    assert_eq!(c.state(), LifecycleState::Idle);
    assert_eq!(listener.subscribed.get(), 0);

    c.set_disabled(false);
    started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));
}

#[test]
fn disabling_lets_the_live_ripple_finish() {
    let (mut c, listener) = controller(RippleConfig::default());
    let id = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));

    assert_eq!(c.set_disabled(true), Transition::Unchanged);
    assert!(c.is_disabled());
    assert_eq!(listener.live(), 0, "disable must drop the release subscription");
    assert!(c.ripple().is_some(), "disable must not abort the ripple");
    assert_eq!(c.state(), LifecycleState::Released);

    assert_eq!(c.on_animation_complete(id), Transition::Cleared(id));
    assert_eq!(listener.dropped.get(), 1);
}

#[test]
fn disabling_after_the_animation_clears_immediately() {
    let (mut c, _listener) = controller(RippleConfig::default());
    let id = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));
    c.on_animation_complete(id);

    assert_eq!(c.set_disabled(true), Transition::Cleared(id));
    assert_eq!(c.set_disabled(true), Transition::Unchanged);
}

#[test]
fn reconfigure_applies_to_the_next_press() {
    let (mut c, _listener) = controller(RippleConfig::from("red"));
    let first = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));
    assert_eq!(c.ripple().unwrap().color, "red");

    assert_eq!(
        c.reconfigure(RippleConfig::from("#0af").centered(true)),
        Transition::Unchanged
    );
    // The live ripple keeps what it was started with.
    assert_eq!(c.ripple().unwrap().id, first);
    assert_eq!(c.ripple().unwrap().color, "red");

    c.on_surface_press(PressEvent::new(50.0, 60.0), surface());
    let ripple = c.ripple().unwrap();
    assert_eq!(ripple.color, "#0af");
    assert_eq!(ripple.descriptor.initial_offset, ripple.descriptor.final_offset);
}

#[test]
fn reconfigure_can_disable() {
    let (mut c, listener) = controller(RippleConfig::default());
    started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));
    c.reconfigure(RippleConfig::default().disabled(true));
    assert!(c.is_disabled());
    assert_eq!(listener.live(), 0);
}

#[test]
fn unmount_drops_subscription_and_ripple() {
    let (mut c, listener) = controller(RippleConfig::default());
    let id = started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));

    assert_eq!(c.unmount(), Transition::Cleared(id));
    assert!(!c.is_mounted());
    assert_eq!(listener.live(), 0);
    assert_eq!(
        c.on_surface_press(PressEvent::new(50.0, 60.0), surface()),
        Transition::Unchanged
    );
    assert_eq!(c.unmount(), Transition::Unchanged);

    c.mount();
    started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));
    assert_eq!(listener.live(), 1);
}

#[test]
fn dropping_the_controller_releases_the_subscription() {
    let (mut c, listener) = controller(RippleConfig::default());
    started_id(&c.on_surface_press(PressEvent::new(50.0, 60.0), surface()));
    assert_eq!(listener.live(), 1);
    drop(c);
    assert_eq!(listener.live(), 0);
    assert_eq!(listener.subscribed.get(), listener.dropped.get());
}

#[test]
fn subscriptions_are_balanced_over_many_cycles() {
    let (mut c, listener) = controller(RippleConfig::default());
    for i in 0..50 {
        let id = started_id(&c.on_surface_press(PressEvent::new(i as f32, 20.0), surface()));
        match i % 4 {
            0 => {
                c.on_pointer_released();
                c.on_animation_complete(id);
            }
            1 => {
                c.on_animation_complete(id);
                c.on_pointer_released();
            }
            // Replaced by the next press while still held.
            2 => {}
            _ => {
                c.set_disabled(true);
                c.on_animation_complete(id);
                c.set_disabled(false);
            }
        }
        assert!(listener.live() <= 1);
    }
    c.unmount();
    assert_eq!(listener.live(), 0);
    assert_eq!(listener.peak.get(), 1);
    assert_eq!(listener.subscribed.get(), listener.dropped.get());
}

#[test]
fn state_names_are_stable() {
    assert_eq!(LifecycleState::Idle.as_str(), "idle");
    assert_eq!(LifecycleState::Pressed.as_str(), "pressed");
    assert_eq!(LifecycleState::Released.as_str(), "released");
    assert_eq!(LifecycleState::AnimationDone.as_str(), "animation-done");
}
