//! Pointer lifecycle for a single ripple surface.
//!
//! Presses are scoped to the surface, releases to the whole document: the
//! pointer may leave the surface before it is lifted. A ripple ends once the
//! pointer has been released *and* the renderer has reported the enter motion
//! as complete. Those two signals arrive independently and in either order, so
//! the controller keeps one flag for each and clears when both are set.
//!
//! The controller never renders. Every call returns a [`Transition`] which
//! the host forwards to its renderer (see [`crate::presence`]).

use crate::config::{RippleConfig, TerminationPolicy};
use crate::geometry::{compute_ripple_padded, PressEvent, RippleDescriptor, SurfaceMetrics};

/// Source of the document-wide "pointer released" signal.
///
/// `subscribe` registers a listener and hands back its registration.
/// Dropping the registration must remove the listener; the controller relies
/// on that to keep exactly one live subscription per active press.
pub trait ReleaseListener {
    type Subscription;

    fn subscribe(&mut self) -> Self::Subscription;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RippleId(u64);

impl RippleId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// The one live ripple request: geometry plus what the renderer needs to paint it.
#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub descriptor: RippleDescriptor,
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Pressed,
    /// Pointer is up, enter motion still running.
    Released,
    /// Enter motion finished, pointer still down.
    AnimationDone,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Pressed => "pressed",
            LifecycleState::Released => "released",
            LifecycleState::AnimationDone => "animation-done",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Unchanged,
    /// A new ripple became visible, possibly replacing one that was still live.
    Started {
        ripple: Ripple,
        replaced: Option<RippleId>,
    },
    /// The ripple should play its exit and be removed.
    Cleared(RippleId),
}

struct ActivePress {
    ripple: Ripple,
    press: PressEvent,
    metrics: SurfaceMetrics,
    released: bool,
    animation_done: bool,
}

pub struct RippleController<L: ReleaseListener> {
    config: RippleConfig,
    listener: L,
    subscription: Option<L::Subscription>,
    active: Option<ActivePress>,
    mounted: bool,
    last_id: u64,
}

impl<L: ReleaseListener> RippleController<L> {
    pub fn new(config: RippleConfig, listener: L) -> Self {
        Self {
            config,
            listener,
            subscription: None,
            active: None,
            mounted: true,
            last_id: 0,
        }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// True while a document release subscription is registered.
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn state(&self) -> LifecycleState {
        match &self.active {
            None => LifecycleState::Idle,
            Some(a) => match (a.released, a.animation_done) {
                (false, false) => LifecycleState::Pressed,
                (true, false) => LifecycleState::Released,
                (false, true) => LifecycleState::AnimationDone,
                (true, true) => LifecycleState::Idle,
            },
        }
    }

    pub fn ripple(&self) -> Option<&Ripple> {
        self.active.as_ref().map(|a| &a.ripple)
    }

    pub fn press(&self) -> Option<PressEvent> {
        self.active.as_ref().map(|a| a.press)
    }

    /// Surface snapshot taken for the live ripple.
    pub fn metrics(&self) -> Option<SurfaceMetrics> {
        self.active.as_ref().map(|a| a.metrics)
    }

    /// Start a ripple for a press over the surface.
    ///
    /// A press while another ripple is still live replaces it: the old
    /// subscription is dropped before the new one is registered.
    pub fn on_surface_press(&mut self, press: PressEvent, metrics: SurfaceMetrics) -> Transition {
        if !self.mounted || self.config.disabled {
            log::debug!(
                "[ripple] press ignored (mounted={}, disabled={})",
                self.mounted,
                self.config.disabled
            );
            return Transition::Unchanged;
        }

        self.subscription = None;
        let replaced = self.active.take().map(|a| a.ripple.id);

        let Some(descriptor) = compute_ripple_padded(
            &metrics,
            Some(press),
            self.config.center,
            self.config.edge_padding,
        ) else {
            log::debug!(
                "[ripple] no ripple for surface {}x{}",
                metrics.width,
                metrics.height
            );
            return match replaced {
                Some(id) => Transition::Cleared(id),
                None => Transition::Unchanged,
            };
        };

        self.last_id += 1;
        let ripple = Ripple {
            id: RippleId(self.last_id),
            descriptor,
            color: self.config.color.clone(),
        };
        self.subscription = Some(self.listener.subscribe());
        self.active = Some(ActivePress {
            ripple: ripple.clone(),
            press,
            metrics,
            released: false,
            animation_done: false,
        });
        log::debug!(
            "[ripple] start #{} size={} scale={:.3}",
            ripple.id.get(),
            descriptor.initial_size,
            descriptor.final_scale
        );
        Transition::Started { ripple, replaced }
    }

    /// Document-wide pointer release. Fires at most once per press.
    pub fn on_pointer_released(&mut self) -> Transition {
        let Some(active) = self.active.as_mut() else {
            return Transition::Unchanged;
        };
        if active.released {
            return Transition::Unchanged;
        }
        active.released = true;
        self.subscription = None;
        self.finish_if_joined()
    }

    /// The renderer finished the enter motion of ripple `id`.
    ///
    /// Completions for a ripple that has already been replaced are ignored.
    pub fn on_animation_complete(&mut self, id: RippleId) -> Transition {
        let Some(active) = self.active.as_mut() else {
            return Transition::Unchanged;
        };
        if active.ripple.id != id || active.animation_done {
            return Transition::Unchanged;
        }
        active.animation_done = true;
        self.finish_if_joined()
    }

    /// Gate new presses. Disabling drops the release subscription and lets an
    /// in-flight ripple finish as though the pointer had been released.
    pub fn set_disabled(&mut self, disabled: bool) -> Transition {
        if self.config.disabled == disabled {
            return Transition::Unchanged;
        }
        self.config.disabled = disabled;
        if !disabled {
            return Transition::Unchanged;
        }
        self.subscription = None;
        match self.active.as_mut() {
            Some(active) if !active.released => {
                active.released = true;
                self.finish_if_joined()
            }
            _ => Transition::Unchanged,
        }
    }

    /// Replace the configuration. Color, centering, policy and padding take
    /// effect from the next press; `disabled` is applied through
    /// [`Self::set_disabled`].
    pub fn reconfigure(&mut self, config: RippleConfig) -> Transition {
        let disabled = config.disabled;
        self.config = RippleConfig {
            disabled: self.config.disabled,
            ..config
        };
        self.set_disabled(disabled)
    }

    /// Surface left the tree: drop everything, ignore presses until remounted.
    pub fn unmount(&mut self) -> Transition {
        self.mounted = false;
        self.subscription = None;
        match self.active.take() {
            Some(active) => Transition::Cleared(active.ripple.id),
            None => Transition::Unchanged,
        }
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    fn finish_if_joined(&mut self) -> Transition {
        let joined = self.active.as_ref().is_some_and(|a| {
            a.released
                && (a.animation_done || self.config.policy == TerminationPolicy::ReleaseOnly)
        });
        if !joined {
            return Transition::Unchanged;
        }
        match self.active.take() {
            Some(active) => {
                log::debug!("[ripple] clear #{}", active.ripple.id.get());
                Transition::Cleared(active.ripple.id)
            }
            None => Transition::Unchanged,
        }
    }
}
