//! Tracks every ripple that is still on screen.
//!
//! The controller only knows about the live ripple. A cleared or replaced
//! ripple keeps fading out for a little while after that, so the renderer
//! holds its motion here until the exit finishes.

use crate::lifecycle::{RippleId, Transition};
use crate::motion::{MotionEvent, MotionFrame, MotionPhase, MotionTiming, RippleMotion};
use instant::Instant;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresenceFrame {
    pub id: RippleId,
    pub frame: MotionFrame,
}

/// Output of one [`RipplePresence::tick`].
#[derive(Clone, Debug, Default)]
pub struct PresenceTick {
    pub frames: SmallVec<[PresenceFrame; 2]>,
    /// Ripples whose enter motion completed on this tick.
    pub settled: SmallVec<[RippleId; 2]>,
    /// Ripples whose exit completed on this tick. They are no longer tracked.
    pub finished: SmallVec<[RippleId; 2]>,
}

#[derive(Clone, Debug)]
struct Tracked {
    id: RippleId,
    motion: RippleMotion,
}

#[derive(Clone, Debug, Default)]
pub struct RipplePresence {
    timing: MotionTiming,
    tracked: SmallVec<[Tracked; 2]>,
}

impl RipplePresence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: MotionTiming) -> Self {
        Self {
            timing,
            tracked: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn contains(&self, id: RippleId) -> bool {
        self.tracked.iter().any(|t| t.id == id)
    }

    /// False once every tracked ripple is resting at full size, waiting for its
    /// release. Frame loops can sleep until the next transition.
    pub fn needs_frames(&self) -> bool {
        self.tracked
            .iter()
            .any(|t| t.motion.phase() != MotionPhase::Settled || t.motion.is_exiting())
    }

    pub fn motion(&self, id: RippleId) -> Option<&RippleMotion> {
        self.tracked.iter().find(|t| t.id == id).map(|t| &t.motion)
    }

    /// Feed a controller transition in.
    pub fn apply(&mut self, transition: &Transition, now: Instant) {
        match transition {
            Transition::Unchanged => {}
            Transition::Started { ripple, replaced } => {
                if let Some(old) = replaced {
                    self.exit(*old, now);
                }
                self.tracked.push(Tracked {
                    id: ripple.id,
                    motion: RippleMotion::with_timing(ripple.descriptor, self.timing, now),
                });
            }
            Transition::Cleared(id) => self.exit(*id, now),
        }
    }

    pub fn exit(&mut self, id: RippleId, now: Instant) {
        if let Some(t) = self.tracked.iter_mut().find(|t| t.id == id) {
            t.motion.exit(now);
        }
    }

    pub fn tick(&mut self, now: Instant) -> PresenceTick {
        let mut out = PresenceTick::default();
        for t in self.tracked.iter_mut() {
            let (frame, events) = t.motion.sample(now);
            out.frames.push(PresenceFrame { id: t.id, frame });
            for ev in events {
                match ev {
                    MotionEvent::Settled => out.settled.push(t.id),
                    MotionEvent::Finished => out.finished.push(t.id),
                }
            }
        }
        if !out.finished.is_empty() {
            self.tracked.retain(|t| !out.finished.contains(&t.id));
        }
        out
    }
}
