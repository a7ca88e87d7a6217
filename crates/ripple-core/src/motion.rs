//! Time-driven motion of one ripple.
//!
//! The ripple moves through `Entering -> Settled -> Exiting -> Finished`.
//! While entering it slides from its initial offset to the surface center and
//! scales up to cover the surface, fading in to a faint fill. Exiting fades
//! the fill out from wherever it currently is. The caller supplies the clock
//! so frames can be sampled from any loop (requestAnimationFrame, a test).

use crate::constants::{
    OPACITY_IN_DURATION_SEC, OPACITY_OUT_DURATION_SEC, RADIUS_IN_DURATION_SEC, RIPPLE_OPACITY,
    STANDARD_EASING,
};
use crate::geometry::RippleDescriptor;
use glam::Vec2;
use instant::Instant;
use smallvec::SmallVec;

/// CSS-style cubic-bezier timing function with endpoints fixed at (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn standard() -> Self {
        Self::new(
            STANDARD_EASING[0],
            STANDARD_EASING[1],
            STANDARD_EASING[2],
            STANDARD_EASING[3],
        )
    }

    #[inline]
    fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    #[inline]
    fn sample_x(&self, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        ((a * t + b) * t + c) * t
    }

    #[inline]
    fn sample_y(&self, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(self.y1, self.y2);
        ((a * t + b) * t + c) * t
    }

    #[inline]
    fn slope_x(&self, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Map linear progress in \[0, 1\] to eased progress.
    pub fn ease(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        if p == 0.0 || p == 1.0 {
            return p;
        }

        // Newton first; fall back to bisection on flat slopes.
        let mut t = p;
        for _ in 0..8 {
            let err = self.sample_x(t) - p;
            if err.abs() < 1e-6 {
                return self.sample_y(t);
            }
            let slope = self.slope_x(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = p;
        for _ in 0..32 {
            let x = self.sample_x(t);
            if (x - p).abs() < 1e-6 {
                break;
            }
            if x < p {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        self.sample_y(t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTiming {
    pub radius_in_sec: f32,
    pub opacity_in_sec: f32,
    pub opacity_out_sec: f32,
    pub peak_opacity: f32,
    pub easing: CubicBezier,
}

impl Default for MotionTiming {
    fn default() -> Self {
        Self {
            radius_in_sec: RADIUS_IN_DURATION_SEC,
            opacity_in_sec: OPACITY_IN_DURATION_SEC,
            opacity_out_sec: OPACITY_OUT_DURATION_SEC,
            peak_opacity: RIPPLE_OPACITY,
            easing: CubicBezier::standard(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPhase {
    Entering,
    Settled,
    Exiting,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionEvent {
    /// Enter motion complete. This is the renderer's completion signal.
    Settled,
    /// Exit fade complete; the visual can be dropped.
    Finished,
}

/// Pose to paint for one frame. `offset` is the top-left of the unscaled
/// ripple square relative to the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    pub offset: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

pub type MotionEvents = SmallVec<[MotionEvent; 2]>;

#[derive(Clone, Debug)]
pub struct RippleMotion {
    descriptor: RippleDescriptor,
    timing: MotionTiming,
    started_at: Instant,
    // (exit requested at, opacity at that moment)
    exit: Option<(Instant, f32)>,
    phase: MotionPhase,
    settled_reported: bool,
}

#[inline]
fn secs_between(from: Instant, to: Instant) -> f32 {
    if to > from {
        (to - from).as_secs_f32()
    } else {
        0.0
    }
}

#[inline]
fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (elapsed / duration).clamp(0.0, 1.0)
    }
}

impl RippleMotion {
    pub fn new(descriptor: RippleDescriptor, started_at: Instant) -> Self {
        Self::with_timing(descriptor, MotionTiming::default(), started_at)
    }

    pub fn with_timing(descriptor: RippleDescriptor, timing: MotionTiming, started_at: Instant) -> Self {
        Self {
            descriptor,
            timing,
            started_at,
            exit: None,
            phase: MotionPhase::Entering,
            settled_reported: false,
        }
    }

    pub fn descriptor(&self) -> &RippleDescriptor {
        &self.descriptor
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn is_exiting(&self) -> bool {
        self.exit.is_some()
    }

    fn enter_opacity(&self, elapsed: f32) -> f32 {
        self.timing.peak_opacity * progress(elapsed, self.timing.opacity_in_sec)
    }

    /// Begin the exit fade. Later calls keep the first exit time.
    pub fn exit(&mut self, now: Instant) {
        if self.exit.is_some() || self.phase == MotionPhase::Finished {
            return;
        }
        let opacity = self.enter_opacity(secs_between(self.started_at, now));
        self.exit = Some((now, opacity));
    }

    /// Sample the pose at `now` and report phase changes reached since the last sample.
    pub fn sample(&mut self, now: Instant) -> (MotionFrame, MotionEvents) {
        let mut events = MotionEvents::new();
        let elapsed = secs_between(self.started_at, now);

        let radius_p = progress(elapsed, self.timing.radius_in_sec);
        let eased = self.timing.easing.ease(radius_p);
        let d = &self.descriptor;
        let offset = d.initial_offset.lerp(d.final_offset, eased);
        let scale = 1.0 + (d.final_scale - 1.0) * eased;

        let (opacity, exit_done) = match self.exit {
            Some((at, from)) => {
                let k = progress(secs_between(at, now), self.timing.opacity_out_sec);
                (from * (1.0 - k), k >= 1.0)
            }
            None => (self.enter_opacity(elapsed), false),
        };

        if self.phase == MotionPhase::Finished {
            return (
                MotionFrame {
                    offset,
                    scale,
                    opacity: 0.0,
                },
                events,
            );
        }

        if !self.settled_reported && (radius_p >= 1.0 || exit_done) {
            self.settled_reported = true;
            events.push(MotionEvent::Settled);
        }

        self.phase = if exit_done {
            events.push(MotionEvent::Finished);
            MotionPhase::Finished
        } else if self.exit.is_some() {
            MotionPhase::Exiting
        } else if radius_p >= 1.0 {
            MotionPhase::Settled
        } else {
            MotionPhase::Entering
        };

        (
            MotionFrame {
                offset,
                scale,
                opacity,
            },
            events,
        )
    }
}
