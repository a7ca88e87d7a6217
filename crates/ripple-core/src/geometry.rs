//! Pure ripple geometry.
//!
//! Maps a surface snapshot and a press location to the descriptor the
//! renderer animates. Nothing here holds state; callers re-measure the
//! surface on every press because it may have been resized since the last one.

use crate::constants::INITIAL_SIZE_FACTOR;
use glam::Vec2;

/// Bounding box of the surface, in viewport pixels, sampled at press time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceMetrics {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl SurfaceMetrics {
    pub fn new(width: f32, height: f32, left: f32, top: f32) -> Self {
        Self {
            width,
            height,
            left,
            top,
        }
    }

    /// Top-left corner of the surface in viewport coordinates.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Geometric center in surface-local coordinates.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    #[inline]
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    /// False for surfaces that are not laid out yet (zero, negative or NaN sides).
    #[inline]
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Pointer-down location in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PressEvent {
    pub x: f32,
    pub y: f32,
}

impl PressEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Translate the press into the surface's local coordinate space.
    #[inline]
    pub fn to_local(&self, metrics: &SurfaceMetrics) -> Vec2 {
        self.position() - metrics.origin()
    }
}

/// Start and end pose of one ripple, relative to the surface's top-left.
///
/// Offsets locate the top-left of the ripple's bounding square at scale 1.
/// The renderer scales around the square's center, so `final_scale` grows the
/// circle until its diameter spans the surface diagonal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleDescriptor {
    pub initial_size: f32,
    pub initial_offset: Vec2,
    pub final_offset: Vec2,
    pub final_scale: f32,
}

impl RippleDescriptor {
    #[inline]
    pub fn initial_radius(&self) -> f32 {
        self.initial_size * 0.5
    }
}

/// Initial diameter for a surface: 60% of its larger side, floored to whole pixels.
#[inline]
pub fn initial_size_for(width: f32, height: f32) -> f32 {
    (width.max(height) * INITIAL_SIZE_FACTOR).floor()
}

/// Derive the ripple for a press, or `None` when there is nothing to draw.
///
/// With `centered` set the ripple grows from the surface center and the press
/// only acts as the trigger.
pub fn compute_ripple(
    metrics: &SurfaceMetrics,
    press: Option<PressEvent>,
    centered: bool,
) -> Option<RippleDescriptor> {
    compute_ripple_padded(metrics, press, centered, 0.0)
}

/// Same as [`compute_ripple`] but adds `padding` pixels to the diagonal the
/// ripple grows to. Non-finite or negative padding counts as zero.
pub fn compute_ripple_padded(
    metrics: &SurfaceMetrics,
    press: Option<PressEvent>,
    centered: bool,
    padding: f32,
) -> Option<RippleDescriptor> {
    let press = press?;
    if !metrics.has_area() {
        return None;
    }
    let initial_size = initial_size_for(metrics.width, metrics.height);
    if initial_size <= 0.0 {
        return None;
    }

    let half = Vec2::splat(initial_size * 0.5);
    let final_offset = metrics.center() - half;
    let initial_offset = if centered {
        final_offset
    } else {
        press.to_local(metrics) - half
    };
    if !initial_offset.is_finite() {
        return None;
    }

    let padding = if padding.is_finite() {
        padding.max(0.0)
    } else {
        0.0
    };
    let final_scale = (metrics.diagonal() + padding) / initial_size;

    Some(RippleDescriptor {
        initial_size,
        initial_offset,
        final_offset,
        final_scale,
    })
}
