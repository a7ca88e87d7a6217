// Inline style fragments for ripple elements. Pure string building so the
// formatting can be checked on the host.

use ripple_core::MotionFrame;

/// Base style for a freshly created ripple element, before its first frame.
/// The color is set separately through `CSSStyleDeclaration.setProperty` so
/// arbitrary strings can never add declarations.
pub fn ripple_base_style(size: f32) -> String {
    format!(
        "position:absolute;left:0;top:0;width:{size}px;height:{size}px;\
         border-radius:50%;display:inline-block;pointer-events:none;opacity:0;"
    )
}

#[inline]
pub fn transform_value(frame: &MotionFrame) -> String {
    format!(
        "translate({:.2}px, {:.2}px) scale({:.4})",
        frame.offset.x, frame.offset.y, frame.scale
    )
}

#[inline]
pub fn opacity_value(frame: &MotionFrame) -> String {
    format!("{:.4}", frame.opacity.clamp(0.0, 1.0))
}

/// Ripples are absolutely positioned, so a statically positioned surface has
/// to become their containing block.
#[inline]
pub fn needs_positioning(computed_position: &str) -> bool {
    matches!(computed_position.trim(), "" | "static")
}
