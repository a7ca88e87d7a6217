// DOM wiring constants for the web frontend.

// Surface-scoped press, document-scoped release. `pointercancel` fires instead
// of `pointerup` when the browser takes over a touch (scrolling, zooming).
pub const PRESS_EVENT: &str = "pointerdown";
pub const RELEASE_EVENTS: [&str; 2] = ["pointerup", "pointercancel"];

// MouseEvent.button value of the main button; touch and pen contacts report it too.
pub const PRIMARY_BUTTON: i16 = 0;

// Marker class on ripple elements so hosts can target them from CSS
pub const RIPPLE_CLASS: &str = "ripple";
