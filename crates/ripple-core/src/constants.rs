// Shared geometry and motion tuning constants for every ripple frontend.

// Geometry
pub const INITIAL_SIZE_FACTOR: f32 = 0.6; // initial diameter as a fraction of the larger surface side
pub const EDGE_PADDING_PX: f32 = 10.0; // extra growth some hosts add to cover anti-aliased edges

// Motion (seconds)
pub const RADIUS_IN_DURATION_SEC: f32 = 0.225;
pub const OPACITY_IN_DURATION_SEC: f32 = 0.075;
pub const OPACITY_OUT_DURATION_SEC: f32 = 0.15;

// Peak opacity of the ripple fill while the pointer is held
pub const RIPPLE_OPACITY: f32 = 0.12;

// Standard material easing curve: cubic-bezier(0.4, 0, 0.2, 1)
pub const STANDARD_EASING: [f32; 4] = [0.4, 0.0, 0.2, 1.0];

// Configuration defaults
pub const DEFAULT_COLOR: &str = "#000";
