//! Platform-independent core of the press ripple effect.
//!
//! Nothing in this crate touches a windowing or DOM API. Frontends measure
//! their surface, forward pointer signals to [`RippleController`], and hand
//! the resulting transitions to a [`RipplePresence`] they tick every frame.

pub mod config;
pub mod constants;
pub mod geometry;
pub mod lifecycle;
pub mod motion;
pub mod presence;

pub use config::*;
pub use geometry::*;
pub use lifecycle::*;
pub use motion::*;
pub use presence::*;
