//! Page interaction effects around the canvas
//!
//! The timing and styling rules live in host-independent modules; `dom`
//! wires them to the document in the browser.

pub mod contact;
pub mod counter;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod resume;
pub mod reveal;
pub mod scroll;
pub mod typewriter;

pub use contact::{ContactMessage, FormError, SubmitState};
pub use counter::Counter;
pub use typewriter::Typewriter;

/// Custom cursor follower lags the pointer by this much (ms)
pub const CURSOR_FOLLOW_DELAY_MS: i32 = 100;

/// Loading screen stays up this long after load (ms)
pub const LOADING_HOLD_MS: i32 = 3000;
/// Then fades out over this long before being hidden (ms)
pub const LOADING_FADE_MS: i32 = 500;

pub const GLITCH_HOVER_ANIMATION: &str = "glitch 0.3s infinite";
pub const GLITCH_IDLE_ANIMATION: &str = "glitch 2s infinite";
