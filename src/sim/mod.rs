//! Liquid wave simulation
//!
//! Rings and droplets spawn from pointer input, grow and fade every frame,
//! and are removed on the frame they expire. Seeded RNG only, so a run can
//! be replayed in tests.

pub mod entity;
pub mod frame;
pub mod input;
pub mod links;
pub mod state;
pub mod store;

pub use entity::{Droplet, Entity, Ring};
pub use frame::{FrameStats, frame};
pub use input::InputEvent;
pub use links::{Link, draw_links, find_links};
pub use state::FluidState;
pub use store::EntityStore;
