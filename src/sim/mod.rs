//! Evader simulation module
//!
//! All motion and gesture logic lives here. This module must stay pure:
//! - No DOM or platform dependencies
//! - Layout is read only through the `Measure` seam
//! - Seeded RNG only

pub mod hold;
pub mod layout;
pub mod repulsion;
pub mod state;
pub mod tick;

pub use hold::{HoldOutcome, HoldState, HoldTracker};
pub use layout::{Bounds, Layout, Measure, Measurements, Obstacle, Rect};
pub use repulsion::{band_speed, cap_speed, repulsion};
pub use state::{Evader, Pointer, PointerKind, World};
pub use tick::{TickInput, frame_dt, tick};
