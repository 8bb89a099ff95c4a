//! Only Yes - a Yes/No prompt where "No" refuses to be clicked
//!
//! Core modules:
//! - `sim`: Evader physics, hold-to-dismiss gesture, layout geometry
//! - `app`: Owning context that drains input and drives the frame
//! - `nav`: Question/success screen state machine
//! - `confetti`: Decorative particle generation for the success screen
//! - `toast`: Single-slot notification with auto-hide
//! - `settings`: Data-driven tuning constants
//! - `platform`: DOM host (wasm) and headless host (native/tests)

pub mod app;
pub mod confetti;
pub mod error;
pub mod nav;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod toast;

pub use app::{App, Effect, Frame, InputEvent};
pub use error::ConfigError;
pub use nav::Screen;
pub use settings::Tuning;

/// Fixed constants that are not worth tuning
pub mod consts {
    /// Largest frame step the simulator will integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Padding between the evader and the surface edge when bouncing
    pub const BOUNCE_PAD: f32 = 10.0;
    /// Padding used for teleport corners and the initial placement
    pub const CORNER_PAD: f32 = 14.0;

    /// Evader measured size floor (avoids degenerate hit boxes)
    pub const MIN_EVADER_WIDTH: f32 = 90.0;
    pub const MIN_EVADER_HEIGHT: f32 = 40.0;

    /// Size assumed for the evader before the first layout read
    pub const DEFAULT_EVADER_WIDTH: f32 = 120.0;
    pub const DEFAULT_EVADER_HEIGHT: f32 = 48.0;

    /// Obstacle radius = half diagonal + margin, never below the floor
    pub const CONFIRM_MARGIN: f32 = 110.0;
    pub const CONFIRM_MIN_RADIUS: f32 = 170.0;
    pub const PANEL_MARGIN: f32 = 90.0;
    pub const PANEL_MIN_RADIUS: f32 = 240.0;

    /// Shown when a hold completes and the evader teleports away
    pub const HOLD_BLOCKED_MESSAGE: &str = "\"No\" isn't on the menu. Only \"Yes\" works.";
    /// Shown after restarting from the success screen
    pub const RESTART_MESSAGE: &str = "One more time, \"Yes\" please.";
}

/// Clamp that tolerates `min > max` (the upper bound wins) instead of panicking like `f32::clamp`
#[inline]
pub fn clamp_loose(value: f32, min: f32, max: f32) -> f32 {
    max.min(min.max(value))
}
