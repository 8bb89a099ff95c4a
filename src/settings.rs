//! Tuning constants for the evader's feel
//!
//! Every value was tuned by eye. Raw values are stored unscaled and the
//! accessors multiply by `speed_scale`, so one knob slows or speeds up the
//! whole effect. Overrides come from a JSON blob on the page (see
//! `platform::web`); missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Evader physics, gesture and presentation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Global multiplier applied to every speed/acceleration below
    pub speed_scale: f32,

    // === Wander ===
    /// Sinusoidal acceleration amplitude (px/s², unscaled)
    pub wander_accel: f32,

    // === Pointer repulsion ===
    /// Radius of the pointer's repulsion zone (px, not scaled)
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    /// Speed cap while the pointer is nearby
    pub pointer_max_speed: f32,

    // === Cruise band (no pointer) ===
    pub cruise_min_speed: f32,
    pub cruise_max_speed: f32,

    // === Obstacles ===
    pub confirm_strength: f32,
    pub panel_strength: f32,

    // === Bounds ===
    /// Velocity kept after bouncing off an edge
    pub bounce_damping: f32,
    /// Drag per second, capped at `drag_cap` per frame
    pub drag_rate: f32,
    pub drag_cap: f32,

    // === Teleport ===
    pub teleport_speed: f32,
    /// Initial velocity before any input
    pub initial_velocity: [f32; 2],

    // === Gesture / presentation ===
    /// How long the pointer must stay on the evader (ms)
    pub hold_ms: f64,
    /// Notification lifetime (ms)
    pub toast_ms: f64,
    pub confetti_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed_scale: 0.2,

            wander_accel: 12.0,

            pointer_radius: 220.0,
            pointer_strength: 2400.0,
            pointer_max_speed: 980.0,

            cruise_min_speed: 160.0,
            cruise_max_speed: 320.0,

            confirm_strength: 1400.0,
            panel_strength: 1200.0,

            bounce_damping: 0.98,
            drag_rate: 0.02,
            drag_cap: 0.01,

            teleport_speed: 420.0,
            initial_velocity: [220.0, 160.0],

            hold_ms: 3000.0,
            toast_ms: 1600.0,
            confetti_count: 70,
        }
    }
}

impl Tuning {
    /// Parse overrides; absent fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse overrides, logging and using defaults when they are malformed
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("{e}; using default tuning");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    pub fn wander(&self) -> f32 {
        self.wander_accel * self.speed_scale
    }

    pub fn pointer_force(&self) -> f32 {
        self.pointer_strength * self.speed_scale
    }

    pub fn pointer_speed_cap(&self) -> f32 {
        self.pointer_max_speed * self.speed_scale
    }

    /// (min, max) speed band while no pointer is near
    pub fn cruise_band(&self) -> (f32, f32) {
        (
            self.cruise_min_speed * self.speed_scale,
            self.cruise_max_speed * self.speed_scale,
        )
    }

    pub fn confirm_force(&self) -> f32 {
        self.confirm_strength * self.speed_scale
    }

    pub fn panel_force(&self) -> f32 {
        self.panel_strength * self.speed_scale
    }

    pub fn teleport_velocity(&self) -> f32 {
        self.teleport_speed * self.speed_scale
    }

    pub fn start_velocity(&self) -> glam::Vec2 {
        glam::Vec2::from(self.initial_velocity) * self.speed_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scaled_speeds() {
        let t = Tuning::default();
        assert!((t.pointer_speed_cap() - 196.0).abs() < 1e-3);
        let (min, max) = t.cruise_band();
        assert!((min - 32.0).abs() < 1e-3);
        assert!((max - 64.0).abs() < 1e-3);
        assert!((t.teleport_velocity() - 84.0).abs() < 1e-3);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "speed_scale": 0.5, "hold_ms": 1000 }"#).unwrap();
        assert_eq!(t.speed_scale, 0.5);
        assert_eq!(t.hold_ms, 1000.0);
        assert_eq!(t.confetti_count, 70);
        assert_eq!(t.pointer_radius, 220.0);
    }

    #[test]
    fn test_malformed_override_falls_back() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::InvalidTuning(_))
        ));
        assert_eq!(Tuning::from_json_or_default(Some("\"fast\"")), Tuning::default());
        assert_eq!(Tuning::from_json_or_default(None), Tuning::default());
    }
}
