//! Layout geometry: surface rect, evader size and obstacle zones
//!
//! The host measures client-space rects; everything here converts them into
//! surface-local coordinates once, so the per-frame code never reads layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned rectangle in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn diagonal(&self) -> f32 {
        self.width.hypot(self.height)
    }

    /// Zero-area or non-finite rects cannot host motion
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Client-space rects read from the host in one pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    /// The interactive stage
    pub surface: Rect,
    /// The evading "No" control
    pub evader: Rect,
    /// The affirmative "Yes" control
    pub confirm: Rect,
    /// The content card holding the question
    pub panel: Rect,
    /// The success view (confetti is spread across it)
    pub success: Rect,
}

/// Hosts that can measure the rendered page
pub trait Measure {
    fn measure(&self) -> Measurements;
}

/// A circular repulsion zone in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl Obstacle {
    /// Obstacle around `rect`: half its diagonal plus `margin`, never smaller than `min_radius`
    pub fn around(rect: &Rect, origin: Vec2, margin: f32, min_radius: f32) -> Self {
        Self {
            center: rect.center() - origin,
            radius: (rect.diagonal() / 2.0 + margin).max(min_radius),
        }
    }
}

/// Cached geometry, refreshed on resize/teleport/screen change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub surface: Rect,
    pub evader_size: Vec2,
    pub confirm: Obstacle,
    pub panel: Obstacle,
}

impl Layout {
    pub fn from_measurements(m: &Measurements) -> Self {
        let origin = Vec2::new(m.surface.left, m.surface.top);
        Self {
            surface: m.surface,
            evader_size: evader_size(&m.evader),
            confirm: Obstacle::around(&m.confirm, origin, CONFIRM_MARGIN, CONFIRM_MIN_RADIUS),
            panel: Obstacle::around(&m.panel, origin, PANEL_MARGIN, PANEL_MIN_RADIUS),
        }
    }

    /// Convert a client-space point into surface-local coordinates
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.surface.left, self.surface.top)
    }

    /// Valid top-left positions for the evader with `pad` on every side
    pub fn bounds(&self, pad: f32) -> Bounds {
        Bounds::new(&self.surface, self.evader_size, pad)
    }

    /// The four padded corner positions: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        let b = self.bounds(CORNER_PAD);
        [
            Vec2::new(b.min.x, b.min.y),
            Vec2::new(b.max.x, b.min.y),
            Vec2::new(b.min.x, b.max.y),
            Vec2::new(b.max.x, b.max.y),
        ]
    }
}

/// Rendered evader size, rounded and floored
fn evader_size(rect: &Rect) -> Vec2 {
    Vec2::new(
        rect.width.round().max(MIN_EVADER_WIDTH),
        rect.height.round().max(MIN_EVADER_HEIGHT),
    )
}

/// Inclusive range of top-left positions that keep the evader inside the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// When the surface is too small for the evader, `max` collapses onto `min`
    pub fn new(surface: &Rect, size: Vec2, pad: f32) -> Self {
        let min = Vec2::splat(pad);
        let max = Vec2::new(surface.width - size.x - pad, surface.height - size.y - pad).max(min);
        Self { min, max }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
