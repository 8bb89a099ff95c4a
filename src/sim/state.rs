//! Simulation state: the evader, the pointer, and the cached layout
//!
//! Exactly one `World` exists per page; it is owned by `App` and passed by
//! reference into `tick` and the input handlers.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::layout::{Bounds, Layout, Measure};
use crate::clamp_loose;
use crate::consts::*;
use crate::settings::Tuning;

/// Coarse pointer device class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Parse a DOM `pointerType`; empty or unknown strings give `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mouse" => Some(PointerKind::Mouse),
            "touch" => Some(PointerKind::Touch),
            "pen" => Some(PointerKind::Pen),
            _ => None,
        }
    }

    /// Mice hover, so they stay "near" the surface after a button release
    pub fn hovers(&self) -> bool {
        matches!(self, PointerKind::Mouse)
    }
}

/// The last known pointer, in surface-local coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub pos: Vec2,
    /// Whether the pointer repels the evader this frame
    pub active: bool,
    pub kind: Option<PointerKind>,
}

impl Pointer {
    /// Deactivate after a release, unless the effective device can hover
    pub fn release(&mut self, kind: Option<PointerKind>) {
        let effective = kind.or(self.kind);
        if !effective.is_some_and(|k| k.hovers()) {
            self.active = false;
        }
    }
}

/// The evading "No" control
#[derive(Debug, Clone, Copy)]
pub struct Evader {
    /// Top-left corner, surface-local
    pub pos: Vec2,
    pub size: Vec2,
    /// px/s
    pub vel: Vec2,
}

impl Evader {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Inclusive hit test against the evader's box
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.pos.x
            && p.x <= self.pos.x + self.size.x
            && p.y >= self.pos.y
            && p.y <= self.pos.y + self.size.y
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub evader: Evader,
    pub pointer: Pointer,
    /// `None` until the first refresh
    pub layout: Option<Layout>,
    pub tuning: Tuning,
    rng: Pcg32,
}

impl World {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            evader: Evader {
                pos: Vec2::ZERO,
                size: Vec2::new(DEFAULT_EVADER_WIDTH, DEFAULT_EVADER_HEIGHT),
                vel: tuning.start_velocity(),
            },
            pointer: Pointer::default(),
            layout: None,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Re-read geometry from the host and cache it
    pub fn refresh(&mut self, host: &impl Measure) -> &Layout {
        let layout = Layout::from_measurements(&host.measure());
        log::debug!(
            "Layout refreshed: surface {}x{}, evader {}x{}",
            layout.surface.width,
            layout.surface.height,
            layout.evader_size.x,
            layout.evader_size.y
        );
        self.evader.size = layout.evader_size;
        self.layout.insert(layout)
    }

    /// Current bounce bounds, if the surface can host motion
    pub fn bounds(&self) -> Option<Bounds> {
        self.layout
            .filter(|l| !l.surface.is_degenerate())
            .map(|l| l.bounds(BOUNCE_PAD))
    }

    /// Place the evader right of center with some jitter
    pub fn place_initial(&mut self) {
        let Some(layout) = self.layout else {
            return;
        };
        let b = layout.bounds(CORNER_PAD);
        let w = layout.surface.width;
        let h = layout.surface.height;
        let jx = (self.rng.random::<f32>() - 0.5) * 120.0;
        let jy = (self.rng.random::<f32>() - 0.5) * 140.0;
        self.evader.pos = Vec2::new(
            clamp_loose(w * 0.62 + jx, b.min.x, b.max.x),
            clamp_loose(h * 0.52 + jy, b.min.y, b.max.y),
        );
    }

    /// Pull the evader back inside after the surface shrank
    pub fn clamp_into_surface(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        self.evader.pos = self.evader.pos.clamp(bounds.min, bounds.max);
    }

    /// Jump to a random padded corner and fly off in a random direction
    ///
    /// Refreshes layout first. Returns `false` (and leaves state untouched)
    /// when there is no usable surface.
    pub fn teleport(&mut self, host: &impl Measure) -> bool {
        let layout = *self.refresh(host);
        if layout.surface.is_degenerate() {
            log::warn!("Teleport skipped: surface has no area");
            return false;
        }

        let corners = layout.corners();
        let pick = corners[self.rng.random_range(0..corners.len())];
        let angle = self.rng.random::<f32>() * std::f32::consts::TAU;
        self.evader.pos = pick;
        self.evader.vel = Vec2::from_angle(angle) * self.tuning.teleport_velocity();
        log::info!("Evader teleported to ({}, {})", pick.x, pick.y);
        true
    }

    /// Whether the pointer currently lies on the evader
    pub fn pointer_over_evader(&self) -> bool {
        self.evader.contains(self.pointer.pos)
    }
}
