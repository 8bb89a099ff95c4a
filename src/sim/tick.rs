//! Per-frame evader motion
//!
//! Variable timestep, capped at `MAX_FRAME_DT` so a stalled tab can't fling
//! the evader through a wall.

use glam::Vec2;

use super::layout::Obstacle;
use super::repulsion::{band_speed, cap_speed, repulsion};
use super::state::World;
use crate::consts::*;

/// Frame inputs that do not live in the world
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Frame timestamp in seconds (drives the wander phase)
    pub time_secs: f64,
    /// Whether the question screen is showing
    pub question_visible: bool,
}

/// Clamp raw elapsed time into a usable step
#[inline]
pub fn frame_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Advance the evader by one frame
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    let dt = frame_dt(dt);
    let tuning = &world.tuning;
    let evader = &mut world.evader;

    // Wander so it never settles
    let t = input.time_secs as f32;
    evader.vel += Vec2::new((t * 0.9).cos(), (t * 1.1).sin()) * tuning.wander() * dt;

    if world.pointer.active {
        let zone = Obstacle {
            center: world.pointer.pos,
            radius: tuning.pointer_radius,
        };
        evader.vel += repulsion(evader.center(), &zone, tuning.pointer_force(), dt);
        evader.vel = cap_speed(evader.vel, tuning.pointer_speed_cap());
    } else {
        let (min, max) = tuning.cruise_band();
        evader.vel = band_speed(evader.vel, min, max);
    }

    if !input.question_visible {
        return;
    }

    if let Some(layout) = world.layout {
        let center = evader.center();
        evader.vel += repulsion(center, &layout.confirm, tuning.confirm_force(), dt);
        evader.vel += repulsion(center, &layout.panel, tuning.panel_force(), dt);
    }

    let Some(bounds) = world.bounds() else {
        return;
    };
    let evader = &mut world.evader;
    let tuning = &world.tuning;

    evader.pos += evader.vel * dt;

    // Reflect off the padded edges, bleeding a little energy
    let damping = tuning.bounce_damping;
    if evader.pos.x < bounds.min.x {
        evader.pos.x = bounds.min.x;
        evader.vel.x = evader.vel.x.abs() * damping;
    } else if evader.pos.x > bounds.max.x {
        evader.pos.x = bounds.max.x;
        evader.vel.x = -evader.vel.x.abs() * damping;
    }
    if evader.pos.y < bounds.min.y {
        evader.pos.y = bounds.min.y;
        evader.vel.y = evader.vel.y.abs() * damping;
    } else if evader.pos.y > bounds.max.y {
        evader.pos.y = bounds.max.y;
        evader.vel.y = -evader.vel.y.abs() * damping;
    }

    // Drag
    evader.vel *= 1.0 - (dt * tuning.drag_rate).min(tuning.drag_cap);
}
