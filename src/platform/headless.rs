//! Fixed-geometry host
//!
//! Stands in for the browser when running natively: the page layout is a
//! set of constant rects that scale with the surface size.

use crate::app::{App, InputEvent};
use crate::settings::Tuning;
use crate::sim::{Measure, Measurements, PointerKind, Rect};

/// Frame interval for scripted runs (ms)
const FRAME_MS: f64 = 1000.0 / 60.0;

/// A page whose elements never move unless told to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLayout {
    pub measurements: Measurements,
}

impl FixedLayout {
    /// Surface of `width` x `height` at the origin, card and "Yes" centered above the middle
    pub fn with_surface(width: f32, height: f32) -> Self {
        let panel_w = (width * 0.6).min(600.0);
        let panel_h = (height * 0.45).min(360.0);
        let panel = Rect::new(
            (width - panel_w) / 2.0,
            (height - panel_h) / 2.0 - height * 0.1,
            panel_w,
            panel_h,
        );
        let confirm = Rect::new(
            panel.left + panel.width / 2.0 - 130.0,
            panel.top + panel.height - 80.0,
            120.0,
            50.0,
        );
        Self {
            measurements: Measurements {
                surface: Rect::new(0.0, 0.0, width, height),
                evader: Rect::new(0.0, 0.0, 120.0, 48.0),
                confirm,
                panel,
                success: Rect::new(0.0, 0.0, width, height),
            },
        }
    }

    /// Simulate a window resize
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::with_surface(width, height);
    }
}

impl Default for FixedLayout {
    fn default() -> Self {
        Self::with_surface(1000.0, 800.0)
    }
}

impl Measure for FixedLayout {
    fn measure(&self) -> Measurements {
        self.measurements
    }
}

/// Outcome of [`run_demo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    pub frames: u32,
    pub teleports: u32,
    pub confetti: usize,
}

/// Script a short session: wander, hold "No" until it escapes, press "Yes", restart
pub fn run_demo(seed: u64) -> DemoSummary {
    let host = FixedLayout::default();
    let mut app = App::new(Tuning::default(), seed, "", &host);
    let mut now = 0.0;
    let mut frames = 0;

    let mut step = |app: &mut App, now: &mut f64| {
        app.frame(*now, &host);
        *now += FRAME_MS;
        frames += 1;
    };

    // Let it drift
    for _ in 0..120 {
        step(&mut app, &mut now);
    }
    log::info!("Evader drifted to {:?}", app.world().evader.pos);

    // Press and chase until it teleports away
    app.push(InputEvent::PointerDown {
        client: app.world().evader.center(),
        pointer_id: 1,
        kind: Some(PointerKind::Touch),
    });
    while app.teleports() == 0 && now < 10_000.0 {
        step(&mut app, &mut now);
        app.push(InputEvent::PointerMove {
            client: app.world().evader.center(),
            kind: Some(PointerKind::Touch),
        });
    }
    app.push(InputEvent::PointerUp {
        pointer_id: 1,
        kind: Some(PointerKind::Touch),
    });
    step(&mut app, &mut now);

    app.push(InputEvent::Confirm);
    step(&mut app, &mut now);
    let confetti = app.confetti().len();
    log::info!("Confirmed with {} confetti pieces", confetti);

    app.push(InputEvent::Restart);
    step(&mut app, &mut now);
    for effect in app.take_effects() {
        log::debug!("Effect: {:?}", effect);
    }

    DemoSummary {
        frames,
        teleports: app.teleports(),
        confetti,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_scales_layout() {
        let host = FixedLayout::with_surface(400.0, 300.0);
        let m = host.measure();
        assert_eq!(m.surface, Rect::new(0.0, 0.0, 400.0, 300.0));
        assert!(m.panel.width <= 400.0 && m.panel.height <= 300.0);
    }

    #[test]
    fn test_demo_runs_full_cycle() {
        let summary = run_demo(5);
        // One from the hold, one from the restart
        assert_eq!(summary.teleports, 2);
        assert_eq!(summary.confetti, 70);
        assert!(summary.frames > 120);
    }
}
