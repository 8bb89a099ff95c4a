//! End-to-end session through the public `App` API with a fixed layout

use glam::Vec2;
use only_yes::platform::headless::FixedLayout;
use only_yes::{App, Effect, InputEvent, Screen, Tuning};

const FRAME_MS: f64 = 16.0;

fn run_frames(app: &mut App, host: &FixedLayout, now: &mut f64, count: usize) {
    for _ in 0..count {
        app.frame(*now, host);
        *now += FRAME_MS;
    }
}

#[test]
fn confirm_then_restart_round_trip() {
    let host = FixedLayout::default();
    let mut app = App::new(Tuning::default(), 2024, "", &host);
    let mut now = 0.0;

    // Fresh load: question screen, evader in bounds, no confetti
    run_frames(&mut app, &host, &mut now, 30);
    assert_eq!(app.screen(), Screen::Question);
    assert!(app.world().bounds().unwrap().contains(app.world().evader.pos));
    assert!(app.confetti().is_empty());
    app.take_effects();

    // Confirm
    app.push(InputEvent::Confirm);
    run_frames(&mut app, &host, &mut now, 1);
    let effects = app.take_effects();
    assert!(effects.contains(&Effect::PushFragment("#success")));
    assert!(effects.contains(&Effect::ShowScreen(Screen::Success)));
    assert_eq!(app.screen(), Screen::Success);
    assert_eq!(app.confetti().len(), 70);

    // The evader is frozen off-screen while success shows
    let parked = app.world().evader.pos;
    run_frames(&mut app, &host, &mut now, 30);
    assert_eq!(app.world().evader.pos, parked);

    // Restart
    app.push(InputEvent::Restart);
    app.frame(now, &host);
    let effects = app.take_effects();
    assert!(effects.contains(&Effect::PushFragment("#")));
    assert!(effects.contains(&Effect::ClearConfetti));
    assert_eq!(app.screen(), Screen::Question);
    assert!(app.confetti().is_empty());
    assert!(app.toast().is_visible());
    // Teleported to a corner, then moved for one frame
    let pos = app.world().evader.pos;
    let corners = app.world().layout.unwrap().corners();
    assert!(corners.iter().any(|c| c.distance(pos) < 2.0), "{pos:?}");
    assert!(app.world().bounds().unwrap().contains(pos));
}

#[test]
fn back_and_forward_navigation() {
    let host = FixedLayout::default();
    let mut app = App::new(Tuning::default(), 1, "#success", &host);
    assert_eq!(app.screen(), Screen::Success);
    assert_eq!(app.confetti().len(), 70);

    let mut now = 0.0;
    app.push(InputEvent::FragmentChanged(String::new()));
    run_frames(&mut app, &host, &mut now, 1);
    assert_eq!(app.screen(), Screen::Question);
    assert_eq!(app.confetti().len(), 0);

    app.push(InputEvent::FragmentChanged("#success".to_string()));
    run_frames(&mut app, &host, &mut now, 1);
    assert_eq!(app.confetti().len(), 70);

    // History navigation never pushes new entries
    assert!(
        !app
            .take_effects()
            .iter()
            .any(|e| matches!(e, Effect::PushFragment(_)))
    );
}

#[test]
fn long_session_stays_in_bounds_under_pointer_pressure() {
    let mut host = FixedLayout::with_surface(900.0, 700.0);
    let mut app = App::new(Tuning::default(), 77, "", &host);
    let mut now = 0.0;

    for i in 0..2000 {
        // Sweep the pointer across the surface
        let t = i as f32 * 0.01;
        app.push(InputEvent::PointerMove {
            client: Vec2::new(450.0 + 400.0 * t.cos(), 350.0 + 300.0 * (1.3 * t).sin()),
            kind: None,
        });
        if i == 1000 {
            host.resize(500.0, 400.0);
            app.push(InputEvent::Resize);
        }
        // A stalled tab now and then
        let step = if i % 250 == 0 { 5000.0 } else { FRAME_MS };
        app.frame(now, &host);
        now += step;

        let bounds = app.world().bounds().unwrap();
        assert!(bounds.contains(app.world().evader.pos), "frame {i}");
        assert!(app.world().evader.vel.is_finite());
    }
}
