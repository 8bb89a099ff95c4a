//! Owning context for one page
//!
//! Host event listeners only `push` input. Everything else (layout reads,
//! integration, gesture timing, navigation) happens inside `frame`, which the
//! host calls once per display refresh. Side effects the host must perform are
//! collected as [`Effect`]s.

use std::collections::VecDeque;

use glam::Vec2;

use crate::confetti::{self, ConfettiPiece};
use crate::consts::*;
use crate::nav::Screen;
use crate::settings::Tuning;
use crate::sim::{HoldOutcome, HoldTracker, Measure, PointerKind, TickInput, World, tick};
use crate::toast::Toast;

/// Input delivered by the host, queued until the next frame
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved anywhere in the window (client coordinates)
    PointerMove {
        client: Vec2,
        kind: Option<PointerKind>,
    },
    /// Pointer pressed on the evader
    PointerDown {
        client: Vec2,
        pointer_id: i32,
        kind: Option<PointerKind>,
    },
    PointerUp {
        pointer_id: i32,
        kind: Option<PointerKind>,
    },
    PointerCancel {
        pointer_id: i32,
        kind: Option<PointerKind>,
    },
    /// Pointer left the surface
    PointerLeave,
    /// Window lost focus
    Blur,
    Resize,
    /// "Yes" pressed
    Confirm,
    /// "Again" pressed on the success screen
    Restart,
    /// Location fragment changed outside our control (back/forward)
    FragmentChanged(String),
}

/// Work for the host to carry out after a frame
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowScreen(Screen),
    /// Push a history entry with this fragment
    PushFragment(&'static str),
    /// Replace the confetti layer with [`App::confetti`]
    SpawnConfetti,
    ClearConfetti,
    ShowToast(String),
    HideToast,
}

/// Per-frame render output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Evader top-left, rounded to whole pixels
    pub offset: Vec2,
    /// Hold fill in [0, 1]
    pub hold_progress: f32,
}

impl Frame {
    /// CSS transform placing the evader (translated, never reflowed)
    pub fn transform(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.offset.x, self.offset.y)
    }
}

pub struct App {
    world: World,
    hold: HoldTracker,
    screen: Screen,
    toast: Toast,
    confetti: Vec<ConfettiPiece>,
    queue: VecDeque<InputEvent>,
    effects: Vec<Effect>,
    last_ts: Option<f64>,
    teleports: u32,
}

impl App {
    /// Build the page state from the current fragment and layout
    pub fn new(tuning: Tuning, seed: u64, fragment: &str, host: &impl Measure) -> Self {
        let mut app = Self {
            world: World::new(tuning, seed),
            hold: HoldTracker::new(),
            screen: Screen::Question,
            toast: Toast::new(),
            confetti: Vec::new(),
            queue: VecDeque::new(),
            effects: Vec::new(),
            last_ts: None,
            teleports: 0,
        };
        app.set_screen(Screen::from_fragment(fragment), host);
        app.world.place_initial();
        app
    }

    /// Queue input for the next frame
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Run one frame at timestamp `now` (ms)
    pub fn frame(&mut self, now: f64, host: &impl Measure) -> Frame {
        let dt = match self.last_ts {
            Some(last) => ((now - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ts = Some(now);

        // Releases and screen changes must land before the hold is checked
        while let Some(event) = self.queue.pop_front() {
            self.handle(event, now, host);
        }

        let input = TickInput {
            time_secs: now / 1000.0,
            question_visible: self.screen.is_question(),
        };
        tick(&mut self.world, &input, dt);

        if self.screen.is_question() {
            let overlapping = self.world.pointer_over_evader();
            let hold_ms = self.world.tuning.hold_ms;
            if self.hold.update(now, overlapping, hold_ms) == HoldOutcome::Completed {
                self.notify(HOLD_BLOCKED_MESSAGE, now);
                self.teleport(host);
            }
        }

        if self.toast.expire(now) {
            self.effects.push(Effect::HideToast);
        }

        Frame {
            offset: self.world.evader.pos.round(),
            hold_progress: self.hold.progress(),
        }
    }

    /// Take the effects produced since the last call
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn hold(&self) -> &HoldTracker {
        &self.hold
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Confetti currently on the success screen
    pub fn confetti(&self) -> &[ConfettiPiece] {
        &self.confetti
    }

    /// Completed teleports since startup
    pub fn teleports(&self) -> u32 {
        self.teleports
    }

    fn handle(&mut self, event: InputEvent, now: f64, host: &impl Measure) {
        match event {
            InputEvent::PointerMove { client, kind } => {
                let pos = self.to_local(client);
                let pointer = &mut self.world.pointer;
                pointer.active = true;
                pointer.kind = kind.or(pointer.kind);
                pointer.pos = pos;
            }
            InputEvent::PointerDown {
                client,
                pointer_id,
                kind,
            } => {
                self.world.refresh(host);
                let pos = self.to_local(client);
                let pointer = &mut self.world.pointer;
                pointer.active = true;
                pointer.kind = kind.or(pointer.kind);
                pointer.pos = pos;

                if self.screen.is_question() && self.world.evader.contains(pos) {
                    self.hold.begin(pointer_id, now);
                }
            }
            InputEvent::PointerUp { pointer_id, kind }
            | InputEvent::PointerCancel { pointer_id, kind } => {
                self.world.pointer.release(kind);
                if self.hold.pointer_id() == Some(pointer_id) {
                    self.hold.cancel();
                }
            }
            InputEvent::PointerLeave => {
                self.world.pointer.active = false;
                self.hold.cancel();
            }
            InputEvent::Blur => {
                self.world.pointer.active = false;
                self.world.pointer.kind = None;
                self.hold.cancel();
            }
            InputEvent::Resize => {
                self.world.refresh(host);
                self.world.clamp_into_surface();
            }
            InputEvent::Confirm => {
                if self.screen == Screen::Question {
                    self.effects.push(Effect::PushFragment(Screen::Success.fragment()));
                    self.set_screen(Screen::Success, host);
                }
            }
            InputEvent::Restart => {
                if self.screen == Screen::Success {
                    self.effects.push(Effect::PushFragment(Screen::Question.fragment()));
                    self.set_screen(Screen::Question, host);
                    self.teleport(host);
                    self.notify(RESTART_MESSAGE, now);
                }
            }
            InputEvent::FragmentChanged(fragment) => {
                self.set_screen(Screen::from_fragment(&fragment), host);
            }
        }
    }

    fn set_screen(&mut self, screen: Screen, host: &impl Measure) {
        self.hold.cancel();
        self.screen = screen;
        self.effects.push(Effect::ShowScreen(screen));
        log::info!("Screen: {}", screen.as_str());

        self.world.refresh(host);
        match screen {
            Screen::Success => {
                let panel = host.measure().success;
                let count = self.world.tuning.confetti_count;
                self.confetti = confetti::spawn(self.world.rng(), panel.width, panel.height, count);
                self.effects.push(Effect::SpawnConfetti);
            }
            Screen::Question => {
                self.confetti.clear();
                self.effects.push(Effect::ClearConfetti);
            }
        }
    }

    fn teleport(&mut self, host: &impl Measure) {
        if self.world.teleport(host) {
            self.teleports += 1;
        }
    }

    fn notify(&mut self, message: &str, now: f64) {
        self.toast.show(message, now, self.world.tuning.toast_ms);
        self.effects.push(Effect::ShowToast(message.to_string()));
    }

    fn to_local(&self, client: Vec2) -> Vec2 {
        self.world
            .layout
            .map(|layout| layout.to_local(client))
            .unwrap_or(client)
    }
}
