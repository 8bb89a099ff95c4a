//! Browser host
//!
//! Binds the page's elements, forwards DOM events into the app's input queue,
//! and runs the `requestAnimationFrame` loop that drives everything else.
//!
//! Required ids: `view-question`, `view-success`, `stage` (containing a
//! `.card`), `yesBtn`, `noBtn`, `restartBtn`, `toast`, `confetti`. Optional
//! tuning overrides go in the stage's `data-tuning` attribute as JSON.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, PointerEvent};

use crate::app::{App, Effect, Frame, InputEvent};
use crate::error::ConfigError;
use crate::settings::Tuning;
use crate::sim::{Measure, Measurements, PointerKind, Rect};

/// Every element the prompt needs
pub struct DomHost {
    document: Document,
    view_question: Element,
    view_success: Element,
    stage: Element,
    card: Element,
    confirm: Element,
    evader: HtmlElement,
    restart: Element,
    toast: Element,
    confetti: Element,
}

struct Page {
    app: App,
    host: DomHost,
}

fn by_id(document: &Document, id: &str) -> Result<Element, ConfigError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ConfigError::MissingElement(id.to_string()))
}

fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

impl DomHost {
    /// Look up all required elements; any missing one is fatal
    pub fn locate(document: &Document) -> Result<Self, ConfigError> {
        let stage = by_id(document, "stage")?;
        let card = stage
            .query_selector(".card")
            .ok()
            .flatten()
            .ok_or_else(|| ConfigError::MissingElement(".card".to_string()))?;
        let evader = by_id(document, "noBtn")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ConfigError::MissingElement("noBtn".to_string()))?;

        Ok(Self {
            document: document.clone(),
            view_question: by_id(document, "view-question")?,
            view_success: by_id(document, "view-success")?,
            stage,
            card,
            confirm: by_id(document, "yesBtn")?,
            evader,
            restart: by_id(document, "restartBtn")?,
            toast: by_id(document, "toast")?,
            confetti: by_id(document, "confetti")?,
        })
    }

    fn apply(&self, app: &App, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ShowScreen(screen) => {
                    let success = !screen.is_question();
                    let _ = self
                        .view_question
                        .set_attribute("aria-hidden", &success.to_string());
                    let _ = self
                        .view_success
                        .set_attribute("aria-hidden", &(!success).to_string());
                }
                Effect::PushFragment(fragment) => {
                    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(fragment));
                    }
                }
                Effect::SpawnConfetti => {
                    self.confetti.set_inner_html("");
                    for piece in app.confetti() {
                        if let Ok(el) = self.document.create_element("i") {
                            el.set_class_name("confetti__piece");
                            let _ = el.set_attribute("style", &piece.style());
                            let _ = self.confetti.append_child(&el);
                        }
                    }
                }
                Effect::ClearConfetti => self.confetti.set_inner_html(""),
                Effect::ShowToast(message) => {
                    self.toast.set_text_content(Some(&message));
                    let _ = self.toast.class_list().add_1("is-visible");
                }
                Effect::HideToast => {
                    let _ = self.toast.class_list().remove_1("is-visible");
                }
            }
        }
    }

    fn render(&self, frame: &Frame) {
        let style = self.evader.style();
        let _ = style.set_property("transform", &frame.transform());
        let _ = style.set_property("--hold", &frame.hold_progress.to_string());
    }
}

impl Measure for DomHost {
    fn measure(&self) -> Measurements {
        Measurements {
            surface: client_rect(&self.stage),
            evader: client_rect(&self.evader),
            confirm: client_rect(&self.confirm),
            panel: client_rect(&self.card),
            success: client_rect(&self.view_success),
        }
    }
}

/// Start the prompt on the current page
pub fn run() -> Result<(), ConfigError> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| ConfigError::MissingElement("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ConfigError::MissingElement("document".into()))?;

    let host = DomHost::locate(&document)?;
    let tuning = Tuning::from_json_or_default(host.stage.get_attribute("data-tuning").as_deref());
    let seed = js_sys::Date::now() as u64;
    let fragment = window.location().hash().unwrap_or_default();

    let mut app = App::new(tuning, seed, &fragment, &host);
    let effects = app.take_effects();
    host.apply(&app, effects);
    log::info!("Prompt initialized with seed: {}", seed);

    let page = Rc::new(RefCell::new(Page { app, host }));
    wire_events(&window, &page);
    request_animation_frame(page);
    Ok(())
}

fn listen(target: &EventTarget, name: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Forward an event into the queue; nothing else happens until the next frame
fn enqueue(page: &Rc<RefCell<Page>>, event: InputEvent) {
    page.borrow_mut().app.push(event);
}

fn pointer_kind(ev: &PointerEvent) -> Option<PointerKind> {
    PointerKind::parse(&ev.pointer_type())
}

fn client_pos(ev: &PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_events(window: &web_sys::Window, page: &Rc<RefCell<Page>>) {
    let (evader, stage, confirm, restart) = {
        let p = page.borrow();
        (
            p.host.evader.clone(),
            p.host.stage.clone(),
            p.host.confirm.clone(),
            p.host.restart.clone(),
        )
    };

    // "No" never activates
    listen(&evader, "click", |event| {
        event.prevent_default();
        event.stop_propagation();
    });

    {
        let page = page.clone();
        let target = evader.clone();
        listen(&evader, "pointerdown", move |event| {
            let ev: PointerEvent = event.unchecked_into();
            ev.prevent_default();
            // Capture is best-effort
            let _ = target.set_pointer_capture(ev.pointer_id());
            enqueue(
                &page,
                InputEvent::PointerDown {
                    client: client_pos(&ev),
                    pointer_id: ev.pointer_id(),
                    kind: pointer_kind(&ev),
                },
            );
        });
    }

    {
        let page = page.clone();
        listen(window, "pointermove", move |event| {
            let ev: PointerEvent = event.unchecked_into();
            enqueue(
                &page,
                InputEvent::PointerMove {
                    client: client_pos(&ev),
                    kind: pointer_kind(&ev),
                },
            );
        });
    }

    {
        let page = page.clone();
        listen(window, "pointerup", move |event| {
            let ev: PointerEvent = event.unchecked_into();
            enqueue(
                &page,
                InputEvent::PointerUp {
                    pointer_id: ev.pointer_id(),
                    kind: pointer_kind(&ev),
                },
            );
        });
    }

    {
        let page = page.clone();
        listen(window, "pointercancel", move |event| {
            let ev: PointerEvent = event.unchecked_into();
            enqueue(
                &page,
                InputEvent::PointerCancel {
                    pointer_id: ev.pointer_id(),
                    kind: pointer_kind(&ev),
                },
            );
        });
    }

    {
        let page = page.clone();
        listen(&stage, "pointerleave", move |_| enqueue(&page, InputEvent::PointerLeave));
    }

    {
        let page = page.clone();
        listen(window, "blur", move |_| {
            log::debug!("Window blurred");
            enqueue(&page, InputEvent::Blur);
        });
    }

    {
        let page = page.clone();
        listen(window, "resize", move |_| enqueue(&page, InputEvent::Resize));
    }

    {
        let page = page.clone();
        listen(window, "popstate", move |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            enqueue(&page, InputEvent::FragmentChanged(hash));
        });
    }

    {
        let page = page.clone();
        listen(&confirm, "click", move |_| enqueue(&page, InputEvent::Confirm));
    }

    {
        let page = page.clone();
        listen(&restart, "click", move |_| enqueue(&page, InputEvent::Restart));
    }
}

fn request_animation_frame(page: Rc<RefCell<Page>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        frame_loop(page, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn frame_loop(page: Rc<RefCell<Page>>, time: f64) {
    {
        let mut p = page.borrow_mut();
        let Page { app, host } = &mut *p;
        let frame = app.frame(time, &*host);
        let effects = app.take_effects();
        host.apply(app, effects);
        host.render(&frame);
    }

    request_animation_frame(page);
}
