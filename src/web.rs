//! Browser front end: builds the DOM, forwards keys and button clicks to the
//! [`GameEngine`] and re-renders from its snapshot after every event.
//!
//! Everything lives in one `thread_local!` slot owned by this module; the
//! engine itself holds no globals. Deferred word advances are driven by
//! `setTimeout`, feeding the engine's ticket back when the timer fires.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

use crate::engine::{GameEngine, GameEvent, PendingAdvance};
use crate::input::KeyInput;
use crate::keyboard::{Finger, KEY_ROWS};
use crate::level::Level;

const STYLE: &str = "
#tt-root { font-family: 'Fira Code', monospace; max-width: 720px; margin: 32px auto; color: #eee; background: #181818; border: 2px solid #222; border-radius: 18px; padding: 20px; box-shadow: 0 0 32px 0 rgba(0,0,0,0.18); }
#tt-root .stats { display: flex; gap: 24px; color: #ffd166; }
#tt-root .word { font-size: 48px; letter-spacing: 4px; text-align: center; margin: 24px 0; min-height: 60px; }
#tt-root .letter.correct { color: #6fdc8c; }
#tt-root .letter.incorrect { color: #ff4d4d; text-decoration: underline; }
#tt-root .letter.current { border-bottom: 3px solid #ffd166; }
#tt-root .feedback { min-height: 24px; text-align: center; }
#tt-root .feedback.correct { color: #6fdc8c; }
#tt-root .feedback.incorrect { color: #ff4d4d; }
#tt-root .feedback.warning { color: #ffb347; }
#tt-root .feedback.neutral { color: #aaa; }
#tt-root .btn { margin: 4px; padding: 6px 14px; border-radius: 6px; border: 1px solid #333; background: #2a2a2a; color: #eee; cursor: pointer; }
#tt-root .btn.primary { background: #2d6a4f; }
#tt-root .btn.secondary { background: #6a2d2d; }
#tt-root .hidden { display: none; }
#tt-root .kb-row { display: flex; justify-content: center; gap: 4px; margin: 4px 0; }
#tt-root .key { width: 36px; height: 36px; line-height: 36px; text-align: center; border: 1px solid #333; border-radius: 4px; background: #222; }
#tt-root .key.space { width: 240px; }
#tt-root .key.highlight { background: #ffd166; color: #181818; }
#tt-root .fingers { display: flex; justify-content: center; gap: 6px; margin-top: 12px; }
#tt-root .finger { width: 24px; height: 48px; border-radius: 12px 12px 4px 4px; background: #333; }
#tt-root .finger.active { background: #ffd166; }
";

struct UiState {
    engine: GameEngine,
    score: Element,
    level: Element,
    streak: Element,
    word: Element,
    feedback: Element,
    start_btn: Element,
    keyboard: Element,
    keys: Vec<(char, Element)>,
    fingers: Vec<(Finger, Element)>,
}

thread_local! {
    static UI_STATE: RefCell<Option<UiState>> = const { RefCell::new(None) };
}

/// Builds the page and starts listening. Calling it again is a no-op.
pub fn mount(engine: GameEngine) -> Result<(), JsValue> {
    if UI_STATE.with(|cell| cell.borrow().is_some()) {
        log::warn!("typing trainer already mounted");
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let style = doc.create_element("style")?;
    style.set_text_content(Some(STYLE));
    body.append_child(&style)?;

    let root = child(&doc, &body, "div", "")?;
    root.set_id("tt-root");

    // Stats bar
    let stats = child(&doc, &root, "div", "stats")?;
    let score = labelled(&doc, &stats, "Score", "score")?;
    let level = labelled(&doc, &stats, "Level", "level")?;
    let streak = labelled(&doc, &stats, "Streak", "streak")?;

    let word = child(&doc, &root, "div", "word")?;
    word.set_id("current-word");
    let feedback = child(&doc, &root, "div", "feedback")?;
    feedback.set_id("feedback");

    // Controls
    let controls = child(&doc, &root, "div", "controls")?;
    let start_btn = button(&doc, &controls, "start-btn", "Start Game", "btn primary")?;
    let level_btn = button(&doc, &controls, "level-btn", "Level", "btn")?;
    let reset_btn = button(&doc, &controls, "reset-btn", "Reset", "btn")?;

    let selector = child(&doc, &root, "div", "level-selector hidden")?;
    selector.set_id("level-selector");
    for lvl in Level::ALL {
        let opt = button(&doc, &selector, "", lvl.label(), "btn level-option")?;
        opt.set_attribute("data-level", lvl.name())?;
        let sel = selector.clone();
        on_click(&opt, move || {
            sel.set_class_name("level-selector hidden");
            dispatch(|engine| engine.set_level(lvl));
        })?;
    }

    // On-screen keyboard with finger guide
    let keyboard = child(&doc, &root, "div", "keyboard-container")?;
    keyboard.set_id("keyboard-container");
    let mut keys = Vec::new();
    for row in KEY_ROWS {
        let row_el = child(&doc, &keyboard, "div", "kb-row")?;
        for k in row.chars() {
            let key_el = child(&doc, &row_el, "div", "key")?;
            key_el.set_attribute("data-key", &k.to_string())?;
            key_el.set_text_content(Some(&k.to_ascii_uppercase().to_string()));
            keys.push((k, key_el));
        }
    }
    let space_row = child(&doc, &keyboard, "div", "kb-row")?;
    let space = child(&doc, &space_row, "div", "key space")?;
    space.set_attribute("data-key", " ")?;
    keys.push((' ', space));
    let hands = child(&doc, &keyboard, "div", "fingers")?;
    let mut fingers = Vec::new();
    for f in Finger::ALL {
        let finger_el = child(&doc, &hands, "div", "finger")?;
        finger_el.set_attribute("data-finger", f.as_str())?;
        fingers.push((f, finger_el));
    }

    on_click(&start_btn, || dispatch(|engine| engine.toggle()))?;
    on_click(&reset_btn, || dispatch(|engine| engine.reset()))?;
    {
        let sel = selector.clone();
        on_click(&level_btn, move || {
            let class = sel.class_name();
            if class.split_whitespace().any(|c| c == "hidden") {
                sel.set_class_name("level-selector");
            } else {
                sel.set_class_name("level-selector hidden");
            }
        })?;
    }

    // Keyboard listener for typing
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let Some(input) = KeyInput::from_key(&evt.key()) else {
                return;
            };
            let active = UI_STATE.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map(|ui| ui.engine.is_active())
                    .unwrap_or(false)
            });
            if !active {
                return;
            }
            evt.prevent_default();
            dispatch(|engine| input.apply(engine));
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let ui = UiState {
        engine,
        score,
        level,
        streak,
        word,
        feedback,
        start_btn,
        keyboard,
        keys,
        fingers,
    };
    ui.render();
    UI_STATE.with(|cell| cell.replace(Some(ui)));
    log::info!("typing trainer mounted");
    Ok(())
}

impl UiState {
    fn render(&self) {
        let snap = self.engine.snapshot();

        self.score.set_text_content(Some(&snap.score.to_string()));
        self.streak.set_text_content(Some(&snap.streak.to_string()));
        self.level.set_text_content(Some(snap.level.label()));

        let mut html = String::new();
        for (letter, state) in snap.word.chars().zip(snap.letters.iter()) {
            html.push_str(&format!(
                "<span class=\"{}\">{}</span>",
                state.css_class(),
                letter
            ));
        }
        self.word.set_inner_html(&html);

        match &snap.status {
            Some(status) => {
                self.feedback.set_text_content(Some(&status.message));
                self.feedback
                    .set_class_name(&format!("feedback {}", status.kind.css_class()));
            }
            None => {
                self.feedback.set_text_content(Some(""));
                self.feedback.set_class_name("feedback");
            }
        }

        if snap.active {
            self.start_btn.set_text_content(Some("Stop Game"));
            self.start_btn.set_class_name("btn secondary");
        } else {
            self.start_btn.set_text_content(Some("Start Game"));
            self.start_btn.set_class_name("btn primary");
        }

        if snap.level.shows_keyboard() {
            self.keyboard.set_class_name("keyboard-container");
        } else {
            self.keyboard.set_class_name("keyboard-container hidden");
        }
        let hint = snap.hint;
        for (k, el) in &self.keys {
            let lit = hint.is_some_and(|h| h.key == *k);
            let base = if *k == ' ' { "key space" } else { "key" };
            el.set_class_name(&if lit {
                format!("{} highlight", base)
            } else {
                base.to_string()
            });
        }
        for (f, el) in &self.fingers {
            let lit = hint.is_some_and(|h| h.fingers.contains(f));
            el.set_class_name(if lit { "finger active" } else { "finger" });
        }
    }
}

/// Level change requested by name from the page.
pub fn select_level(name: &str) {
    match name.parse::<Level>() {
        Ok(level) => dispatch(|engine| engine.set_level(level)),
        Err(e) => log::warn!("ignoring level change: {}", e),
    }
}

/// Runs one engine operation, re-renders, then arms timers for any advances
/// the operation scheduled. Timers are armed after the borrow is released.
fn dispatch(op: impl FnOnce(&mut GameEngine) -> Vec<GameEvent>) {
    let advances: Vec<PendingAdvance> = UI_STATE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(ui) = slot.as_mut() else {
            return Vec::new();
        };
        let events = op(&mut ui.engine);
        ui.render();
        events
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::AdvanceScheduled(p) => Some(p),
                _ => None,
            })
            .collect()
    });
    for advance in advances {
        if let Err(e) = schedule_advance(advance) {
            log::error!("could not schedule word advance: {:?}", e);
        }
    }
}

fn schedule_advance(advance: PendingAdvance) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ticket = advance.ticket;
    let cb = Closure::once_into_js(move || dispatch(|engine| engine.complete_advance(ticket)));
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        advance.delay_ms as i32,
    )?;
    Ok(())
}

// --- DOM helpers -------------------------------------------------------------

fn child(doc: &Document, parent: &Element, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    parent.append_child(&el)?;
    Ok(el)
}

/// `Label: <span id=..>` pair in the stats bar; returns the value span.
fn labelled(doc: &Document, parent: &Element, label: &str, id: &str) -> Result<Element, JsValue> {
    let wrap = child(doc, parent, "div", "stat")?;
    wrap.set_text_content(Some(&format!("{}: ", label)));
    let value = child(doc, &wrap, "span", "")?;
    value.set_id(id);
    Ok(value)
}

fn button(
    doc: &Document,
    parent: &Element,
    id: &str,
    text: &str,
    class: &str,
) -> Result<Element, JsValue> {
    let el = child(doc, parent, "button", class)?;
    if !id.is_empty() {
        el.set_id(id);
    }
    el.set_text_content(Some(text));
    Ok(el)
}

fn on_click(el: &Element, mut f: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| f()) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
