//! Browser runtime: canvas setup, the repeating tick timer and keyboard listeners.
//!
//! All mutable state of a running game (the game itself, the 2d context, the timer id
//! and the listener closures) lives in one `Runtime` kept in a thread-local. Callbacks
//! borrow it for the duration of one event; the browser never interleaves them.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, KeyboardEvent, Window, window};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::game::{Game, TickOutcome};
use crate::rng::SeededRandom;

const SCORE_OVERLAY_ID: &str = "cr-score";

struct Runtime {
    game: Game<SeededRandom>,
    ctx: CanvasRenderingContext2d,
    score_overlay: Option<Element>,
    handles: Option<LoopHandles>,
}

/// Everything registered with the browser, kept so it can be unregistered exactly.
struct LoopHandles {
    interval_id: Option<i32>,
    tick: Closure<dyn FnMut()>,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    keyup: Closure<dyn FnMut(KeyboardEvent)>,
}

impl LoopHandles {
    /// Registers listeners and the timer. On failure everything already registered
    /// is detached again, so no listener outlives its closure.
    fn attach(mut self, win: &Window, tick_ms: i32) -> Result<Self> {
        match self.register(win, tick_ms) {
            Ok(()) => Ok(self),
            Err(err) => {
                log::warn!("could not start game loop: {err}");
                self.detach();
                Err(err)
            }
        }
    }

    fn register(&mut self, win: &Window, tick_ms: i32) -> Result<()> {
        win.add_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())?;
        win.add_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref())?;
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            self.tick.as_ref().unchecked_ref(),
            tick_ms,
        )?;
        self.interval_id = Some(id);
        Ok(())
    }

    fn detach(self) {
        if let Some(win) = window() {
            if let Some(id) = self.interval_id {
                win.clear_interval_with_handle(id);
            }
            win.remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref())
                .ok();
            win.remove_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref())
                .ok();
        }
        // Usually called from inside the tick closure itself; it must outlive this call.
        self.tick.forget();
    }
}

impl Runtime {
    fn on_tick(&mut self) {
        match self.game.tick(&mut self.ctx) {
            TickOutcome::Survived { score } => self.show_score(score),
            TickOutcome::Crashed { score } => {
                self.show_score(score);
                self.finish(score);
            }
            TickOutcome::AlreadyEnded => {}
        }
    }

    fn show_score(&self, score: u32) {
        if let Some(el) = &self.score_overlay {
            el.set_text_content(Some(&format!("Score: {score}")));
        }
    }

    fn finish(&mut self, score: u32) {
        if let Some(handles) = self.handles.take() {
            handles.detach();
        }
        if let Some(win) = window() {
            win.alert_with_message(&format!("Score: {score}")).ok();
        }
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

pub fn start(config: GameConfig) -> Result<()> {
    config.validate()?;
    stop_current();

    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;
    let canvas = canvas_for(&doc, &config)?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GameError::NoContext)?;
    let score_overlay = if config.show_live_score {
        Some(score_overlay(&doc)?)
    } else {
        None
    };

    let (rng, seed) = match config.seed {
        Some(seed) => (SeededRandom::new(seed), seed),
        None => SeededRandom::from_entropy().map_err(|e| GameError::Entropy(e.to_string()))?,
    };
    log::info!("canyon run starting, seed {seed}");
    let game = Game::new(&config, rng);

    let tick = Closure::wrap(Box::new(move || {
        RUNTIME.with(|cell| {
            if let Some(rt) = cell.borrow_mut().as_mut() {
                rt.on_tick();
            }
        });
    }) as Box<dyn FnMut()>);

    let keydown = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        RUNTIME.with(|cell| {
            if let Some(rt) = cell.borrow_mut().as_mut() {
                if rt.game.controls_mut().key_down(&evt.key(), evt.key_code()) {
                    evt.prevent_default();
                }
            }
        });
    }) as Box<dyn FnMut(_)>);

    let keyup = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        RUNTIME.with(|cell| {
            if let Some(rt) = cell.borrow_mut().as_mut() {
                rt.game.controls_mut().key_up(&evt.key(), evt.key_code());
            }
        });
    }) as Box<dyn FnMut(_)>);

    let handles = LoopHandles {
        interval_id: None,
        tick,
        keydown,
        keyup,
    }
    .attach(&win, config.tick_ms)?;

    let runtime = Runtime {
        game,
        ctx,
        score_overlay,
        handles: Some(handles),
    };
    RUNTIME.with(|cell| cell.replace(Some(runtime)));
    Ok(())
}

/// Score of the current (or last finished) run, 0 before any run.
pub fn current_score() -> u32 {
    RUNTIME.with(|cell| cell.borrow().as_ref().map(|rt| rt.game.score()).unwrap_or(0))
}

/// Detaches a previous run's timer and listeners when a new run is started.
fn stop_current() {
    let previous = RUNTIME.with(|cell| cell.borrow_mut().take());
    if let Some(mut rt) = previous {
        if let Some(handles) = rt.handles.take() {
            log::info!("replacing running game at score {}", rt.game.score());
            handles.detach();
        }
    }
}

fn canvas_for(doc: &Document, config: &GameConfig) -> Result<HtmlCanvasElement> {
    let not_canvas = |_: Element| GameError::NotCanvas(config.canvas_id.clone());
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(&config.canvas_id) {
        el.dyn_into::<HtmlCanvasElement>().map_err(not_canvas)?
    } else {
        let c = doc
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(not_canvas)?;
        c.set_id(&config.canvas_id);
        doc.body().ok_or(GameError::NoBody)?.append_child(&c)?;
        c
    };
    canvas.set_width(config.width);
    canvas.set_height(config.height);
    Ok(canvas)
}

fn score_overlay(doc: &Document) -> Result<Element> {
    if let Some(el) = doc.get_element_by_id(SCORE_OVERLAY_ID) {
        return Ok(el);
    }
    let div = doc.create_element("div")?;
    div.set_id(SCORE_OVERLAY_ID);
    div.set_attribute("style", "position:fixed; top:10px; left:10px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); color:#d2ecd2; border:1px solid #333; border-radius:6px; z-index:44;").ok();
    doc.body().ok_or(GameError::NoBody)?.append_child(&div)?;
    Ok(div)
}
