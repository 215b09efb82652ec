//! Browser host: owns the session, wires DOM events and drives the frame loop

use std::cell::RefCell;

use game_core::{Session, SessionState, TickOutcome, Viewport};
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, KeyboardEvent, TouchEvent, Window};

use crate::hud::{Hud, HudView};
use crate::input::{key_input, pointer_input, InputKind};
use crate::renderer::scene::build_scene;
use crate::renderer::Renderer;

struct App {
    session: Session,
    renderer: Renderer,
    hud: Hud,
    canvas: HtmlCanvasElement,
    frame_pending: bool,
}

impl App {
    fn render(&mut self) {
        let scene = build_scene(&self.session.snapshot());
        if let Err(e) = self.renderer.draw(&scene) {
            error!("Render failed: {}", e);
        }
        self.hud.apply(HudView::from_session(&self.session));
    }

    fn handle_input(&mut self, input: InputKind) -> bool {
        let used = match input {
            InputKind::Primary => self.session.primary_input(),
            InputKind::Restart => self.session.restart(),
        };
        if used {
            self.hud.apply(HudView::from_session(&self.session));
        }
        used
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.session.resize(Viewport::new(width as f32, height as f32));
        self.renderer.resize(width, height);
        // A halted loop would otherwise keep the stale frame
        if self.session.state() == SessionState::Ended {
            self.render();
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static FRAME: RefCell<Option<Closure<dyn FnMut(f64)>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

/// Size `canvas` to the window, build the renderer and start the game loop
#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let renderer = Renderer::new(canvas.clone())
            .await
            .map_err(|e| JsValue::from_str(&e))?;
        let session = Session::new(
            Viewport::new(width as f32, height as f32),
            js_sys::Date::now() as u64,
        );
        info!("Flappy started at {}x{}", width, height);

        let mut app = App {
            session,
            renderer,
            hud: Hud::new(&document),
            canvas,
            frame_pending: false,
        };
        app.render();
        APP.with(|cell| cell.replace(Some(app)));

        install_listeners(&window, &document)?;
        install_frame_loop();
        schedule_frame();

        Ok(JsValue::UNDEFINED)
    })
}

fn window_size(window: &Window) -> (u32, u32) {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(1.0) as u32
    };
    (
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn dispatch(input: InputKind) {
    let rearm = with_app(|app| {
        app.handle_input(input) && app.session.state() == SessionState::Running
    });
    if rearm == Some(true) {
        schedule_frame();
    }
}

fn install_listeners(window: &Window, document: &web_sys::Document) -> Result<(), JsValue> {
    // Keyboard
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(input) = key_input(&event.code()) {
                event.prevent_default();
                dispatch(input);
            }
        });
        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            dispatch(pointer_input());
        });
        window
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch; non-passive so the page does not scroll or zoom
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            dispatch(pointer_input());
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
    }

    // Restart button
    if let Some(button) = document.get_element_by_id("restart-btn") {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.stop_propagation();
            dispatch(InputKind::Restart);
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    } else {
        log::warn!("Restart button #restart-btn not found");
    }

    // Resize
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = window_size(&window);
            with_app(|app| app.resize(width, height));
        });
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn install_frame_loop() {
    let closure = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        let outcome = with_app(|app| {
            app.frame_pending = false;
            let outcome = app.session.tick(now);
            app.render();
            outcome
        });
        if outcome == Some(TickOutcome::Continue) {
            schedule_frame();
        }
    });
    FRAME.with(|frame| frame.replace(Some(closure)));
}

/// Request the next animation frame unless one is already pending
fn schedule_frame() {
    let already_pending =
        with_app(|app| std::mem::replace(&mut app.frame_pending, true)).unwrap_or(true);
    if already_pending {
        return;
    }

    FRAME.with(|frame| {
        let frame = frame.borrow();
        let (Some(window), Some(closure)) = (web_sys::window(), frame.as_ref()) else {
            return;
        };
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            error!("requestAnimationFrame failed: {:?}", e);
            with_app(|app| app.frame_pending = false);
        }
    });
}
