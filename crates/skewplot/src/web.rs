//! Web entry point for skewplot using ratzilla.
//!
//! This module provides the WASM entry point that uses ratzilla for
//! rendering ratatui widgets in the browser.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::layout::{Constraint, Direction, Layout};
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::components::Component;
use crate::components::status_bar::StatusBar;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::screens::distribution::DistributionScreen;
use crate::state::AppState;

/// Web application state wrapped for callback access.
struct WebApp {
    state: AppState,
    status_bar: StatusBar,
    distribution_screen: DistributionScreen,
}

impl WebApp {
    fn new() -> Self {
        Self {
            state: AppState::default(),
            status_bar: StatusBar::new(),
            distribution_screen: DistributionScreen::new(),
        }
    }

    fn handle_key(&mut self, key: AppKeyEvent) {
        let keys = &self.state.keybindings;

        if KeybindingsConfig::matches(&key, &keys.global.quit) {
            // Can't really exit in web
            tracing::info!("Exit requested");
            return;
        }
        if KeybindingsConfig::matches(&key, &keys.global.cancel) {
            self.state.clear_error();
            return;
        }

        self.distribution_screen.handle_key(key, &mut self.state);
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.distribution_screen
            .render(frame, chunks[0], &self.state);
        self.status_bar.render(frame, chunks[1], &self.state);
    }
}

/// Set up event listener to prevent default browser behavior for captured keys.
fn setup_prevent_default() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        // Tab moves slider focus instead of browser focus
        if event.key() == "Tab" {
            event.prevent_default();
        }
    });

    document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .expect("failed to add keydown listener");

    // Prevent the closure from being dropped
    closure.forget();
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    crate::logging::init_logging_web();

    tracing::info!("skewplot web version starting");

    setup_prevent_default();

    let app = Rc::new(RefCell::new(WebApp::new()));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        app_clone.borrow_mut().handle_key(key);
    });

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
