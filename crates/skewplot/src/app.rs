use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{Component, EventResult, status_bar::StatusBar};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::settings_data::{Settings, SettingsOverrides};
use crate::data::storage::DataDirectory;
use crate::event::AppKeyEvent;
use crate::screens::{Screen, distribution::DistributionScreen};
use crate::state::AppState;

pub struct App {
    state: AppState,
    status_bar: StatusBar,
    distribution_screen: DistributionScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            status_bar: StatusBar::new(),
            distribution_screen: DistributionScreen::new(),
        }
    }

    /// Create app from the configuration files in a data directory.
    ///
    /// Unreadable or invalid files fall back to defaults and are reported in
    /// the status bar.
    pub fn with_data_dir(data_dir: PathBuf, overrides: &SettingsOverrides) -> Self {
        let storage = DataDirectory::new(data_dir);
        let mut problems = Vec::new();

        let settings = storage.load_settings().unwrap_or_else(|e| {
            problems.push(format!("settings.yaml ignored: {}", e));
            Settings::default()
        });
        let keybindings = storage.load_keybindings().unwrap_or_else(|e| {
            problems.push(format!("keybindings.yaml ignored: {}", e));
            KeybindingsConfig::default()
        });

        let mut state = AppState::new(settings.with_overrides(overrides), keybindings);
        if !problems.is_empty() {
            state.set_error(problems.join("; "));
        }

        Self::new(state)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(
            screen = self.distribution_screen.title(),
            parameters = ?self.state.parameters,
            language = self.state.language.code(),
            "Starting"
        );

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
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

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key(key_event.into())
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key(&mut self, key: AppKeyEvent) {
        let keys = &self.state.keybindings;

        // Global key bindings
        if KeybindingsConfig::matches(&key, &keys.global.quit) {
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(&key, &keys.global.cancel) {
            self.state.clear_error();
            return;
        }

        let result = self
            .distribution_screen
            .handle_key(key, &mut self.state);

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}
