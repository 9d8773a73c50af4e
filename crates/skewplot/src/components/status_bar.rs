use super::{Component, EventResult};
use crate::data::keybindings_data::{KeybindingsConfig, primary};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    /// Help text built from the first configured binding of each action.
    pub fn help_text(keys: &KeybindingsConfig) -> String {
        format!(
            "{}/{}: select | {}/{}: adjust | {}/{}: ×5 | {}: reset | {}: random | {}: language | {}: quit",
            primary(&keys.navigation.up),
            primary(&keys.navigation.down),
            primary(&keys.sliders.decrease),
            primary(&keys.sliders.increase),
            primary(&keys.sliders.decrease_coarse),
            primary(&keys.sliders.increase_coarse),
            primary(&keys.global.reset),
            primary(&keys.global.randomize),
            primary(&keys.global.language),
            primary(&keys.global.quit),
        )
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(&state.keybindings),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
