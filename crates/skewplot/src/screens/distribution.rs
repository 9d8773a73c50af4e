use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::charts::render_curve_chart;
use crate::components::sliders::render_sliders;
use crate::components::stats_panel::render_stats_panel;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::state::app_state::COARSE_STEPS;

use super::Screen;

/// Sliders on top, curve in the middle, statistics below.
pub struct DistributionScreen;

impl DistributionScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DistributionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DistributionScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let keys = &state.keybindings;

        let steps = if KeybindingsConfig::matches(&key, &keys.sliders.decrease) {
            Some(-1)
        } else if KeybindingsConfig::matches(&key, &keys.sliders.increase) {
            Some(1)
        } else if KeybindingsConfig::matches(&key, &keys.sliders.decrease_coarse) {
            Some(-COARSE_STEPS)
        } else if KeybindingsConfig::matches(&key, &keys.sliders.increase_coarse) {
            Some(COARSE_STEPS)
        } else {
            None
        };
        if let Some(steps) = steps {
            state.adjust_focused(steps);
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(&key, &keys.navigation.up) {
            state.focus_prev();
        } else if KeybindingsConfig::matches(&key, &keys.navigation.down) {
            state.focus_next();
        } else if KeybindingsConfig::matches(&key, &keys.global.reset) {
            state.reset_parameters();
        } else if KeybindingsConfig::matches(&key, &keys.global.randomize) {
            state.randomize(&mut rand::rng());
        } else if KeybindingsConfig::matches(&key, &keys.global.language) {
            state.toggle_language();
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Sliders
                Constraint::Min(8),    // Chart
                Constraint::Length(9), // Statistics
            ])
            .split(area);

        // Recomputed on every draw from the current parameters
        let snapshot = state.snapshot();

        render_sliders(
            frame,
            chunks[0],
            &state.parameters,
            state.focused,
            state.language,
        );
        render_curve_chart(frame, chunks[1], &snapshot, state.language);
        render_stats_panel(frame, chunks[2], &snapshot, state.language);
    }
}

impl Screen for DistributionScreen {
    fn title(&self) -> &str {
        "Distribution"
    }
}
