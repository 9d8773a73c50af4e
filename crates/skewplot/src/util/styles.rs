//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for the focused slider and panel borders
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text and axis labels
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for the curve itself
pub const CURVE_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);

/// Reference line colors, shared by the chart and the statistics panel
pub const MODE_COLOR: Color = Color::Red;
pub const MEDIAN_COLOR: Color = Color::Green;
pub const MEAN_COLOR: Color = Color::Blue;

/// Create a bordered block with a title.
pub fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
}

/// Style for a slider row, highlighted when it has focus.
pub fn slider_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titled_block_has_title() {
        let block = titled_block("Curve");
        assert!(format!("{:?}", block).contains("Curve"));
    }

    #[test]
    fn test_slider_style() {
        assert_eq!(slider_style(true).fg, Some(FOCUS_COLOR));
        assert_eq!(slider_style(false).fg, None);
    }
}
