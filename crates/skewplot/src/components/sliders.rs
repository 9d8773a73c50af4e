//! The three parameter sliders.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};
use skewplot_core::{Language, ParameterKind, Parameters};

use crate::util::format::format_value;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, slider_style, titled_block};

/// Width of the label column ("Desviación estándar: 1.00" plus focus marker).
const LABEL_WIDTH: u16 = 28;

/// Slider caption, e.g. `Media: 0.00`.
pub fn slider_label(kind: ParameterKind, params: &Parameters, language: Language) -> String {
    format!(
        "{}: {}",
        language.parameter_label(kind),
        format_value(params.get(kind))
    )
}

/// Render one row per parameter: caption on the left, gauge on the right.
pub fn render_sliders(
    frame: &mut Frame,
    area: Rect,
    params: &Parameters,
    focused: ParameterKind,
    language: Language,
) {
    let block = titled_block(language.labels().parameters_title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 3]).split(inner);

    for (kind, row) in ParameterKind::ALL.iter().zip(rows.iter()) {
        let is_focused = *kind == focused;
        let columns =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(10)]).split(*row);

        let marker = if is_focused { "▶ " } else { "  " };
        let caption = Line::from(vec![
            Span::styled(marker, Style::default().fg(FOCUS_COLOR)),
            Span::styled(slider_label(*kind, params, language), slider_style(is_focused)),
        ]);
        frame.render_widget(Paragraph::new(caption), columns[0]);

        let range = kind.range();
        let gauge_color = if is_focused { FOCUS_COLOR } else { HELP_COLOR };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(gauge_color))
            .ratio(range.ratio(params.get(*kind)))
            .label(format!(
                "{} … {}",
                format_value(range.min),
                format_value(range.max)
            ));
        frame.render_widget(gauge, columns[1]);
    }
}
