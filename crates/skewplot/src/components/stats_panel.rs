//! Statistics and skew explanation text.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use skewplot_core::{CurveSnapshot, Language};

use crate::util::format::format_value;
use crate::util::styles::{MEAN_COLOR, MEDIAN_COLOR, MODE_COLOR, titled_block};

fn statistic_line(label: &str, value: f64, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format_value(value)),
    ])
}

fn caption_line(caption: &str, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", caption),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(text.to_string()),
    ])
}

/// Lines shown in the statistics panel, top to bottom.
pub fn stats_lines(snapshot: &CurveSnapshot, language: Language) -> Vec<Line<'static>> {
    let labels = language.labels();
    let stats = &snapshot.statistics;
    vec![
        statistic_line(labels.mode, stats.mode, MODE_COLOR),
        statistic_line(labels.median, stats.median, MEDIAN_COLOR),
        statistic_line(labels.mean, stats.mean, MEAN_COLOR),
        Line::from(""),
        caption_line(labels.skew_type, snapshot.category.label(language)),
        caption_line(labels.explanation, snapshot.category.explanation(language)),
    ]
}

pub fn render_stats_panel(
    frame: &mut Frame,
    area: Rect,
    snapshot: &CurveSnapshot,
    language: Language,
) {
    let paragraph = Paragraph::new(stats_lines(snapshot, language))
        .block(titled_block(language.labels().statistics_title))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use skewplot_core::Parameters;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_negative_example_lines() {
        let snapshot = CurveSnapshot::compute(&Parameters::new(1.0, 0.5, -1.0));
        let lines: Vec<String> = stats_lines(&snapshot, Language::Spanish)
            .iter()
            .map(plain)
            .collect();

        assert_eq!(lines[0], "Moda: 1.50");
        assert_eq!(lines[1], "Mediana: 1.25");
        assert_eq!(lines[2], "Media: 1.00");
        assert_eq!(lines[4], "Tipo de asimetría: Negativa");
        assert!(lines[5].starts_with("Explicación: La cola izquierda"));
    }

    #[test]
    fn test_symmetric_lines_in_english() {
        let snapshot = CurveSnapshot::compute(&Parameters::default());
        let lines: Vec<String> = stats_lines(&snapshot, Language::English)
            .iter()
            .map(plain)
            .collect();

        assert_eq!(lines[0], "Mode: 0.00");
        assert_eq!(lines[4], "Skew type: Normal (no skew)");
    }
}
