//! Curve chart with mode/median/mean reference lines.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition},
};
use skewplot_core::{CurveSnapshot, DOMAIN_MAX, DOMAIN_MIN, Language, Sample, Statistics};

use crate::util::format::{format_tick, format_value};
use crate::util::styles::{
    CURVE_COLOR, HELP_COLOR, MEAN_COLOR, MEDIAN_COLOR, MODE_COLOR, titled_block,
};

/// Headroom above the highest sample so the peak is not drawn on the border.
const Y_HEADROOM: f64 = 1.1;

/// A vertical line drawn over the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceMarker {
    pub label: &'static str,
    pub x: f64,
    pub color: Color,
}

/// Mode, median and mean markers, in that draw order.
pub fn reference_markers(stats: &Statistics, language: Language) -> [ReferenceMarker; 3] {
    let labels = language.labels();
    [
        ReferenceMarker {
            label: labels.mode,
            x: stats.mode,
            color: MODE_COLOR,
        },
        ReferenceMarker {
            label: labels.median,
            x: stats.median,
            color: MEDIAN_COLOR,
        },
        ReferenceMarker {
            label: labels.mean,
            x: stats.mean,
            color: MEAN_COLOR,
        },
    ]
}

/// Y-axis bounds: from `min(0, lowest sample)` to the peak plus headroom.
pub fn y_bounds(snapshot: &CurveSnapshot) -> [f64; 2] {
    let (lo, hi) = snapshot.y_range();
    let lo = if lo.is_finite() { lo.min(0.0) } else { 0.0 };
    let hi = if hi.is_finite() { hi * Y_HEADROOM } else { 1.0 };
    if hi > lo { [lo, hi] } else { [lo, lo + 1.0] }
}

/// Render the sampled curve with its reference lines.
pub fn render_curve_chart(
    frame: &mut Frame,
    area: Rect,
    snapshot: &CurveSnapshot,
    language: Language,
) {
    let curve: Vec<(f64, f64)> = snapshot.samples.iter().map(Sample::as_point).collect();
    let [y_min, y_max] = y_bounds(snapshot);

    let markers = reference_markers(&snapshot.statistics, language);
    let marker_lines: Vec<(&ReferenceMarker, [(f64, f64); 2])> = markers
        .iter()
        .filter(|m| (DOMAIN_MIN..=DOMAIN_MAX).contains(&m.x))
        .map(|m| (m, [(m.x, y_min), (m.x, y_max)]))
        .collect();

    let mut datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(CURVE_COLOR))
            .data(&curve),
    ];
    for (marker, line) in &marker_lines {
        datasets.push(
            Dataset::default()
                .name(marker.label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(marker.color))
                .data(line),
        );
    }

    let x_labels: Vec<String> = [-4.0, -2.0, 0.0, 2.0, 4.0]
        .iter()
        .map(|&x| format_tick(x))
        .collect();
    let y_labels = vec![
        format_value(y_min),
        format_value((y_min + y_max) / 2.0),
        format_value(y_max),
    ];

    let chart = Chart::new(datasets)
        .block(titled_block(language.labels().title))
        .x_axis(
            Axis::default()
                .title("x")
                .style(Style::default().fg(HELP_COLOR))
                .bounds([DOMAIN_MIN, DOMAIN_MAX])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("y")
                .style(Style::default().fg(HELP_COLOR))
                .bounds([y_min, y_max])
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}
