//! Chart components for data visualization.

mod curve;

pub use curve::{ReferenceMarker, reference_markers, render_curve_chart, y_bounds};
