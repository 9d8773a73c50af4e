//! Non-interactive output of a curve snapshot.

use std::fmt::Write;

use skewplot_core::CurveSnapshot;

/// Output format for `--export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
pub enum ExportFormat {
    /// `x,y` rows, one per sample
    Csv,
    /// Parameters, statistics, category and samples
    Json,
}

/// Serialize a snapshot in the requested format.
pub fn export_snapshot(
    snapshot: &CurveSnapshot,
    format: ExportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Csv => Ok(to_csv(snapshot)),
        ExportFormat::Json => serde_json::to_string_pretty(snapshot),
    }
}

fn to_csv(snapshot: &CurveSnapshot) -> String {
    let mut out = String::from("x,y\n");
    for sample in &snapshot.samples {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{},{}", sample.x, sample.y);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skewplot_core::Parameters;

    #[test]
    fn test_csv_has_header_and_all_samples() {
        let snapshot = CurveSnapshot::compute(&Parameters::default());
        let csv = export_snapshot(&snapshot, ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 82);
        assert_eq!(lines[0], "x,y");
        assert!(lines[1].starts_with("-4,"));
        assert!(lines[41].starts_with("0,0.398942280401"));
    }

    #[test]
    fn test_json_export() {
        let snapshot = CurveSnapshot::compute(&Parameters::new(1.0, 0.5, -1.0));
        let json = export_snapshot(&snapshot, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["category"], "negative");
        assert_eq!(value["statistics"]["median"], 1.25);
        assert_eq!(value["parameters"]["mean"], 1.0);
        assert_eq!(value["samples"].as_array().map(Vec::len), Some(81));
    }
}
