#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use skewplot::data::settings_data::SettingsOverrides;
#[cfg(feature = "native")]
use skewplot::data::storage::DataDirectory;
#[cfg(feature = "native")]
use skewplot::export::{ExportFormat, export_snapshot};
#[cfg(feature = "native")]
use skewplot::{App, init_logging};
#[cfg(feature = "native")]
use skewplot_core::{CurveSnapshot, Language};
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "skewplot")]
#[command(about = "Interactive skewed distribution viewer for the terminal")]
struct Args {
    /// Path to the data directory (default: ~/.skewplot/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Initial mean, in [-2, 2]
    #[arg(long, allow_hyphen_values = true)]
    mean: Option<f64>,

    /// Initial standard deviation, in [0.5, 2]
    #[arg(long)]
    std_dev: Option<f64>,

    /// Initial skewness, in [-1, 1]
    #[arg(long, allow_hyphen_values = true)]
    skewness: Option<f64>,

    /// Display language (es, en)
    #[arg(short = 'L', long)]
    language: Option<Language>,

    /// Print the curve in this format and exit instead of starting the TUI
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    /// Write default settings.yaml and keybindings.yaml to the data directory and exit
    #[arg(long)]
    write_default_config: bool,
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let overrides = SettingsOverrides {
        mean: args.mean,
        std_dev: args.std_dev,
        skewness: args.skewness,
        language: args.language,
    };

    if args.write_default_config {
        let written = DataDirectory::new(data_dir.clone()).write_defaults()?;
        if written.is_empty() {
            println!("Configuration already present in {}", data_dir.display());
        }
        for path in written {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    let mut app = App::with_data_dir(data_dir, &overrides);

    if let Some(format) = args.export {
        let snapshot = CurveSnapshot::compute(&app.state().parameters);
        print!("{}", export_snapshot(&snapshot, format)?);
        if format == ExportFormat::Json {
            println!();
        }
        if let Some(problem) = &app.state().error_message {
            eprintln!("Warning: {}", problem);
        }
        return Ok(());
    }

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in web.rs
    // This main() exists only to satisfy the binary target requirement
    panic!(
        "This binary requires the 'native' feature. For web, use trunk to build the WASM target."
    );
}
