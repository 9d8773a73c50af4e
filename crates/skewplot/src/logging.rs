#[cfg(feature = "native")]
use std::fs::{self, File, OpenOptions};
#[cfg(feature = "native")]
use std::io::{Read, Seek, SeekFrom, Write};
#[cfg(feature = "native")]
use std::path::Path;
#[cfg(feature = "native")]
use std::sync::{Arc, Mutex};
#[cfg(feature = "native")]
use tracing_subscriber::fmt::MakeWriter;
#[cfg(feature = "native")]
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (5 MB)
#[cfg(feature = "native")]
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
#[cfg(feature = "native")]
const KEEP_SIZE: u64 = 1024 * 1024;

/// Name of the log file inside the data directory
#[cfg(feature = "native")]
pub const LOG_FILE_NAME: &str = "skewplot.log";

/// Rotate log file if it exceeds `max_size`, keeping the last `keep_size` bytes.
#[cfg(feature = "native")]
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep_size: u64) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let metadata = fs::metadata(log_path)?;
    if metadata.len() <= max_size {
        return Ok(());
    }

    let mut file = File::open(log_path)?;
    let start_pos = metadata.len().saturating_sub(keep_size);

    file.seek(SeekFrom::Start(start_pos))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Skip to the first newline to avoid partial lines
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(&buffer[skip..])?;

    Ok(())
}

/// A writer factory that produces writers for the shared log file
#[cfg(feature = "native")]
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

/// A writer that holds a reference to the shared file
#[cfg(feature = "native")]
struct LogWriter {
    file: Arc<Mutex<File>>,
}

#[cfg(feature = "native")]
impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| std::io::Error::other("log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| std::io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}

#[cfg(feature = "native")]
impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Initialize logging to write to a file in the data directory.
///
/// Logs are written to `{data_dir}/skewplot.log` with size-based rotation.
/// The terminal belongs to the TUI, so nothing is logged to stdout/stderr.
/// The log level can be controlled via the `level` parameter or the `RUST_LOG` environment variable.
#[cfg(feature = "native")]
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let writer_factory = LogWriterFactory {
        file: Arc::new(Mutex::new(file)),
    };

    let default_filter = format!("skewplot={level},skewplot_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer_factory)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(
        "skewplot logging initialized (log_path={})",
        log_path.display()
    );
    Ok(())
}

/// Initialize logging to the browser console.
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    #[test]
    fn test_small_log_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "line one\nline two\n").unwrap();

        rotate_log_if_needed(&path, 1024, 16).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_rotation_keeps_whole_recent_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let content: String = (0..100).map(|i| format!("entry {i:03}\n")).collect();
        fs::write(&path, &content).unwrap();

        // Each line is 10 bytes; keep the tail of 35 bytes
        rotate_log_if_needed(&path, 100, 35).unwrap();

        let rotated = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = rotated.lines().collect();
        assert_eq!(lines[0], "--- Log rotated (older entries removed) ---");
        assert_eq!(&lines[1..], ["entry 097", "entry 098", "entry 099"]);
    }

    #[test]
    fn test_missing_log_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        assert!(rotate_log_if_needed(&dir.path().join("absent.log"), 1, 1).is_ok());
    }
}
