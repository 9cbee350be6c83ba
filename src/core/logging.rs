//! Logging setup.
//!
//! JSON logs go to a daily rolling file in the app data directory; `log`
//! macros are bridged into `tracing`. Rolled files from earlier days are
//! gzip-compressed in the background.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "kynseed-rating.log";

/// Directory holding the rolling log files.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("kynseed-rating").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn prepare_log_dir() -> PathBuf {
    let log_dir = log_dir();
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }
    log_dir
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging for TUI mode.
///
/// Only the file layer is installed: the terminal belongs to ratatui while
/// the app runs. `SubscriberInitExt::init` also installs the `log` →
/// `tracing` bridge. Keep the returned guard alive so buffered lines are
/// flushed on exit.
pub fn init_tui() -> WorkerGuard {
    let log_dir = prepare_log_dir();
    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter());

    tracing_subscriber::registry().with(file_layer).init();

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_PREFIX)
    );
    std::thread::spawn(move || compress_old_logs(&log_dir));
    guard
}

/// Rolled files look like `kynseed-rating.log.YYYY-MM-DD`; today's stays open.
fn should_compress(file_name: &str, today_suffix: &str) -> bool {
    file_name.starts_with(&format!("{LOG_FILE_PREFIX}."))
        && !file_name.ends_with(today_suffix)
        && !file_name.ends_with(".gz")
}

fn compress_old_logs(log_dir: &Path) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

fn compress_file(path: &Path) -> io::Result<()> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path.with_file_name(gz_name);

    if gz_path.exists() {
        return Ok(());
    }

    if let Err(e) = write_gz(path, &gz_path) {
        // A partial archive would make the next pass skip this file.
        let _ = fs::remove_file(&gz_path);
        return Err(e);
    }

    fs::remove_file(path)
}

fn write_gz(src: &Path, dst: &Path) -> io::Result<()> {
    let mut reader = io::BufReader::new(fs::File::open(src)?);
    let mut encoder = GzEncoder::new(fs::File::create(dst)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;
    Ok(())
}
