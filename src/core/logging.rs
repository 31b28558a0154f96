//! Logging and diagnostic setup.
//!
//! The TUI owns the terminal, so every log line goes to a daily rolling
//! JSON file. Standard `log` macros are bridged into `tracing`, and miette
//! is configured for the startup error report printed after the terminal
//! is restored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use flate2::write::GzEncoder;
use flate2::Compression;
use supports_color::Stream;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "agyal.log";

static TERMINAL_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();

fn get_terminal_caps() -> &'static TerminalCapabilities {
    TERMINAL_CAPS.get_or_init(TerminalCapabilities::detect)
}

// ============================================================================
// Terminal Capability Detection
// ============================================================================

/// Terminal color support levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLevel {
    TrueColor,
    Ansi256,
    Ansi16,
    NoColor,
}

/// Detected terminal capabilities
#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color_level: ColorLevel,
    pub supports_unicode: bool,
    pub is_interactive: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        let color_level = match supports_color::on(Stream::Stderr) {
            Some(support) if support.has_16m => ColorLevel::TrueColor,
            Some(support) if support.has_256 => ColorLevel::Ansi256,
            Some(support) if support.has_basic => ColorLevel::Ansi16,
            _ => ColorLevel::NoColor,
        };

        let supports_unicode = std::env::var("TERM")
            .map(|t| !t.contains("dumb"))
            .unwrap_or(true)
            && std::env::var("LANG")
                .map(|l| l.contains("UTF-8") || l.contains("utf8"))
                .unwrap_or(true);

        Self {
            color_level,
            supports_unicode,
            is_interactive: io::stderr().is_terminal(),
        }
    }

    pub fn should_colorize(&self) -> bool {
        self.is_interactive && self.color_level != ColorLevel::NoColor
    }
}

// ============================================================================
// Logging Initialization
// ============================================================================

/// Initialize file-only logging under `<data_dir>/logs`.
///
/// Returns a `WorkerGuard` which must stay alive until shutdown so buffered
/// lines are flushed.
pub fn init_tui(data_dir: &Path) -> WorkerGuard {
    let log_dir = data_dir.join("logs");

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter);

    // No stdout layer; the TUI owns the terminal
    let subscriber = tracing_subscriber::registry().with(file_layer);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize tracing subscriber: {}", e);
    }

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    init_miette();

    let log_dir_clone = log_dir.clone();
    std::thread::spawn(move || {
        compress_old_logs(&log_dir_clone);
    });

    log::info!("Logging initialized. Writing to: {:?} (daily rolling)", log_dir.join(LOG_FILE_NAME));

    guard
}

/// Whether a file in the log directory is a finished day's log.
fn should_compress(name: &str, today_suffix: &str) -> bool {
    name.starts_with(&format!("{LOG_FILE_NAME}."))
        && !name.ends_with(today_suffix)
        && !name.ends_with(".gz")
}

/// Compress rotated log files from previous days.
fn compress_old_logs(log_dir: &Path) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
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
    let mut reader = io::BufReader::new(fs::File::open(path)?);

    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path: PathBuf = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?
        .join(gz_name);

    if gz_path.exists() {
        return Ok(());
    }

    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;
    Ok(())
}

fn init_miette() {
    let caps = get_terminal_caps();

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(caps.color_level == ColorLevel::TrueColor)
                .unicode(caps.supports_unicode)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .color(caps.should_colorize())
                .build(),
        )
    }))
    .ok(); // Ignore if already set
}
