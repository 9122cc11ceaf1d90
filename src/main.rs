//! RobotScope — a desktop viewer for robots.txt batch analysis results.
//!
//! Entry point: initialises structured logging and launches the eframe
//! application window.

// Declare crate modules
mod app;
mod app_actions;
mod core;
mod export;
mod ui;
mod util;

use tracing_subscriber::Layer as _;

use app::RobotScopeApp;
use util::constants;

fn main() -> eframe::Result<()> {
    // Set up dual-layer logging: stderr (env-controlled) + file (always debug).
    let log_dir = init_log_dir();
    init_logging(&log_dir);

    tracing::info!(
        "{} v{} starting",
        constants::APP_NAME,
        constants::APP_VERSION,
    );
    if let Some(dir) = &log_dir {
        tracing::info!("Log file: {}", dir.join(constants::LOG_FILE_NAME).display());
    }

    // Configure the native window
    let viewport = egui::ViewportBuilder::default()
        .with_title(format!(
            "{} v{}",
            constants::APP_NAME,
            constants::APP_VERSION
        ))
        .with_inner_size([1180.0, 760.0])
        .with_min_inner_size([760.0, 480.0]);

    let options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(RobotScopeApp::new(cc)))),
    )
}

/// Locate and create the persistent log directory.
///
/// `%LOCALAPPDATA%` on Windows, `$XDG_STATE_HOME` (or `~/.local/state`)
/// elsewhere. Returns `None` if the directory cannot be created (logging
/// falls back to stderr only).
fn init_log_dir() -> Option<std::path::PathBuf> {
    let base = if cfg!(windows) {
        std::path::PathBuf::from(std::env::var("LOCALAPPDATA").ok()?)
    } else if let Ok(state) = std::env::var("XDG_STATE_HOME") {
        std::path::PathBuf::from(state)
    } else {
        std::path::PathBuf::from(std::env::var("HOME").ok()?)
            .join(".local")
            .join("state")
    };

    let log_dir = base.join(constants::APP_DATA_DIR).join(constants::LOG_DIR);
    std::fs::create_dir_all(&log_dir).ok()?;

    // Rotate the log file if it exceeds the size limit.
    let log_file = log_dir.join(constants::LOG_FILE_NAME);
    if log_file.exists() {
        if let Ok(meta) = std::fs::metadata(&log_file) {
            if meta.len() > constants::MAX_LOG_FILE_SIZE {
                let backup = log_dir.join("robotscope.log.old");
                let _ = std::fs::rename(&log_file, &backup);
            }
        }
    }

    Some(log_dir)
}

/// Initialise the dual-layer tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` env var (default: `info`).
/// - **file layer** (if `log_dir` is `Some`): always writes at `debug` level
///   to a persistent log file for post-mortem diagnostics.
fn init_logging(log_dir: &Option<std::path::PathBuf>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(dir) = log_dir {
        let log_path = dir.join(constants::LOG_FILE_NAME);
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .with_filter(tracing_subscriber::EnvFilter::new("debug"));

            tracing_subscriber::registry()
                .with(stderr_layer.with_filter(env_filter))
                .with(file_layer)
                .init();
            return;
        }
    }

    // Fallback: stderr only
    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
