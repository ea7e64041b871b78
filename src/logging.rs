use std::error::Error;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

use crate::markers::MARKERS;

pub const LOG_LEVEL_ENV: &str = "GENESEQ_LOG_LEVEL";

/// Directory that holds the log files, under the user's home.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".geneseq")
        .join("logs")
}

/// Initialize file logging. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr.
pub fn init_logging() -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_file_path(&log_dir);

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("geneseq_{}.log", Utc::now().format("%Y%m%d_%H%M%S")))
}

/// Map a user supplied level name onto an env_logger filter level.
pub fn parse_log_level(level: &str) -> Option<&'static str> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Set logging level based on environment variable or default
pub fn set_log_level() {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());

    let env_filter = parse_log_level(&level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{level}', defaulting to 'info'");
        "info"
    });

    std::env::set_var("RUST_LOG", format!("geneseq={env_filter}"));
}

/// One line describing this build and its reference data.
pub fn startup_summary() -> String {
    format!(
        "geneseq {} ({}/{}), {} reference markers",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        MARKERS.len()
    )
}

/// Log system information at startup
pub fn log_system_info() {
    info!("{}", startup_summary());
    info!("Log level: {}", std::env::var("RUST_LOG").unwrap_or_else(|_| "default".to_string()));
    debug!("Available CPU cores: {}", num_cpus::get());
    for marker in &MARKERS {
        debug!("Marker {} ({}): {} bases", marker.gene_name, marker.mutation_code, marker.sequence.len());
    }
}

/// Log application shutdown with the number of commands the session ran.
pub fn log_shutdown(commands_run: usize) {
    info!("Session ended after {commands_run} commands at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Report an error that ends the session, to the log and to stderr.
pub fn log_critical_error(err: &str, context: Option<&str>) {
    let message = match context {
        Some(ctx) => format!("CRITICAL ERROR [{ctx}]: {err}"),
        None => format!("CRITICAL ERROR: {err}"),
    };

    error!("{message}");
    eprintln!("[{}] {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), message);
}
