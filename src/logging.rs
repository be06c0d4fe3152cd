use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber. The TUI owns the terminal, so it logs to
/// `file`; without one, logs go to stderr.
pub fn init_logging(debug: bool, file: Option<&Path>) -> Result<(), String> {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false);

    let result = match file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Cannot create log dir: {}", e))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;
            tracing::subscriber::set_global_default(
                builder.with_writer(Mutex::new(file)).finish(),
            )
        }
        None => tracing::subscriber::set_global_default(
            builder.with_writer(std::io::stderr).finish(),
        ),
    };

    result.map_err(|e| format!("Cannot install logger: {}", e))
}
