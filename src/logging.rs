use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Directory holding `explain.log`: `~/.local/share/shellexplain`.
pub fn log_dir() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(Path::new(&home).join(".local/share/shellexplain"))
}

/// Install a file logger appending to `~/.local/share/shellexplain/explain.log`.
/// Best-effort: returns false when the file cannot be opened or a logger is
/// already installed (logging must never stop an explanation).
pub fn init(level: LevelFilter) -> bool {
    if level == LevelFilter::Off {
        return false;
    }
    let Some(dir) = log_dir() else {
        return false;
    };
    let _ = std::fs::create_dir_all(&dir);

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("explain.log"))
    else {
        return false;
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(level, config, file).is_ok()
}
