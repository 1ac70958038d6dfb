//! Tracing setup: a console sink and a date-stamped file sink.
//!
//! Each sink gets its own level. Per-target overrides from the config
//! (`logging.loggers`) apply to both, so a target such as
//! `mediashelf::rental` behaves like a named logger. `RUST_LOG` replaces
//! the console filter when set. If the log file cannot be opened, logging
//! continues on the console alone.

use std::collections::BTreeMap;
use std::fs::{create_dir_all, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::LogSettings;

/// Log file for a given day: `<dir>/<prefix>_log_YYYY-MM-DD.log`
pub fn log_file_path(settings: &LogSettings, day: NaiveDate) -> PathBuf {
    settings.dir.join(format!(
        "{}_log_{}.log",
        settings.file_prefix,
        day.format("%Y-%m-%d")
    ))
}

/// Filter directives: base level followed by per-target overrides
pub fn directives(level: &str, loggers: &BTreeMap<String, String>) -> String {
    let mut parts = vec![level.to_string()];
    parts.extend(
        loggers
            .iter()
            .map(|(target, level)| format!("{}={}", target, level)),
    );
    parts.join(",")
}

fn build_filter(level: &str, settings: &LogSettings) -> Result<EnvFilter> {
    let joined = directives(level, &settings.loggers);
    EnvFilter::try_new(&joined).with_context(|| format!("Invalid log filter: {}", joined))
}

/// Create the log directory and open today's file for appending
fn open_log_file(settings: &LogSettings) -> Result<(PathBuf, File)> {
    create_dir_all(&settings.dir).with_context(|| {
        format!("Failed to create log directory: {}", settings.dir.display())
    })?;

    let path = log_file_path(settings, Local::now().date_naive());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok((path, file))
}

/// Install the global subscriber. Returns the path of today's log file, or
/// `None` when only the console sink could be set up.
pub fn init(settings: &LogSettings) -> Result<Option<PathBuf>> {
    let console_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&settings.console_level, settings)?,
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file_layer, opened) = match open_log_file(settings) {
        Ok((path, file)) => {
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(build_filter(&settings.file_level, settings)?);
            (Some(layer), Ok(path))
        }
        Err(e) => (None, Err(e)),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    match opened {
        Ok(path) => {
            tracing::debug!(file = %path.display(), "Logging initialized");
            Ok(Some(path))
        }
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "File logging disabled");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_is_dated() {
        let settings = LogSettings {
            dir: PathBuf::from("/tmp/logs"),
            ..Default::default()
        };
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        assert_eq!(
            log_file_path(&settings, day),
            PathBuf::from("/tmp/logs/mediashelf_log_2024-03-09.log")
        );
    }

    #[test]
    fn test_directives_include_named_loggers() {
        let mut loggers = BTreeMap::new();
        loggers.insert("mediashelf::rental".to_string(), "debug".to_string());
        loggers.insert("mediashelf::media".to_string(), "error".to_string());

        assert_eq!(
            directives("info", &loggers),
            "info,mediashelf::media=error,mediashelf::rental=debug"
        );
        assert_eq!(directives("warn", &BTreeMap::new()), "warn");
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let settings = LogSettings::default();
        assert!(build_filter("mediashelf=loud", &settings).is_err());
        assert!(build_filter("debug", &settings).is_ok());
    }

    #[test]
    fn test_unusable_log_dir_falls_back_to_console() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let settings = LogSettings {
            dir: blocker.path().join("logs"),
            ..Default::default()
        };

        assert!(open_log_file(&settings).is_err());
        assert_eq!(init(&settings).unwrap(), None);
    }
}
