//! Configuration for mediashelf.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (MEDIASHELF_LOG_DIR, MEDIASHELF_SEED)
//! 2. Config file (.mediashelf/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .mediashelf/config.yaml
//! - `logging.dir` is relative to the config file's project root

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub status: Option<StatusConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Level for the console sink
    pub console_level: Option<String>,
    /// Level for the file sink
    pub file_level: Option<String>,
    /// Directory for log files (relative to project root)
    pub dir: Option<String>,
    /// Log file name prefix
    pub file_prefix: Option<String>,
    /// Per-target level overrides (target -> level)
    #[serde(default)]
    pub loggers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    pub seed: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Logging settings
    pub logging: LogSettings,
    /// Seed for simulated provider status
    pub seed: u64,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub console_level: String,
    pub file_level: String,
    pub dir: PathBuf,
    pub file_prefix: String,
    pub loggers: BTreeMap<String, String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            console_level: "info".to_string(),
            file_level: "debug".to_string(),
            dir: PathBuf::from("logs"),
            file_prefix: "mediashelf".to_string(),
            loggers: BTreeMap::new(),
        }
    }
}

pub const DEFAULT_SEED: u64 = 42;

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".mediashelf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Merge a parsed config file over the defaults
fn resolve(config: Option<(ConfigFile, PathBuf)>) -> Result<ResolvedConfig> {
    let mut logging = LogSettings::default();
    let mut seed = DEFAULT_SEED;
    let mut config_file = None;

    if let Some((file, path)) = config {
        // Project root is the parent of .mediashelf/
        let base_dir = path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let raw = file.logging;
        if let Some(level) = raw.console_level {
            logging.console_level = level;
        }
        if let Some(level) = raw.file_level {
            logging.file_level = level;
        }
        logging.dir = match raw.dir {
            Some(ref dir) => resolve_path(&base_dir, dir),
            None => base_dir.join("logs"),
        };
        if let Some(prefix) = raw.file_prefix {
            logging.file_prefix = prefix;
        }
        logging.loggers = raw.loggers;

        if let Some(s) = file.status.and_then(|s| s.seed) {
            seed = s;
        }
        config_file = Some(path);
    }

    if let Ok(dir) = std::env::var("MEDIASHELF_LOG_DIR") {
        logging.dir = PathBuf::from(dir);
    }
    if let Ok(raw) = std::env::var("MEDIASHELF_SEED") {
        seed = raw
            .parse()
            .with_context(|| format!("Invalid MEDIASHELF_SEED: {}", raw))?;
    }

    Ok(ResolvedConfig {
        logging,
        seed,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config = match find_config_file() {
        Some(path) => Some((load_config_file(&path)?, path)),
        None => None,
    };
    resolve(config)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: &str) -> PathBuf {
        let dir = temp.path().join(".mediashelf");
        std::fs::create_dir_all(&dir).unwrap();

        let config_path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
version: "1.0"
logging:
  console_level: warn
  file_level: trace
  dir: var/log
  loggers:
    mediashelf::rental: debug
status:
  seed: 7
"#,
        );

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.logging.console_level.as_deref(), Some("warn"));
        assert_eq!(
            config.logging.loggers.get("mediashelf::rental"),
            Some(&"debug".to_string())
        );
        assert_eq!(config.status.unwrap().seed, Some(7));
    }

    #[test]
    fn test_resolve_merges_over_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
version: "1.0"
logging:
  file_level: trace
  dir: var/log
status:
  seed: 7
"#,
        );

        let file = load_config_file(&path).unwrap();
        let resolved = resolve(Some((file, path.clone()))).unwrap();

        assert_eq!(resolved.logging.console_level, "info");
        assert_eq!(resolved.logging.file_level, "trace");
        assert_eq!(resolved.logging.dir, temp.path().join("var/log"));
        assert_eq!(resolved.config_file, Some(path));
    }

    #[test]
    fn test_minimal_config_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "version: \"1.0\"");

        let config = load_config_file(&path).unwrap();
        assert!(config.status.is_none());
        assert!(config.logging.loggers.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "logging: [unclosed");

        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "logs"),
            PathBuf::from("/home/user/project/logs")
        );
        assert_eq!(
            resolve_path(&base, "/var/log/mediashelf"),
            PathBuf::from("/var/log/mediashelf")
        );
    }
}
