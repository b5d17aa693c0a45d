use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::achievements::ledger::DEFAULT_BLOB_NAME;

// ─── LedgerConfig ─────────────────────────────────────────────────────────────

/// Achievement ledger configuration (`[ledger]` in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Blob name the ledger persists under (default: "achievements").
    /// Hosts that keep several player profiles give each its own name.
    pub blob_name: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            blob_name: DEFAULT_BLOB_NAME.to_string(),
        }
    }
}

// ─── TOML config file ─────────────────────────────────────────────────────────

/// `{data_dir}/config.toml` — all fields are optional overrides.
/// Priority: host-supplied value  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// Log level filter string, e.g. "debug", "info,questline_core=trace"
    /// (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" (default, human-readable) | "json"
    /// (structured for log aggregators).
    log_format: Option<String>,
    /// Achievement ledger configuration (`[ledger]`).
    ledger: Option<LedgerConfig>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

// ─── CoreConfig ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    pub log: String,
    /// "pretty" | "json".
    pub log_format: String,
    pub ledger: LedgerConfig,
}

impl CoreConfig {
    /// Build config from host overrides + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. Host-supplied values (`Some(value)`) / env vars
    ///   2. TOML file at `{data_dir}/config.toml`
    ///   3. Built-in defaults
    pub fn new(data_dir: Option<PathBuf>, log: Option<String>) -> Self {
        let data_dir = data_dir
            .or_else(|| std::env::var("QUESTLINE_DATA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(default_data_dir);

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&data_dir).unwrap_or_default();

        let log = log
            .or_else(|| std::env::var("QUESTLINE_LOG").ok().filter(|s| !s.is_empty()))
            .or(toml.log)
            .unwrap_or_else(|| "info".to_string());

        let log_format = std::env::var("QUESTLINE_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let ledger = toml.ledger.unwrap_or_default();

        Self {
            data_dir,
            log,
            log_format,
            ledger,
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/questline
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("questline");
        }
    }
    #[cfg(target_os = "linux")]
    {
        // $XDG_DATA_HOME/questline or ~/.local/share/questline
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("questline");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("questline");
        }
    }
    #[cfg(target_os = "windows")]
    {
        // %APPDATA%\questline
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("questline");
        }
    }
    // Fallback
    PathBuf::from(".questline")
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_toml_present() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = CoreConfig::new(Some(tmp.path().to_path_buf()), None);
        assert_eq!(config.log_format, "pretty");
        assert_eq!(config.ledger.blob_name, "achievements");
    }

    #[test]
    fn toml_overrides_apply() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            "log = \"debug\"\nlog_format = \"json\"\n\n[ledger]\nblob_name = \"profile_two\"\n",
        )
        .unwrap();

        let config = CoreConfig::new(Some(tmp.path().to_path_buf()), None);
        assert_eq!(config.log, "debug");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.ledger.blob_name, "profile_two");
    }

    #[test]
    fn host_value_beats_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "log = \"debug\"\n").unwrap();

        let config =
            CoreConfig::new(Some(tmp.path().to_path_buf()), Some("trace".to_string()));
        assert_eq!(config.log, "trace");
    }

    #[test]
    fn unparseable_toml_falls_back_to_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "log = [not toml").unwrap();

        let config = CoreConfig::new(Some(tmp.path().to_path_buf()), None);
        assert_eq!(config.log, "info");
    }
}
