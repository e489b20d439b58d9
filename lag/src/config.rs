//! tzlag configuration types and loading

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::ZoneOffset;
use crate::pipeline::{LagMode, OutputFormat};
use crate::resolver::ZoneTable;

/// Main tzlag configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Zone resolution mode
    pub mode: LagMode,

    /// Output format
    pub format: OutputFormat,

    /// Add completion rows for suspended games
    #[serde(rename = "spread-incomplete")]
    pub spread_incomplete: bool,

    /// Extra or overriding park zones, by park id
    pub venues: BTreeMap<String, ZoneOffset>,

    /// Extra or overriding team zones, by team id
    pub teams: BTreeMap<String, ZoneOffset>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level, before logging is set up
    ///
    /// Errors are ignored here; [`Config::load`] reports them once logging works.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::default_paths(),
        };

        candidates
            .into_iter()
            .find(|path| path.exists())
            .and_then(|path| Self::load_from_file(path).ok())
            .and_then(|config| config.log_level)
    }

    /// Project-local `.tzlag.yml`, then `~/.config/tzlag/tzlag.yml`
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".tzlag.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("tzlag").join("tzlag.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Built-in zone tables with this config's overrides applied
    pub fn zone_table(&self) -> ZoneTable {
        let mut table = ZoneTable::builtin();
        table.extend_venues(self.venues.iter().map(|(id, zone)| (id.clone(), *zone)));
        table.extend_teams(self.teams.iter().map(|(id, zone)| (id.clone(), *zone)));
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.mode, LagMode::Venue);
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(!config.spread_incomplete);
        assert!(config.log_level.is_none());
        assert_eq!(config.zone_table(), ZoneTable::builtin());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
log-level: debug
mode: home-team
format: json
spread-incomplete: true
venues:
  MEX01: CT
  LON01: other
teams:
  LVA: PT
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.mode, LagMode::HomeTeam);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.spread_incomplete);
        assert_eq!(config.venues.get("MEX01"), Some(&ZoneOffset::Central));
        assert_eq!(config.venues.get("LON01"), Some(&ZoneOffset::Other));

        let table = config.zone_table();
        assert_eq!(table.venue_zone("MEX01"), Some(ZoneOffset::Central));
        assert_eq!(table.team_zone("LVA"), Some(ZoneOffset::Pacific));
        assert_eq!(table.team_zone("NYA"), Some(ZoneOffset::Eastern));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
mode: legacy
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.mode, LagMode::Legacy);
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.venues.is_empty());
    }

    #[test]
    fn test_bad_zone_is_rejected() {
        let yaml = r#"
venues:
  MEX01: UTC-6
"#;

        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tzlag.yml");
        fs::write(&path, "log-level: warn\nformat: json\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        assert!(Config::load(Some(&path)).is_err());
        assert!(Config::load_log_level(Some(&path)).is_none());
    }
}
