//! User preferences for the shell. Only preferences live on disk; activity
//! records are session-scoped and never persisted.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::errors::{ActivityError, Result};

const HOME_ENV: &str = "ACTIVITY_BUDGET_HOME";
const DEFAULT_DIR_NAME: &str = ".activity_budget";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

pub const MAX_RATE_PERCENT: f64 = 100.0;
/// Largest budget or spend accepted at intake; keeps page totals finite.
pub const MAX_AMOUNT: f64 = 1e15;
pub const MIN_TERM_MONTHS: u32 = 1;
pub const MAX_TERM_MONTHS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    /// Rate offered by the return-projection wizard, in percent (0–100).
    pub default_rate_percent: f64,
    pub default_term_months: u32,
    pub plain_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "S/".into(),
            default_rate_percent: 5.0,
            default_term_months: 12,
            plain_mode: false,
        }
    }
}

impl Config {
    /// Applies a `key = value` update, validating the value for its key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.to_ascii_lowercase().as_str() {
            "currency_symbol" => {
                self.currency_symbol = value.trim().to_string();
            }
            "default_rate_percent" => {
                let rate: f64 = value.trim().parse().map_err(|_| {
                    ActivityError::Config("default_rate_percent must be numeric".into())
                })?;
                if !(0.0..=MAX_RATE_PERCENT).contains(&rate) {
                    return Err(ActivityError::Config(
                        "default_rate_percent must be between 0 and 100".into(),
                    ));
                }
                self.default_rate_percent = rate;
            }
            "default_term_months" => {
                let months: u32 = value.trim().parse().map_err(|_| {
                    ActivityError::Config("default_term_months must be a whole number".into())
                })?;
                if !(MIN_TERM_MONTHS..=MAX_TERM_MONTHS).contains(&months) {
                    return Err(ActivityError::Config(format!(
                        "default_term_months must be between {MIN_TERM_MONTHS} and {MAX_TERM_MONTHS}"
                    )));
                }
                self.default_term_months = months;
            }
            "plain_mode" => {
                self.plain_mode = parse_switch(value).ok_or_else(|| {
                    ActivityError::Config("plain_mode expects on/off".into())
                })?;
            }
            other => {
                return Err(ActivityError::Config(format!(
                    "unknown config key `{other}`"
                )))
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("default_rate_percent", format!("{}", self.default_rate_percent)),
            ("default_term_months", self.default_term_months.to_string()),
            (
                "plain_mode",
                if self.plain_mode { "on" } else { "off" }.to_string(),
            ),
        ]
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Base directory for preferences, honouring `ACTIVITY_BUDGET_HOME`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_synced(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_synced(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn saved_values_are_reloaded() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.set("currency_symbol", "$").unwrap();
        config.set("default_term_months", "24").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_term_months, 24);
        assert!(!manager.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut config = Config::default();
        assert!(config.set("default_rate_percent", "150").is_err());
        assert!(config.set("default_term_months", "0").is_err());
        assert!(config.set("default_term_months", "61").is_err());
        assert!(config.set("plain_mode", "maybe").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "plain_mode": true }"#).unwrap();
        let loaded = manager.load().unwrap();
        assert!(loaded.plain_mode);
        assert_eq!(loaded.currency_symbol, "S/");
    }
}
