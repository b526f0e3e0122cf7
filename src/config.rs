use std::{path::Path, path::PathBuf, time::Duration};

use compact_str::{CompactString, ToCompactString};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::{
    locale::Locale,
    result::{CountdownError, Result},
};

const DEFAULT_TICK_RATE_MS: u64 = 1000;
const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=10_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// Language tag for the end-date caption, e.g. "de" or "en-US".
    /// Falls back to the environment when unset.
    pub locale: Option<CompactString>,
    /// Log level: Off, Error, Warn, Info, Debug or Trace
    pub log_level: Option<CompactString>,
    /// Quit once the countdown has finished
    pub exit_on_timeout: bool,
    /// Milliseconds between timer firings
    pub tick_rate_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            locale: None,
            log_level: None,
            exit_on_timeout: false,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl CountdownConfig {
    pub fn validate(&self) -> Result<()> {
        if !TICK_RATE_RANGE_MS.contains(&self.tick_rate_ms) {
            return Err(CountdownError::ConfigError(
                format!(
                    "tick_rate_ms must be between {} and {}, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.tick_rate_ms
                )
                .into(),
            ));
        }

        if let Some(locale) = &self.locale {
            locale.parse::<Locale>()?;
        }

        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// The configured locale, or the one from the environment.
    pub fn resolve_locale(&self) -> Locale {
        self.locale
            .as_deref()
            .and_then(|tag| tag.parse().ok())
            .unwrap_or_else(Locale::from_env)
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(dirs) = BaseDirs::new() {
        dirs.config_dir().join("countdown.toml")
    } else {
        PathBuf::from("countdown.toml")
    }
}

/// Loads the configuration file if it exists, otherwise the defaults.
pub fn load_config(config_file: &Path) -> Result<CountdownConfig> {
    let config: CountdownConfig = if config_file.exists() {
        confy::load_path(config_file)
            .map_err(|e| CountdownError::ConfigError(e.to_compact_string()))?
    } else {
        CountdownConfig::default()
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("countdown-tui-{}-{name}", std::process::id()))
            .join("countdown.toml")
    }

    #[test]
    fn test_default_is_valid() {
        let config = CountdownConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate(), Duration::from_secs(1));
    }

    #[test]
    fn test_rejects_tick_rate_out_of_range() {
        let config = CountdownConfig { tick_rate_ms: 5, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CountdownError::ConfigError(_)));
        assert!(err.to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn test_rejects_empty_locale() {
        let config = CountdownConfig { locale: Some("".into()), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configured_locale_wins() {
        let config = CountdownConfig { locale: Some("de-CH".into()), ..Default::default() };
        assert_eq!(config.resolve_locale(), Locale::German);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = temp_config_path("missing");
        assert_eq!(load_config(&path).unwrap(), CountdownConfig::default());
    }

    #[test]
    fn test_loads_toml_file() {
        let path = temp_config_path("toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "locale = \"de\"\nlog_level = \"Debug\"\ntick_rate_ms = 500\n").unwrap();

        let expected = CountdownConfig {
            locale: Some("de".into()),
            log_level: Some("Debug".into()),
            exit_on_timeout: false,
            tick_rate_ms: 500,
        };
        assert_eq!(load_config(&path).unwrap(), expected);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
