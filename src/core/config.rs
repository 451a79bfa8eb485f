//! Configuration module for the quick course view tooling
//!
//! Carries the logging settings for the CLI plus the per-feature enable
//! flags of the surrounding dashboard extension (the quick course view is
//! one of those features).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default configuration compiled into the binary.
const CONFIG_DEFAULTS: &str = r#"
[logging]
level = "info"
file = ""
verbose = false

[features.all-pages-remove-force-download]
enabled = true

[features.all-pages-replace-header-course-name]
enabled = true

[features.all-pages-replace-navigation-texts]
enabled = true

[features.dashboard-events-countdown]
enabled = true

[features.dashboard-quick-course-view]
enabled = true

[features.scorm-collapse-toc]
enabled = true
"#;

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// The feature flag guarding the quick course view widget itself.
pub const QUICK_COURSE_VIEW_FEATURE: &str = "dashboard-quick-course-view";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Enable flag (plus any feature-specific settings) for one feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureOption {
    /// Whether the feature is active
    #[serde(default)]
    pub enabled: bool,
    /// Feature-specific settings, passed through untouched
    #[serde(flatten)]
    pub extra: toml::value::Table,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Per-feature enable flags, keyed by feature name
    #[serde(default)]
    pub features: BTreeMap<String, FeatureOption>,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
}

impl Config {
    /// Get the `$QUICK_COURSE_VIEW` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/quickcourseview`
    /// - macOS: `~/Library/Application Support/quickcourseview`
    /// - Windows: `%APPDATA%\quickcourseview`
    #[must_use]
    pub fn get_quickcourseview_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quickcourseview")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// located under [`get_quickcourseview_dir`](Self::get_quickcourseview_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_quickcourseview_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$QUICK_COURSE_VIEW` in a string to the actual config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$QUICK_COURSE_VIEW") {
            let dir = Self::get_quickcourseview_dir();
            value.replace("$QUICK_COURSE_VIEW", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands `$QUICK_COURSE_VIEW` in
    /// path values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// Load configuration from compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// If the config file exists it is loaded and any missing fields are
    /// merged in from defaults (and the updated file saved); on first run the
    /// config directory and file are created from defaults. Falls back to
    /// defaults on any load error.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the config
    /// directory cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Empty logging fields are filled from defaults, and feature entries the
    /// file doesn't know yet are added with their default flag. User-set
    /// values are never overwritten.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        for (name, option) in &defaults.features {
            if !self.features.contains_key(name) {
                self.features.insert(name.clone(), option.clone());
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the persistent file is
    /// not touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
    }

    /// Whether a feature flag is enabled (unknown features count as disabled)
    #[must_use]
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features
            .get(name)
            .is_some_and(|option| option.enabled)
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, and `feature.<name>` for
    /// feature flags.
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(name) = key.strip_prefix("feature.") {
            return self
                .features
                .get(name)
                .map(|option| option.enabled.to_string());
        }
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Supported keys and value formats:
    /// - `level`: String ("debug", "info", "warn", "error")
    /// - `file`: String (file path, can include `$QUICK_COURSE_VIEW`)
    /// - `verbose`: Boolean ("true" or "false")
    /// - `feature.<name>`: Boolean enable flag for a known feature
    ///
    /// Note: updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        if let Some(name) = key.strip_prefix("feature.") {
            let enabled = value
                .parse::<bool>()
                .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))?;
            let Some(option) = self.features.get_mut(name) else {
                return Err(format!("Unknown feature: '{name}'"));
            };
            option.enabled = enabled;
            return Ok(());
        }
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Note: updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        if let Some(name) = key.strip_prefix("feature.") {
            let Some(default_option) = defaults.features.get(name) else {
                return Err(format!("Unknown feature: '{name}'"));
            };
            self.features.insert(name.to_string(), default_option.clone());
            return Ok(());
        }
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) call recreates it from defaults.
    /// Succeeds without doing anything when the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[features]")?;
        for (name, option) in &self.features {
            writeln!(f, "  {name} = {}", option.enabled)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_all_known_features() {
        let config = Config::from_defaults();
        assert_eq!(config.features.len(), 6);
        assert!(config
            .features
            .values()
            .all(|option| option.enabled));
        assert!(config.feature_enabled(QUICK_COURSE_VIEW_FEATURE));
    }

    #[test]
    fn unknown_feature_counts_as_disabled() {
        let config = Config::from_defaults();
        assert!(!config.feature_enabled("no-such-feature"));
    }

    #[test]
    fn feature_keys_via_get_set() {
        let mut config = Config::from_defaults();

        config
            .set("feature.dashboard-quick-course-view", "false")
            .expect("Failed to set feature flag");
        assert!(!config.feature_enabled(QUICK_COURSE_VIEW_FEATURE));
        assert_eq!(
            config.get("feature.dashboard-quick-course-view"),
            Some("false".to_string())
        );

        assert!(config.set("feature.no-such-feature", "true").is_err());
        assert!(config.set("feature.scorm-collapse-toc", "maybe").is_err());
    }

    #[test]
    fn feature_specific_settings_pass_through() {
        let toml_str = r#"
[features.dashboard-events-countdown]
enabled = true
threshold-days = 7
"#;
        let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
        let option = &config.features["dashboard-events-countdown"];
        assert!(option.enabled);
        assert_eq!(
            option.extra.get("threshold-days").and_then(toml::Value::as_integer),
            Some(7)
        );
    }
}
