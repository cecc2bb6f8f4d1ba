//! App Configuration
//!
//! User-visible labels and the log level, read from `app.config.json`.

use leptos::prelude::*;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub placeholder: String,
    pub add_label: String,
    pub update_label: String,
    pub edit_label: String,
    pub delete_label: String,
    /// Shown when the list is empty
    pub empty_text: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Crud Assignment".to_string(),
            placeholder: "Enter item name".to_string(),
            add_label: "Add".to_string(),
            update_label: "Update".to_string(),
            edit_label: "Edit".to_string(),
            delete_label: "Delete".to_string(),
            empty_text: String::new(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse the config. An unknown `log_level` does not reject the file;
    /// it surfaces later through [`AppConfig::level_filter`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Submit button label for the current form mode
    pub fn submit_label(&self, editing: bool) -> &str {
        if editing {
            &self.update_label
        } else {
            &self.add_label
        }
    }
}

/// Get the config from context
pub fn use_config() -> StoredValue<AppConfig> {
    expect_context::<StoredValue<AppConfig>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"title":"Groceries","log_level":"debug"}"#).unwrap();
        assert_eq!(config.title, "Groceries");
        assert_eq!(config.placeholder, "Enter item name");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_keeps_labels() {
        let config = AppConfig::from_json(r#"{"title":"Groceries","log_level":"loud"}"#).unwrap();
        assert_eq!(config.title, "Groceries");
        let err = config.level_filter().unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(matches!(AppConfig::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_submit_label_toggles() {
        let config = AppConfig::default();
        assert_eq!(config.submit_label(false), "Add");
        assert_eq!(config.submit_label(true), "Update");
    }
}
