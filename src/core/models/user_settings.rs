use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_response_language")]
    pub response_language: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_max_image_dimension")]
    pub max_image_dimension: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_api_base_url() -> String {
    global_constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_model() -> String {
    global_constants::DEFAULT_MODEL.to_string()
}

fn default_response_language() -> String {
    global_constants::DEFAULT_RESPONSE_LANGUAGE.to_string()
}

fn default_request_timeout_seconds() -> u64 {
    global_constants::DEFAULT_REQUEST_TIMEOUT_SECONDS
}

fn default_max_image_dimension() -> u32 {
    global_constants::DEFAULT_MAX_IMAGE_DIMENSION
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            response_language: default_response_language(),
            request_timeout_seconds: default_request_timeout_seconds(),
            max_image_dimension: default_max_image_dimension(),
            api_key: None,
        }
    }
}

impl UserSettings {
    pub fn load(custom_path: Option<&Path>) -> anyhow::Result<Self> {
        let settings_path = match custom_path {
            Some(path) => path.to_path_buf(),
            None => Self::get_settings_file_path()?,
        };

        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file at {:?}, using defaults",
                global_constants::LOG_TAG_SETTINGS,
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read {:?}", settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid settings file {:?}", settings_path))?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} Model: {}, base URL: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.model,
            settings.api_base_url
        );

        Ok(settings)
    }

    pub fn save(&self, custom_path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let settings_path = match custom_path {
            Some(path) => path.to_path_buf(),
            None => Self::get_settings_file_path()?,
        };

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(settings_path)
    }

    pub fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }

    /// Applies an API key and model coming from the command line or the
    /// environment. Those win over whatever the settings file holds.
    pub fn apply_overrides(&mut self, api_key: Option<String>, model: Option<String>) {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }

        if let Some(model) = model.filter(|model| !model.trim().is_empty()) {
            self.model = model;
        }
    }

    pub fn masked_api_key(&self) -> String {
        match &self.api_key {
            None => "<not set>".to_string(),
            Some(key) if key.chars().count() <= 8 => "****".to_string(),
            Some(key) => {
                let visible: String = key.chars().skip(key.chars().count() - 4).collect();
                format!("****{}", visible)
            }
        }
    }

    pub fn user_prompt(&self) -> String {
        global_constants::USER_PROMPT_TEMPLATE.replace("{language}", &self.response_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.api_base_url, global_constants::DEFAULT_API_BASE_URL);
        assert_eq!(settings.model, global_constants::DEFAULT_MODEL);
        assert_eq!(
            settings.request_timeout_seconds,
            global_constants::DEFAULT_REQUEST_TIMEOUT_SECONDS
        );
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_user_settings_deserialization_fills_missing_fields_with_defaults() {
        let json = r#"{ "model": "gemini-2.5-flash" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.model, "gemini-2.5-flash");
        assert_eq!(settings.api_base_url, global_constants::DEFAULT_API_BASE_URL);
        assert_eq!(
            settings.max_image_dimension,
            global_constants::DEFAULT_MAX_IMAGE_DIMENSION
        );
    }

    #[test]
    fn test_load_from_missing_path_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();

        let settings = UserSettings::load_from_path(&temp_dir.path().join("absent.json")).unwrap();

        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_load_from_corrupt_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(UserSettings::load_from_path(&path).is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip_creates_parent_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");
        let original = UserSettings {
            model: "custom-model".to_string(),
            response_language: "English".to_string(),
            api_key: Some("secret-key-1234".to_string()),
            ..UserSettings::default()
        };

        let saved_path = original.save(Some(path.as_path())).unwrap();
        let loaded = UserSettings::load(Some(saved_path.as_path())).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_apply_overrides_ignores_blank_values() {
        let mut settings = UserSettings {
            api_key: Some("from-file".to_string()),
            ..UserSettings::default()
        };

        settings.apply_overrides(Some("   ".to_string()), None);
        assert_eq!(settings.api_key.as_deref(), Some("from-file"));

        settings.apply_overrides(Some("from-cli".to_string()), Some("other-model".to_string()));
        assert_eq!(settings.api_key.as_deref(), Some("from-cli"));
        assert_eq!(settings.model, "other-model");
    }

    #[test]
    fn test_masked_api_key_shows_only_last_four_characters() {
        let mut settings = UserSettings::default();
        assert_eq!(settings.masked_api_key(), "<not set>");

        settings.api_key = Some("short".to_string());
        assert_eq!(settings.masked_api_key(), "****");

        settings.api_key = Some("AIzaSyExample9876".to_string());
        assert_eq!(settings.masked_api_key(), "****9876");
    }

    #[test]
    fn test_user_prompt_mentions_response_language() {
        let settings = UserSettings {
            response_language: "English".to_string(),
            ..UserSettings::default()
        };

        assert!(settings.user_prompt().ends_with("Provide the response in English."));
    }
}
