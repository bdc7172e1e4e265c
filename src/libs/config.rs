//! Configuration management.
//!
//! Settings live in `config.json` inside the platform-specific application
//! data directory (see [`DataStorage`]). Each section is optional and omitted
//! from the file while unset; readers fall back to the section's defaults.
//!
//! ## Configuration Structure
//!
//! - **Storage**: key the task collection is saved under and the database file
//! - **Remote**: base URL and list limit of the demo task API
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use gtd::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("tasks are stored under {}", config.storage().key);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::store::DEFAULT_STORAGE_KEY;
use crate::api::RemoteConfig;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module shown by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Where the task collection is persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Key the serialized collection is written under.
    pub key: String,

    /// SQLite file name, relative to the application data directory.
    pub db_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            key: DEFAULT_STORAGE_KEY.to_string(),
            db_file: DB_FILE_NAME.to_string(),
        }
    }
}

impl StorageConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "storage".to_string(),
            name: "Storage".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleStorage);
        Ok(Self {
            key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStorageKey.to_string())
                .default(default.key)
                .interact_text()?,
            db_file: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptStorageDbFile.to_string())
                .default(default.db_file)
                .interact_text()?,
        })
    }
}

/// Root configuration object.
///
/// Unconfigured sections are `None` and are skipped when serializing, which
/// keeps the file limited to what the user actually changed.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// # Errors
    ///
    /// A missing file yields the default configuration; a file that exists but
    /// cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Effective storage settings.
    pub fn storage(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    /// Effective remote API settings.
    pub fn remote(&self) -> RemoteConfig {
        self.remote.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = [StorageConfig::module(), RemoteConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "storage" => config.storage = Some(StorageConfig::init(&config.storage)?),
                "remote" => config.remote = Some(RemoteConfig::init(&config.remote)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
