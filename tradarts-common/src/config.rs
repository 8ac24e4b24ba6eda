//! Configuration loading and data folder resolution

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming the data folder
pub const DATA_FOLDER_ENV: &str = "TRADARTS_DATA_FOLDER";

/// File name of the durable session record inside the data folder
pub const SESSION_FILE_NAME: &str = "user.json";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5780;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// HTTP server settings (`[server]` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Simulated latency for mock session operations (`[session]` table)
///
/// Defaults mirror the delays of the original mock backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionTimings {
    pub login_delay_ms: u64,
    pub register_delay_ms: u64,
    pub update_delay_ms: u64,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            register_delay_ms: 1500,
            update_delay_ms: 800,
        }
    }
}

impl SessionTimings {
    /// No artificial latency (tests, local tooling)
    pub fn immediate() -> Self {
        Self {
            login_delay_ms: 0,
            register_delay_ms: 0,
            update_delay_ms: 0,
        }
    }
}

/// Contents of the optional TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Folder holding durable state (session record)
    pub data_folder: Option<PathBuf>,
    pub server: ServerConfig,
    pub session: SessionTimings,
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration, falling back to defaults
    ///
    /// A missing or unreadable file never aborts startup: a warning is logged
    /// and compiled defaults are used instead.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(p) => p,
            None => {
                debug!("No configuration file location available, using defaults");
                return Self::default();
            }
        };

        if !path.exists() {
            debug!("Config file {} not present, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config {}: {} (using defaults)", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Platform configuration file path (`<config_dir>/tradarts/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tradarts").join("config.toml"))
}

/// Get OS-dependent default data folder path
pub fn default_data_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("tradarts"))
        .unwrap_or_else(|| PathBuf::from("./tradarts_data"))
}

/// Data folder resolution with the following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable `TRADARTS_DATA_FOLDER`
/// 3. TOML config `data_folder` key
/// 4. OS-dependent compiled default (fallback)
#[derive(Debug, Clone, Default)]
pub struct DataFolderResolver {
    cli_arg: Option<PathBuf>,
    toml_value: Option<PathBuf>,
}

impl DataFolderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    pub fn with_config(mut self, config: &TomlConfig) -> Self {
        self.toml_value = config.data_folder.clone();
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            return path.clone();
        }

        if let Ok(path) = std::env::var(DATA_FOLDER_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        if let Some(path) = &self.toml_value {
            return path.clone();
        }

        default_data_folder()
    }
}

/// Prepares the resolved data folder for use
#[derive(Debug, Clone)]
pub struct DataFolderInitializer {
    data_folder: PathBuf,
}

impl DataFolderInitializer {
    pub fn new(data_folder: PathBuf) -> Self {
        Self { data_folder }
    }

    /// Create the data folder (and parents) if missing
    pub fn ensure_directory_exists(&self) -> Result<()> {
        if !self.data_folder.exists() {
            std::fs::create_dir_all(&self.data_folder)?;
            debug!("Created data folder {}", self.data_folder.display());
        }
        Ok(())
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    /// Location of the durable session record
    pub fn session_file_path(&self) -> PathBuf {
        self.data_folder.join(SESSION_FILE_NAME)
    }
}
