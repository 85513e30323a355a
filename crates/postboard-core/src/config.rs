//! Application configuration.
//!
//! Configuration is read from a JSON file. Every field has a default, so a
//! partial file (or none at all) is valid.
//!
//! ```json
//! {
//!   "toast": { "position": "top-right", "auto_close_ms": 3000 },
//!   "root_route": "/",
//!   "admin_emails": ["admin@example.com"]
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::sidebar::SidebarSettings;
use crate::toast::{ToastOptions, ToastPosition, DEFAULT_AUTO_CLOSE};

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Toast placement and lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    pub position: ToastPosition,
    pub auto_close_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            auto_close_ms: DEFAULT_AUTO_CLOSE.as_millis() as u64,
        }
    }
}

impl ToastSettings {
    pub fn options(&self) -> ToastOptions {
        ToastOptions {
            position: self.position,
            auto_close: Duration::from_millis(self.auto_close_ms),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Toast placement and lifetime.
    pub toast: ToastSettings,
    /// Route to return to after logout.
    pub root_route: String,
    /// Emails granted administrator rights when the database opens.
    pub admin_emails: Vec<String>,
    /// Database location. Defaults to the platform data directory.
    pub database_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            toast: ToastSettings::default(),
            root_route: "/".to_string(),
            admin_emails: Vec::new(),
            database_path: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// config file is used if present; otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Reads configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading config from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "postboard", "postboard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if !self.root_route.starts_with('/') {
            return Err(CoreError::Config(format!(
                "root_route must start with '/', got {:?}",
                self.root_route
            )));
        }
        Ok(())
    }

    /// Settings passed to sidebar commands.
    pub fn sidebar_settings(&self) -> SidebarSettings {
        SidebarSettings {
            toast: self.toast.options(),
            root_route: self.root_route.clone(),
        }
    }
}
