use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog_core::{
    Locale, PageLayout, QueryBuilder, SessionSettings, DEFAULT_COVER_HOST, DEFAULT_ENDPOINT,
    DEFAULT_WINDOW_SIZE,
};
use catalog_engine::FetchSettings;
use catalog_logging::catalog_info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILENAME: &str = "catalog.ron";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid search endpoint {0:?}")]
    InvalidEndpoint(String),
    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

/// Terminal lines per result row and lines reserved for the rest of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub row_height: u32,
    pub reserved_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: 4,
            reserved_height: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub cover_host: String,
    pub locale: Locale,
    pub window_size: u32,
    /// Terminal height used until the user resizes with `rows <n>`.
    pub viewport_rows: u32,
    pub layout: LayoutConfig,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cover_host: DEFAULT_COVER_HOST.to_string(),
            locale: Locale::default(),
            window_size: DEFAULT_WINDOW_SIZE,
            viewport_rows: 46,
            layout: LayoutConfig::default(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_response_bytes: fetch.max_bytes,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        QueryBuilder::new(self.endpoint.clone())
            .validate_endpoint()
            .map(|_| ())
            .map_err(|_| ConfigError::InvalidEndpoint(self.endpoint.clone()))
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            query_builder: QueryBuilder::new(self.endpoint.clone()),
            window_size: self.window_size,
            layout: PageLayout {
                row_height: self.layout.row_height,
                reserved_height: self.layout.reserved_height,
            },
            locale: self.locale,
            cover_host: self.cover_host.clone(),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
            ..FetchSettings::default()
        }
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        ron::ser::to_string_pretty(self, pretty).map_err(|err| ConfigError::Serialize(err.to_string()))
    }
}

/// Loads the config from `path`, or from `./catalog.ron` when no path is given.
///
/// An explicit path must exist; the implicit default file is optional.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config: AppConfig = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.clone(),
        message: err.to_string(),
    })?;
    config.validate()?;

    catalog_info!("Loaded config from {:?}", path);
    Ok(config)
}
