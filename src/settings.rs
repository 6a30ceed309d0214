//! User configuration.
//!
//! Settings live in `settings.json` under the platform config directory.
//! Every field has a default, so a partial file only overrides what it names.
//! A missing or unreadable file yields the defaults.

use crate::constants::{
    APP_TITLE, CUSTOMER_DATA_KEY, DEFAULT_FILENAME_PREFIX, DEFAULT_JPEG_QUALITY,
    DEFAULT_PROPERTY_COUNT, DEFAULT_RASTERIZER_PROGRAM, DEFAULT_STORAGE_QUOTA_BYTES, EXPORT_SCALE,
    MAX_PROPERTY_COUNT, PROPERTY_DATA_KEY, SAVED_LIST_KEY,
};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "proposalboard";
const SETTINGS_FILE: &str = "settings.json";

/// Path of the settings file, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(SETTINGS_FILE))
}

/// Directory for application data (the key-value store lives here)
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub title: String,
    pub version: String,
    pub default_property_count: usize,
    pub max_property_count: usize,
    pub download: DownloadSettings,
    pub storage: StorageSettings,
    pub remote: RemoteSettings,
    pub export: ExportSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            default_property_count: DEFAULT_PROPERTY_COUNT,
            max_property_count: MAX_PROPERTY_COUNT,
            download: DownloadSettings::default(),
            storage: StorageSettings::default(),
            remote: RemoteSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadSettings {
    /// JPEG quality, 0.1 ..= 1.0
    pub quality: f32,
    pub format: ExportFormat,
    /// File name prefix
    pub filename: String,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
            format: ExportFormat::Jpeg,
            filename: DEFAULT_FILENAME_PREFIX.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub customer_data_key: String,
    pub property_data_key: String,
    pub saved_list_key: String,
    pub auto_save: bool,
    /// Byte quota of the file store
    pub quota_bytes: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            customer_data_key: CUSTOMER_DATA_KEY.to_string(),
            property_data_key: PROPERTY_DATA_KEY.to_string(),
            saved_list_key: SAVED_LIST_KEY.to_string(),
            auto_save: true,
            quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
        }
    }
}

/// Optional document store tried before the local store
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    pub enabled: bool,
    /// Root directory of the document store
    pub root: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub scale: f32,
    /// HTML-to-image program invoked by the command rasterizer
    pub rasterizer_program: String,
    /// Where exported files go; the downloads directory when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            scale: EXPORT_SCALE,
            rasterizer_program: DEFAULT_RASTERIZER_PROGRAM.to_string(),
            output_dir: None,
        }
    }
}

impl AppSettings {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<AppSettings>(&content) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                tracing::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// Clamp values into their supported ranges
    pub fn sanitized(mut self) -> Self {
        self.max_property_count = self.max_property_count.clamp(1, MAX_PROPERTY_COUNT);
        self.default_property_count = self.default_property_count.min(self.max_property_count);
        if !self.download.quality.is_finite() {
            self.download.quality = DEFAULT_JPEG_QUALITY;
        }
        self.download.quality = self.download.quality.clamp(0.1, 1.0);
        if !self.export.scale.is_finite() || self.export.scale <= 0.0 {
            self.export.scale = EXPORT_SCALE;
        }
        if self.download.filename.trim().is_empty() {
            self.download.filename = DEFAULT_FILENAME_PREFIX.to_string();
        }
        self
    }

    /// Whether the remote document store should be tried first
    pub fn remote_enabled(&self) -> bool {
        self.remote.enabled && self.remote.root.is_some()
    }
}
