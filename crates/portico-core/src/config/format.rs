use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::error::ConfigError;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Supported build definition and manifest formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from a name such as `json` or `yml`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            #[cfg(feature = "yaml-config")]
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            #[cfg(feature = "toml-config")]
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_name)
    }

    /// Serialize `value` in this format
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, ConfigError> {
        let rendered: Result<String, BoxedError> = match self {
            ConfigFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.into()),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.into()),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(value).map_err(|e| e.into()),
        };
        rendered.map_err(|source| ConfigError::Serialization {
            format: self.to_string(),
            source,
        })
    }

    /// Deserialize a value from text in this format
    pub fn parse<T: DeserializeOwned>(&self, data: &str) -> Result<T, ConfigError> {
        let parsed: Result<T, BoxedError> = match self {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| e.into()),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| e.into()),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| e.into()),
        };
        parsed.map_err(|source| ConfigError::Deserialization {
            format: self.to_string(),
            source,
        })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
