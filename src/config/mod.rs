//! Configuration loading and management.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Downloads page configuration.
    pub downloads: DownloadsConfig,
    /// Color export configuration.
    pub colors: ColorsConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// Errors if the file does not exist. Use this for explicit `--config` flags.
    /// Env vars with `OMW_` prefix override file values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file_exact(path))
            .merge(Env::prefixed("OMW_").split("__"))
            .extract()
            .map_err(|e| Error::config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from directory, looking for omw.toml or .omw/omw.toml.
    ///
    /// Missing files are silently skipped (defaults are used).
    /// Env vars with `OMW_` prefix override file/default values.
    pub fn load_default(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.join("omw.toml")))
            .merge(Toml::file(dir.join(".omw/omw.toml")))
            .merge(Env::prefixed("OMW_").split("__"))
            .extract()
            .map_err(|e| Error::config(e.to_string()))?;
        Ok(config)
    }

    /// Create default config file content.
    pub fn default_toml() -> &'static str {
        include_str!("default_config.toml")
    }
}

/// Downloads page configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadsConfig {
    /// Id of the host page element that receives the rendered releases.
    pub container_id: String,
    /// Document title used by the built-in page template.
    pub title: String,
    /// Stylesheet linked by the built-in page template, if any.
    pub stylesheet: Option<String>,
    /// Minify the written page.
    pub minify: bool,
    /// Also write a `.html.gz` companion next to the page.
    pub gzip: bool,
}

impl Default for DownloadsConfig {
    fn default() -> Self {
        Self {
            container_id: "dwnldContainer".to_string(),
            title: "Downloads".to_string(),
            stylesheet: None,
            minify: false,
            gzip: false,
        }
    }
}

/// Color export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Directory the generated files are written to.
    pub out_dir: PathBuf,
    /// File name of the generated C++ source.
    pub cpp_file: String,
    /// File name of the system colors CSV.
    pub csv_file: String,
    /// System color values by name (`#RRGGBB` or `#AARRGGBB`), replacing the built-in defaults.
    pub system: BTreeMap<String, String>,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            cpp_file: "omw_colors.cpp".to_string(),
            csv_file: "windowsSystemColors.csv".to_string(),
            system: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,
    /// Color output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// Markdown format.
    Markdown,
}
