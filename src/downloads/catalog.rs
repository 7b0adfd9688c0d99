//! Catalog loading from JSON or TOML sources.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{Error, Result};
use crate::downloads::types::{ArtifactGroup, ArtifactItem, Release, ReleaseCatalog};

/// Source format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// Top-level array of release objects.
    Json,
    /// Top-level `[[release]]` array of tables.
    Toml,
}

impl CatalogFormat {
    /// Pick the format from a file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl ReleaseCatalog {
    /// Parse a catalog. Only structural problems of the catalog itself are errors;
    /// malformed items are kept for diagnostic rendering.
    pub fn parse(source: &str, format: CatalogFormat) -> Result<Self> {
        let root = match format {
            CatalogFormat::Json => serde_json::from_str::<Value>(source)
                .map_err(|e| Error::catalog(format!("invalid JSON: {e}")))?,
            CatalogFormat::Toml => toml_releases(source)?,
        };
        Self::from_value(root)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Self::parse(source, CatalogFormat::Json)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::parse(source, CatalogFormat::Toml)
    }

    /// Load a catalog file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = fs::read_to_string(path)?;
        let catalog = Self::parse(&source, CatalogFormat::from_path(path))?;
        debug!(
            path = %path.display(),
            releases = catalog.len(),
            "loaded release catalog"
        );
        Ok(catalog)
    }

    /// Build a catalog from an already parsed top-level value.
    pub fn from_value(root: Value) -> Result<Self> {
        let Value::Array(entries) = root else {
            return Err(Error::catalog("expected an array of releases"));
        };

        let mut releases = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            if !entry.is_object() {
                return Err(Error::catalog(format!("release #{index} is not an object")));
            }
            let release = Release::deserialize(entry)
                .map_err(|e| Error::catalog(format!("release #{index}: {e}")))?;
            releases.push(release);
        }
        Ok(Self { releases })
    }

    /// Per-release group sizes, in catalog order.
    pub fn summaries(&self) -> Vec<ReleaseSummary> {
        self.iter()
            .map(|release| ReleaseSummary {
                title: release.title.clone(),
                binaries: release.binaries.as_ref().map(ArtifactGroup::len),
                source: release.source.as_ref().map(ArtifactGroup::len),
                doc: release.doc.as_ref().map(ArtifactGroup::len),
            })
            .collect()
    }

    /// Every item that will render as a malformed entry.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        for release in self.iter() {
            for (role, group) in release.groups() {
                for (index, item) in group.iter().enumerate() {
                    if let ArtifactItem::Unknown { raw } = item {
                        warn!(
                            release = %release.title,
                            group = role.label(),
                            index,
                            "malformed catalog entry"
                        );
                        found.push(Diagnostic {
                            release: release.title.clone(),
                            group: role.label().to_string(),
                            index,
                            entry: raw.clone(),
                        });
                    }
                }
            }
        }
        found
    }
}

fn toml_releases(source: &str) -> Result<Value> {
    let table: toml::Table = toml::from_str(source)?;
    let Some(releases) = table.get("release") else {
        return Err(Error::catalog("missing [[release]] array"));
    };
    Ok(serde_json::to_value(releases)?)
}

/// Item counts of one release; `None` for absent groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    pub title: String,
    pub binaries: Option<usize>,
    pub source: Option<usize>,
    pub doc: Option<usize>,
}

/// A catalog entry that did not match any known item shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub release: String,
    pub group: String,
    /// Position of the entry inside its group.
    pub index: usize,
    pub entry: Value,
}
