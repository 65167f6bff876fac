//! Page route manifest synchronization
//!
//! The manifest (`src/app.json`) lists page routes in its `pages` array as
//! `views/<name>/<name>`. Every change is a full read-modify-write of the file
//! with 2-space indentation; keys other than `pages` are kept in their
//! original order. There is no locking.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::artifact::{ArtifactKind, ArtifactName, Target};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};

/// Route entry registered for a page
///
/// ```rust
/// use mpscaffold::{route_entry, ArtifactName};
///
/// let name = ArtifactName::parse("about").unwrap();
/// assert_eq!(route_entry(&name), "views/about/about");
/// ```
#[must_use]
pub fn route_entry(name: &ArtifactName) -> String {
    format!("{}/{name}/{name}", ArtifactKind::Page.dir_name())
}

/// Reads and rewrites the `pages` array of a manifest file
#[derive(Debug, Clone)]
pub struct ManifestSync {
    path: PathBuf,
}

impl ManifestSync {
    /// Synchronizer for the manifest at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Synchronizer for the manifest of the project at `project_root`
    #[must_use]
    pub fn for_project(project_root: &Path, config: &ScaffoldConfig) -> Self {
        Self::new(config.manifest_path(project_root))
    }

    /// Manifest file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current route entries
    ///
    /// # Errors
    ///
    /// Returns manifest read or parse errors. A `pages` value holding
    /// non-string items is a parse error.
    pub fn pages(&self) -> Result<Vec<String>> {
        let mut document = self.load()?;
        self.pages_mut(&mut document)?
            .iter()
            .map(|page| {
                page.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.parse_error(format!("non-string page entry {page}")))
            })
            .collect()
    }

    /// Append the route of page `name`
    ///
    /// Duplicates are not checked; registering a page twice gives two
    /// identical entries. A manifest without `pages` gets one.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::ManifestRead`] if the file cannot be read
    /// - [`ScaffoldError::ManifestParse`] if it is not a JSON object with an array `pages`
    /// - [`ScaffoldError::ManifestWrite`] if it cannot be written back
    pub fn register_page(&self, name: &ArtifactName) -> Result<String> {
        let entry = route_entry(name);
        let mut document = self.load()?;
        self.pages_mut(&mut document)?.push(Value::String(entry.clone()));
        self.store(&document)?;

        info!(route = %entry, manifest = %self.path.display(), "registered page");
        Ok(entry)
    }

    /// Remove page routes
    ///
    /// [`Target::All`] empties `pages`. [`Target::One`] removes the first
    /// entry equal to the page's route string. Returns whether anything was
    /// removed; the file is written back either way.
    ///
    /// # Errors
    ///
    /// Same as [`ManifestSync::register_page`].
    pub fn unregister_page(&self, target: &Target) -> Result<bool> {
        let mut document = self.load()?;
        let pages = self.pages_mut(&mut document)?;

        let removed = match target {
            Target::All => {
                let had_pages = !pages.is_empty();
                pages.clear();
                had_pages
            }
            Target::One(name) => {
                let entry = route_entry(name);
                let position = pages.iter().position(|page| page.as_str() == Some(entry.as_str()));
                if let Some(index) = position {
                    pages.remove(index);
                } else {
                    warn!(route = %entry, manifest = %self.path.display(), "route not registered");
                }
                position.is_some()
            }
        };

        self.store(&document)?;

        info!(%target, removed, manifest = %self.path.display(), "unregistered page");
        Ok(removed)
    }

    fn load(&self) -> Result<Value> {
        let text = fs::read_to_string(&self.path).map_err(|source| ScaffoldError::ManifestRead {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|e| self.parse_error(e.to_string()))
    }

    fn store(&self, document: &Value) -> Result<()> {
        let write_error = |source: std::io::Error| ScaffoldError::ManifestWrite {
            path: self.path.clone(),
            source,
        };

        let text = serde_json::to_string_pretty(document).map_err(|e| write_error(e.into()))?;
        fs::write(&self.path, text).map_err(write_error)?;

        debug!(manifest = %self.path.display(), "wrote manifest");
        Ok(())
    }

    fn pages_mut<'a>(&self, document: &'a mut Value) -> Result<&'a mut Vec<Value>> {
        document
            .as_object_mut()
            .ok_or_else(|| self.parse_error("root is not a JSON object".to_string()))?
            .entry("pages")
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| self.parse_error("`pages` is not an array".to_string()))
    }

    fn parse_error(&self, reason: String) -> ScaffoldError {
        ScaffoldError::ManifestParse {
            path: self.path.clone(),
            reason,
        }
    }
}
