//! Configuration management for mpscaffold
//!
//! Configuration is layered with clear precedence:
//!
//! 1. Environment variables (highest priority, `MPSCAFFOLD_` prefix)
//! 2. `<project root>/mpscaffold.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # mpscaffold.toml
//! source_dir = "src"
//! manifest_file = "app.json"
//! sync_manifest = true
//! template_repo = "my-org/my-template#main"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::artifact::ArtifactKind;
use crate::error::{Result, ScaffoldError};

/// Name of the per-project configuration file
pub const CONFIG_FILE: &str = "mpscaffold.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "MPSCAFFOLD_";

/// Project layout and behaviour settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory under the project root holding `views/`, `components/` and the manifest
    pub source_dir: PathBuf,

    /// Manifest file name inside `source_dir`
    pub manifest_file: String,

    /// Register and unregister page routes in the manifest
    pub sync_manifest: bool,

    /// Override for the family's remote project template (`owner/repo[#branch]`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_repo: Option<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            manifest_file: "app.json".to_string(),
            sync_manifest: true,
            template_repo: None,
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration for the project at `project_root`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if:
    /// - Default configuration cannot be serialized to TOML
    /// - `mpscaffold.toml` exists but cannot be read or parsed
    /// - A value has the wrong type
    pub fn load(project_root: &Path) -> Result<Self> {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| ScaffoldError::Config(e.to_string()))?;

        let mut figment = Figment::new().merge(Toml::string(&defaults));

        let local_config = project_root.join(CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        figment
            .extract()
            .map_err(|e| ScaffoldError::Config(e.to_string()))
    }

    /// Absolute source directory of a project
    #[must_use]
    pub fn source_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.source_dir)
    }

    /// Directory holding all artifacts of `kind`
    #[must_use]
    pub fn kind_dir(&self, project_root: &Path, kind: ArtifactKind) -> PathBuf {
        self.source_root(project_root).join(kind.dir_name())
    }

    /// Path of the route manifest
    #[must_use]
    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        self.source_root(project_root).join(&self.manifest_file)
    }
}
