//! CLI command implementations

pub mod generate;
pub mod new;
pub mod remove;

pub use generate::GenerateCommand;
pub use new::NewCommand;
pub use remove::RemoveCommand;

use anyhow::{Context, Result};
use mpscaffold::{
    ArtifactManager, Confirmer, ManifestSync, ScaffoldConfig, TemplateFetcher, TemplateRenderer,
};
use std::path::{Path, PathBuf};

use crate::Flavor;

/// Everything a command needs to act on one project
pub struct Workspace<'a> {
    /// Tool that is running
    pub flavor: Flavor,
    /// Root all paths are resolved against
    pub project_root: PathBuf,
    /// Loaded project configuration
    pub config: ScaffoldConfig,
    /// Page and component directories
    pub artifacts: ArtifactManager,
    /// Route manifest
    pub manifest: ManifestSync,
    /// Remove-all confirmation
    pub confirmer: &'a dyn Confirmer,
    /// Remote project template download
    pub fetcher: &'a dyn TemplateFetcher,
}

impl<'a> Workspace<'a> {
    /// Load configuration and build the collaborators for `project_root`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the
    /// templates fail to compile.
    pub fn new(
        flavor: Flavor,
        project_root: &Path,
        confirmer: &'a dyn Confirmer,
        fetcher: &'a dyn TemplateFetcher,
    ) -> Result<Self> {
        let config = ScaffoldConfig::load(project_root).with_context(|| {
            format!("Failed to load configuration for {}", project_root.display())
        })?;
        let renderer = TemplateRenderer::from_boxed(flavor.family())
            .context("Failed to compile templates")?;

        tracing::debug!(
            flavor = flavor.binary_name(),
            root = %project_root.display(),
            ?config,
            "workspace ready"
        );

        Ok(Self {
            flavor,
            project_root: project_root.to_path_buf(),
            artifacts: ArtifactManager::new(project_root, &config, renderer),
            manifest: ManifestSync::for_project(project_root, &config),
            config,
            confirmer,
            fetcher,
        })
    }

    /// `path` relative to the project root, for display
    #[must_use]
    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }

    /// Name of the manifest file, for messages
    #[must_use]
    pub fn manifest_name(&self) -> &str {
        &self.config.manifest_file
    }
}
