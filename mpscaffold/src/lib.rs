//! mpscaffold: scaffolding for component-based mini-program projects
//!
//! The library holds everything the `wemp` and `wxapp` command-line tools do
//! to a project on disk:
//!
//! - [`template`]: renders per-kind file templates for a [`TemplateFamily`]
//! - [`artifact`]: creates and removes page/component directories
//! - [`manifest`]: keeps the `pages` routes of `src/app.json` in step
//! - [`project`]: creates new projects from a remote template archive
//!
//! Every entry point takes the project root explicitly; nothing in here reads
//! the process working directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use mpscaffold::{
//!     ArtifactKind, ArtifactManager, ArtifactName, ManifestSync, ScaffoldConfig,
//!     TemplateRenderer, Wemp,
//! };
//! use std::path::Path;
//!
//! # fn example() -> mpscaffold::Result<()> {
//! let root = Path::new("./my-app");
//! let config = ScaffoldConfig::load(root)?;
//! let artifacts = ArtifactManager::new(root, &config, TemplateRenderer::new(Wemp)?);
//!
//! let name = ArtifactName::parse("home")?;
//! artifacts.create(ArtifactKind::Page, &name)?;
//! ManifestSync::for_project(root, &config).register_page(&name)?;
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod manifest;
pub mod observability;
pub mod project;
pub mod template;

pub use artifact::{
    Artifact, ArtifactKind, ArtifactManager, ArtifactName, Confirmer, FixedAnswer, RemoveOutcome,
    Target,
};
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use manifest::{route_entry, ManifestSync};
pub use project::{BoxError, ProjectInitializer, TemplateFetcher, TemplateSource};
pub use template::{TemplateFamily, TemplateParams, TemplateRenderer, Wemp, Wxapp};
