//! Page and component artifacts
//!
//! An artifact is a directory `<source dir>/<kind dir>/<name>/` holding one
//! `<name>.<ext>` file per extension of the active [`TemplateFamily`].
//!
//! [`TemplateFamily`]: crate::TemplateFamily

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::template::{TemplateParams, TemplateRenderer};

/// Kind of scaffolded artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Routable page, lives under `views/`
    Page,
    /// Reusable component, lives under `components/`
    Component,
}

impl ArtifactKind {
    /// Every kind, in dispatch order
    pub const ALL: [Self; 2] = [Self::Page, Self::Component];

    /// Directory name under the source root
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Page => "views",
            Self::Component => "components",
        }
    }

    /// Lowercase label for messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Component => "component",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Artifact or project name
///
/// Names become a directory segment, a file stem and a value interpolated
/// into generated scripts, markup and JSON, so only letters, digits, `-`
/// and `_` are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    /// Validate a name
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if the name is empty or contains
    /// anything other than letters, digits, `-` and `_`.
    ///
    /// ```rust
    /// use mpscaffold::ArtifactName;
    ///
    /// assert!(ArtifactName::parse("user-card").is_ok());
    /// assert!(ArtifactName::parse("../etc").is_err());
    /// assert!(ArtifactName::parse("it's").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        let reason = if name.is_empty() {
            Some("name must not be empty")
        } else if name.contains(['/', '\\']) {
            Some("name must not contain path separators")
        } else if !name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
            Some("name may only contain letters, digits, '-' and '_'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ScaffoldError::InvalidName {
                name: name.to_string(),
                reason,
            }),
            None => Ok(Self(name.to_string())),
        }
    }

    /// Name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ArtifactName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// What a remove operation applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single named artifact
    One(ArtifactName),
    /// Every artifact of the kind
    All,
}

impl Target {
    /// Interpret an optional flag value: a name means one artifact, no value means all
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if a name is given but invalid.
    pub fn from_optional(name: Option<&str>) -> Result<Self> {
        name.map_or(Ok(Self::All), |name| ArtifactName::parse(name).map(Self::One))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(name) => fmt::Display::fmt(name, f),
            Self::All => f.write_str("all"),
        }
    }
}

/// Yes/no confirmation collaborator for destructive operations
pub trait Confirmer {
    /// Ask `question`; `Ok(true)` means go ahead
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Prompt`] if no answer could be obtained.
    fn confirm(&self, question: &str) -> Result<bool>;
}

impl<T: Confirmer + ?Sized> Confirmer for &T {
    fn confirm(&self, question: &str) -> Result<bool> {
        (**self).confirm(question)
    }
}

/// Confirmer that always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirmer for FixedAnswer {
    fn confirm(&self, question: &str) -> Result<bool> {
        debug!(question, answer = self.0, "confirmation answered without prompting");
        Ok(self.0)
    }
}

/// A created artifact
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Kind of artifact
    pub kind: ArtifactKind,
    /// Artifact name
    pub name: ArtifactName,
    /// Artifact directory
    pub dir: PathBuf,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

/// Result of a remove that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Directory deleted
    Removed {
        /// Deleted directory
        path: PathBuf,
        /// Names of the artifacts that were in it
        artifacts: Vec<String>,
    },
    /// User declined the confirmation; nothing was touched
    Cancelled,
}

/// Creates and removes artifact directories under a project's source root
#[derive(Debug)]
pub struct ArtifactManager {
    project_root: PathBuf,
    config: ScaffoldConfig,
    renderer: TemplateRenderer,
}

impl ArtifactManager {
    /// Create a manager for the project at `project_root`
    #[must_use]
    pub fn new(project_root: &Path, config: &ScaffoldConfig, renderer: TemplateRenderer) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
            renderer,
        }
    }

    /// Renderer used for new artifacts
    #[must_use]
    pub const fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// Directory holding all artifacts of `kind`
    #[must_use]
    pub fn kind_dir(&self, kind: ArtifactKind) -> PathBuf {
        self.config.kind_dir(&self.project_root, kind)
    }

    /// Directory of one artifact
    #[must_use]
    pub fn artifact_dir(&self, kind: ArtifactKind, name: &ArtifactName) -> PathBuf {
        self.kind_dir(kind).join(name)
    }

    /// Create an artifact and write all of its files
    ///
    /// Contents are rendered before anything touches the disk. Files are then
    /// written in family order; the first failed write stops the operation and
    /// leaves what was already written in place.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::AlreadyExists`] if the artifact directory exists
    /// - [`ScaffoldError::Io`] if the directory or a file cannot be written
    /// - template errors from the renderer
    pub fn create(&self, kind: ArtifactKind, name: &ArtifactName) -> Result<Artifact> {
        let dir = self.artifact_dir(kind, name);
        if dir.try_exists().map_err(ScaffoldError::io(&dir))? {
            return Err(ScaffoldError::AlreadyExists {
                kind: kind.label(),
                name: name.to_string(),
                path: dir,
            });
        }

        let params = TemplateParams::new(kind, name.as_str());
        let rendered = self
            .renderer
            .extensions()
            .iter()
            .map(|ext| {
                self.renderer
                    .render(kind, ext, &params)
                    .map(|content| (dir.join(format!("{name}.{ext}")), content))
            })
            .collect::<Result<Vec<_>>>()?;

        fs::create_dir_all(&dir).map_err(ScaffoldError::io(&dir))?;

        let mut files = Vec::with_capacity(rendered.len());
        for (path, content) in rendered {
            fs::write(&path, content).map_err(ScaffoldError::io(&path))?;
            debug!(path = %path.display(), "wrote artifact file");
            files.push(path);
        }

        info!(%kind, %name, family = self.renderer.family().name(), "created artifact");

        Ok(Artifact {
            kind,
            name: name.clone(),
            dir,
            files,
        })
    }

    /// Remove one artifact, or the whole kind directory
    ///
    /// Removing [`Target::All`] asks `confirmer` first and returns
    /// [`RemoveOutcome::Cancelled`] without touching anything if declined. A
    /// kind directory that does not exist counts as already empty.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::NotFound`] if a named artifact does not exist
    /// - [`ScaffoldError::Io`] if deletion fails
    /// - [`ScaffoldError::Prompt`] if the confirmation cannot be obtained
    pub fn remove(
        &self,
        kind: ArtifactKind,
        target: &Target,
        confirmer: &dyn Confirmer,
    ) -> Result<RemoveOutcome> {
        match target {
            Target::One(name) => {
                let dir = self.artifact_dir(kind, name);
                if !dir.try_exists().map_err(ScaffoldError::io(&dir))? {
                    return Err(ScaffoldError::NotFound { path: dir });
                }

                fs::remove_dir_all(&dir).map_err(ScaffoldError::io(&dir))?;
                info!(%kind, %name, "removed artifact");

                Ok(RemoveOutcome::Removed {
                    path: dir,
                    artifacts: vec![name.to_string()],
                })
            }
            Target::All => {
                let dir = self.kind_dir(kind);
                let question =
                    format!("Do you want to remove the whole {} folder?", kind.dir_name());
                if !confirmer.confirm(&question)? {
                    info!(%kind, "remove all cancelled");
                    return Ok(RemoveOutcome::Cancelled);
                }

                let artifacts = self.list(kind)?;
                if dir.try_exists().map_err(ScaffoldError::io(&dir))? {
                    fs::remove_dir_all(&dir).map_err(ScaffoldError::io(&dir))?;
                }
                info!(%kind, count = artifacts.len(), "removed all artifacts");

                Ok(RemoveOutcome::Removed {
                    path: dir,
                    artifacts,
                })
            }
        }
    }

    /// Names of the existing artifacts of `kind`, sorted
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the kind directory cannot be read.
    pub fn list(&self, kind: ArtifactKind) -> Result<Vec<String>> {
        let dir = self.kind_dir(kind);
        if !dir.try_exists().map_err(ScaffoldError::io(&dir))? {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ScaffoldError::Io {
                path: dir.clone(),
                source: e.into(),
            })?;
            if entry.file_type().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }
}
