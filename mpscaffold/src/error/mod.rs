//! Error types and error handling

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Scaffolding error type
///
/// A user declining a destructive confirmation is not an error; see
/// [`crate::RemoveOutcome::Cancelled`].
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Target directory already exists
    #[error("{kind} named {name} already exists at {}, please use another name", path.display())]
    AlreadyExists {
        /// What was being created (`page`, `component`, `project`)
        kind: &'static str,
        /// Requested name
        name: String,
        /// Conflicting path
        path: PathBuf,
    },

    /// Target directory does not exist
    #[error("{} does not exist", path.display())]
    NotFound {
        /// Missing path
        path: PathBuf,
    },

    /// Name cannot be used as a single directory segment
    #[error("Invalid name '{name}': {reason}")]
    InvalidName {
        /// Rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Filesystem error
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being operated on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Manifest could not be read
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        /// Manifest path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Manifest is not valid JSON or has an unexpected shape
    #[error("Failed to parse manifest {}: {reason}", path.display())]
    ManifestParse {
        /// Manifest path
        path: PathBuf,
        /// Parser message or shape violation
        reason: String,
    },

    /// Manifest could not be written back
    #[error("Failed to write manifest {}: {source}", path.display())]
    ManifestWrite {
        /// Manifest path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Remote project template could not be fetched
    #[error("Failed to download template {reference}: {reason}")]
    Fetch {
        /// Template reference (`owner/repo#branch`)
        reference: String,
        /// Fetcher message
        reason: String,
    },

    /// Template reference is not `owner/repo[#branch]`
    #[error("Invalid template reference '{0}', expected owner/repo[#branch]")]
    InvalidTemplateReference(String),

    /// No template registered for a kind/extension pair
    #[error("No {family} template registered for {kind} .{extension}")]
    TemplateNotRegistered {
        /// Template family name
        family: &'static str,
        /// Artifact kind label
        kind: &'static str,
        /// File extension
        extension: String,
    },

    /// Template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),

    /// Confirmation prompt failed
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScaffoldError {
    /// Build a mapper from `io::Error` to [`ScaffoldError::Io`] for `path`
    ///
    /// ```rust
    /// use mpscaffold::ScaffoldError;
    /// use std::path::Path;
    ///
    /// let path = Path::new("/nonexistent/dir");
    /// let err = std::fs::read_dir(path).map_err(ScaffoldError::io(path)).unwrap_err();
    /// assert!(matches!(err, ScaffoldError::Io { .. }));
    /// ```
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;
