//! New project creation
//!
//! Creating a project is a single existence check followed by one call to a
//! [`TemplateFetcher`], which populates the new directory from a remote
//! template. There are no retries, no timeout and no cleanup after a failed
//! fetch.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::artifact::ArtifactName;
use crate::error::{Result, ScaffoldError};

/// Boxed error returned by fetchers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Branch used when a reference does not name one
pub const DEFAULT_BRANCH: &str = "master";

/// Remote template repository reference, `owner/repo[#branch]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch or tag
    pub branch: String,
}

impl TemplateSource {
    /// URL of the gzipped tarball of the referenced branch
    ///
    /// ```rust
    /// use mpscaffold::TemplateSource;
    ///
    /// let source: TemplateSource = "LuoHuacheng/wemp-template".parse().unwrap();
    /// assert_eq!(
    ///     source.archive_url(),
    ///     "https://codeload.github.com/LuoHuacheng/wemp-template/tar.gz/master"
    /// );
    /// ```
    #[must_use]
    pub fn archive_url(&self) -> String {
        format!(
            "https://codeload.github.com/{}/{}/tar.gz/{}",
            self.owner, self.repo, self.branch
        )
    }
}

impl FromStr for TemplateSource {
    type Err = ScaffoldError;

    fn from_str(reference: &str) -> Result<Self> {
        let invalid = || ScaffoldError::InvalidTemplateReference(reference.to_string());

        let (path, branch) = match reference.split_once('#') {
            Some((path, branch)) if !branch.is_empty() => (path, branch),
            Some(_) => return Err(invalid()),
            None => (reference, DEFAULT_BRANCH),
        };

        let (owner, repo) = path.split_once('/').ok_or_else(invalid)?;
        let is_segment = |s: &str| {
            !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || "-_.".contains(c))
        };
        if !is_segment(owner) || !is_segment(repo) {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
        })
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.branch)
    }
}

/// Populates a destination directory from a remote template
pub trait TemplateFetcher {
    /// Download `source` into `dest`
    ///
    /// # Errors
    ///
    /// Any failure to download or unpack the template.
    fn fetch(&self, source: &TemplateSource, dest: &Path) -> std::result::Result<(), BoxError>;
}

impl<T: TemplateFetcher + ?Sized> TemplateFetcher for &T {
    fn fetch(&self, source: &TemplateSource, dest: &Path) -> std::result::Result<(), BoxError> {
        (**self).fetch(source, dest)
    }
}

/// Creates new projects under a base directory
#[derive(Debug)]
pub struct ProjectInitializer<F> {
    base_dir: PathBuf,
    source: TemplateSource,
    fetcher: F,
}

impl<F: TemplateFetcher> ProjectInitializer<F> {
    /// Initializer placing projects in `base_dir`, populated from `reference`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidTemplateReference`] if `reference` is malformed.
    pub fn new(base_dir: &Path, reference: &str, fetcher: F) -> Result<Self> {
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            source: reference.parse()?,
            fetcher,
        })
    }

    /// Template the projects are created from
    #[must_use]
    pub const fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Create project `name` and return its directory
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::InvalidName`] if `name` is not a single path segment
    /// - [`ScaffoldError::AlreadyExists`] if the project directory exists
    /// - [`ScaffoldError::Fetch`] if the fetcher fails
    pub fn init(&self, name: &str) -> Result<PathBuf> {
        let name = ArtifactName::parse(name)?;
        let project_dir = self.base_dir.join(&name);

        if project_dir.try_exists().map_err(ScaffoldError::io(&project_dir))? {
            return Err(ScaffoldError::AlreadyExists {
                kind: "project",
                name: name.to_string(),
                path: project_dir,
            });
        }

        info!(%name, template = %self.source, "creating project");
        self.fetcher
            .fetch(&self.source, &project_dir)
            .map_err(|e| ScaffoldError::Fetch {
                reference: self.source.to_string(),
                reason: e.to_string(),
            })?;

        info!(%name, path = %project_dir.display(), "project created");
        Ok(project_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use tempfile::tempdir;

    const TEMPLATE: &str = "LuoHuacheng/wemp-template";

    /// Writes a single `package.json` and counts calls
    struct StubFetcher {
        fail: bool,
        calls: Cell<usize>,
    }

    impl StubFetcher {
        const fn new(fail: bool) -> Self {
            Self { fail, calls: Cell::new(0) }
        }
    }

    impl TemplateFetcher for StubFetcher {
        fn fetch(
            &self,
            _source: &TemplateSource,
            dest: &Path,
        ) -> std::result::Result<(), BoxError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err("connection refused".into());
            }
            fs::create_dir_all(dest.join("src"))?;
            fs::write(dest.join("package.json"), "{}")?;
            Ok(())
        }
    }

    #[test]
    fn test_parse_reference() {
        let source: TemplateSource = "LuoHuacheng/wxapp-template".parse().unwrap();
        assert_eq!(source.owner, "LuoHuacheng");
        assert_eq!(source.repo, "wxapp-template");
        assert_eq!(source.branch, "master");

        let source: TemplateSource = "acme/mini.tpl#v2".parse().unwrap();
        assert_eq!(source.branch, "v2");
        assert_eq!(source.to_string(), "acme/mini.tpl#v2");
    }

    #[test]
    fn test_parse_invalid_reference() {
        for invalid in ["", "acme", "/repo", "acme/", "acme/repo#", "acme/re po", "a/b/c"] {
            assert!(
                matches!(
                    invalid.parse::<TemplateSource>(),
                    Err(ScaffoldError::InvalidTemplateReference(_))
                ),
                "should be invalid: {invalid}"
            );
        }
    }

    #[test]
    fn test_init_fetches_into_new_directory() {
        let temp_dir = tempdir().unwrap();
        let fetcher = StubFetcher::new(false);
        let initializer = ProjectInitializer::new(temp_dir.path(), TEMPLATE, &fetcher).unwrap();

        let dir = initializer.init("shop").unwrap();

        assert_eq!(dir, temp_dir.path().join("shop"));
        assert!(dir.join("package.json").is_file());
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn test_init_existing_directory() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("shop")).unwrap();
        let fetcher = StubFetcher::new(false);
        let initializer = ProjectInitializer::new(temp_dir.path(), TEMPLATE, &fetcher).unwrap();

        let result = initializer.init("shop");

        assert!(matches!(result, Err(ScaffoldError::AlreadyExists { kind: "project", .. })));
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[test]
    fn test_init_fetch_failure() {
        let temp_dir = tempdir().unwrap();
        let initializer =
            ProjectInitializer::new(temp_dir.path(), TEMPLATE, StubFetcher::new(true)).unwrap();

        match initializer.init("shop") {
            Err(ScaffoldError::Fetch { reference, reason }) => {
                assert_eq!(reference, "LuoHuacheng/wemp-template#master");
                assert_eq!(reason, "connection refused");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_init_rejects_path_names() {
        let temp_dir = tempdir().unwrap();
        let fetcher = StubFetcher::new(false);
        let initializer = ProjectInitializer::new(temp_dir.path(), TEMPLATE, &fetcher).unwrap();

        assert!(matches!(initializer.init("../escape"), Err(ScaffoldError::InvalidName { .. })));
        assert_eq!(fetcher.calls.get(), 0);
    }
}
