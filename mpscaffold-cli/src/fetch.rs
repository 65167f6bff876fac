//! Project template download
//!
//! Templates are fetched as the gzipped tarball GitHub serves for a branch and
//! unpacked with the archive's top-level `<repo>-<branch>/` directory removed.
//! Only regular files and directories are unpacked; link entries abort.

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use mpscaffold::{BoxError, TemplateFetcher, TemplateSource};
use std::fs;
use std::io::Read;
use std::path::{Component, Path, PathBuf};
use tar::{Archive, EntryType};

/// Downloads and unpacks template tarballs over HTTPS
#[derive(Debug, Default, Clone, Copy)]
pub struct TarballFetcher;

impl TarballFetcher {
    /// Create a new fetcher
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn download(source: &TemplateSource, dest: &Path) -> Result<usize> {
        let url = source.archive_url();
        tracing::debug!(%url, dest = %dest.display(), "downloading template archive");

        let response = ureq::get(&url)
            .call()
            .with_context(|| format!("Failed to fetch template from {url}"))?;

        unpack_tarball(response.into_body().into_reader(), dest)
    }
}

impl TemplateFetcher for TarballFetcher {
    fn fetch(&self, source: &TemplateSource, dest: &Path) -> std::result::Result<(), BoxError> {
        let files = Self::download(source, dest).map_err(flatten_error)?;
        tracing::info!(files, template = %source, "template unpacked");
        Ok(())
    }
}

/// Render an error with its whole cause chain before it leaves anyhow
fn flatten_error(err: anyhow::Error) -> BoxError {
    format!("{err:#}").into()
}

/// Unpack a `.tar.gz` stream into `dest`, dropping the first path component
///
/// Returns the number of regular files written. Entries that would land
/// outside `dest`, and symlink, hard link or special file entries, abort the
/// unpack.
///
/// # Errors
///
/// Returns an error if the stream is not a valid gzipped tarball, an entry
/// path escapes `dest`, an entry is not a regular file or directory, or a
/// file cannot be written.
pub fn unpack_tarball<R: Read>(reader: R, dest: &Path) -> Result<usize> {
    let mut archive = Archive::new(GzDecoder::new(reader));
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

    let mut files = 0;
    for entry in archive.entries().context("Failed to read template archive")? {
        let mut entry = entry.context("Failed to read template archive entry")?;
        let entry_type = entry.header().entry_type();
        if matches!(entry_type, EntryType::XGlobalHeader | EntryType::XHeader) {
            continue;
        }

        let path = entry.path().context("Invalid path in template archive")?.into_owned();
        if !entry_type.is_file() && !entry_type.is_dir() {
            bail!(
                "Unsupported {entry_type:?} entry in template archive: {}",
                path.display()
            );
        }

        let relative: PathBuf = path.components().skip(1).collect();
        if relative.as_os_str().is_empty() {
            continue;
        }
        if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            bail!("Template archive entry escapes destination: {}", path.display());
        }

        let target = dest.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        entry
            .unpack(&target)
            .with_context(|| format!("Failed to write file: {}", target.display()))?;

        if entry_type.is_file() {
            files += 1;
        }
    }

    Ok(files)
}
