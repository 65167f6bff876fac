//! Page and component generation command

use anyhow::{Context, Result};
use console::{style, Emoji};
use mpscaffold::{ArtifactKind, ArtifactName};

use super::Workspace;

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "√");

/// Create a page or component, registering pages in the manifest
pub struct GenerateCommand {
    kind: ArtifactKind,
    name: String,
}

impl GenerateCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(kind: ArtifactKind, name: String) -> Self {
        Self { kind, name }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is invalid or the artifact already exists
    /// - A file cannot be written
    /// - The manifest cannot be updated (the artifact files stay in place)
    pub fn execute(&self, workspace: &Workspace<'_>) -> Result<()> {
        let kind = self.kind;
        let name = ArtifactName::parse(&self.name)?;

        let artifact = workspace
            .artifacts
            .create(kind, &name)
            .with_context(|| format!("Failed to create new {kind} {name}"))?;

        println!(
            "{SUCCESS} create {kind} {} completed",
            style(&name).green().bold()
        );
        for file in &artifact.files {
            println!("    {}", style(workspace.relative(file).display()).dim());
        }

        if kind == ArtifactKind::Page && workspace.config.sync_manifest {
            workspace
                .manifest
                .register_page(&name)
                .with_context(|| format!("Failed to register page {name}"))?;

            println!(
                "{SUCCESS} page {} has been injected into {}",
                style(&name).green().bold(),
                workspace.manifest_name()
            );
        }

        Ok(())
    }
}
