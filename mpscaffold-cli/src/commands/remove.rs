//! Page and component removal command

use anyhow::{Context, Result};
use console::{style, Emoji};
use mpscaffold::{ArtifactKind, RemoveOutcome, Target};

use super::Workspace;

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "√");
static SKIPPED: Emoji<'_, '_> = Emoji("⚠", "!");

/// Remove one page/component, or all of them after confirmation
pub struct RemoveCommand {
    kind: ArtifactKind,
    name: Option<String>,
}

impl RemoveCommand {
    /// Create a new command instance; no name means all
    #[must_use]
    pub const fn new(kind: ArtifactKind, name: Option<String>) -> Self {
        Self { kind, name }
    }

    /// Execute the command
    ///
    /// Declining the remove-all confirmation is reported and counts as success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is invalid or the artifact does not exist
    /// - Deletion fails
    /// - The manifest cannot be updated
    pub fn execute(&self, workspace: &Workspace<'_>) -> Result<()> {
        let kind = self.kind;
        let target = Target::from_optional(self.name.as_deref())?;

        let outcome = workspace
            .artifacts
            .remove(kind, &target, workspace.confirmer)
            .with_context(|| format!("Failed to remove {kind} {target}"))?;

        match outcome {
            RemoveOutcome::Cancelled => {
                println!("{SKIPPED} remove {kind} {target} cancelled");
                return Ok(());
            }
            RemoveOutcome::Removed { path, artifacts } => {
                println!(
                    "{SUCCESS} remove {kind} {} completed",
                    style(&target).green().bold()
                );
                if target == Target::All {
                    println!(
                        "    {} ({} removed)",
                        style(workspace.relative(&path).display()).dim(),
                        artifacts.len()
                    );
                }
            }
        }

        if kind == ArtifactKind::Page && workspace.config.sync_manifest {
            let removed = workspace
                .manifest
                .unregister_page(&target)
                .with_context(|| format!("Failed to unregister page {target}"))?;

            if removed {
                println!(
                    "{SUCCESS} page {} has been removed from {}",
                    style(&target).green().bold(),
                    workspace.manifest_name()
                );
            } else {
                println!(
                    "{SKIPPED} page {target} was not registered in {}",
                    workspace.manifest_name()
                );
            }
        }

        Ok(())
    }
}
