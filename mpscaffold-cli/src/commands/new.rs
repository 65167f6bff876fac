//! Project creation command

use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use mpscaffold::ProjectInitializer;
use std::time::Duration;

use super::Workspace;

/// Create a new project from the flavor's remote template
pub struct NewCommand {
    name: Option<String>,
}

impl NewCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No name was given and the flavor requires one
    /// - The project directory already exists
    /// - The template download fails
    pub fn execute(&self, workspace: &Workspace<'_>) -> Result<()> {
        let Some(name) = self.name.as_deref() else {
            if workspace.flavor.init_requires_name() {
                bail!("--init requires a project name");
            }
            tracing::debug!("--init without a name, nothing to do");
            return Ok(());
        };

        println!(
            "{} {}",
            style("Ready to create project:").blue().bold(),
            style(name).cyan().bold()
        );

        let reference = workspace.config.template_repo.as_deref().unwrap_or_else(|| {
            workspace.artifacts.renderer().family().project_template()
        });
        let initializer =
            ProjectInitializer::new(&workspace.project_root, reference, workspace.fetcher)
                .context("Failed to resolve project template")?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Downloading template {}...", initializer.source()));

        let result = initializer.init(name);
        spinner.finish_and_clear();
        let project_dir = result.with_context(|| format!("Failed to create project {name}"))?;

        Self::print_success(name, &workspace.relative(&project_dir).display().to_string());
        Ok(())
    }

    /// Print success message with next steps
    fn print_success(name: &str, location: &str) {
        println!(
            "{} {}",
            style("✓ Project created at").green().bold(),
            style(location).cyan()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!("  {} {}", style("$").dim(), style(format!("cd {name}")).cyan());
        println!("  {} {}", style("$").dim(), style("npm install").cyan());
        println!("  {} {}", style("$").dim(), style("npm run watch").cyan());
    }
}
