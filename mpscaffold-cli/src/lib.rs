//! wemp / wxapp command-line tools
//!
//! Both binaries share this dispatcher and differ only in their [`Flavor`]:
//! the template family they generate and whether `--init` needs a name.
//!
//! # Usage
//!
//! ```bash
//! # New project from the remote template
//! wemp --init shop
//!
//! # Page (registered in src/app.json) and component
//! wemp --page home --component button
//!
//! # Remove one page, or every component after confirmation
//! wemp --remove-page home
//! wemp --remove-component
//! ```

pub mod commands;
pub mod fetch;
pub mod prompt;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use console::style;
use mpscaffold::{observability, ArtifactKind, Confirmer, FixedAnswer, TemplateFamily, Wemp, Wxapp};
use std::path::PathBuf;
use std::process::ExitCode;

pub use commands::{GenerateCommand, NewCommand, RemoveCommand, Workspace};
pub use fetch::TarballFetcher;
pub use prompt::TerminalConfirm;

/// Which tool is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Stylus templates, `--init` requires a name
    Wemp,
    /// Less templates, `--init` without a name does nothing
    Wxapp,
}

impl Flavor {
    /// Binary name
    #[must_use]
    pub const fn binary_name(self) -> &'static str {
        match self {
            Self::Wemp => "wemp",
            Self::Wxapp => "wxapp",
        }
    }

    /// Template family generated by this tool
    #[must_use]
    pub fn family(self) -> Box<dyn TemplateFamily> {
        match self {
            Self::Wemp => Box::new(Wemp),
            Self::Wxapp => Box::new(Wxapp),
        }
    }

    /// Whether `--init` without a project name is an error
    #[must_use]
    pub const fn init_requires_name(self) -> bool {
        matches!(self, Self::Wemp)
    }
}

/// Command-line flags
///
/// Flags combine freely; the resulting actions always run in the order
/// init, page, remove-page, component, remove-component.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Scaffold mini-program projects, pages and components", long_about = None)]
pub struct Cli {
    /// Create a new project from the remote template
    #[arg(short, long, value_name = "NAME", num_args = 0..=1)]
    pub init: Option<Option<String>>,

    /// Create a new page and register it in app.json
    #[arg(short, long, value_name = "NAME")]
    pub page: Option<String>,

    /// Remove one page, or all pages when no name is given
    #[arg(short = 'R', long, value_name = "NAME", num_args = 0..=1)]
    pub remove_page: Option<Option<String>>,

    /// Create a new component
    #[arg(short, long, value_name = "NAME")]
    pub component: Option<String>,

    /// Remove one component, or all components when no name is given
    #[arg(short = 'r', long, value_name = "NAME", num_args = 0..=1)]
    pub remove_component: Option<Option<String>>,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Answer yes to the remove-all confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One unit of work requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `--init [NAME]`
    Init(Option<String>),
    /// `--page NAME`
    CreatePage(String),
    /// `--remove-page [NAME]`
    RemovePage(Option<String>),
    /// `--component NAME`
    CreateComponent(String),
    /// `--remove-component [NAME]`
    RemoveComponent(Option<String>),
}

impl Cli {
    /// Requested actions in execution order
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(name) = &self.init {
            actions.push(Action::Init(name.clone()));
        }
        if let Some(name) = &self.page {
            actions.push(Action::CreatePage(name.clone()));
        }
        if let Some(name) = &self.remove_page {
            actions.push(Action::RemovePage(name.clone()));
        }
        if let Some(name) = &self.component {
            actions.push(Action::CreateComponent(name.clone()));
        }
        if let Some(name) = &self.remove_component {
            actions.push(Action::RemoveComponent(name.clone()));
        }
        actions
    }
}

/// Run every action, reporting each failure without stopping
///
/// Returns the number of failed actions.
pub fn dispatch(workspace: &Workspace<'_>, actions: &[Action]) -> usize {
    let mut failures = 0;

    for action in actions {
        let result = match action {
            Action::Init(name) => NewCommand::new(name.clone()).execute(workspace),
            Action::CreatePage(name) => {
                GenerateCommand::new(ArtifactKind::Page, name.clone()).execute(workspace)
            }
            Action::RemovePage(name) => {
                RemoveCommand::new(ArtifactKind::Page, name.clone()).execute(workspace)
            }
            Action::CreateComponent(name) => {
                GenerateCommand::new(ArtifactKind::Component, name.clone()).execute(workspace)
            }
            Action::RemoveComponent(name) => {
                RemoveCommand::new(ArtifactKind::Component, name.clone()).execute(workspace)
            }
        };

        if let Err(err) = result {
            tracing::debug!(?action, error = ?err, "action failed");
            eprintln!("{} {err:#}", style("✗").red().bold());
            failures += 1;
        }
    }

    failures
}

/// Entry point shared by the binaries
#[must_use]
pub fn run(flavor: Flavor) -> ExitCode {
    let cli = Cli::parse();
    observability::init(cli.verbose);

    match execute(flavor, &cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {err:#}", style("✗").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn execute(flavor: Flavor, cli: &Cli) -> Result<usize> {
    let actions = cli.actions();
    if actions.is_empty() {
        Cli::command()
            .name(flavor.binary_name())
            .print_help()
            .context("Failed to print help")?;
        return Ok(0);
    }

    // The only place the process working directory is read
    let project_root = match &cli.project_root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let assume_yes = FixedAnswer(true);
    let terminal = TerminalConfirm;
    let confirmer: &dyn Confirmer = if cli.yes { &assume_yes } else { &terminal };
    let fetcher = TarballFetcher::new();
    let workspace = Workspace::new(flavor, &project_root, confirmer, &fetcher)?;

    Ok(dispatch(&workspace, &actions))
}
