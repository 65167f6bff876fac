//! wxapp: scaffolding with less templates

use mpscaffold_cli::Flavor;
use std::process::ExitCode;

fn main() -> ExitCode {
    mpscaffold_cli::run(Flavor::Wxapp)
}
