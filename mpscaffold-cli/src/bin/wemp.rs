//! wemp: scaffolding with stylus templates

use mpscaffold_cli::Flavor;
use std::process::ExitCode;

fn main() -> ExitCode {
    mpscaffold_cli::run(Flavor::Wemp)
}
