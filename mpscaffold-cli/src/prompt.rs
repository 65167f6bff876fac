//! Interactive confirmation

use dialoguer::Confirm;
use mpscaffold::{Confirmer, ScaffoldError};

/// Asks yes/no questions on the terminal, defaulting to no
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirmer for TerminalConfirm {
    fn confirm(&self, question: &str) -> mpscaffold::Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|e| ScaffoldError::Prompt(e.to_string()))
    }
}
