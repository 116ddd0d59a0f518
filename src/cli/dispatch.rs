//! Command dispatch logic extracted from the binary.

use super::args::Commands;
use super::handlers::{handle_map, handle_prompt, PromptArgs};
use crate::exit::WingmanExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<WingmanExit> {
    match command {
        Commands::Map { root, json, limit } => handle_map(&root, json, limit),
        Commands::Prompt {
            root,
            query,
            attach,
            model,
            budget,
        } => handle_prompt(&PromptArgs {
            root,
            query,
            attach,
            model,
            budget,
        }),
    }
}
