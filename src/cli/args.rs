use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wingman", version, about = "Ranked repository context for AI assistants")]
pub struct Cli {
    /// Log every phase and file at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print files in ranked order with their signatures
    Map {
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Emit the map as JSON
        #[arg(long)]
        json: bool,
        /// Show only the top N files
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
    /// Assemble the prompt for a question about the repository
    Prompt {
        #[arg(default_value = ".")]
        root: PathBuf,
        #[arg(long, short)]
        query: String,
        /// Include a file verbatim after the map
        #[arg(long, value_name = "FILE")]
        attach: Vec<PathBuf>,
        /// Model whose context window sets the budget
        #[arg(long)]
        model: Option<String>,
        /// Token budget, overriding the model window
        #[arg(long, value_name = "N")]
        budget: Option<usize>,
    },
}
