// src/cli/handlers.rs
use crate::config::Config;
use crate::context::ContextEngine;
use crate::exit::WingmanExit;
use crate::map;
use crate::prompt::{Attachment, PromptRequest};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PromptArgs {
    pub root: PathBuf,
    pub query: String,
    pub attach: Vec<PathBuf>,
    pub model: Option<String>,
    pub budget: Option<usize>,
}

/// Handles the map command.
///
/// # Errors
/// Returns error if config loading or the pipeline fails.
pub fn handle_map(root: &Path, json: bool, limit: Option<usize>) -> Result<WingmanExit> {
    let engine = ContextEngine::new(Config::load(root)?);
    let mut context = engine.run(root)?;

    if json {
        if let Some(n) = limit {
            context.entries.truncate(n);
        }
        println!("{}", serde_json::to_string_pretty(&context)?);
    } else {
        print!("{}", map::render(&context, limit));
    }
    Ok(WingmanExit::Success)
}

/// Handles the prompt command.
///
/// # Errors
/// Returns error if an attachment cannot be read or the pipeline fails.
pub fn handle_prompt(args: &PromptArgs) -> Result<WingmanExit> {
    let mut config = Config::load(&args.root)?;
    if let Some(model) = &args.model {
        config.context.model.clone_from(model);
    }
    if args.budget.is_some() {
        config.context.token_budget = args.budget;
    }

    let attachments = args
        .attach
        .iter()
        .map(|p| Attachment::read(p).with_context(|| format!("attaching {}", p.display())))
        .collect::<Result<Vec<_>>>()?;

    let request = PromptRequest {
        root: args.root.clone(),
        query: args.query.clone(),
        attachments,
    };
    let prompt = ContextEngine::new(config).prompt(&request)?;

    println!("{}", prompt.text);
    eprintln!(
        "{} {} / {} tokens, {} files",
        "prompt:".green().bold(),
        prompt.tokens,
        prompt.budget,
        prompt.included_files.len()
    );

    if !prompt.is_truncated() {
        return Ok(WingmanExit::Success);
    }
    for id in prompt.omitted_files.iter().chain(&prompt.omitted_attachments) {
        eprintln!("  {} {id}", "omitted".yellow());
    }
    Ok(WingmanExit::Truncated)
}
