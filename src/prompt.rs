// src/prompt.rs
//! Assembles the single text payload handed to the language model.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::context::{ContextMap, RankedFile};
use crate::error::{Result, WingmanError};
use crate::tokens::Tokenizer;

pub const PREAMBLE: &str = "You are assisting with a source repository. Below is a map of its most \
important files, ordered from most to least central, each followed by the \
signatures of the functions and methods it declares. Files the user attached \
in full follow the map.\n\n";

const QUERY_HEADER: &str =
    "\n\nNow answer the below question keeping in mind the above context\n\n";

/// A file the user asked to include verbatim.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub path: String,
    pub content: String,
}

impl Attachment {
    /// # Errors
    /// Returns `FileReadFailed` if the file cannot be read as UTF-8.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| WingmanError::read(path, e))?;
        Ok(Self {
            path: path.display().to_string(),
            content,
        })
    }
}

/// Everything needed to ask one question about one repository.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub root: PathBuf,
    pub query: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub text: String,
    pub tokens: usize,
    pub budget: usize,
    pub included_files: Vec<String>,
    pub omitted_files: Vec<String>,
    pub omitted_attachments: Vec<String>,
}

impl Prompt {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        !self.omitted_files.is_empty() || !self.omitted_attachments.is_empty()
    }
}

/// Packs blocks in order until the first one that does not fit; that block
/// and every later one are omitted.
pub struct PromptBuilder {
    budget: usize,
}

impl PromptBuilder {
    #[must_use]
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }

    #[must_use]
    pub fn build(&self, map: &ContextMap, attachments: &[Attachment], query: &str) -> Prompt {
        let footer = format!("{QUERY_HEADER}{query}");
        let mut used = Tokenizer::count(PREAMBLE) + Tokenizer::count(&footer);
        let mut full = used > self.budget;

        let mut kept: Vec<Block> = Vec::new();
        let mut omitted_files = Vec::new();
        for entry in &map.entries {
            let text = file_block(entry);
            if try_fit(&mut used, &mut full, self.budget, &text) {
                kept.push(Block::file(&entry.id, text));
            } else {
                omitted_files.push(entry.id.clone());
            }
        }

        let mut omitted_attachments = Vec::new();
        for attachment in attachments {
            let text = attachment_block(attachment);
            if try_fit(&mut used, &mut full, self.budget, &text) {
                kept.push(Block::attachment(&attachment.path, text));
            } else {
                omitted_attachments.push(attachment.path.clone());
            }
        }

        // Block counts are summed separately; merges at block seams can push
        // the joined text over, so trailing blocks go until it fits again.
        let mut text = assemble(&kept, &footer);
        let mut tokens = Tokenizer::count(&text);
        while tokens > self.budget {
            let Some(last) = kept.pop() else { break };
            full = true;
            if last.is_file {
                omitted_files.insert(0, last.id);
            } else {
                omitted_attachments.insert(0, last.id);
            }
            text = assemble(&kept, &footer);
            tokens = Tokenizer::count(&text);
        }

        if full {
            warn!(
                budget = self.budget,
                files = omitted_files.len(),
                attachments = omitted_attachments.len(),
                "prompt budget reached, blocks omitted"
            );
        }

        Prompt {
            included_files: kept.into_iter().filter(|b| b.is_file).map(|b| b.id).collect(),
            text,
            tokens,
            budget: self.budget,
            omitted_files,
            omitted_attachments,
        }
    }
}

struct Block {
    id: String,
    text: String,
    is_file: bool,
}

impl Block {
    fn file(id: &str, text: String) -> Self {
        Self {
            id: id.to_string(),
            text,
            is_file: true,
        }
    }

    fn attachment(path: &str, text: String) -> Self {
        Self {
            id: path.to_string(),
            text,
            is_file: false,
        }
    }
}

fn assemble(blocks: &[Block], footer: &str) -> String {
    let mut out = String::from(PREAMBLE);
    for block in blocks {
        out.push_str(&block.text);
    }
    out.push_str(footer);
    out
}

fn try_fit(used: &mut usize, full: &mut bool, budget: usize, block: &str) -> bool {
    if *full {
        return false;
    }
    let cost = Tokenizer::count(block);
    if *used + cost > budget {
        *full = true;
        return false;
    }
    *used += cost;
    true
}

fn file_block(entry: &RankedFile) -> String {
    let mut out = format!("{}:\n", entry.id);
    for sig in &entry.signatures {
        let _ = writeln!(out, "  {sig}");
    }
    out.push('\n');
    out
}

fn attachment_block(attachment: &Attachment) -> String {
    format!("--- {} ---\n{}\n\n", attachment.path, attachment.content)
}
