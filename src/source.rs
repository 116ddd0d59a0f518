// src/source.rs
//! Per-file handle kept between extraction and signature passes.

use std::fs;
use std::path::PathBuf;

use tree_sitter::{Parser, Tree};

use crate::discovery::Discovered;
use crate::error::{Result, WingmanError};
use crate::lang::Lang;

/// Source bytes plus identity. Trees are produced on demand by [`SourceFile::parse`]
/// and owned by the caller, so no tree outlives the pass that needed it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub id: String,
    pub path: PathBuf,
    pub lang: Lang,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        path: impl Into<PathBuf>,
        lang: Lang,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            lang,
            bytes,
        }
    }

    /// Reads a discovered file from disk.
    ///
    /// # Errors
    /// Returns `FileReadFailed` if the file cannot be read.
    pub fn read(found: &Discovered) -> Result<Self> {
        let bytes = fs::read(&found.path).map_err(|e| WingmanError::read(&found.path, e))?;
        Ok(Self::new(found.id.clone(), found.path.clone(), found.lang, bytes))
    }

    /// Parses the bytes with this file's grammar.
    ///
    /// # Errors
    /// Returns `ParserInitializationFailed` if the grammar cannot be loaded
    /// or the parser yields no tree.
    pub fn parse(&self) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.lang.grammar())
            .map_err(|e| WingmanError::ParserInitializationFailed {
                lang: self.lang,
                reason: e.to_string(),
            })?;
        parser
            .parse(&self.bytes, None)
            .ok_or_else(|| WingmanError::ParserInitializationFailed {
                lang: self.lang,
                reason: format!("no syntax tree produced for {}", self.id),
            })
    }

    #[must_use]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}
