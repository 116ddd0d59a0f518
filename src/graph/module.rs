// src/graph/module.rs
//! Go module descriptor (`go.mod`) lookup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::MODULE_DESCRIPTOR;
use crate::error::{Result, WingmanError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub path: PathBuf,
    pub name: String,
}

impl ModuleDescriptor {
    /// Finds and parses the nearest `go.mod` at or above `file`.
    ///
    /// # Errors
    /// Returns `ModuleDescriptorNotFound` if no descriptor exists up to the
    /// filesystem root, or `ModuleDescriptorUnreadable` if it cannot be read
    /// or its first line is not `module <name>`.
    pub fn load(file: &Path) -> Result<Self> {
        let path = locate(file)?;
        let content =
            fs::read_to_string(&path).map_err(|e| WingmanError::ModuleDescriptorUnreadable {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        let name = parse_module_name(&content, &path)?;
        Ok(Self { path, name })
    }
}

/// Searches parent directories upward from `file` for a module descriptor.
///
/// # Errors
/// Returns `ModuleDescriptorNotFound` when the filesystem root is reached.
pub fn locate(file: &Path) -> Result<PathBuf> {
    let start = if file.is_dir() {
        file
    } else {
        file.parent().unwrap_or(file)
    };

    start
        .ancestors()
        .map(|dir| dir.join(MODULE_DESCRIPTOR))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| WingmanError::ModuleDescriptorNotFound {
            start: start.to_path_buf(),
        })
}

/// Reads the module name from the descriptor's first line.
///
/// # Errors
/// Returns `ModuleDescriptorUnreadable` if that line has no module name.
pub fn parse_module_name(content: &str, path: &Path) -> Result<String> {
    let first = content.lines().next().unwrap_or_default();
    let mut parts = first.split_whitespace();

    match (parts.next(), parts.next()) {
        (Some("module"), Some(name)) => Ok(name.trim_matches('"').to_string()),
        _ => Err(WingmanError::ModuleDescriptorUnreadable {
            path: path.to_path_buf(),
            reason: format!("expected `module <name>` on first line, found {first:?}"),
        }),
    }
}
