// src/constants.rs
//! Fixed names shared by discovery and extraction.

/// Directories never descended into: version control and tool state.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".aider",
    ".wingman",
    ".idea",
    ".vscode",
    "node_modules",
    "target",
    "vendor",
    ".venv",
    "venv",
    "__pycache__",
    ".cache",
];

/// Go module descriptor file name.
pub const MODULE_DESCRIPTOR: &str = "go.mod";

/// Per-repository configuration file name.
pub const CONFIG_FILE: &str = "wingman.toml";

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}
