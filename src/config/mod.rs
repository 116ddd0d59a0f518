// src/config/mod.rs
pub mod types;

pub use self::types::{ContextConfig, FailurePolicy, ScanConfig, WingmanToml};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;

use crate::constants::{should_prune, CONFIG_FILE};
use crate::error::{Result, WingmanError};
use crate::llm::ModelProfile;

/// Settings for one run. Built once and shared read-only by every phase.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub scan: ScanConfig,
    pub context: ContextConfig,
    exclude_patterns: Vec<Regex>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `wingman.toml` from `root`, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` if the file exists but cannot be read or
    /// parsed, or `Regex` if an exclude pattern does not compile.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse_toml(&content, &path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(WingmanError::ConfigInvalid {
                path,
                reason: e.to_string(),
            }),
        }
    }

    /// Parses config text; `origin` is only used in error messages.
    ///
    /// # Errors
    /// Returns `ConfigInvalid` on malformed TOML or `Regex` on a bad pattern.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        let raw: WingmanToml =
            toml::from_str(content).map_err(|e| WingmanError::ConfigInvalid {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::from_parts(raw.scan, raw.context)
    }

    /// Builds a config from already-deserialized sections.
    ///
    /// # Errors
    /// Returns `Regex` if an exclude pattern does not compile.
    pub fn from_parts(scan: ScanConfig, context: ContextConfig) -> Result<Self> {
        let exclude_patterns = scan
            .exclude
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            scan,
            context,
            exclude_patterns,
        })
    }

    #[must_use]
    pub fn should_skip_dir(&self, name: &str) -> bool {
        should_prune(name) || self.scan.skip_dirs.iter().any(|d| d == name)
    }

    /// True if a root-relative path matches any exclude pattern.
    #[must_use]
    pub fn is_excluded(&self, rel: &str) -> bool {
        self.exclude_patterns.iter().any(|re| re.is_match(rel))
    }

    /// Tokens available to the prompt after keeping room for the reply.
    #[must_use]
    pub fn token_budget(&self) -> usize {
        let window = self
            .context
            .token_budget
            .unwrap_or_else(|| ModelProfile::for_model(&self.context.model).context_window);
        window.saturating_sub(self.context.response_reserve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.scan.on_error, FailurePolicy::Abort);
        assert!(config.scan.parallel);
        assert_eq!(config.token_budget(), 200_000 - 4096);
    }

    #[test]
    fn test_parse_sections() {
        let text = r#"
[scan]
skip_dirs = ["generated"]
exclude = ["_test\\.go$"]
on_error = "skip"

[context]
model = "gpt-4o"
response_reserve = 1000
"#;
        let config = Config::parse_toml(text, &PathBuf::from("wingman.toml")).unwrap();
        assert_eq!(config.scan.on_error, FailurePolicy::Skip);
        assert!(config.should_skip_dir("generated"));
        assert!(config.should_skip_dir(".git"));
        assert!(config.is_excluded("pkg/foo_test.go"));
        assert!(!config.is_excluded("pkg/foo.go"));
        assert_eq!(config.token_budget(), 128_000 - 1000);
    }

    #[test]
    fn test_budget_override() {
        let text = "[context]\ntoken_budget = 500\nresponse_reserve = 100\n";
        let config = Config::parse_toml(text, &PathBuf::from("wingman.toml")).unwrap();
        assert_eq!(config.token_budget(), 400);
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::parse_toml("[scan\n", &PathBuf::from("wingman.toml")).unwrap_err();
        assert!(matches!(err, WingmanError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_bad_exclude_pattern() {
        let text = "[scan]\nexclude = [\"(\"]\n";
        let err = Config::parse_toml(text, &PathBuf::from("wingman.toml")).unwrap_err();
        assert!(matches!(err, WingmanError::Regex(_)));
    }
}
