use serde::{Deserialize, Serialize};

/// What the orchestrator does when a single file fails to read or parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run on the first failure.
    #[default]
    Abort,
    /// Record the failure and keep going without that file.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory names pruned in addition to the built-in list.
    #[serde(default)]
    pub skip_dirs: Vec<String>,
    /// Regexes matched against root-relative, `/`-separated paths.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub on_error: FailurePolicy,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_dirs: Vec::new(),
            exclude: Vec::new(),
            on_error: FailurePolicy::default(),
            parallel: default_parallel(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Overrides the model's context window when set.
    #[serde(default)]
    pub token_budget: Option<usize>,
    #[serde(default = "default_response_reserve")]
    pub response_reserve: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            token_budget: None,
            response_reserve: default_response_reserve(),
        }
    }
}

fn default_parallel() -> bool { true }
fn default_model() -> String { "claude-sonnet-4".to_string() }
fn default_response_reserve() -> usize { 4096 }

/// On-disk layout of `wingman.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WingmanToml {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub context: ContextConfig,
}
