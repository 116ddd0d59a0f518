// src/llm.rs
//! The language-model collaborator seen from the context engine: a single
//! `send` call plus the context window of the selected model.

use crate::error::Result;

/// Anything that can answer a fully assembled prompt.
pub trait LlmClient {
    /// Sends the prompt text and returns the model's reply.
    ///
    /// # Errors
    /// Implementations report transport or API failures as `WingmanError::Llm`.
    fn send(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelProfile {
    pub context_window: usize,
}

impl ModelProfile {
    /// Looks up the context window by model-name prefix.
    #[must_use]
    pub fn for_model(model: &str) -> Self {
        let context_window = if model.starts_with("claude") {
            200_000
        } else if model.starts_with("gpt-4o") || model.starts_with("gpt-4.1") {
            128_000
        } else if model.starts_with("gpt-4") {
            8_192
        } else if model.starts_with("gpt") {
            16_385
        } else {
            32_000
        };
        Self { context_window }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles() {
        assert_eq!(ModelProfile::for_model("claude-sonnet-4").context_window, 200_000);
        assert_eq!(ModelProfile::for_model("gpt-4o-mini").context_window, 128_000);
        assert_eq!(ModelProfile::for_model("gpt-4").context_window, 8_192);
        assert_eq!(ModelProfile::for_model("gpt-3.5-turbo").context_window, 16_385);
        assert_eq!(ModelProfile::for_model("llama3").context_window, 32_000);
    }
}
