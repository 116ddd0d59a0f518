// src/tokens.rs
use std::sync::LazyLock;

use tiktoken_rs::CoreBPE;
use tracing::error;

/// The tokenizer encoding (`cl100k_base`).
/// Initialization is deferred until first use. If the encoding fails to load,
/// counts fall back to a bytes/4 estimate.
static BPE: LazyLock<Option<CoreBPE>> = LazyLock::new(|| {
    tiktoken_rs::cl100k_base()
        .map_err(|e| error!("failed to load cl100k_base tokenizer: {e}"))
        .ok()
});

pub struct Tokenizer;

impl Tokenizer {
    /// Counts the number of tokens in the given text.
    #[must_use]
    pub fn count(text: &str) -> usize {
        BPE.as_ref().map_or_else(
            || Self::estimate(text),
            |bpe| bpe.encode_ordinary(text).len(),
        )
    }

    /// Rough count used when no encoder is available.
    #[must_use]
    pub fn estimate(text: &str) -> usize {
        text.len().div_ceil(4)
    }
}
