use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Token budgets for the paragraph splitter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkingConfig {
    /// Hard per-chunk token limit. The chunk header's token cost is charged
    /// against this limit for every chunk.
    pub max_tokens_per_chunk: usize,

    /// Tokens re-included from the tail of the previous chunk when a new
    /// chunk opens, preserving local context across boundaries.
    pub overlap_tokens: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_tokens_per_chunk: 256,
            overlap_tokens: 25,
        }
    }
}

impl ChunkingConfig {
    /// Config for larger retrieval contexts (fewer, bigger chunks).
    #[must_use]
    pub fn for_wide_context() -> Self {
        Self {
            max_tokens_per_chunk: 1024,
            overlap_tokens: 50,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens_per_chunk == 0 {
            return Err(ChunkerError::InvalidConfig(
                "max_tokens_per_chunk must be > 0".to_string(),
            ));
        }

        if self.overlap_tokens >= self.max_tokens_per_chunk {
            return Err(ChunkerError::InvalidConfig(format!(
                "overlap_tokens ({}) must be smaller than max_tokens_per_chunk ({})",
                self.overlap_tokens, self.max_tokens_per_chunk
            )));
        }

        Ok(())
    }
}
