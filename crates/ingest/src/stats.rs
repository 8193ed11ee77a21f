use chapterize_chunker::FileChunkingResult;
use serde::{Deserialize, Serialize};

/// Aggregate statistics across one ingest run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestStats {
    /// Number of files processed
    pub files: usize,

    /// Number of chunks created
    pub chunks: usize,

    /// Characters of normalized input across all files
    pub original_chars: usize,

    /// Characters across all emitted chunks (headers and overlap included)
    pub chunk_chars: usize,
}

impl IngestStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: &FileChunkingResult) {
        self.files += 1;
        self.chunks += result.chunk_count;
        self.original_chars += result.original_char_count;
        self.chunk_chars += result.total_chunk_characters;
    }

    #[must_use]
    pub fn from_results(results: &[FileChunkingResult]) -> Self {
        let mut stats = Self::new();
        for result in results {
            stats.add_result(result);
        }
        stats
    }
}

impl std::fmt::Display for IngestStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Files: {} | Chunks: {} | Chars: {} -> {}",
            self.files, self.chunks, self.original_chars, self.chunk_chars
        )
    }
}
