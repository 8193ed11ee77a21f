use serde::{Deserialize, Serialize};

/// Chunking outcome for a single markdown file.
///
/// Read-only after construction; used for reporting and as the input to
/// downstream record conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileChunkingResult {
    /// File name as enumerated (e.g. `Chapter01.md`).
    pub file_name: String,

    /// Full path the file was read from.
    pub file_path: String,

    /// Character count of the normalized content (blank lines removed).
    pub original_char_count: usize,

    /// Number of chunks produced.
    pub chunk_count: usize,

    /// Header-prefixed chunk texts in emission order.
    pub chunks: Vec<String>,

    /// Combined character count across all chunks (overlap included).
    pub total_chunk_characters: usize,
}
