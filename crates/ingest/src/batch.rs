use crate::error::{IngestError, Result};
use crate::records::{book_content_chunks, BookContentChunk};
use chapterize_chunker::{ChunkingConfig, FileChunkingResult, MarkdownChunker};
use glob::Pattern;
use std::path::Path;

/// Batch ingestor that chunks every matching file in a content directory.
///
/// Files are processed sequentially in directory enumeration order; within
/// a file, chunk order is the chunker's deterministic emission order.
pub struct BookIngestor {
    chunker: MarkdownChunker,
}

impl BookIngestor {
    #[must_use]
    pub fn new(config: ChunkingConfig) -> Self {
        Self {
            chunker: MarkdownChunker::new(config),
        }
    }

    /// Chunk all files directly under `dir` whose names match `pattern`.
    ///
    /// A missing directory, an invalid pattern, or zero matching files are
    /// all fatal: they indicate the input set is misconfigured, not that a
    /// single file is malformed.
    pub fn ingest_directory(
        &self,
        dir: impl AsRef<Path>,
        pattern: &str,
    ) -> Result<Vec<FileChunkingResult>> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(IngestError::InvalidPath(dir.display().to_string()));
        }

        let matcher = Pattern::new(pattern).map_err(|source| IngestError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut results = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                log::warn!(
                    "Skipping file with non-UTF-8 name: {}",
                    entry.path().display()
                );
                continue;
            };
            if !matcher.matches(file_name) {
                continue;
            }

            let path = entry.path();
            let content = std::fs::read_to_string(&path)?;
            let result = self
                .chunker
                .chunk_str(&content, file_name, path.to_str().unwrap_or(file_name));
            log::debug!("{file_name}: {} chunks", result.chunk_count);
            results.push(result);
        }

        if results.is_empty() {
            return Err(IngestError::NoFilesMatched {
                pattern: pattern.to_string(),
                dir: dir.display().to_string(),
            });
        }

        let total_chunks: usize = results.iter().map(|r| r.chunk_count).sum();
        log::info!(
            "Processed {} markdown files with a total of {total_chunks} chunks",
            results.len()
        );

        Ok(results)
    }

    /// Chunk a directory and convert every result into upsert-ready records.
    pub fn ingest_to_records(
        &self,
        dir: impl AsRef<Path>,
        pattern: &str,
    ) -> Result<Vec<BookContentChunk>> {
        let results = self.ingest_directory(dir, pattern)?;

        let mut records = Vec::new();
        for result in &results {
            records.extend(book_content_chunks(result)?);
        }
        Ok(records)
    }

    /// Get the underlying chunker
    #[must_use]
    pub const fn chunker(&self) -> &MarkdownChunker {
        &self.chunker
    }
}

impl Default for BookIngestor {
    fn default() -> Self {
        Self::new(ChunkingConfig::default())
    }
}
