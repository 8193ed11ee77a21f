use crate::config::ChunkingConfig;
use crate::error::Result;
use crate::section::markdown_to_sections;
use crate::splitter::split_section_lines;
use crate::types::FileChunkingResult;
use std::path::Path;

/// Main entry point for turning book-chapter markdown into chunks.
pub struct MarkdownChunker {
    config: ChunkingConfig,
}

impl MarkdownChunker {
    /// Create a new chunker with configuration
    #[must_use]
    pub fn new(config: ChunkingConfig) -> Self {
        config
            .validate()
            .expect("Invalid chunking configuration provided");
        Self { config }
    }

    /// Chunk a file's raw lines.
    ///
    /// Lines are trimmed and blank lines dropped before sectioning: blank
    /// lines only ever delimit paragraphs, they are never content. Each
    /// section is then split under the `"{header_path} - "` prefix and all
    /// chunks are concatenated in section order.
    #[must_use]
    pub fn chunk_lines(
        &self,
        file_content: &[String],
        file_name: &str,
        file_path: &str,
    ) -> FileChunkingResult {
        let lines: Vec<String> = file_content
            .iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        let content = lines.join("\n");

        let sections = markdown_to_sections(&content);
        let mut chunks = Vec::new();
        for section in &sections {
            let header = format!("{} - ", section.header_path);
            chunks.extend(split_section_lines(&section.content, &header, &self.config));
        }

        log::debug!(
            "Chunked {file_name}: {} sections -> {} chunks",
            sections.len(),
            chunks.len()
        );

        let total_chunk_characters = chunks.iter().map(|c| c.chars().count()).sum();
        FileChunkingResult {
            file_name: file_name.to_string(),
            file_path: file_path.to_string(),
            original_char_count: content.chars().count(),
            chunk_count: chunks.len(),
            chunks,
            total_chunk_characters,
        }
    }

    /// Chunk markdown from a string
    #[must_use]
    pub fn chunk_str(&self, content: &str, file_name: &str, file_path: &str) -> FileChunkingResult {
        let lines: Vec<String> = content
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .split('\n')
            .map(str::to_string)
            .collect();
        self.chunk_lines(&lines, file_name, file_path)
    }

    /// Chunk markdown from a file
    pub fn chunk_file(&self, path: impl AsRef<Path>) -> Result<FileChunkingResult> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown");
        let file_path = path.to_str().unwrap_or("unknown");
        Ok(self.chunk_str(&content, file_name, file_path))
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkingConfig {
        &self.config
    }
}

impl Default for MarkdownChunker {
    fn default() -> Self {
        Self::new(ChunkingConfig::default())
    }
}
