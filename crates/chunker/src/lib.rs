//! # Chapterize Chunker
//!
//! Section-aware chunking of book-chapter markdown for semantic search.
//!
//! ## Pipeline
//!
//! ```text
//! Raw file lines
//!     │
//!     ├──> Normalization (trim, drop blank lines)
//!     │
//!     ├──> Section Builder
//!     │    ├─> ATX heading classification
//!     │    ├─> Strict-nesting heading stack → "A: B: C" paths
//!     │    └─> "Listing N.N" exhibits merged into the prior section
//!     │
//!     └──> Paragraph Splitter (token budget + overlap)
//!          └─> Header-prefixed chunk strings → FileChunkingResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chapterize_chunker::{ChunkingConfig, MarkdownChunker};
//!
//! let chunker = MarkdownChunker::new(ChunkingConfig::default());
//!
//! let markdown = "\
//! ## Main Method
//! The location where programs begin execution.";
//!
//! let result = chunker.chunk_str(markdown, "Chapter01.md", "/books/Chapter01.md");
//! assert_eq!(result.chunk_count, 1);
//! assert!(result.chunks[0].starts_with("Main Method - "));
//! ```

mod chunker;
mod config;
mod error;
mod heading;
mod section;
mod splitter;
mod types;

pub use chunker::MarkdownChunker;
pub use config::ChunkingConfig;
pub use error::{ChunkerError, Result};
pub use heading::Heading;
pub use section::{markdown_to_sections, Section};
pub use splitter::{estimate_tokens, split_section_lines};
pub use types::FileChunkingResult;
