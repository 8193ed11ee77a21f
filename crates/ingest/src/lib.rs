//! # Chapterize Ingest
//!
//! Batch ingestion of book-chapter markdown into upsert-ready chunk records.
//!
//! ## Pipeline
//!
//! ```text
//! Directory + glob pattern
//!     │
//!     ├──> File enumeration (top level, enumeration order)
//!     │      └─> ChapterNN.md files
//!     │
//!     ├──> Chunker (sections + token-budget splitting)
//!     │      └─> FileChunkingResult per file
//!     │
//!     └──> Record builder
//!            └─> BookContentChunk (uuid id, SHA-256 content hash)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use chapterize_ingest::BookIngestor;
//!
//! fn main() -> chapterize_ingest::Result<()> {
//!     let ingestor = BookIngestor::default();
//!     let records = ingestor.ingest_to_records("/books/chapters", "*.md")?;
//!
//!     println!("Built {} records", records.len());
//!     Ok(())
//! }
//! ```

mod batch;
mod error;
mod records;
mod stats;

pub use batch::BookIngestor;
pub use error::{IngestError, Result};
pub use records::{book_content_chunks, extract_chapter_number, BookContentChunk};
pub use stats::IngestStats;
