use crate::error::{IngestError, Result};
use chapterize_chunker::FileChunkingResult;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

static CHAPTER_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chapter(\d{2})").expect("chapter pattern is valid"));

/// A chunk record ready for embedding and vector-store upsert.
///
/// `id` is an opaque key regenerated on every run; re-chunking the same
/// content yields new ids but identical `content_hash` values, so any
/// downstream dedup must key on the hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookContentChunk {
    /// Opaque unique key for upsert.
    pub id: String,

    /// Source file name, usable as a store-side filter.
    pub file_name: String,

    /// Outermost heading of the chunk's header path.
    pub heading: String,

    /// Full header-prefixed chunk text.
    pub chunk_text: String,

    /// Chapter number parsed from the file name.
    pub chapter_number: u32,

    /// Lowercase-hex SHA-256 of `chunk_text`; the stable dedup key.
    pub content_hash: String,
}

/// Convert one file's chunking result into vector-store records.
///
/// Fails for the whole file when its name carries no chapter number: the
/// input set is contractually `ChapterNN`-named, so a mismatch is a
/// configuration problem rather than a per-chunk data problem.
pub fn book_content_chunks(result: &FileChunkingResult) -> Result<Vec<BookContentChunk>> {
    let chapter_number = extract_chapter_number(&result.file_name)?;

    Ok(result
        .chunks
        .iter()
        .map(|chunk_text| BookContentChunk {
            id: Uuid::new_v4().to_string(),
            file_name: result.file_name.clone(),
            heading: extract_heading(chunk_text),
            chunk_text: chunk_text.clone(),
            chapter_number,
            content_hash: sha256_hex(chunk_text),
        })
        .collect())
}

/// Parse the two-digit chapter number out of a file name like `Chapter01.md`.
pub fn extract_chapter_number(file_name: &str) -> Result<u32> {
    CHAPTER_NUMBER_RE
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| IngestError::MissingChapterNumber(file_name.to_string()))
}

/// First line of the chunk up to the first `" - "`, trimmed.
fn extract_heading(chunk_text: &str) -> String {
    let first_line = chunk_text.lines().next().unwrap_or("");
    first_line
        .split(" - ")
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    to_lower_hex(&hasher.finalize())
}

fn to_lower_hex(bytes: &[u8]) -> String {
    const LUT: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(LUT[(byte >> 4) as usize] as char);
        out.push(LUT[(byte & 0x0f) as usize] as char);
    }
    out
}
