use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Chunker error: {0}")]
    Chunker(#[from] chapterize_chunker::ChunkerError),

    #[error("Content directory does not exist: {0}")]
    InvalidPath(String),

    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("No files matching pattern '{pattern}' found in '{dir}'")]
    NoFilesMatched { pattern: String, dir: String },

    #[error("File name '{0}' does not contain a chapter number in the expected ChapterNN format")]
    MissingChapterNumber(String),
}
