use chapterize_ingest::{BookIngestor, IngestError, IngestStats};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const CHAPTER_ONE: &str = "\
## Working with Variables

Now it's time to declare a local variable.

### Listing 1.12: Declaring and Assigning a Variable

let max = \"Have fun storming the castle!\";

### Beginner Topic
#### Local Variables

A variable is a name that refers to a value that can change over time.
";

const CHAPTER_TWO: &str = "\
## Operators

Operators are symbols used to identify the function the code is to perform.
";

#[test]
fn ingests_matching_files_and_keeps_all_fragments() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Chapter01.md"), CHAPTER_ONE).unwrap();
    fs::write(temp.path().join("Chapter02.md"), CHAPTER_TWO).unwrap();
    fs::write(temp.path().join("notes.txt"), "not markdown").unwrap();

    let ingestor = BookIngestor::default();
    let results = ingestor.ingest_directory(temp.path(), "*.md").unwrap();

    assert_eq!(results.len(), 2);
    let all_chunks: Vec<&str> = results
        .iter()
        .flat_map(|r| r.chunks.iter().map(String::as_str))
        .collect();
    let joined = all_chunks.join("\n");
    assert!(joined.contains("declare a local variable"));
    assert!(joined.contains("storming the castle"));
    assert!(joined.contains("a value that can change over time"));
    assert!(joined.contains("symbols used to identify the function"));

    // The listing merged into its section rather than becoming one of its own.
    assert!(!all_chunks
        .iter()
        .any(|c| c.starts_with("Working with Variables: Listing 1.12")));

    let stats = IngestStats::from_results(&results);
    assert_eq!(stats.files, 2);
    assert!(stats.chunks >= 3);
}

#[test]
fn builds_records_with_chapter_numbers_hashes_and_fresh_ids() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Chapter01.md"), CHAPTER_ONE).unwrap();
    fs::write(temp.path().join("Chapter02.md"), CHAPTER_TWO).unwrap();

    let ingestor = BookIngestor::default();
    let first = ingestor.ingest_to_records(temp.path(), "*.md").unwrap();
    let second = ingestor.ingest_to_records(temp.path(), "*.md").unwrap();

    assert!(first
        .iter()
        .all(|r| r.chapter_number == 1 || r.chapter_number == 2));
    assert!(first.iter().all(|r| r.content_hash.len() == 64));
    assert!(first.iter().all(|r| !r.heading.is_empty()));

    // Hashes are content-addressed; ids are minted per run.
    let hashes = |records: &[chapterize_ingest::BookContentChunk]| {
        let mut hs: Vec<String> = records.iter().map(|r| r.content_hash.clone()).collect();
        hs.sort();
        hs
    };
    assert_eq!(hashes(&first), hashes(&second));
    assert!(first
        .iter()
        .all(|a| second.iter().all(|b| a.id != b.id)));

    let json = serde_json::to_string(&first[0]).unwrap();
    let back: chapterize_ingest::BookContentChunk = serde_json::from_str(&json).unwrap();
    assert_eq!(back, first[0]);
}

#[test]
fn missing_directory_is_fatal() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("nope");

    let err = BookIngestor::default()
        .ingest_directory(&missing, "*.md")
        .unwrap_err();
    assert!(matches!(err, IngestError::InvalidPath(_)));
}

#[test]
fn zero_matches_is_fatal_not_empty_success() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Chapter01.md"), CHAPTER_ONE).unwrap();

    let err = BookIngestor::default()
        .ingest_directory(temp.path(), "*.rst")
        .unwrap_err();
    assert!(matches!(err, IngestError::NoFilesMatched { .. }));
}

#[test]
fn file_without_chapter_number_fails_record_conversion() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Intro.md"), CHAPTER_TWO).unwrap();

    let err = BookIngestor::default()
        .ingest_to_records(temp.path(), "*.md")
        .unwrap_err();
    assert!(matches!(err, IngestError::MissingChapterNumber(_)));
}

#[test]
fn invalid_pattern_is_reported_as_configuration_error() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("Chapter01.md"), CHAPTER_ONE).unwrap();

    let err = BookIngestor::default()
        .ingest_directory(temp.path(), "[")
        .unwrap_err();
    assert!(matches!(err, IngestError::InvalidPattern { .. }));
}
