use crate::error::{Error, ExtractError};
use crate::extraction::ZipExtractor;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a valid ZIP archive containing the given (name, content) file entries
fn create_zip_archive(archive_path: &Path, files: &[(&str, &[u8])]) {
    let file = std::fs::File::create(archive_path).unwrap();
    let mut writer = ::zip::ZipWriter::new(file);
    let options =
        ::zip::write::FileOptions::default().compression_method(::zip::CompressionMethod::Stored);
    for (name, content) in files {
        writer.start_file(*name, options).unwrap();
        std::io::Write::write_all(&mut writer, content).unwrap();
    }
    writer.finish().unwrap();
}

// ---------------------------------------------------------------------------
// Round-trip extraction
// ---------------------------------------------------------------------------

#[test]
fn round_trip_extracts_nested_entries_without_directory_records() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("photos.zip");
    // No explicit "dir/" entry precedes dir/b.txt; ancestors must be created
    // defensively before the write.
    create_zip_archive(&archive, &[("a.txt", b"hello"), ("dir/b.txt", b"world")]);

    let dest = temp_dir.path().join("photos");
    let files = ZipExtractor::extract(&archive, &dest).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(std::fs::read_to_string(dest.join("a.txt")).unwrap(), "hello");
    assert_eq!(
        std::fs::read_to_string(dest.join("dir/b.txt")).unwrap(),
        "world"
    );
    assert!(dest.join("dir").is_dir());
}

#[test]
fn extract_returns_written_paths() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("one.zip");
    create_zip_archive(&archive, &[("only.txt", b"content")]);

    let dest = temp_dir.path().join("one");
    let files = ZipExtractor::extract(&archive, &dest).unwrap();

    assert_eq!(files, vec![dest.join("only.txt")]);
}

#[test]
fn explicit_directory_entries_produce_no_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("tree.zip");

    let file = std::fs::File::create(&archive).unwrap();
    let mut writer = ::zip::ZipWriter::new(file);
    let options =
        ::zip::write::FileOptions::default().compression_method(::zip::CompressionMethod::Stored);
    writer.add_directory("docs", options).unwrap();
    writer.start_file("docs/readme.txt", options).unwrap();
    std::io::Write::write_all(&mut writer, b"read me").unwrap();
    writer.finish().unwrap();

    let dest = temp_dir.path().join("tree");
    let files = ZipExtractor::extract(&archive, &dest).unwrap();

    // Only the file entry counts as extracted output
    assert_eq!(files, vec![dest.join("docs/readme.txt")]);
    assert!(dest.join("docs").is_dir());
}

#[test]
fn empty_archive_creates_empty_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("empty.zip");
    create_zip_archive(&archive, &[]);

    let dest = temp_dir.path().join("empty");
    let files = ZipExtractor::extract(&archive, &dest).unwrap();

    assert!(files.is_empty());
    assert!(dest.is_dir());
    assert_eq!(std::fs::read_dir(&dest).unwrap().count(), 0);
}

// ---------------------------------------------------------------------------
// Hard failures
// ---------------------------------------------------------------------------

#[test]
fn pre_existing_output_directory_is_a_collision() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("photos.zip");
    create_zip_archive(&archive, &[("a.txt", b"hello")]);

    let dest = temp_dir.path().join("photos");
    std::fs::create_dir(&dest).unwrap();

    let err = ZipExtractor::extract(&archive, &dest).unwrap_err();
    assert!(matches!(
        err,
        Error::Extract(ExtractError::OutputDirFailed { .. })
    ));
    // The collision must not silently attribute files to the old directory
    assert!(!dest.join("a.txt").exists());
}

#[test]
fn corrupt_archive_fails_without_creating_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("broken.zip");
    std::fs::write(&archive, b"this is not a zip archive").unwrap();

    let dest = temp_dir.path().join("broken");
    let err = ZipExtractor::extract(&archive, &dest).unwrap_err();

    assert!(matches!(
        err,
        Error::Extract(ExtractError::OpenFailed { .. })
    ));
    // Open happens before directory creation, so nothing is left behind
    assert!(!dest.exists());
}

#[test]
fn missing_archive_is_an_open_failure() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("gone.zip");
    let dest = temp_dir.path().join("gone");

    let err = ZipExtractor::extract(&archive, &dest).unwrap_err();
    assert!(matches!(
        err,
        Error::Extract(ExtractError::OpenFailed { .. })
    ));
    assert!(!dest.exists());
}

// ---------------------------------------------------------------------------
// Unsafe entry names
// ---------------------------------------------------------------------------

#[test]
fn entries_escaping_the_destination_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("evil.zip");
    create_zip_archive(
        &archive,
        &[("../escape.txt", b"nope"), ("safe.txt", b"fine")],
    );

    let dest = temp_dir.path().join("evil");
    let files = ZipExtractor::extract(&archive, &dest).unwrap();

    assert_eq!(files, vec![dest.join("safe.txt")]);
    assert!(!temp_dir.path().join("escape.txt").exists());
}
