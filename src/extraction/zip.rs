use crate::error::{ExtractError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Archive extractor for ZIP files
pub struct ZipExtractor;

impl ZipExtractor {
    /// Extract `archive_path` into a freshly created `dest_dir`.
    ///
    /// The archive is opened before the output directory is created, so a
    /// corrupt archive leaves no empty directory behind. The output
    /// directory must not already exist; a pre-existing directory is a hard
    /// error, never merged into.
    ///
    /// # Returns
    /// * `Ok(Vec<PathBuf>)` - paths of the files written, in entry order
    /// * `Err(Error)` - open failure, output directory collision, or an
    ///   entry-level I/O error
    pub fn extract(archive_path: &Path, dest_dir: &Path) -> Result<Vec<PathBuf>> {
        debug!(?archive_path, ?dest_dir, "opening archive for extraction");

        let file = std::fs::File::open(archive_path).map_err(|e| ExtractError::OpenFailed {
            archive: archive_path.to_path_buf(),
            reason: format!("failed to open file: {}", e),
        })?;

        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| ExtractError::OpenFailed {
                archive: archive_path.to_path_buf(),
                reason: format!("not a readable ZIP archive: {}", e),
            })?;

        std::fs::create_dir(dest_dir).map_err(|e| ExtractError::OutputDirFailed {
            path: dest_dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut extracted_files = Vec::new();

        for i in 0..archive.len() {
            let entry = archive
                .by_index(i)
                .map_err(|e| ExtractError::ExtractionFailed {
                    archive: archive_path.to_path_buf(),
                    reason: format!("failed to read entry {}: {}", i, e),
                })?;

            if let Some(file_path) = Self::extract_entry(entry, dest_dir, archive_path)? {
                extracted_files.push(file_path);
            }
        }

        info!(
            ?archive_path,
            extracted_count = extracted_files.len(),
            "ZIP extraction successful"
        );

        Ok(extracted_files)
    }

    /// Write a single entry under `dest_dir`, creating missing ancestors.
    ///
    /// Directory entries produce no output file. Entries whose stored name
    /// escapes the destination are skipped with a warning.
    fn extract_entry(
        mut entry: zip::read::ZipFile,
        dest_dir: &Path,
        archive_path: &Path,
    ) -> Result<Option<PathBuf>> {
        let file_path = match entry.enclosed_name() {
            Some(path) => dest_dir.join(path),
            None => {
                warn!(name = %entry.name(), "skipping entry with unsafe path");
                return Ok(None);
            }
        };

        if entry.is_dir() {
            std::fs::create_dir_all(&file_path)?;
            return Ok(None);
        }

        debug!(name = %entry.name(), dest = %dest_dir.display(), "extracting entry");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Truncate-or-create, never append
        let mut outfile = std::fs::File::create(&file_path)?;

        std::io::copy(&mut entry, &mut outfile).map_err(|e| {
            ExtractError::ExtractionFailed {
                archive: archive_path.to_path_buf(),
                reason: format!("failed to write {}: {}", entry.name(), e),
            }
        })?;

        Ok(Some(file_path))
    }
}
