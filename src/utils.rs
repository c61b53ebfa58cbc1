//! Pure helpers for candidate naming
//!
//! Candidate selection works on file names, not `Path::extension`, so that a
//! name matches exactly when it ends with `.zip` (case-insensitive). A name
//! like `archive.zip.bak` is never a candidate.

/// File name suffix that marks a candidate archive
pub const ZIP_SUFFIX: &str = ".zip";

/// Byte offset where the `.zip` suffix starts, if the name ends with it.
///
/// Compares the last four characters case-insensitively, staying on char
/// boundaries for non-ASCII names.
fn zip_suffix_start(name: &str) -> Option<usize> {
    let (idx, _) = name.char_indices().rev().nth(ZIP_SUFFIX.len() - 1)?;
    name[idx..].eq_ignore_ascii_case(ZIP_SUFFIX).then_some(idx)
}

/// Whether a file name ends with `.zip`, case-insensitively.
pub fn has_zip_suffix(name: &str) -> bool {
    zip_suffix_start(name).is_some()
}

/// The archive's base name with the `.zip` suffix stripped.
///
/// Names without the suffix are returned unmodified.
pub fn strip_zip_suffix(name: &str) -> &str {
    match zip_suffix_start(name) {
        Some(idx) => &name[..idx],
        None => name,
    }
}
