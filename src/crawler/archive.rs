//! Archive fetching support: turning downloaded ZIP bytes into HTML files
//!
//! Book archives are small ZIPs holding one or more HTML files, sometimes
//! with cover images or other extras alongside. Invalid archives are a
//! routine occurrence on the source site and are treated as "no files
//! extracted"; extraction I/O failures still propagate.

use crate::Result;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::ZipArchive;

/// Extracts downloaded archive bytes into the scratch directory
///
/// Returns the paths of the extracted `.html` files, in sorted order. Bytes
/// that do not open as a ZIP archive (zero-byte, truncated, non-archive
/// responses) yield an empty list so the caller skips the book and moves on.
/// Corruption can also surface during extraction, when an archive with an
/// intact central directory carries damaged entry data; that case is skipped
/// the same way, while real filesystem failures still propagate.
/// Non-HTML entries are removed after extraction; if an entry resists both
/// removal and a forced directory removal, the book is reported as empty.
pub fn extract_archive(bytes: &[u8], scratch_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut archive = match ZipArchive::new(Cursor::new(bytes)) {
        Ok(archive) => archive,
        Err(e) => {
            tracing::debug!("Response is not a valid archive, skipping book: {}", e);
            return Ok(Vec::new());
        }
    };

    if let Err(e) = archive.extract(scratch_dir) {
        // Errors carrying an OS error code come from the filesystem itself
        // (disk full, permissions) and propagate; everything else is corrupt
        // archive data.
        if matches!(&e, ZipError::Io(io_err) if io_err.raw_os_error().is_some()) {
            return Err(e.into());
        }
        tracing::debug!("Archive failed to extract cleanly, skipping book: {}", e);
        clear_scratch(scratch_dir)?;
        return Ok(Vec::new());
    }

    prune_non_html(scratch_dir)
}

/// Removes any partially-extracted entries, leaving the scratch directory empty
fn clear_scratch(scratch_dir: &Path) -> Result<()> {
    fs::remove_dir_all(scratch_dir)?;
    fs::create_dir_all(scratch_dir)?;
    Ok(())
}

/// Removes non-HTML entries from the scratch directory, returning what's left
fn prune_non_html(scratch_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut html_files = Vec::new();

    for entry in fs::read_dir(scratch_dir)? {
        let path = entry?.path();

        if path.extension().map_or(false, |ext| ext == "html") {
            html_files.push(path);
            continue;
        }

        if fs::remove_file(&path).is_err() && fs::remove_dir_all(&path).is_err() {
            tracing::debug!(
                "Could not clear scratch entry {}, skipping book",
                path.display()
            );
            return Ok(Vec::new());
        }
    }

    html_files.sort();
    Ok(html_files)
}
