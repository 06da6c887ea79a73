use std::path::Path;

use crate::download::DownloadError;

/// Make sure `dir` exists and accepts new files.
///
/// Missing directories are created. A path that exists but is not a
/// directory, or a directory we cannot write into, is rejected.
pub fn validate_output_directory(dir: &Path) -> Result<(), DownloadError> {
    let invalid = |reason: String| DownloadError::InvalidDirectory {
        path: dir.to_path_buf(),
        reason,
    };

    if dir.as_os_str().is_empty() {
        return Err(invalid("path is empty".to_string()));
    }

    if dir.exists() && !dir.is_dir() {
        return Err(invalid("not a directory".to_string()));
    }

    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| invalid(e.to_string()))?;
        log::debug!("Created output directory {}", dir.display());
    }

    let marker = dir.join(WRITE_TEST_FILE);
    std::fs::write(&marker, b"").map_err(|e| invalid(e.to_string()))?;
    remove_write_marker(&marker);

    Ok(())
}

const WRITE_TEST_FILE: &str = ".seoprompt_write_test";

/// Remove the empty file left by the write check. Returns false when it stays behind.
fn remove_write_marker(marker: &Path) -> bool {
    match std::fs::remove_file(marker) {
        Ok(()) => true,
        Err(e) => {
            log::warn!(
                "Could not remove write test file {}: {}",
                marker.display(),
                e
            );
            false
        }
    }
}
