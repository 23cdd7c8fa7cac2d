//! The one file-system primitive placement needs.

use atlas_core::error::{AtlasError, Result};
use std::path::Path;

/// Copy `src` to `dest`, creating parent directories of `dest`.
///
/// A missing `src` is not an error: not every codename has art, so the
/// copy is skipped and `Ok(false)` returned. Existing destinations are
/// overwritten.
pub fn copy_asset(src: &Path, dest: &Path) -> Result<bool> {
    if !src.is_file() {
        return Ok(false);
    }
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AtlasError::file(parent, e))?;
    }
    std::fs::copy(src, dest).map_err(|e| AtlasError::file(dest, e))?;
    tracing::debug!("copied {} -> {}", src.display(), dest.display());
    Ok(true)
}
