//! Temporary file staging for in-place outputs.
//!
//! When the user asks vidmix to overwrite the input video, ffmpeg cannot
//! read and write the same file. The mix is staged into a sibling temp
//! file (keeping the real extension so ffmpeg picks the right container)
//! and persisted over the target only on success. The tempfile crate
//! removes the staging file on drop for every other exit path.

use crate::error::CoreResult;
use std::path::Path;
use tempfile::{Builder as TempFileBuilder, NamedTempFile};

/// Creates a staging file next to `target` with the same extension.
pub fn create_staging_file(target: &Path) -> CoreResult<NamedTempFile> {
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let extension = target
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("tmp");

    Ok(TempFileBuilder::new()
        .prefix("vidmix_")
        .suffix(&format!(".{extension}"))
        .tempfile_in(dir)?)
}
