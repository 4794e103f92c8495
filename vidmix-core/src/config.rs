//! Run configuration for a single mix.

use crate::error::{CoreError, CoreResult};
use crate::track::{AudioTrack, VideoSpec};
use std::path::{Path, PathBuf};

/// Everything needed to perform one mix run. Built by the CLI from parsed
/// arguments; the core never mutates it.
#[derive(Debug, Clone)]
pub struct MixConfig {
    pub video: VideoSpec,
    pub tracks: Vec<AudioTrack>,
    pub output: PathBuf,
    pub dry_run: bool,
}

impl MixConfig {
    /// Creates a config, deriving the output path from the video filename
    /// when none is given.
    pub fn new(video: VideoSpec, tracks: Vec<AudioTrack>, output: Option<PathBuf>) -> Self {
        let output = output.unwrap_or_else(|| default_output_path(&video.file));
        Self {
            video,
            tracks,
            output,
            dry_run: false,
        }
    }

    /// Checks that every input file exists. Missing files are fatal.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.video.file.is_file() {
            return Err(CoreError::InputNotFound(
                self.video.file.display().to_string(),
            ));
        }
        for track in &self.tracks {
            if !track.file.is_file() {
                return Err(CoreError::InputNotFound(track.file.display().to_string()));
            }
        }
        if self.tracks.is_empty() {
            log::warn!("No audio tracks given; the mix will only carry the video's own audio");
        }
        Ok(())
    }
}

/// Returns `<video-basename>-mixed.<ext>` beside the input video.
#[must_use]
pub fn default_output_path(video: &Path) -> PathBuf {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match video.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-mixed.{ext}"),
        None => format!("{stem}-mixed"),
    };
    video.with_file_name(name)
}
