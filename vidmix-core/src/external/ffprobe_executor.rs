//! FFprobe integration for media metadata.
//!
//! This module answers the two questions vidmix has about a media file:
//! how long is it, and does it carry an audio stream.

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};
use ffprobe::{ffprobe, FfProbeError};
use std::path::Path;

/// Returns the container duration of a media file in seconds.
///
/// A missing or unparsable duration is fatal: without it the repeat
/// window cannot be computed.
pub fn media_duration(input_path: &Path) -> CoreResult<f64> {
    log::debug!("Running ffprobe for duration on: {}", input_path.display());
    match ffprobe(input_path) {
        Ok(metadata) => metadata
            .format
            .duration
            .as_deref()
            .and_then(|d| d.parse::<f64>().ok())
            .ok_or_else(|| {
                CoreError::FfprobeParse(format!(
                    "Could not determine duration of {}",
                    input_path.display()
                ))
            }),
        Err(err) => {
            log::error!(
                "ffprobe failed for duration on {}: {:?}",
                input_path.display(),
                err
            );
            Err(map_ffprobe_error(err, "duration"))
        }
    }
}

/// Reports whether the file contains at least one audio stream.
pub fn has_audio_stream(input_path: &Path) -> CoreResult<bool> {
    log::debug!(
        "Running ffprobe for audio streams on: {}",
        input_path.display()
    );
    match ffprobe(input_path) {
        Ok(metadata) => Ok(metadata
            .streams
            .iter()
            .any(|s| s.codec_type.as_deref() == Some("audio"))),
        Err(err) => {
            log::error!(
                "ffprobe failed for audio streams on {}: {:?}",
                input_path.display(),
                err
            );
            Err(map_ffprobe_error(err, "audio streams"))
        }
    }
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::FfprobeParse(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}
