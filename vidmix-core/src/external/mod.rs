//! Interactions with external CLI tools.
//!
//! Everything vidmix knows about media files comes from ffprobe, and all
//! signal processing is delegated to ffmpeg. This module holds the
//! executors for both plus the startup dependency check.

use crate::error::{CoreError, CoreResult};
use std::io;
use std::process::{Command, Stdio};

pub mod ffmpeg_executor;
pub mod ffprobe_executor;

pub use ffmpeg_executor::run_ffmpeg;
pub use ffprobe_executor::{has_audio_stream, media_duration};

/// Checks that a required external command responds to `-version`.
pub(crate) fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e.to_string()))
        }
    }
}

/// Verifies that ffmpeg and ffprobe are both available.
pub fn check_dependencies() -> CoreResult<()> {
    check_dependency("ffmpeg")?;
    check_dependency("ffprobe")?;
    Ok(())
}
