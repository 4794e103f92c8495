//! FFmpeg process execution via ffmpeg-sidecar.
//!
//! Spawns one ffmpeg invocation, relays its log stream to the `log`
//! facade, and surfaces captured error output when the process fails.

use crate::error::{command_failed_error, command_start_error, command_wait_error, CoreResult};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

/// Runs ffmpeg with the given argument vector and waits for completion.
pub fn run_ffmpeg(args: &[String]) -> CoreResult<()> {
    let mut cmd = FfmpegCommand::new();
    cmd.args(args.iter().map(String::as_str));
    log::debug!("Running ffmpeg command: {cmd:?}");

    let mut child = cmd
        .spawn()
        .map_err(|e| command_start_error("ffmpeg", e))?;

    // Error lines are buffered so a failure can be reported with context.
    let mut stderr_buffer = String::new();
    let iterator = child
        .iter()
        .map_err(|e| command_start_error("ffmpeg (event stream)", e))?;
    for event in iterator {
        match event {
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, message)
            | FfmpegEvent::Error(message) => {
                log::debug!("ffmpeg: {message}");
                stderr_buffer.push_str(&message);
                stderr_buffer.push('\n');
            }
            FfmpegEvent::Log(LogLevel::Warning, message) => {
                log::debug!("ffmpeg: {message}");
            }
            FfmpegEvent::Log(_, message) => {
                log::trace!("ffmpeg: {message}");
            }
            _ => {}
        }
    }

    let status = child.wait().map_err(|e| command_wait_error("ffmpeg", e))?;
    if !status.success() {
        let stderr = if stderr_buffer.is_empty() {
            "ffmpeg process failed".to_string()
        } else {
            stderr_buffer.trim().to_string()
        };
        log::error!("ffmpeg failed: {stderr}");
        return Err(command_failed_error("ffmpeg", status, stderr));
    }
    Ok(())
}
