//! Core library for mixing external audio tracks into a video using
//! ffmpeg and ffprobe.
//!
//! The pipeline is linear: parse track specs, probe durations and audio
//! presence, resolve per-track repeat counts against the video timeline,
//! assemble an ffmpeg filter graph and argument vector, and run a single
//! ffmpeg invocation.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidmix_core::{AudioTrack, MixConfig, VideoSpec};
//!
//! let video = VideoSpec::parse("clip.mp4:0.8").unwrap();
//! let track = AudioTrack::parse("music.mp3:0.5:2:infinite").unwrap();
//! let config = MixConfig::new(video, vec![track], None);
//!
//! let plan = vidmix_core::prepare_mix(&config).unwrap();
//! println!(
//!     "{}",
//!     vidmix_core::render_timeline(&config.video, plan.video_duration, &plan.sources)
//! );
//! vidmix_core::execute_mix(&config, &plan).unwrap();
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod external;
pub mod filter;
pub mod planning;
pub mod processing;
pub mod temp_files;
pub mod timeline;
pub mod track;

// Re-exports for public API
pub use command::render_command_line;
pub use config::{default_output_path, MixConfig};
pub use error::{CoreError, CoreResult};
pub use planning::{plan_sources, resolve_repeat, AudioSource};
pub use processing::{execute_mix, prepare_mix, MixPlan};
pub use timeline::render_timeline;
pub use track::{AudioTrack, Repeat, VideoSpec};
