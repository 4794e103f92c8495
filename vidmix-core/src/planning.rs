//! Repeat resolution and per-source planning against the video timeline.
//!
//! Each audio track gets a window of `video duration - delay` seconds. A
//! track whose content does not complete even one full loop inside its
//! window is dropped from the mix with a warning; otherwise its repeat
//! count is clamped to the number of full loops that fit.

use crate::error::{CoreError, CoreResult};
use crate::filter;
use crate::track::{AudioTrack, Repeat, VideoSpec};
use std::path::PathBuf;

/// A mixable audio source derived from a track plus the video timeline.
/// Input index 0 is always the video; external tracks are numbered in
/// surviving order starting at 1. Never mutated after planning.
#[derive(Debug, Clone)]
pub struct AudioSource {
    pub input_index: usize,
    pub label: String,
    pub filter: String,
    /// Total number of plays, already clamped to the available window.
    pub repeat: u32,
    pub requested: Repeat,
    pub volume: f64,
    pub delay: f64,
    pub file: PathBuf,
}

/// Resolves the repeat count for a track with the given delay and per-loop
/// duration against the video duration. Returns `None` when not even one
/// full loop completes before the video ends.
#[must_use]
pub fn resolve_repeat(
    requested: Repeat,
    video_duration: f64,
    delay: f64,
    loop_duration: f64,
) -> Option<u32> {
    if loop_duration <= 0.0 {
        return None;
    }
    let available = video_duration - delay;
    if available < loop_duration {
        return None;
    }
    let max_full = (available / loop_duration).floor() as u32;
    let resolved = match requested {
        Repeat::Infinite => max_full,
        Repeat::Unset => 1,
        Repeat::Count(k) => k.min(max_full),
    };
    if resolved == 0 { None } else { Some(resolved) }
}

/// Plans the mixable sources for one run: the video's own audio (when
/// present) followed by every external track that fits its window.
pub fn plan_sources(
    video: &VideoSpec,
    video_has_audio: bool,
    video_duration: f64,
    tracks: &[(AudioTrack, f64)],
) -> CoreResult<Vec<AudioSource>> {
    let mut sources = Vec::new();

    if video_has_audio {
        sources.push(AudioSource {
            input_index: 0,
            label: "a0".to_string(),
            filter: filter::source_filter(0, 0.0, video.volume, "a0"),
            repeat: 1,
            requested: Repeat::Unset,
            volume: video.volume,
            delay: 0.0,
            file: video.file.clone(),
        });
    }

    let mut input_index = 1;
    for (track, loop_duration) in tracks {
        let Some(repeat) = resolve_repeat(track.repeat, video_duration, track.delay, *loop_duration)
        else {
            log::warn!(
                "Skipping {}: window of {:.2}s after delay is shorter than one loop ({:.2}s)",
                track.file.display(),
                (video_duration - track.delay).max(0.0),
                loop_duration
            );
            continue;
        };
        let label = format!("a{input_index}");
        sources.push(AudioSource {
            input_index,
            filter: filter::source_filter(input_index, track.delay, track.volume, &label),
            label,
            repeat,
            requested: track.repeat,
            volume: track.volume,
            delay: track.delay,
            file: track.file.clone(),
        });
        input_index += 1;
    }

    if sources.is_empty() {
        return Err(CoreError::NoSources(
            "the video has no audio stream and no audio track fits the timeline".to_string(),
        ));
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn track(volume: f64, delay: f64, repeat: Repeat) -> AudioTrack {
        AudioTrack {
            file: PathBuf::from("a.wav"),
            volume,
            delay,
            repeat,
        }
    }

    fn video() -> VideoSpec {
        VideoSpec {
            file: PathBuf::from("v.mp4"),
            volume: 1.0,
        }
    }

    #[test]
    fn track_excluded_when_window_too_small() {
        // D=10, L=6, d=5 -> available 5 < 6
        assert_eq!(resolve_repeat(Repeat::Unset, 10.0, 5.0, 6.0), None);
    }

    #[test]
    fn infinite_repeat_fills_window() {
        // D=10, L=4, d=0 -> two full loops fit
        assert_eq!(resolve_repeat(Repeat::Infinite, 10.0, 0.0, 4.0), Some(2));
        assert_eq!(resolve_repeat(Repeat::Infinite, 9.0, 1.0, 4.0), Some(2));
    }

    #[test]
    fn unset_repeat_plays_once() {
        assert_eq!(resolve_repeat(Repeat::Unset, 10.0, 0.0, 4.0), Some(1));
    }

    #[test]
    fn requested_repeat_clamped_to_window() {
        assert_eq!(resolve_repeat(Repeat::Count(5), 10.0, 0.0, 4.0), Some(2));
        assert_eq!(resolve_repeat(Repeat::Count(2), 30.0, 0.0, 4.0), Some(2));
    }

    #[test]
    fn exact_fit_counts_as_one_loop() {
        assert_eq!(resolve_repeat(Repeat::Unset, 10.0, 6.0, 4.0), Some(1));
    }

    #[test]
    fn zero_loop_duration_is_excluded() {
        assert_eq!(resolve_repeat(Repeat::Unset, 10.0, 0.0, 0.0), None);
    }

    #[test]
    fn plan_includes_video_audio_first() {
        let sources = plan_sources(
            &video(),
            true,
            10.0,
            &[(track(0.5, 0.0, Repeat::Unset), 4.0)],
        )
        .unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].input_index, 0);
        assert_eq!(sources[0].label, "a0");
        assert_eq!(sources[1].input_index, 1);
        assert_eq!(sources[1].label, "a1");
    }

    #[test]
    fn plan_skips_video_stage_when_no_audio_stream() {
        let sources = plan_sources(
            &video(),
            false,
            10.0,
            &[(track(1.0, 0.0, Repeat::Unset), 4.0)],
        )
        .unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].input_index, 1);
        assert_eq!(sources[0].file, Path::new("a.wav"));
    }

    #[test]
    fn plan_renumbers_after_dropped_track() {
        let sources = plan_sources(
            &video(),
            false,
            10.0,
            &[
                (track(1.0, 9.5, Repeat::Unset), 4.0), // cannot fit, dropped
                (track(1.0, 0.0, Repeat::Unset), 4.0),
            ],
        )
        .unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].input_index, 1);
    }

    #[test]
    fn plan_fails_when_nothing_survives() {
        let result = plan_sources(&video(), false, 10.0, &[(track(1.0, 9.0, Repeat::Unset), 4.0)]);
        assert!(matches!(result, Err(CoreError::NoSources(_))));
    }
}
