//! Human-readable mix timeline report.
//!
//! Printed before processing so the user can see what will be mixed:
//! the video duration, the video row, then every surviving audio source
//! sorted by delay. The repeat column shows `infinite` for unbounded
//! requests, otherwise the resolved play count.

use crate::planning::AudioSource;
use crate::track::{Repeat, VideoSpec};
use std::fmt::Write as _;
use std::path::Path;

const COL_LABEL: usize = 15;
const COL_VOLUME: usize = 8;
const COL_DELAY: usize = 8;
const COL_REPEAT: usize = 8;

/// Renders the timeline table for one planned mix.
#[must_use]
pub fn render_timeline(video: &VideoSpec, video_duration: f64, sources: &[AudioSource]) -> String {
    let mut out = String::new();

    writeln!(out, "Video duration: {video_duration:.2}s").ok();

    let header = format!(
        "{:<COL_LABEL$}{:<COL_VOLUME$}{:<COL_DELAY$}{:<COL_REPEAT$}",
        "Label", "Volume", "Delay", "Repeat"
    );
    writeln!(out, "{header}").ok();
    writeln!(out, "{}", "-".repeat(header.len())).ok();

    writeln!(
        out,
        "{}",
        format_row(&video.file, &format!("{:.2}", video.volume), "-", "-")
    )
    .ok();

    let mut audio: Vec<&AudioSource> = sources.iter().filter(|s| s.input_index > 0).collect();
    audio.sort_by(|a, b| a.delay.total_cmp(&b.delay));
    for source in audio {
        let repeat = match source.requested {
            Repeat::Infinite => "infinite".to_string(),
            _ => format!("{}x", source.repeat),
        };
        writeln!(
            out,
            "{}",
            format_row(
                &source.file,
                &format!("{:.2}", source.volume),
                &format!("{:.2}", source.delay),
                &repeat,
            )
        )
        .ok();
    }
    out
}

fn format_row(file: &Path, volume: &str, delay: &str, repeat: &str) -> String {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    format!("{name:<COL_LABEL$}{volume:<COL_VOLUME$}{delay:<COL_DELAY$}{repeat:<COL_REPEAT$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::source_filter;
    use std::path::PathBuf;

    fn source(input_index: usize, file: &str, delay: f64, repeat: u32, requested: Repeat) -> AudioSource {
        let label = format!("a{input_index}");
        AudioSource {
            input_index,
            filter: source_filter(input_index, delay, 1.0, &label),
            label,
            repeat,
            requested,
            volume: 1.0,
            delay,
            file: PathBuf::from(file),
        }
    }

    fn video() -> VideoSpec {
        VideoSpec {
            file: PathBuf::from("/videos/clip.mp4"),
            volume: 0.8,
        }
    }

    #[test]
    fn duration_line_then_video_row_with_dashes() {
        let report = render_timeline(&video(), 12.5, &[source(1, "a.wav", 0.0, 1, Repeat::Unset)]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Video duration: 12.50s");
        assert!(lines[1].starts_with("Label"));
        assert!(lines[2].chars().all(|c| c == '-'));
        assert!(lines[3].starts_with("clip.mp4"));
        assert!(lines[3].contains("0.80"));
        assert!(lines[3].contains('-'));
    }

    #[test]
    fn audio_rows_sorted_by_delay() {
        let report = render_timeline(
            &video(),
            10.0,
            &[
                source(1, "late.wav", 5.0, 1, Repeat::Unset),
                source(2, "early.wav", 1.0, 1, Repeat::Unset),
            ],
        );
        let late = report.find("late.wav").unwrap();
        let early = report.find("early.wav").unwrap();
        assert!(early < late);
    }

    #[test]
    fn repeat_column_rendering() {
        let report = render_timeline(
            &video(),
            10.0,
            &[
                source(1, "loop.wav", 0.0, 4, Repeat::Infinite),
                source(2, "twice.wav", 0.0, 2, Repeat::Count(2)),
            ],
        );
        assert!(report.contains("infinite"));
        assert!(report.contains("2x"));
    }
}
