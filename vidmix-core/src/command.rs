//! Assembly of the final ffmpeg invocation.
//!
//! The video is always input 0. Each surviving audio source follows in
//! input-index order, preceded by `-stream_loop` when it plays more than
//! once (`-stream_loop n` plays the input n+1 times). The video stream is
//! mapped through unchanged; the mixed audio is re-encoded.

use crate::planning::AudioSource;
use std::path::Path;

/// Builds the ffmpeg argument vector for a planned mix.
#[must_use]
pub fn assemble(
    video_file: &Path,
    sources: &[AudioSource],
    filter_graph: &str,
    output: &Path,
) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "-hide_banner".into(),
        "-y".into(),
        "-i".into(),
        video_file.to_string_lossy().into_owned(),
    ];

    for source in sources.iter().filter(|s| s.input_index > 0) {
        if source.repeat > 1 {
            args.push("-stream_loop".into());
            args.push((source.repeat - 1).to_string());
        }
        args.push("-i".into());
        args.push(source.file.to_string_lossy().into_owned());
    }

    args.push("-filter_complex".into());
    args.push(filter_graph.to_string());
    args.push("-map".into());
    args.push("0:v".into());
    args.push("-map".into());
    args.push("[aout]".into());
    args.push("-c:v".into());
    args.push("copy".into());
    args.push("-c:a".into());
    args.push("aac".into());
    args.push(output.to_string_lossy().into_owned());
    args
}

/// Renders the argument vector as a copy-pasteable shell command line.
#[must_use]
pub fn render_command_line(args: &[String]) -> String {
    let mut parts = vec!["ffmpeg".to_string()];
    parts.extend(args.iter().map(|a| shell_quote(a)));
    parts.join(" ")
}

fn shell_quote(arg: &str) -> String {
    let needs_quoting = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || "'\";[]|&$()<>*?{}!\\`".contains(c));
    if needs_quoting {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::source_filter;
    use crate::track::Repeat;
    use std::path::PathBuf;

    fn source(input_index: usize, file: &str, repeat: u32) -> AudioSource {
        let label = format!("a{input_index}");
        AudioSource {
            input_index,
            filter: source_filter(input_index, 0.0, 1.0, &label),
            label,
            repeat,
            requested: Repeat::Unset,
            volume: 1.0,
            delay: 0.0,
            file: PathBuf::from(file),
        }
    }

    #[test]
    fn assemble_basic_invocation() {
        let args = assemble(
            Path::new("v.mp4"),
            &[source(0, "v.mp4", 1), source(1, "a.wav", 1)],
            "GRAPH",
            Path::new("out.mp4"),
        );
        assert_eq!(
            args,
            vec![
                "-hide_banner",
                "-y",
                "-i",
                "v.mp4",
                "-i",
                "a.wav",
                "-filter_complex",
                "GRAPH",
                "-map",
                "0:v",
                "-map",
                "[aout]",
                "-c:v",
                "copy",
                "-c:a",
                "aac",
                "out.mp4",
            ]
        );
    }

    #[test]
    fn stream_loop_emitted_only_for_repeats() {
        let args = assemble(
            Path::new("v.mp4"),
            &[source(1, "loop.wav", 3), source(2, "once.wav", 1)],
            "GRAPH",
            Path::new("out.mp4"),
        );
        let joined = args.join(" ");
        // three total plays means two extra loops
        assert!(joined.contains("-stream_loop 2 -i loop.wav"));
        assert!(!joined.contains("-stream_loop 0"));
        assert!(joined.contains("-i once.wav"));
    }

    #[test]
    fn video_source_adds_no_extra_input() {
        let args = assemble(
            Path::new("v.mp4"),
            &[source(0, "v.mp4", 1)],
            "GRAPH",
            Path::new("out.mp4"),
        );
        assert_eq!(args.iter().filter(|a| *a == "-i").count(), 1);
    }

    #[test]
    fn command_line_quotes_filter_graph() {
        let args = vec!["-filter_complex".to_string(), "[0:a]volume=1[a0]".to_string()];
        assert_eq!(
            render_command_line(&args),
            "ffmpeg -filter_complex '[0:a]volume=1[a0]'"
        );
    }

    #[test]
    fn command_line_quotes_spaces() {
        let args = vec!["-i".to_string(), "my clip.mp4".to_string()];
        assert_eq!(render_command_line(&args), "ffmpeg -i 'my clip.mp4'");
    }
}
