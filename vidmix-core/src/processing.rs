//! End-to-end mix pipeline: probe, plan, assemble, execute.
//!
//! A single-pass linear pipeline with no retries: validation and
//! dependency checks up front, one ffprobe call per input, then one
//! ffmpeg invocation. A track that cannot fit its window is dropped with
//! a warning; every other failure is fatal.

use crate::command;
use crate::config::MixConfig;
use crate::error::{CoreError, CoreResult};
use crate::external;
use crate::filter;
use crate::planning::{self, AudioSource};
use std::path::Path;

/// Fully assembled plan for one run, ready to print or execute.
#[derive(Debug, Clone)]
pub struct MixPlan {
    pub sources: Vec<AudioSource>,
    pub video_duration: f64,
    pub filter_graph: String,
    pub args: Vec<String>,
}

/// Probes all inputs and plans the mix. Pure preparation: nothing is
/// written and ffmpeg is not invoked.
pub fn prepare_mix(config: &MixConfig) -> CoreResult<MixPlan> {
    config.validate()?;
    external::check_dependencies()?;

    let video_duration = external::media_duration(&config.video.file)?;
    let video_has_audio = external::has_audio_stream(&config.video.file)?;
    if !video_has_audio {
        log::info!(
            "{} has no audio stream; mixing external tracks only",
            config.video.file.display()
        );
    }
    log::debug!("Video duration: {video_duration:.2}s");

    let mut probed = Vec::with_capacity(config.tracks.len());
    for track in &config.tracks {
        let loop_duration = external::media_duration(&track.file)?;
        probed.push((track.clone(), loop_duration));
    }

    let sources = planning::plan_sources(&config.video, video_has_audio, video_duration, &probed)?;
    let filter_graph = filter::build_filter_graph(&sources);
    let args = command::assemble(&config.video.file, &sources, &filter_graph, &config.output);

    Ok(MixPlan {
        sources,
        video_duration,
        filter_graph,
        args,
    })
}

/// Runs ffmpeg for a prepared plan. When the output path is the input
/// video itself, the mix is staged into a temp file and persisted over
/// the original only after ffmpeg succeeds.
pub fn execute_mix(config: &MixConfig, plan: &MixPlan) -> CoreResult<()> {
    if paths_alias(&config.output, &config.video.file) {
        let staging = crate::temp_files::create_staging_file(&config.output)?;
        log::info!(
            "Output overwrites the input video; staging mix in {}",
            staging.path().display()
        );
        let args = command::assemble(
            &config.video.file,
            &plan.sources,
            &plan.filter_graph,
            staging.path(),
        );
        external::run_ffmpeg(&args)?;
        staging
            .persist(&config.output)
            .map_err(|e| CoreError::Io(e.error))?;
    } else {
        external::run_ffmpeg(&plan.args)?;
    }
    log::info!("Mixed output written to {}", config.output.display());
    Ok(())
}

/// True when both paths refer to the same file. Falls back to a literal
/// comparison when either path cannot be canonicalized.
fn paths_alias(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}
