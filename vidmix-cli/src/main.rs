// vidmix-cli/src/main.rs
//
// Command-line interface for vidmix. Parses the video/audio/output flags,
// configures logging, and drives the core pipeline: prepare the mix plan,
// print the timeline report, then run (or just print) the ffmpeg command.

use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;
use vidmix_core::{AudioTrack, CoreResult, MixConfig, VideoSpec};

#[derive(Parser, Debug)]
#[command(
    name = "vidmix",
    version,
    about = "Mix video and audio sources",
    long_about = "Mixes a video's audio with one or more external audio tracks using ffmpeg, \
                  with independent volume, delay, and repeat settings per track."
)]
struct Cli {
    /// Input video file, optionally with volume as file:volume (e.g. video.mp4:0.8)
    #[arg(short = 'v', long = "video", value_name = "FILE[:VOLUME]", required = true)]
    video: String,

    /// Audio file(s) to mix, format: file[:volume[:delay[:repeat]]].
    /// Repeat is a count or 'infinite' for as many full loops as fit.
    #[arg(
        short = 'a',
        long = "audio",
        value_name = "FILE[:VOLUME[:DELAY[:REPEAT]]]",
        action = ArgAction::Append,
        num_args = 1..
    )]
    audio: Vec<String>,

    /// Output file (default: input video filename with '-mixed' before the extension)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the ffmpeg command before running it
    #[arg(long)]
    verbose: bool,

    /// Print the ffmpeg command and exit without executing it
    #[arg(long)]
    dry_run: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> CoreResult<()> {
    let video = VideoSpec::parse(&cli.video)?;
    let mut tracks = Vec::with_capacity(cli.audio.len());
    for spec in &cli.audio {
        tracks.push(AudioTrack::parse(spec)?);
    }

    let mut config = MixConfig::new(video, tracks, cli.output);
    config.dry_run = cli.dry_run;
    log::debug!(
        "Mixing {} audio track(s) into {} -> {}",
        config.tracks.len(),
        config.video.file.display(),
        config.output.display()
    );

    let plan = vidmix_core::prepare_mix(&config)?;
    log::debug!("Planned {} mix source(s)", plan.sources.len());

    print!(
        "{}",
        vidmix_core::render_timeline(&config.video, plan.video_duration, &plan.sources)
    );

    let command_line = vidmix_core::render_command_line(&plan.args);
    if config.dry_run {
        println!("{command_line}");
        return Ok(());
    }
    if cli.verbose {
        println!("{command_line}");
    }

    vidmix_core::execute_mix(&config, &plan)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        process::exit(1);
    }
}
