//! Filter-graph assembly for delay, volume, and the final mix stage.

use crate::planning::AudioSource;

/// Builds the filter expression for one audio source: an optional adelay
/// stage (same delay on both stereo channels) followed by a volume stage,
/// labelled by input index.
#[must_use]
pub fn source_filter(input_index: usize, delay_secs: f64, volume: f64, label: &str) -> String {
    let mut stages = Vec::new();
    if delay_secs > 0.0 {
        let delay_ms = (delay_secs * 1000.0).round() as u64;
        stages.push(format!("adelay={delay_ms}|{delay_ms}"));
    }
    stages.push(format!("volume={volume}"));
    format!("[{input_index}:a]{}[{label}]", stages.join(","))
}

/// Accumulates per-source filter expressions and emits the complete
/// filter graph terminated by an amix stage. Normalization is disabled
/// so explicit per-source volumes survive the mix.
#[derive(Default)]
pub struct MixFilterGraph {
    stages: Vec<String>,
    labels: Vec<String>,
}

impl MixFilterGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(&mut self, source: &AudioSource) {
        self.stages.push(source.filter.clone());
        self.labels.push(source.label.clone());
    }

    /// Joins all stages with `;` and appends the final mix combining every
    /// labelled output into `[aout]`.
    #[must_use]
    pub fn build(&self) -> String {
        let inputs: String = self.labels.iter().map(|l| format!("[{l}]")).collect();
        let mix = format!(
            "{inputs}amix=inputs={}:duration=longest:normalize=0:dropout_transition=0[aout]",
            self.labels.len()
        );
        let mut stages = self.stages.clone();
        stages.push(mix);
        stages.join(";")
    }
}

/// Builds the full filter graph for a planned set of sources.
#[must_use]
pub fn build_filter_graph(sources: &[AudioSource]) -> String {
    let mut graph = MixFilterGraph::new();
    for source in sources {
        graph.add_source(source);
    }
    graph.build()
}
