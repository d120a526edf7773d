use std::path::PathBuf;

use anyhow::Context as _;
use boxscore_engine::GameSession;
use chrono::Utc;

use crate::{
    schema::{record::GameRecord, report::GameReport},
    util::{self, Output},
};

/// Token weights played when none are given on the command line.
const DEFAULT_WEIGHTS: [u32; 8] = [1, 1, 2, 3, 5, 8, 13, 21];

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Score line and winner, optionally with every turn
    #[default]
    Text,
    /// Full game report as JSON
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Token weights to play, in order (defaults to the first 8 Fibonacci numbers)
    pub(crate) weights: Vec<u32>,
    /// Read token weights from a JSON array file instead
    #[clap(long, conflicts_with = "weights")]
    pub(crate) input: Option<PathBuf>,
    /// Report format
    #[clap(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
    /// Print every turn and the final box weights (text format only)
    #[clap(long)]
    pub(crate) show_turns: bool,
    /// Write the report to this file instead of stdout
    #[clap(long)]
    pub(crate) output: Option<PathBuf>,
    /// Save a game record when the game ends
    #[clap(long)]
    pub(crate) save_record: bool,
    /// Directory to save record files
    #[clap(long, default_value = "./data/records/")]
    pub(crate) record_dir: PathBuf,
}

fn resolve_inputs(arg: &PlayArg) -> anyhow::Result<Vec<u32>> {
    if let Some(path) = &arg.input {
        return util::read_weights_file(path);
    }
    if arg.weights.is_empty() {
        return Ok(DEFAULT_WEIGHTS.to_vec());
    }
    Ok(arg.weights.clone())
}

pub(crate) fn play_report(inputs: Vec<u32>) -> anyhow::Result<GameReport> {
    let mut session = GameSession::new();
    session
        .play_all(inputs.iter().copied())
        .with_context(|| format!("Failed to play game over {} tokens", inputs.len()))?;
    Ok(GameReport::from_session(inputs, &session))
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let inputs = resolve_inputs(arg)?;
    tracing::info!(tokens = inputs.len(), "starting game");
    let report = play_report(inputs)?;

    let mut output = Output::from_output_path(arg.output.as_deref())?;
    match arg.format {
        OutputFormat::Text => output.write_text(&report.text(arg.show_turns).to_string())?,
        OutputFormat::Json => output.write_json(&report)?,
    }

    if arg.save_record {
        let record = GameRecord::from_report(&report, Utc::now());
        let path = record.save(&arg.record_dir)?;
        eprintln!("Saved record to {}", path.display());
    }

    Ok(())
}
