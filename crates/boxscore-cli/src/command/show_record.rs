use std::path::PathBuf;

use anyhow::ensure;

use crate::{
    command::play::play_report,
    schema::{record::GameRecord, report::GameReport},
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ShowRecordArg {
    /// Path to the record file (JSON format)
    record_file: PathBuf,
    /// Print every turn and the final box weights
    #[clap(long)]
    show_turns: bool,
}

/// Plays the recorded inputs again and checks that the game comes out the same.
fn replay(record: &GameRecord) -> anyhow::Result<GameReport> {
    let report = play_report(record.inputs.clone())?;
    ensure!(
        report.turns == record.turns,
        "recorded turns differ from replayed turns"
    );
    ensure!(
        report.final_scores == record.final_scores,
        "recorded scores {:?} differ from replayed scores {:?}",
        record.final_scores.as_pair(),
        report.final_scores.as_pair(),
    );
    Ok(report)
}

pub(crate) fn run(arg: &ShowRecordArg) -> anyhow::Result<()> {
    let ShowRecordArg {
        record_file,
        show_turns,
    } = arg;

    eprintln!("Loading record from {}", record_file.display());
    let record: GameRecord = util::read_json_file("record", record_file)?;
    eprintln!(
        "Loaded {} turns recorded at {}",
        record.turns.len(),
        record.recorded_at
    );

    let report = replay(&record)?;
    print!("{}", report.text(*show_turns));
    Ok(())
}
