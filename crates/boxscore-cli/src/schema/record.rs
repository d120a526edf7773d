use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use boxscore_engine::{FinalScores, TurnRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::report::GameReport;

/// Saved game with metadata for later replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Timestamp when the record was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Token weights in the order they were played
    pub inputs: Vec<u32>,
    /// Every turn of the game, one per input token
    pub turns: Vec<TurnRecord>,
    pub final_scores: FinalScores,
}

impl GameRecord {
    pub fn from_report(report: &GameReport, recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            inputs: report.inputs.clone(),
            turns: report.turns.clone(),
            final_scores: report.final_scores,
        }
    }

    /// File name derived from the record timestamp, down to milliseconds.
    pub fn file_name(&self) -> String {
        format!("game_{}.json", self.recorded_at.format("%Y%m%d_%H%M%S%3f"))
    }

    /// Writes the record as pretty JSON into `record_dir` and returns its path.
    ///
    /// An existing file with the same name is never overwritten.
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let filepath = record_dir.join(self.file_name());
        let file = File::create_new(&filepath).with_context(|| {
            format!(
                "Failed to create file (it may already exist): {}",
                filepath.display()
            )
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
        writeln!(writer)
            .with_context(|| format!("Failed to write newline to {}", filepath.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", filepath.display()))?;

        Ok(filepath)
    }
}
