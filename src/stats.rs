//! Reduction of accumulated score sequences into summary statistics.

use crate::errors::EmptySeriesError;
use crate::tournament_runner::ScoreRecord;

/// Summary statistics of one player's score sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    /// Player name the statistics belong to.
    pub name: String,
    /// Smallest recorded score.
    pub min: f64,
    /// Largest recorded score.
    pub max: f64,
    /// Arithmetic mean of the sequence.
    pub mean: f64,
    /// Median of the sequence (mean of the two middle values for
    /// even-length sequences).
    pub median: f64,
    /// Sample standard deviation of the sequence. `0.0` for a single
    /// sample.
    pub std_dev: f64,
}

/// Summary rows for every player of a run, ordered by player name.
pub type ResultsTable = Vec<StatSummary>;

/// Reduces each player's score sequence into a [`StatSummary`] row.
///
/// Pure function: the record is not mutated and repeated calls yield
/// identical tables. An empty record produces an empty table.
///
/// # Errors
/// Fails if any player's sequence is empty. The runner's accumulation policy
/// never produces one, but degenerate inputs are checked anyway.
pub fn summarize(record: &ScoreRecord) -> Result<ResultsTable, EmptySeriesError> {
    let mut table = Vec::with_capacity(record.num_players());

    for (name, scores) in record.iter() {
        if scores.is_empty() {
            return Err(EmptySeriesError {
                player: name.to_owned(),
            });
        }

        table.push(StatSummary {
            name: name.to_owned(),
            min: scores.iter().copied().fold(f64::INFINITY, f64::min),
            max: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean: mean(scores),
            median: median(scores),
            std_dev: std_dev(scores),
        });
    }

    Ok(table)
}

fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

fn median(scores: &[f64]) -> f64 {
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn std_dev(scores: &[f64]) -> f64 {
    // a single sample has no spread
    if scores.len() < 2 {
        return 0.0;
    }
    let mean = mean(scores);
    let variance = scores
        .iter()
        .map(|score| (score - mean) * (score - mean))
        .sum::<f64>()
        / (scores.len() - 1) as f64;
    variance.sqrt()
}
