//! Error types surfaced by the evaluation harness.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering players on disk.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The players directory does not exist or is not a directory.
    #[error("{0:?} is not a valid directory")]
    InvalidRoot(PathBuf),

    /// The players directory exists but its entries could not be read.
    #[error("could not read players directory {path:?}")]
    Unreadable {
        /// Directory the enumeration failed on.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while running the multi-round evaluation.
#[derive(Error, Debug)]
pub enum TournamentError {
    /// The requested round count was zero.
    #[error("round count must be at least 1")]
    InvalidRoundCount,

    /// Discovering the round's roster failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// The simulation failed. The run is aborted, no partial scores are
    /// kept.
    #[error("simulation failed on round {round}")]
    Simulation {
        /// 1-based round the simulation failed on.
        round: usize,
        /// Error reported by the simulation.
        #[source]
        source: anyhow::Error,
    },
}

/// A player reached aggregation with an empty score sequence.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("player '{player}' has no recorded scores")]
pub struct EmptySeriesError {
    /// Name of the player with the empty sequence.
    pub player: String,
}

/// The results table could not be written to its destination.
#[derive(Error, Debug)]
#[error("could not write results to {path:?}")]
pub struct WriteError {
    /// Destination the write failed on.
    pub path: PathBuf,
    /// Underlying filesystem error.
    #[source]
    pub source: std::io::Error,
}
