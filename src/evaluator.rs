//! Core evaluation logic for benchmarking policy-backed players.
//!
//! This module defines the [`Evaluator`] type, which orchestrates a full
//! evaluation run. Its responsibilities include:
//!
//! - Discovering players from a directory of model artifacts
//! - Driving the simulation for the requested number of rounds through a
//!   [`TournamentRunner`]
//! - Reducing the accumulated scores into a summary table
//!
//! # Behavior & Configuration
//!
//! Behavior is controlled by a [`Configuration`] object:
//!
//! - When `config.rediscover_each_round = true` (the default), the players
//!   directory is re-scanned before **every** round. Models added or removed
//!   while the run is in progress change the roster of later rounds; their
//!   score sequences simply start late or stop early.
//! - When `config.rediscover_each_round = false`, discovery runs once and
//!   the first roster is reused for the whole run.
//!
//! Statistics are computed per player over whatever scores that player
//! actually accumulated, so mid-run roster changes never corrupt the table.
//!
//! # Example
//!
//! See crate-level documentation for an example on how to use the
//! `Evaluator`.

use std::path::Path;

use tracing::{info, instrument, trace};

use crate::configuration::Configuration;
use crate::logger::init_logger;
use crate::player_registry::discover_players;
use crate::sim_interface::Simulation;
use crate::stats::{summarize, ResultsTable};
use crate::tournament_runner::TournamentRunner;

/// The main type for evaluating policy-backed players.
///
/// It discovers players, runs the simulation round after round, and reduces
/// the accumulated scores into one [`StatSummary`](crate::stats::StatSummary)
/// row per player.
pub struct Evaluator<S: Simulation> {
    runner: TournamentRunner<S>,
    config: Configuration,
}

impl<S: Simulation> Evaluator<S> {
    #[instrument(skip_all)]
    /// Create an [`Evaluator`] around a simulation with the given
    /// [`Configuration`]
    pub fn new(simulation: S, config: Configuration) -> Evaluator<S> {
        if config.log {
            init_logger();
        }

        trace!(?config);

        Evaluator {
            runner: TournamentRunner::new(simulation),
            config,
        }
    }

    /// Evaluates the players found in `directory` over `rounds` simulation
    /// rounds.
    ///
    /// # Parameters
    /// - `directory`: path whose subdirectories hold one `model.zip` per
    ///   player
    /// - `rounds`: number of rounds to run, at least 1
    ///
    /// # Returns
    /// One summary row per player that scored in at least one round, ordered
    /// by player name. A directory with no valid players yields an empty
    /// table.
    ///
    /// # Errors
    /// Returns an error if the directory is invalid, if `rounds` is zero, or
    /// if the simulation fails on any round. A simulation failure aborts the
    /// run; statistics of already-completed rounds are discarded.
    pub fn evaluate(
        &mut self,
        directory: impl AsRef<Path>,
        rounds: usize,
    ) -> anyhow::Result<ResultsTable> {
        let directory = directory.as_ref();
        let config = self.config;

        if config.verbose {
            println!("Running {rounds} round(s)...");
        }

        let record = if config.rediscover_each_round {
            self.runner
                .run(rounds, || discover_players(directory, &config))?
        } else {
            let roster = discover_players(directory, &config)?;
            info!(roster_size = roster.len());
            self.runner.run(rounds, || Ok(roster.clone()))?
        };

        let table = summarize(&record)?;
        Ok(table)
    }
}
