//! # Policy Arena
//!
//! A Rust crate for benchmarking a population of trained, policy-backed
//! players by running them through a competitive simulation round after
//! round and aggregating their scores into summary statistics.
//!
//! It provides:
//! - Player discovery from a directory of persisted model artifacts
//!   (`discover_players`)
//! - Multi-round orchestration and score accumulation (`Evaluator`,
//!   `TournamentRunner`)
//! - Per-player Min/Max/Mean/Median/Standard-Deviation reduction
//!   (`summarize`)
//! - Text-table rendering and CSV export of the results (`render`,
//!   `write_csv`)
//!
//! The competitive simulation itself is **not** part of this crate: you plug
//! yours in by implementing the [`Simulation`](crate::sim_interface::Simulation)
//! trait. Each discovered player is handed to your simulation as an
//! `Arc<PlayerHandle>` naming the `model.zip` artifact to load.
//!
//! # Documentation Overview
//!
//! - For the evaluation loop and the per-round re-discovery policy, see the
//!   [`evaluator`] module.
//! - For configuring verbosity, file logging, and roster re-discovery, see
//!   [`Configuration`](crate::configuration::Configuration).
//! - For the expected on-disk layout of players, see
//!   [`player_registry::discover_players`].
//! - To plug in a simulation, implement
//!   [`Simulation`](crate::sim_interface::Simulation).
//!
//! # Usage Example
//!
//! Below is a minimal example wiring a custom simulation into the evaluator:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use policy_arena::anyhow;
//! use policy_arena::prelude::*;
//!
//! struct SkirmishSim;
//!
//! impl Simulation for SkirmishSim {
//!     fn run_round(&mut self, roster: &[Arc<PlayerHandle>]) -> anyhow::Result<RoundScores> {
//!         // Load each player's policy from `player.model_path`, play one
//!         // full game among the roster, and score every participant.
//!         Ok(roster
//!             .iter()
//!             .map(|player| (player.name.clone(), 0.0))
//!             .collect())
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Configuration::new().with_rediscover_each_round(true);
//!     let mut evaluator = Evaluator::new(SkirmishSim, config);
//!
//!     // Each subdirectory of `players/` containing a `model.zip` becomes
//!     // one player named after the subdirectory.
//!     let table = evaluator.evaluate("players", 10)?;
//!
//!     print!("{}", render(&table));
//!     write_csv(&table, "results.csv")?;
//!     Ok(())
//! }
//! ```
//!
//! # Command-Line Wrapper
//!
//! The crate is a library; a consumer binary typically adds a thin argument
//! wrapper around it and nothing more. Path defaults belong in that wrapper,
//! not in the library:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use policy_arena::anyhow;
//! # use policy_arena::prelude::*;
//! # struct SkirmishSim;
//! # impl Simulation for SkirmishSim {
//! #     fn run_round(&mut self, roster: &[Arc<PlayerHandle>]) -> anyhow::Result<RoundScores> {
//! #         Ok(roster.iter().map(|p| (p.name.clone(), 0.0)).collect())
//! #     }
//! # }
//! fn main() -> anyhow::Result<()> {
//!     let mut path = "models".to_owned();
//!     let mut run_count = 1;
//!     let mut output = None;
//!
//!     let mut args = std::env::args().skip(1);
//!     while let Some(arg) = args.next() {
//!         match arg.as_str() {
//!             "-p" | "--path" => path = args.next().expect("--path needs a value"),
//!             "-r" | "--run_count" => {
//!                 run_count = args.next().expect("--run_count needs a value").parse()?
//!             }
//!             "-o" | "--output" => output = args.next(),
//!             other => anyhow::bail!("unknown argument '{other}'"),
//!         }
//!     }
//!
//!     let mut evaluator = Evaluator::new(SkirmishSim, Configuration::from_env());
//!     let table = evaluator.evaluate(&path, run_count)?;
//!
//!     // the table always goes to stdout; the CSV only on request
//!     print!("{}", render(&table));
//!     if let Some(output) = output {
//!         write_csv(&table, &output)?;
//!         println!("Statistics saved to {output}");
//!     }
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub use anyhow;

pub mod configuration;
pub mod errors;
pub mod evaluator;
mod logger;
pub mod player;
pub mod player_registry;
pub mod report;
pub mod sim_interface;
pub mod stats;
pub mod tournament_runner;

/// Commonly used types and functions for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use policy_arena::prelude::*;
/// ```
///
/// Includes:
/// - [`Configuration`](crate::configuration::Configuration)
/// - [`Evaluator`](crate::evaluator::Evaluator)
/// - [`PlayerHandle`](crate::player::PlayerHandle)
/// - the [`Simulation`](crate::sim_interface::Simulation) contract
/// - statistics and reporting helpers
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::evaluator::Evaluator;
    pub use crate::player::PlayerHandle;
    pub use crate::player_registry::discover_players;
    pub use crate::report::{render, to_csv, write_csv};
    pub use crate::sim_interface::{RoundScores, Simulation};
    pub use crate::stats::{summarize, ResultsTable, StatSummary};
    pub use crate::tournament_runner::{ScoreRecord, TournamentRunner};
}
