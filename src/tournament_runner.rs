//! Multi-round orchestration of the simulation and score accumulation.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{error, info, trace};

use crate::errors::{DiscoveryError, TournamentError};
use crate::player::PlayerHandle;
use crate::sim_interface::Simulation;

/// Accumulated score history of one run: an ordered sequence of scores per
/// player name.
///
/// Sequences are append-only, one score per round per participating player,
/// never reordered. Rounds may differ in roster, so sequences may end up
/// with different lengths. Iteration is deterministic (sorted by name).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreRecord {
    scores: BTreeMap<String, Vec<f64>>,
}

impl ScoreRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one round score to `player`'s sequence, creating the sequence
    /// on first appearance.
    pub(crate) fn append(&mut self, player: &str, score: f64) {
        self.scores.entry(player.to_owned()).or_default().push(score);
    }

    /// Iterates players and their score sequences in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.scores
            .iter()
            .map(|(name, seq)| (name.as_str(), seq.as_slice()))
    }

    /// The score sequence of one player, if any score was recorded for it.
    pub fn get(&self, player: &str) -> Option<&[f64]> {
        self.scores.get(player).map(Vec::as_slice)
    }

    /// Number of players with at least one recorded score.
    pub fn num_players(&self) -> usize {
        self.scores.len()
    }

    /// True if no score was recorded at all.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Executes the simulation for a configured number of rounds and accumulates
/// scores keyed by player identity.
pub struct TournamentRunner<S: Simulation> {
    simulation: S,
}

impl<S: Simulation> TournamentRunner<S> {
    /// Creates a runner around a simulation collaborator.
    pub fn new(simulation: S) -> Self {
        TournamentRunner { simulation }
    }

    /// Runs `rounds` rounds, obtaining the roster for each round from
    /// `roster_source`.
    ///
    /// Every `(name, score)` pair returned by the simulation is appended to
    /// that name's sequence. Players absent from a round's result get
    /// nothing appended for that round.
    ///
    /// # Errors
    /// - [`TournamentError::InvalidRoundCount`] if `rounds` is `0`, before
    ///   any side effect.
    /// - The first discovery or simulation failure aborts the whole run; no
    ///   partial record is returned.
    pub fn run(
        &mut self,
        rounds: usize,
        mut roster_source: impl FnMut() -> Result<Vec<Arc<PlayerHandle>>, DiscoveryError>,
    ) -> Result<ScoreRecord, TournamentError> {
        if rounds == 0 {
            return Err(TournamentError::InvalidRoundCount);
        }

        let mut record = ScoreRecord::new();
        for round in 1..=rounds {
            trace!("round {round}/{rounds}");
            let roster = roster_source()?;
            info!(round, roster_size = roster.len());

            let scores = self.simulation.run_round(&roster).map_err(|source| {
                error!("simulation failed on round {round}: {source:#}");
                TournamentError::Simulation { round, source }
            })?;

            for (player, score) in scores {
                record.append(&player, score);
            }
        }

        Ok(record)
    }
}

#[cfg(test)]
mod runner_tests {
    use super::*;
    use crate::sim_interface::RoundScores;

    fn handle(name: &str) -> Arc<PlayerHandle> {
        Arc::new(PlayerHandle::new(
            name.to_owned(),
            format!("{name}/model.zip").into(),
        ))
    }

    struct FixedSimulation {
        scores: Vec<(&'static str, f64)>,
    }

    impl Simulation for FixedSimulation {
        fn run_round(&mut self, roster: &[Arc<PlayerHandle>]) -> anyhow::Result<RoundScores> {
            Ok(self
                .scores
                .iter()
                .filter(|(name, _)| roster.iter().any(|player| player.name == *name))
                .map(|(name, score)| (name.to_string(), *score))
                .collect())
        }
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let mut runner = TournamentRunner::new(FixedSimulation { scores: vec![] });
        let err = runner.run(0, || Ok(vec![])).unwrap_err();
        assert!(matches!(err, TournamentError::InvalidRoundCount));
    }

    #[test]
    fn every_round_appends_one_score_per_participant() {
        let mut runner = TournamentRunner::new(FixedSimulation {
            scores: vec![("a", 1.0), ("b", 2.0)],
        });
        let record = runner
            .run(3, || Ok(vec![handle("a"), handle("b")]))
            .unwrap();
        assert_eq!(record.get("a"), Some(&[1.0, 1.0, 1.0][..]));
        assert_eq!(record.get("b"), Some(&[2.0, 2.0, 2.0][..]));
    }

    #[test]
    fn absent_players_are_not_appended() {
        let mut runner = TournamentRunner::new(FixedSimulation {
            scores: vec![("a", 1.0), ("b", 2.0)],
        });
        let mut round = 0;
        let record = runner
            .run(3, || {
                round += 1;
                // "b" disappears from the roster after the first round
                if round == 1 {
                    Ok(vec![handle("a"), handle("b")])
                } else {
                    Ok(vec![handle("a")])
                }
            })
            .unwrap();
        assert_eq!(record.get("a").unwrap().len(), 3);
        assert_eq!(record.get("b").unwrap().len(), 1);
    }

    struct FailingSimulation {
        fail_on_round: usize,
        round: usize,
    }

    impl Simulation for FailingSimulation {
        fn run_round(&mut self, roster: &[Arc<PlayerHandle>]) -> anyhow::Result<RoundScores> {
            self.round += 1;
            if self.round == self.fail_on_round {
                anyhow::bail!("deliberate failure");
            }
            Ok(roster
                .iter()
                .map(|player| (player.name.clone(), 0.0))
                .collect())
        }
    }

    #[test]
    fn simulation_failure_aborts_the_run() {
        let mut runner = TournamentRunner::new(FailingSimulation {
            fail_on_round: 2,
            round: 0,
        });
        let err = runner.run(5, || Ok(vec![handle("a")])).unwrap_err();
        match err {
            TournamentError::Simulation { round, .. } => assert_eq!(round, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn discovery_failure_propagates() {
        let mut runner = TournamentRunner::new(FixedSimulation { scores: vec![] });
        let err = runner
            .run(1, || Err(DiscoveryError::InvalidRoot("missing".into())))
            .unwrap_err();
        assert!(matches!(err, TournamentError::Discovery(_)));
    }
}
