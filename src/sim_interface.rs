//! Module defining the traits that plug a competitive simulation into the
//! evaluator

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::player::PlayerHandle;

/// Scores produced by one simulation round, keyed by player name.
///
/// Players that did not take part in the round are simply absent from the
/// mapping.
pub type RoundScores = HashMap<String, f64>;

/// What the competitive simulation should implement
pub trait Simulation {
    /// Runs one competitive round among `roster` and returns one score per
    /// participating player.
    ///
    /// The roster is borrowed for the duration of the round; the simulation
    /// keeps no ownership of the handles.
    ///
    /// # Error
    /// Any error aborts the whole multi-round run. The evaluator does not
    /// retry.
    fn run_round(&mut self, roster: &[Arc<PlayerHandle>]) -> anyhow::Result<RoundScores>;
}

/// What a policy-backed player should implement. Not used by the harness
/// itself: simulations construct their players from the handles they are
/// given.
#[allow(dead_code)]
#[doc(hidden)]
pub trait Policy: Sized {
    /// Observation fed to the policy each step.
    type Observation;
    /// Action returned to the simulation.
    type Action;

    /// Loads the policy from its persisted artifact.
    ///
    /// This is where artifact validation belongs; discovery only checks that
    /// the file exists.
    fn load(name: &str, model_path: &Path) -> anyhow::Result<Self>;

    /// Selects the next action for the given observation.
    fn select_action(&mut self, observation: Self::Observation) -> Self::Action;
}

#[cfg(test)]
mod interface_tests {
    use super::*;

    struct EchoSimulation {}

    impl Simulation for EchoSimulation {
        fn run_round(&mut self, roster: &[Arc<PlayerHandle>]) -> anyhow::Result<RoundScores> {
            Ok(roster
                .iter()
                .map(|player| (player.name.clone(), roster.len() as f64))
                .collect())
        }
    }

    fn run_one_round<S: Simulation>(
        sim: &mut S,
        roster: &[Arc<PlayerHandle>],
    ) -> anyhow::Result<RoundScores> {
        sim.run_round(roster)
    }

    #[test]
    fn test_dyn_simulation() {
        let roster = vec![
            Arc::new(PlayerHandle::new("a".to_owned(), "a/model.zip".into())),
            Arc::new(PlayerHandle::new("b".to_owned(), "b/model.zip".into())),
        ];
        let mut sim = EchoSimulation {};
        let scores = run_one_round(&mut sim, &roster).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores["a"], 2.0);
    }

    struct ConstantPolicy {}

    impl Policy for ConstantPolicy {
        type Observation = Vec<f64>;
        type Action = usize;

        fn load(_name: &str, _model_path: &Path) -> anyhow::Result<Self> {
            Ok(ConstantPolicy {})
        }

        fn select_action(&mut self, _observation: Vec<f64>) -> usize {
            0
        }
    }

    #[test]
    fn test_dyn_policy() {
        let mut policy = ConstantPolicy::load("dummy", Path::new("dummy/model.zip")).unwrap();
        assert_eq!(policy.select_action(vec![1.0]), 0);
    }
}
