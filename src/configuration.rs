//! Config for the evaluator behaviors
//!
//! This module provides configuration options for controlling the behavior of the evaluator.
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override configuration values. All
//! values are optional, and case-insensitive. Set the value to `"true"` to enable a flag.
//!
//! - `EVAL_VERBOSE` — Enable verbose output (default: `true`)
//! - `EVAL_LOG` — Enable logging to a file (default: `false`)
//! - `EVAL_REDISCOVER` — Re-scan the players directory before every round (default: `true`)

/// Configuration for evaluator behaviors.
#[derive(Debug, Clone, Copy)]
pub struct Configuration {
    pub(crate) verbose: bool,
    pub(crate) log: bool,
    pub(crate) rediscover_each_round: bool,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - The evaluator will print discovery progress to stdout.
    /// - Logging to file is disabled.
    /// - The players directory is re-scanned before every round, so models
    ///   added or removed mid-run change the roster of later rounds.
    pub fn new() -> Self {
        Self {
            verbose: true,
            log: false,
            rediscover_each_round: true,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// The following environment variables are recognized:
    /// - `EVAL_VERBOSE`: if set to `"true"`, enables verbose output (default: `true`)
    /// - `EVAL_LOG`: if set to `"true"`, enables logging to file (default: `false`)
    /// - `EVAL_REDISCOVER`: if set to `"true"`, re-scans the players directory every round (default: `true`)
    ///
    /// Any other value (including unset) will result in using the default value for each field.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        Self {
            verbose: get_env_flag("EVAL_VERBOSE", true),
            log: get_env_flag("EVAL_LOG", false),
            rediscover_each_round: get_env_flag("EVAL_REDISCOVER", true),
        }
    }

    /// Enable or disable silent mode.
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Enable or disable per-round re-discovery.
    ///
    /// When enabled, the players directory is re-scanned before every round
    /// and each round runs with whatever players are present at that moment.
    /// When disabled, discovery runs once and the first roster is reused for
    /// the whole run.
    pub fn with_rediscover_each_round(mut self, value: bool) -> Self {
        self.rediscover_each_round = value;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod configuration_tests {
    use super::*;

    #[test]
    fn builders_override_defaults() {
        let config = Configuration::new()
            .with_verbose(false)
            .with_log(true)
            .with_rediscover_each_round(false);
        assert!(!config.verbose);
        assert!(config.log);
        assert!(!config.rediscover_each_round);
    }

    #[test]
    fn env_flags_are_case_insensitive() {
        std::env::set_var("EVAL_REDISCOVER", "FALSE");
        std::env::set_var("EVAL_VERBOSE", "TRUE");
        let config = Configuration::from_env();
        assert!(!config.rediscover_each_round);
        assert!(config.verbose);
        std::env::remove_var("EVAL_REDISCOVER");
        std::env::remove_var("EVAL_VERBOSE");
    }
}
