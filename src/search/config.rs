//! Exact search configuration.

use crate::error::ValidationError;

/// What to do with solutions whose cost equals the incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TiePolicy {
    /// Keep the first solution found, drop later equal ones.
    #[default]
    KeepFirst,
    /// Record every equal-cost solution in discovery order.
    Collect,
}

/// Configuration for [`SearchRunner`](super::SearchRunner) and the solvers
/// built on it.
///
/// # Examples
///
/// ```
/// use np_exact::search::{SearchConfig, TiePolicy};
///
/// let config = SearchConfig::default()
///     .with_tie_policy(TiePolicy::Collect)
///     .with_tolerance(1e-6);
/// assert_eq!(config.tie_policy, TiePolicy::Collect);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Tie handling. The assignment solver always collects.
    pub tie_policy: TiePolicy,

    /// Absolute tolerance used when comparing objective values.
    pub tolerance: f64,

    /// Cut minimization subtrees whose partial cost already exceeds the
    /// incumbent. Off by default: the search enumerates every state. Only
    /// sound when edge weights are non-negative.
    pub bound_pruning: bool,

    /// Seed the incumbent cost with the greedy heuristic's result.
    pub use_greedy_seed: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::KeepFirst,
            tolerance: 1e-9,
            bound_pruning: false,
            use_greedy_seed: true,
        }
    }
}

impl SearchConfig {
    pub fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_bound_pruning(mut self, enabled: bool) -> Self {
        self.bound_pruning = enabled;
        self
    }

    pub fn with_greedy_seed(mut self, enabled: bool) -> Self {
        self.use_greedy_seed = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.tolerance >= 0.0) || !self.tolerance.is_finite() {
            return Err(ValidationError::out_of_range(
                "tolerance",
                self.tolerance,
                "finite and >= 0",
            ));
        }
        Ok(())
    }
}
