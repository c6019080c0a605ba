//! Evaluation metrics for the roller-ball environment.
//!
//! Runs a policy and a physics collaborator against the environment for a
//! number of episodes and aggregates episode-level outcomes.

use std::fmt;

use crate::environment::{Environment, RollerEnv};
use crate::error::EnvError;
use crate::integrator::Integrator;
use crate::policy::Policy;
use crate::reward::Termination;

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone)]
pub struct EvaluationMetrics {
    /// Fraction of episodes that ended by reaching the target.
    pub success_rate: f64,
    /// Fraction of episodes that ended by falling off the platform.
    pub fall_rate: f64,
    /// Fraction of episodes cut off at the step cap.
    pub timeout_rate: f64,
    /// Mean cumulative reward per episode.
    pub mean_reward: f64,
    /// Mean number of steps per episode.
    pub mean_episode_len: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
}

/// Per-episode statistics collected during evaluation.
#[derive(Debug, Default)]
struct EpisodeStats {
    reward: f64,
    steps: u32,
    termination: Option<Termination>,
}

impl EvaluationMetrics {
    /// Evaluates a policy over multiple episodes and aggregates the results.
    ///
    /// Each episode runs the reset/observe/act/step cycle, handing the body
    /// to the integrator after every step. Episodes that have not terminated
    /// after `max_steps` are cut off and counted as timeouts.
    ///
    /// # Arguments
    ///
    /// * `env` - The environment to evaluate in
    /// * `policy` - The action source
    /// * `integrator` - The physics collaborator advancing the body
    /// * `n_episodes` - Number of episodes to run
    /// * `max_steps` - Step cap per episode
    pub fn evaluate(
        env: &mut RollerEnv,
        policy: &mut dyn Policy,
        integrator: &mut dyn Integrator,
        n_episodes: usize,
        max_steps: u32,
    ) -> Result<Self, EnvError> {
        let mut all_stats = Vec::with_capacity(n_episodes);

        for _ in 0..n_episodes {
            env.reset();
            let mut stats = EpisodeStats::default();

            for _ in 0..max_steps {
                let observation = env.observe();
                let action = policy.select_action(&observation);
                let outcome = env.step(&action)?;
                integrator.advance(&mut env.body);

                stats.steps += 1;
                stats.reward += outcome.reward;

                if outcome.done {
                    stats.termination = outcome.termination;
                    break;
                }
            }

            all_stats.push(stats);
        }

        let n = all_stats.len() as f64;
        let count = |t: Termination| {
            all_stats
                .iter()
                .filter(|s| s.termination == Some(t))
                .count() as f64
        };
        let timeouts = all_stats.iter().filter(|s| s.termination.is_none()).count() as f64;

        Ok(Self {
            success_rate: count(Termination::ReachedTarget) / n,
            fall_rate: count(Termination::FellOff) / n,
            timeout_rate: timeouts / n,
            mean_reward: all_stats.iter().map(|s| s.reward).sum::<f64>() / n,
            mean_episode_len: all_stats.iter().map(|s| s.steps as f64).sum::<f64>() / n,
            n_episodes,
        })
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes
        )?;
        writeln!(f, "  Success rate:        {:.1}%", self.success_rate * 100.0)?;
        writeln!(f, "  Fall rate:           {:.1}%", self.fall_rate * 100.0)?;
        writeln!(f, "  Timeout rate:        {:.1}%", self.timeout_rate * 100.0)?;
        writeln!(f, "  Mean reward:         {:.2}", self.mean_reward)?;
        writeln!(
            f,
            "  Mean episode length: {:.1} steps",
            self.mean_episode_len
        )
    }
}
