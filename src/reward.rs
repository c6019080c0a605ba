//! Reward and termination rule for the roller-ball task.

use std::fmt;

use crate::body::{AgentBody, Target};
use crate::config::EnvConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// The agent came within the reach threshold of the target.
    ReachedTarget,
    /// The agent dropped below the platform surface.
    FellOff,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::ReachedTarget => write!(f, "reached target"),
            Termination::FellOff => write!(f, "fell off"),
        }
    }
}

/// Computes the per-step reward and termination signal.
pub struct RewardComputer;

impl RewardComputer {
    /// Evaluates the two termination checks for the current state.
    ///
    /// - Distance to target below the reach threshold: reward 1.0, episode
    ///   ends with [`Termination::ReachedTarget`].
    /// - Agent below the platform surface: reward 0.0, episode ends with
    ///   [`Termination::FellOff`].
    /// - Otherwise: reward 0.0, episode continues.
    ///
    /// The reach check runs first; if both conditions held simultaneously
    /// the reached-target outcome wins.
    pub fn compute(
        body: &AgentBody,
        target: &Target,
        config: &EnvConfig,
    ) -> (f64, Option<Termination>) {
        let distance = body.position.distance_to(&target.position);

        if distance < config.reach_threshold {
            return (1.0, Some(Termination::ReachedTarget));
        }

        if body.has_fallen() {
            return (0.0, Some(Termination::FellOff));
        }

        (0.0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    #[test]
    fn within_threshold_rewards_and_terminates() {
        let body = AgentBody::at_rest(Vec3::new(0.0, 0.5, 0.0));
        let target = Target::new(Vec3::new(0.0, 0.5, 0.5));
        let config = EnvConfig::default();

        let (reward, termination) = RewardComputer::compute(&body, &target, &config);
        assert_eq!(reward, 1.0);
        assert_eq!(termination, Some(Termination::ReachedTarget));
    }

    #[test]
    fn fallen_terminates_without_reward() {
        let body = AgentBody::at_rest(Vec3::new(0.0, -1.0, 0.0));
        let target = Target::new(Vec3::new(5.0, 0.5, 5.0));
        let config = EnvConfig::default();

        let (reward, termination) = RewardComputer::compute(&body, &target, &config);
        assert_eq!(reward, 0.0);
        assert_eq!(termination, Some(Termination::FellOff));
    }

    #[test]
    fn far_and_upright_continues() {
        let body = AgentBody::at_rest(Vec3::new(0.0, 0.5, 0.0));
        let target = Target::new(Vec3::new(3.0, 0.5, 3.0));
        let config = EnvConfig::default();

        let (reward, termination) = RewardComputer::compute(&body, &target, &config);
        assert_eq!(reward, 0.0);
        assert_eq!(termination, None);
    }

    #[test]
    fn reach_wins_over_falling() {
        // A fallen body that is nevertheless within the threshold counts
        // as having reached the target.
        let body = AgentBody::at_rest(Vec3::new(0.0, -0.1, 0.0));
        let target = Target::new(Vec3::new(0.0, 0.5, 0.5));
        let config = EnvConfig::default();

        let (reward, termination) = RewardComputer::compute(&body, &target, &config);
        assert_eq!(reward, 1.0);
        assert_eq!(termination, Some(Termination::ReachedTarget));
    }

    #[test]
    fn distance_is_three_dimensional() {
        // Horizontally aligned but far below: vertical offset counts.
        let body = AgentBody::at_rest(Vec3::new(0.0, -2.0, 0.0));
        let target = Target::new(Vec3::new(0.0, 0.5, 0.0));
        let config = EnvConfig::default();

        let (reward, termination) = RewardComputer::compute(&body, &target, &config);
        assert_eq!(reward, 0.0);
        assert_eq!(termination, Some(Termination::FellOff));
    }
}
