//! Configuration for the roller-ball environment.

use crate::types::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the roller-ball environment.
///
/// Controls the action-to-force mapping, target spawning, and the two
/// termination thresholds. The defaults are the canonical task constants.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvConfig {
    // --- Action mapping ---
    /// Scale applied to the planar action before it is submitted as a force.
    pub force_scale: f64,

    // --- Target spawning ---
    /// Half-width of the square spawn region; the target lands in
    /// `[-h, h) x [-h, h)` on the platform. Must be positive.
    pub spawn_half_extent: f64,
    /// Height at which the target sits.
    pub spawn_height: f64,

    // --- Termination ---
    /// Distance below which the target counts as reached.
    pub reach_threshold: f64,
    /// Where a fallen agent is restored on reset.
    pub respawn_position: Vec3,
}

impl EnvConfig {
    /// Number of values in an observation vector.
    pub const OBSERVATION_DIM: usize = 8;

    /// Number of components in an action vector.
    pub const ACTION_DIM: usize = 2;

    /// Observation dimension (fixed for this task).
    pub fn observation_dim(&self) -> usize {
        Self::OBSERVATION_DIM
    }

    /// Action dimension (fixed for this task).
    pub fn action_dim(&self) -> usize {
        Self::ACTION_DIM
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            force_scale: 10.0,
            spawn_half_extent: 4.0,
            spawn_height: 0.5,
            reach_threshold: 1.42,
            respawn_position: Vec3::new(0.0, 0.5, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = EnvConfig::default();
        assert!(cfg.force_scale > 0.0);
        assert!(cfg.spawn_half_extent > 0.0);
        assert!(cfg.reach_threshold > 0.0);
        assert_eq!(cfg.spawn_height, 0.5);
        assert_eq!(cfg.respawn_position, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn dimensions_are_fixed() {
        let cfg = EnvConfig::default();
        assert_eq!(cfg.observation_dim(), 8);
        assert_eq!(cfg.action_dim(), 2);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let cfg = EnvConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EnvConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.force_scale, cfg.force_scale);
        assert_eq!(back.respawn_position, cfg.respawn_position);
    }
}
