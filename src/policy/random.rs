//! Random policy for testing and baselines.

use rand::Rng;

use super::trait_::Policy;
use crate::config::EnvConfig;

/// Uniformly random planar pushes.
///
/// Each component is drawn independently from `[-scale, scale]`. Used for
/// sanity checks and as a lower-bound baseline.
pub struct RandomPolicy {
    scale: f64,
}

impl RandomPolicy {
    /// Creates a new random policy.
    ///
    /// # Arguments
    ///
    /// * `scale` - Magnitude bound for each action component.
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &[f64]) -> [f64; EnvConfig::ACTION_DIM] {
        let mut rng = rand::thread_rng();
        let mut action = [0.0; EnvConfig::ACTION_DIM];
        for component in &mut action {
            *component = rng.gen_range(-self.scale..=self.scale);
        }
        action
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_stay_in_range() {
        let mut policy = RandomPolicy::new(1.0);
        let obs = vec![0.0; 8];
        for _ in 0..100 {
            let action = policy.select_action(&obs);
            for component in action {
                assert!((-1.0..=1.0).contains(&component));
            }
        }
    }

    #[test]
    fn zero_scale_gives_zero_actions() {
        let mut policy = RandomPolicy::new(0.0);
        let action = policy.select_action(&[0.0; 8]);
        assert_eq!(action, [0.0, 0.0]);
    }
}
