//! Observation encoding for the roller-ball environment.
//!
//! The policy sees target and agent positions plus the agent's planar
//! velocity; vertical velocity and angular state are withheld.

use crate::body::{AgentBody, Target};
use crate::config::EnvConfig;

/// Builds the observation vector for the environment.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Builds the observation for the current state.
    ///
    /// The observation is a flat `Vec<f64>` with the fixed layout:
    /// ```text
    /// [target.x, target.y, target.z, agent.x, agent.y, agent.z, vel.x, vel.z]
    /// ```
    ///
    /// Always exactly [`EnvConfig::OBSERVATION_DIM`] values, every step.
    /// A pure read: building an observation never mutates state.
    pub fn build(body: &AgentBody, target: &Target) -> Vec<f64> {
        vec![
            target.position.x,
            target.position.y,
            target.position.z,
            body.position.x,
            body.position.y,
            body.position.z,
            body.velocity.x,
            body.velocity.z,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    #[test]
    fn observation_has_fixed_dim() {
        let body = AgentBody::at_rest(Vec3::new(0.0, 0.5, 0.0));
        let target = Target::new(Vec3::new(1.0, 0.5, -2.0));
        let obs = ObservationBuilder::build(&body, &target);
        assert_eq!(obs.len(), EnvConfig::OBSERVATION_DIM);
    }

    #[test]
    fn observation_order_is_target_agent_velocity() {
        let mut body = AgentBody::at_rest(Vec3::new(4.0, 5.0, 6.0));
        body.velocity = Vec3::new(7.0, 9.0, 8.0);
        let target = Target::new(Vec3::new(1.0, 2.0, 3.0));

        let obs = ObservationBuilder::build(&body, &target);
        assert_eq!(obs, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn vertical_velocity_is_withheld() {
        let mut body = AgentBody::at_rest(Vec3::zero());
        body.velocity = Vec3::new(0.0, 42.0, 0.0);
        let target = Target::new(Vec3::zero());
        let obs = ObservationBuilder::build(&body, &target);
        assert!(obs.iter().all(|&v| v != 42.0));
    }
}
