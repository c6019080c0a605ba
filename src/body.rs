//! Plain-data body and target state owned by the environment controller.

use crate::types::Vec3;

/// Physical state of the rolling agent.
///
/// The fields mirror what a rigid-body engine exposes: position, linear
/// velocity, and angular velocity. Forces submitted through
/// [`AgentBody::apply_force`] accumulate until the physics collaborator
/// drains them with [`AgentBody::take_force`] on its next integration tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentBody {
    /// Current position.
    pub position: Vec3,
    /// Linear velocity.
    pub velocity: Vec3,
    /// Angular velocity.
    pub angular_velocity: Vec3,
    /// Force accumulated since the last integration tick.
    force: Vec3,
}

impl AgentBody {
    /// Creates a body at rest at the given position.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zero(),
            angular_velocity: Vec3::zero(),
            force: Vec3::zero(),
        }
    }

    /// Accumulates a force for the next integration tick.
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Returns the accumulated force without draining it.
    pub fn pending_force(&self) -> Vec3 {
        self.force
    }

    /// Drains the accumulated force. Called by the physics collaborator.
    pub fn take_force(&mut self) -> Vec3 {
        std::mem::take(&mut self.force)
    }

    /// Zeroes linear and angular velocity.
    pub fn zero_momentum(&mut self) {
        self.velocity = Vec3::zero();
        self.angular_velocity = Vec3::zero();
    }

    /// True once the body has dropped below the platform surface.
    pub fn has_fallen(&self) -> bool {
        self.position.y < 0.0
    }
}

/// The point the agent is rewarded for reaching.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Current position.
    pub position: Vec3,
}

impl Target {
    /// Creates a target at the given position.
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forces_accumulate_until_taken() {
        let mut body = AgentBody::at_rest(Vec3::zero());
        body.apply_force(Vec3::new(1.0, 0.0, 0.0));
        body.apply_force(Vec3::new(2.0, 0.0, -1.0));
        assert_eq!(body.pending_force(), Vec3::new(3.0, 0.0, -1.0));

        let taken = body.take_force();
        assert_eq!(taken, Vec3::new(3.0, 0.0, -1.0));
        assert_eq!(body.pending_force(), Vec3::zero());
    }

    #[test]
    fn zero_momentum_clears_both_velocities() {
        let mut body = AgentBody::at_rest(Vec3::zero());
        body.velocity = Vec3::new(1.0, 2.0, 3.0);
        body.angular_velocity = Vec3::new(-1.0, 0.0, 4.0);
        body.zero_momentum();
        assert_eq!(body.velocity, Vec3::zero());
        assert_eq!(body.angular_velocity, Vec3::zero());
    }

    #[test]
    fn fallen_only_below_the_surface() {
        let mut body = AgentBody::at_rest(Vec3::new(0.0, 0.5, 0.0));
        assert!(!body.has_fallen());
        body.position.y = 0.0;
        assert!(!body.has_fallen());
        body.position.y = -0.01;
        assert!(body.has_fallen());
    }
}
