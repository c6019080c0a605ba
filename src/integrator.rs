//! Physics-collaborator seam.
//!
//! The controller only submits forces; everything that happens between two
//! `step` calls belongs to an implementation of [`Integrator`]. In
//! production that is a full physics engine. [`PointMassIntegrator`] is the
//! minimal stand-in the demos and tests use to drive whole episodes.

use crate::body::AgentBody;

/// Advances body state between two environment steps.
pub trait Integrator {
    /// Drains the body's pending force and advances the body by one tick.
    fn advance(&mut self, body: &mut AgentBody);
}

/// Semi-implicit Euler update of a single point mass.
///
/// No gravity, no contacts, no angular dynamics: the body keeps whatever
/// height it has and accelerates only under submitted forces. Enough to
/// roll the ball across the platform toward the target.
#[derive(Debug, Clone)]
pub struct PointMassIntegrator {
    /// Body mass.
    pub mass: f64,
    /// Fixed timestep per tick.
    pub dt: f64,
}

impl PointMassIntegrator {
    /// Creates an integrator with the given mass and timestep.
    pub fn new(mass: f64, dt: f64) -> Self {
        Self { mass, dt }
    }
}

impl Default for PointMassIntegrator {
    fn default() -> Self {
        // Unit mass at a 50 Hz fixed timestep.
        Self::new(1.0, 0.02)
    }
}

impl Integrator for PointMassIntegrator {
    fn advance(&mut self, body: &mut AgentBody) {
        let force = body.take_force();
        body.velocity += force * (self.dt / self.mass);
        body.position += body.velocity * self.dt;
    }
}
