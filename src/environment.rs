//! The roller-ball episode controller.
//!
//! Owns one agent body and one target on a bounded platform and implements
//! the reset/observe/step cycle consumed by an external training loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body::{AgentBody, Target};
use crate::config::EnvConfig;
use crate::error::EnvError;
use crate::observation::ObservationBuilder;
use crate::reward::{RewardComputer, Termination};
use crate::types::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a single environment step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepOutcome {
    /// Scalar feedback for this step.
    pub reward: f64,
    /// Whether the episode has ended. Always `termination.is_some()`.
    pub done: bool,
    /// Why the episode ended, when it did.
    pub termination: Option<Termination>,
}

/// The reset/observe/step contract an episode controller fulfils.
///
/// The external loop calls [`reset`](Environment::reset) once per episode,
/// then alternates [`observe`](Environment::observe) and
/// [`step`](Environment::step); on a done outcome it must reset before
/// stepping again. All calls are synchronous and single-threaded.
pub trait Environment {
    /// Begins a new episode.
    fn reset(&mut self);

    /// Returns the current observation vector.
    fn observe(&self) -> Vec<f64>;

    /// Applies an action and returns the reward/termination outcome.
    fn step(&mut self, action: &[f64]) -> Result<StepOutcome, EnvError>;
}

/// The roller-ball environment.
///
/// # Lifecycle
///
/// 1. Call [`RollerEnv::new`] with configuration and seed.
/// 2. Call [`Environment::reset`] to start an episode.
/// 3. Alternate [`Environment::observe`] and [`Environment::step`] until the
///    outcome reports `done`.
///
/// The physics integration between two steps belongs to an external
/// collaborator (see [`crate::integrator::Integrator`]): `step` only submits
/// a force to the body and judges the state it currently sees.
#[derive(Debug)]
pub struct RollerEnv {
    /// Environment configuration.
    pub config: EnvConfig,
    /// The rolling agent's body.
    pub body: AgentBody,
    /// The target point.
    pub target: Target,
    /// Random number generator for target spawning.
    rng: StdRng,
    /// Seed for reproducible resets.
    seed: u64,
}

impl RollerEnv {
    /// Creates a new environment with the given configuration and RNG seed.
    ///
    /// The body starts at rest at the respawn position; the target is placed
    /// by the first [`Environment::reset`].
    pub fn new(config: EnvConfig, seed: u64) -> Self {
        let body = AgentBody::at_rest(config.respawn_position);
        let target = Target::new(Vec3::new(0.0, config.spawn_height, 0.0));
        Self {
            config,
            body,
            target,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    fn validate_action(action: &[f64]) -> Result<(), EnvError> {
        if action.len() != EnvConfig::ACTION_DIM {
            return Err(EnvError::ActionLength {
                expected: EnvConfig::ACTION_DIM,
                got: action.len(),
            });
        }
        for (index, &value) in action.iter().enumerate() {
            if !value.is_finite() {
                return Err(EnvError::NonFiniteAction { index, value });
            }
        }
        Ok(())
    }
}

impl Environment for RollerEnv {
    /// Starts a new episode.
    ///
    /// A fallen agent has its momentum zeroed and is restored to the respawn
    /// position; an agent still on the platform is left untouched. The
    /// target always moves to a fresh uniform draw from the spawn square.
    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.seed += 1; // different draw each episode

        if self.body.has_fallen() {
            self.body.zero_momentum();
            self.body.position = self.config.respawn_position;
        }

        let h = self.config.spawn_half_extent;
        self.target.position = Vec3::new(
            self.rng.gen_range(-h..h),
            self.config.spawn_height,
            self.rng.gen_range(-h..h),
        );
    }

    fn observe(&self) -> Vec<f64> {
        ObservationBuilder::build(&self.body, &self.target)
    }

    /// Applies an action as a planar force and evaluates termination.
    ///
    /// The action is validated (length and finiteness) but not clamped;
    /// out-of-range magnitudes pass through to the force unmodified.
    fn step(&mut self, action: &[f64]) -> Result<StepOutcome, EnvError> {
        Self::validate_action(action)?;

        let force = Vec3::new(action[0], 0.0, action[1]) * self.config.force_scale;
        self.body.apply_force(force);

        let (reward, termination) = RewardComputer::compute(&self.body, &self.target, &self.config);
        Ok(StepOutcome {
            reward,
            done: termination.is_some(),
            termination,
        })
    }
}
