//! rollerball - a "roll a ball to a target" reinforcement-learning environment.
//!
//! Implements the environment side of the standard RL contract: a per-episode
//! reset rule, a fixed 8-float observation, an action-to-force mapping, and a
//! reward/termination rule. The training loop and the physics integration
//! between two steps belong to external collaborators; the physics seam is
//! the [`Integrator`] trait, and baseline policies plus an evaluation harness
//! are included so episodes can be exercised without a trainer.

pub mod body;
pub mod config;
pub mod environment;
pub mod error;
pub mod integrator;
pub mod metrics;
pub mod observation;
pub mod policy;
pub mod reward;
pub mod types;

pub use body::{AgentBody, Target};
pub use config::EnvConfig;
pub use environment::{Environment, RollerEnv, StepOutcome};
pub use error::EnvError;
pub use integrator::{Integrator, PointMassIntegrator};
pub use metrics::EvaluationMetrics;
pub use observation::ObservationBuilder;
pub use policy::{Policy, RandomPolicy, SeekTargetPolicy};
pub use reward::{RewardComputer, Termination};
pub use types::Vec3;
