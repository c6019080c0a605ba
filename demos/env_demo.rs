// Demonstration: roll episodes with a baseline policy and report metrics.
//
// Run from the repo root:
//   cargo run --example env_demo -- --policy seek --episodes 50 --seed 42

use std::env;

use rollerball::{
    EnvConfig, EvaluationMetrics, PointMassIntegrator, Policy, RandomPolicy, RollerEnv,
    SeekTargetPolicy,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("seek");
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(25);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let max_steps: u32 = arg_value(&args, "--max-steps")
        .and_then(|s| s.parse().ok())
        .unwrap_or(500);

    let config = EnvConfig::default();
    let mut env = RollerEnv::new(config, seed);
    let mut integrator = PointMassIntegrator::default();

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(1.0)),
        "seek" => Box::new(SeekTargetPolicy::default()),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'seek' or 'random'.", other);
            std::process::exit(2);
        }
    };

    match EvaluationMetrics::evaluate(&mut env, policy.as_mut(), &mut integrator, episodes, max_steps)
    {
        Ok(metrics) => {
            println!("Policy: {}", policy.name());
            println!("{}", metrics);
        }
        Err(err) => {
            eprintln!("Evaluation failed: {}", err);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
