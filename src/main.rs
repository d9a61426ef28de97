use bandit_simulator::config::AppConfig;
use bandit_simulator::errors::AppError;
use bandit_simulator::runner::run_trials;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut simulator = config.build_simulator()?;
    info!(
        arms = simulator.num_arms(),
        policy = ?config.policy,
        "Built simulator"
    );

    let simulation = &config.simulation;
    let report = run_trials(
        &mut simulator,
        simulation.steps,
        simulation.trials,
        simulation.window,
    )?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
