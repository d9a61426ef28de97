//! Batch helpers on top of [`Simulator`]: repeated stepping, score
//! snapshots and averaging over independent trials.

use crate::errors::SimulatorError;
use crate::simulator::Simulator;

use serde::Serialize;
use tracing::{debug, info, warn};

/// Averages over `trials` replays of the same arm configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialsReport {
    pub trials: usize,
    pub steps: usize,
    pub window: usize,
    /// `mean_scores[step][arm]`, snapshotted before each step.
    pub mean_scores: Vec<Vec<f64>>,
    pub mean_rewards: Vec<f64>,
    pub rolling_rewards: Vec<f64>,
}

pub fn run_steps(simulator: &mut Simulator, steps: usize) -> Result<(), SimulatorError> {
    (0..steps).try_for_each(|_| simulator.next_step().map(|_| ()))
}

/// Steps `steps` times, returning the score vector as it was before each step.
pub fn record_scores(
    simulator: &mut Simulator,
    steps: usize,
) -> Result<Vec<Vec<f64>>, SimulatorError> {
    (0..steps)
        .map(|_| {
            let scores = simulator.scores();
            simulator.next_step().map(|_| scores)
        })
        .collect()
}

/// Runs `trials` independent trials of `steps` steps each, reinitializing the
/// simulator after every trial, including one that failed.
pub fn run_trials(
    simulator: &mut Simulator,
    steps: usize,
    trials: usize,
    window: usize,
) -> Result<TrialsReport, SimulatorError> {
    let num_arms = simulator.num_arms();
    let mut score_sums = vec![vec![0.0; num_arms]; steps];
    let mut reward_sums = vec![0.0; steps];

    for trial in 0..trials {
        debug!(trial, steps, "Starting trial");
        let scores = match record_scores(simulator, steps) {
            Ok(scores) => scores,
            Err(err) => {
                warn!(trial, step = simulator.step(), "Trial failed: {err}");
                simulator.reinit();
                return Err(err);
            }
        };

        score_sums
            .iter_mut()
            .zip(&scores)
            .for_each(|(sums, step_scores)| {
                sums.iter_mut()
                    .zip(step_scores)
                    .for_each(|(sum, score)| *sum += score)
            });
        reward_sums
            .iter_mut()
            .zip(simulator.reward_history())
            .for_each(|(sum, reward)| *sum += reward);

        simulator.reinit();
    }

    let denominator = trials.max(1) as f64;
    let mean_scores = if trials == 0 {
        Vec::new()
    } else {
        score_sums
            .into_iter()
            .map(|sums| sums.into_iter().map(|sum| sum / denominator).collect())
            .collect()
    };
    let mean_rewards: Vec<f64> = if trials == 0 {
        Vec::new()
    } else {
        reward_sums.into_iter().map(|sum| sum / denominator).collect()
    };
    let rolling_rewards = rolling_average(&mean_rewards, window);

    info!(trials, steps, "Finished trials");

    Ok(TrialsReport {
        trials,
        steps,
        window,
        mean_scores,
        mean_rewards,
        rolling_rewards,
    })
}

/// Mean over the last `window` values at each position; the first positions
/// average over whatever is available.
pub fn rolling_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);

    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}
