//! # Chroma Application Logic
//!
//! [`run`] builds the simulation described by a [`RunConfig`], clones it
//! into a [`VecEnv`] of independent members and plays the requested
//! episodes with a baseline policy. Nothing here learns; the run only
//! reports what the chosen policy achieves.

use anyhow::{bail, Result};
use clap::ValueEnum;
use mixing::MixingSim;
use recipe::Recipe;
use rl::{run_vectorized, EpisodeStats, GreedyPolicy, Policy, RandomPolicy, VecEnv};

/// Baseline used to pick actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Uniform random actions, member `i` seeded with `seed + i`.
    Random,
    /// Best immediate reward, found by trying every action.
    Greedy,
}

/// Everything a run needs, supplied once up front.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub recipe: Recipe,
    pub episodes: usize,
    pub envs: usize,
    pub policy: PolicyKind,
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            recipe: Recipe::olive(),
            episodes: 1,
            envs: 1,
            policy: PolicyKind::Greedy,
            seed: 0,
        }
    }
}

/// Episodes in completion order.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub episodes: Vec<EpisodeStats>,
}

impl RunSummary {
    /// Highest single-step reward seen in any episode.
    #[must_use]
    pub fn best_reward(&self) -> f64 {
        self.episodes
            .iter()
            .map(|e| e.best_reward)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    #[must_use]
    pub fn mean_final_reward(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = self.episodes.len() as f64;
        self.episodes.iter().map(|e| e.final_reward).sum::<f64>() / n
    }
}

/// Plays `config.episodes` episodes on each of `config.envs` members.
///
/// # Errors
///
/// Returns an error for a zero episode or member count, an invalid recipe,
/// or an action the environment rejects.
pub fn run(config: RunConfig) -> Result<RunSummary> {
    if config.envs == 0 {
        bail!("at least one environment is required");
    }
    if config.episodes == 0 {
        bail!("at least one episode is required");
    }

    let sim = config.recipe.into_sim()?;
    tracing::info!(
        beakers = sim.num_beakers(),
        max_steps = sim.max_steps(),
        target = ?sim.target(),
        initial_reward = sim.reward(),
        "simulation ready"
    );

    let mut envs = VecEnv::new_with(config.envs, || sim.clone());
    let mut policies = build_policies(config.policy, config.envs, config.seed);

    tracing::info!(
        envs = config.envs,
        episodes = config.episodes,
        policy = ?config.policy,
        "starting rollouts"
    );
    let episodes = run_vectorized(&mut envs, &mut policies, config.episodes)?;

    for (i, e) in episodes.iter().enumerate() {
        tracing::info!(
            episode = i,
            steps = e.steps,
            total_reward = e.total_reward,
            final_reward = e.final_reward,
            best_reward = e.best_reward,
            "episode complete"
        );
    }

    let summary = RunSummary { episodes };
    tracing::info!(
        best_reward = summary.best_reward(),
        mean_final_reward = summary.mean_final_reward(),
        "run finished"
    );
    Ok(summary)
}

fn build_policies(kind: PolicyKind, n: usize, seed: u64) -> Vec<Box<dyn Policy<MixingSim>>> {
    (0..n)
        .map(|i| -> Box<dyn Policy<MixingSim>> {
            match kind {
                PolicyKind::Random => Box::new(RandomPolicy::new(seed.wrapping_add(i as u64))),
                PolicyKind::Greedy => Box::new(GreedyPolicy),
            }
        })
        .collect()
}
