//! Episode runners.

use crate::env::Env;
use crate::policy::Policy;
use crate::vec_env::{VecEnv, VecEnvError};

/// Summary of one finished episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeStats {
    pub steps: usize,
    pub total_reward: f64,
    pub final_reward: f64,
    pub best_reward: f64,
}

impl Default for EpisodeStats {
    fn default() -> Self {
        Self {
            steps: 0,
            total_reward: 0.0,
            final_reward: 0.0,
            best_reward: f64::NEG_INFINITY,
        }
    }
}

impl EpisodeStats {
    pub fn record(&mut self, reward: f64) {
        self.steps += 1;
        self.total_reward += reward;
        self.final_reward = reward;
        self.best_reward = self.best_reward.max(reward);
    }

    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let steps = self.steps as f64;
            self.total_reward / steps
        }
    }
}

/// Resets `env` and plays one episode with `policy` until it finishes.
///
/// # Errors
///
/// Propagates the first error returned by [`Env::step`].
pub fn run_episode<E, P>(env: &mut E, policy: &mut P) -> Result<EpisodeStats, E::Error>
where
    E: Env,
    P: Policy<E> + ?Sized,
{
    env.reset();
    let mut stats = EpisodeStats::default();
    loop {
        let action = policy.act(env);
        let step = env.step(&action)?;
        stats.record(step.reward);
        if step.is_finished() {
            break;
        }
    }
    tracing::debug!(
        steps = stats.steps,
        total_reward = stats.total_reward,
        final_reward = stats.final_reward,
        "episode finished"
    );
    Ok(stats)
}

/// Plays `episodes_per_env` episodes on every member of `envs`, member `i`
/// acting with `policies[i]`. Members step in lockstep; a member that has
/// played its share keeps stepping but is no longer recorded.
///
/// Results are in completion order.
///
/// # Errors
///
/// Propagates [`VecEnv::step`] errors, including a policy count that does
/// not match the number of members.
pub fn run_vectorized<E, P>(
    envs: &mut VecEnv<E>,
    policies: &mut [P],
    episodes_per_env: usize,
) -> Result<Vec<EpisodeStats>, VecEnvError<E::Error>>
where
    E: Env,
    P: Policy<E>,
{
    let n = envs.len();
    let mut finished = vec![0usize; n];
    let mut running = vec![EpisodeStats::default(); n];
    let mut completed = Vec::with_capacity(n * episodes_per_env);

    envs.reset_all();
    while finished.iter().any(|&f| f < episodes_per_env) {
        let actions: Vec<Vec<usize>> = envs
            .envs()
            .iter()
            .zip(policies.iter_mut())
            .map(|(env, policy)| policy.act(env))
            .collect();
        let step = envs.step(&actions)?;

        for i in 0..n {
            if finished[i] >= episodes_per_env {
                continue;
            }
            running[i].record(step.rewards[i]);
            if step.dones[i] || step.truncateds[i] {
                let stats = std::mem::take(&mut running[i]);
                tracing::debug!(env = i, episode = finished[i], total_reward = stats.total_reward, "episode finished");
                completed.push(stats);
                finished[i] += 1;
            }
        }
    }

    Ok(completed)
}
