//! Lockstep driver for several independent environments.
//!
//! Every member is its own instance with its own state; nothing is shared
//! between them. Members whose episode ends are reset automatically and the
//! observation that ended the episode is kept in
//! [`VecStep::terminal_observations`].

use thiserror::Error;

use crate::env::Env;

#[derive(Error, Debug)]
pub enum VecEnvError<E: std::error::Error + 'static> {
    #[error("expected {expected} actions, got {got}")]
    ActionCount { expected: usize, got: usize },
    #[error("action {action:?} for environment {index} is outside its action space")]
    InvalidAction { index: usize, action: Vec<usize> },
    #[error("environment {index} failed: {source}")]
    Env {
        index: usize,
        #[source]
        source: E,
    },
}

/// Batched result of [`VecEnv::step`], one entry per member.
#[derive(Clone, Debug)]
pub struct VecStep<O> {
    /// Observation after the step, or after the automatic reset for members
    /// that finished.
    pub observations: Vec<O>,
    pub rewards: Vec<f64>,
    pub dones: Vec<bool>,
    pub truncateds: Vec<bool>,
    pub terminal_observations: Vec<Option<O>>,
}

pub struct VecEnv<E: Env> {
    envs: Vec<E>,
}

impl<E: Env> VecEnv<E> {
    /// Builds `n` members by calling `make_env` once per member.
    pub fn new_with(n: usize, mut make_env: impl FnMut() -> E) -> Self {
        Self {
            envs: (0..n).map(|_| make_env()).collect(),
        }
    }

    #[must_use]
    pub fn from_envs(envs: Vec<E>) -> Self {
        Self { envs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.envs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    #[must_use]
    pub fn envs(&self) -> &[E] {
        &self.envs
    }

    pub fn reset_all(&mut self) -> Vec<E::Observation> {
        self.envs.iter_mut().map(|env| env.reset()).collect()
    }

    /// Steps every member with its action.
    ///
    /// All actions are checked against the members' action spaces before any
    /// member moves.
    ///
    /// # Errors
    ///
    /// [`VecEnvError::ActionCount`] or [`VecEnvError::InvalidAction`] before
    /// anything is stepped; [`VecEnvError::Env`] if a member rejects its
    /// action, in which case the members before it have already advanced.
    pub fn step(
        &mut self,
        actions: &[Vec<usize>],
    ) -> Result<VecStep<E::Observation>, VecEnvError<E::Error>> {
        if actions.len() != self.envs.len() {
            return Err(VecEnvError::ActionCount {
                expected: self.envs.len(),
                got: actions.len(),
            });
        }
        for (index, (env, action)) in self.envs.iter().zip(actions).enumerate() {
            if !env.action_space().contains(action) {
                return Err(VecEnvError::InvalidAction {
                    index,
                    action: action.clone(),
                });
            }
        }

        let n = self.envs.len();
        let mut out = VecStep {
            observations: Vec::with_capacity(n),
            rewards: Vec::with_capacity(n),
            dones: Vec::with_capacity(n),
            truncateds: Vec::with_capacity(n),
            terminal_observations: Vec::with_capacity(n),
        };

        for (index, (env, action)) in self.envs.iter_mut().zip(actions).enumerate() {
            let step = env
                .step(action)
                .map_err(|source| VecEnvError::Env { index, source })?;
            let finished = step.is_finished();

            out.rewards.push(step.reward);
            out.dones.push(step.done);
            out.truncateds.push(step.truncated);
            if finished {
                tracing::trace!(index, "member finished, resetting");
                out.terminal_observations.push(Some(step.observation));
                out.observations.push(env.reset());
            } else {
                out.terminal_observations.push(None);
                out.observations.push(step.observation);
            }
        }

        Ok(out)
    }
}
