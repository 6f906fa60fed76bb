//! Baseline action selectors. Neither learns; they exist to drive an
//! environment end to end and to give a reference return.

use crate::env::Env;

pub trait Policy<E: Env> {
    /// Chooses the next action for the environment's current state.
    fn act(&mut self, env: &E) -> Vec<usize>;
}

impl<E: Env, P: Policy<E> + ?Sized> Policy<E> for Box<P> {
    fn act(&mut self, env: &E) -> Vec<usize> {
        (**self).act(env)
    }
}

/// Uniformly random actions from a seeded generator.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl<E: Env> Policy<E> for RandomPolicy {
    fn act(&mut self, env: &E) -> Vec<usize> {
        env.action_space().sample(&self.rng)
    }
}

/// One-step lookahead: tries every action on a copy of the environment and
/// keeps the one with the highest immediate reward. The first such action in
/// [`MultiDiscrete::iter`](crate::MultiDiscrete::iter) order wins ties.
#[derive(Default)]
pub struct GreedyPolicy;

impl<E: Env + Clone> Policy<E> for GreedyPolicy {
    fn act(&mut self, env: &E) -> Vec<usize> {
        let space = env.action_space();
        let mut best: Option<(f64, Vec<usize>)> = None;

        for action in space.iter() {
            let mut probe = env.clone();
            let Ok(step) = probe.step(&action) else {
                continue;
            };
            if best.as_ref().map_or(true, |(reward, _)| step.reward > *reward) {
                best = Some((step.reward, action));
            }
        }

        best.map_or_else(|| vec![0; space.nvec.len()], |(_, action)| action)
    }
}
