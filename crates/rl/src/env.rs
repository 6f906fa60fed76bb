use crate::spaces::{BoxSpace, MultiDiscrete};

/// Outcome of one [`Env::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step<O> {
    pub observation: O,
    pub reward: f64,
    /// The episode reached its natural end.
    pub done: bool,
    /// The episode was cut short by something outside the environment.
    pub truncated: bool,
}

impl<O> Step<O> {
    /// Either flag ends the episode.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.done || self.truncated
    }
}

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait describes the
/// capabilities an agent relies on: resetting, stepping with a multi-discrete
/// action, observing the current state, and the bounds of the action and
/// observation spaces.
pub trait Env {
    type Observation: Clone;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reset the environment to its starting state and return the initial
    /// observation.
    fn reset(&mut self) -> Self::Observation;

    /// Advance the environment by one action. Each component of `action` must
    /// be below the matching entry of [`Env::action_space`].
    ///
    /// # Errors
    ///
    /// Implementations reject actions outside their action space.
    fn step(&mut self, action: &[usize]) -> Result<Step<Self::Observation>, Self::Error>;

    /// Observation of the current state without advancing it.
    fn observe(&self) -> Self::Observation;

    fn action_space(&self) -> MultiDiscrete;

    fn observation_space(&self) -> BoxSpace;
}
