use mixing::observation::COLUMNS;
use mixing::{Action, MixingError, MixingSim, Observation};

use crate::env::{Env, Step};
use crate::spaces::{BoxSpace, MultiDiscrete};

/// Actions are `[from, to, ratio]` with bounds `[num_beakers, num_beakers,
/// 100]`; observations are the `num_beakers x 4` beaker matrix.
impl Env for MixingSim {
    type Observation = Observation;
    type Error = MixingError;

    fn reset(&mut self) -> Observation {
        MixingSim::reset(self)
    }

    fn step(&mut self, action: &[usize]) -> Result<Step<Observation>, MixingError> {
        let t = MixingSim::step(self, Action::try_from(action)?)?;
        Ok(Step {
            observation: t.observation,
            reward: t.reward,
            done: t.done,
            truncated: t.truncated,
        })
    }

    fn observe(&self) -> Observation {
        MixingSim::observe(self)
    }

    fn action_space(&self) -> MultiDiscrete {
        MultiDiscrete::new(self.action_dims().to_vec())
    }

    fn observation_space(&self) -> BoxSpace {
        BoxSpace::from_columns(self.num_beakers(), &[0.0; COLUMNS], &self.observation_high())
    }
}
