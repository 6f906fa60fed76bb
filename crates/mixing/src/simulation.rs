//! # Mixing Simulation Core
//!
//! [`MixingSim`] owns a fixed row of beakers, a target paint and the episode
//! counters. Each [`MixingSim::step`] pours a fraction of one beaker into
//! another and scores the result against the target.
//!
//! Episodes have a fixed horizon: `done` turns true once `max_steps` transfers
//! have been made, no matter how close a beaker got to the target. The engine
//! never reports truncation.

use crate::observation::{Observation, COLUMNS};
use crate::paint::Paint;
use crate::types::Action;
use crate::MixingError;

/// Episode length used when a scene does not specify one.
pub const DEFAULT_MAX_STEPS: usize = 100;

/// Number of discrete transfer ratios, `0/100` through `99/100`.
pub const RATIO_LEVELS: usize = 100;

/// Result of a single transfer.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub truncated: bool,
}

/// Paint mixing environment state.
#[derive(Clone, Debug)]
pub struct MixingSim {
    beakers: Vec<Paint>,
    initial: Vec<Paint>,
    target: Paint,
    step_count: usize,
    max_steps: usize,
}

impl MixingSim {
    /// Creates a simulation from the initial beaker contents.
    ///
    /// The beakers are copied; [`MixingSim::reset`] restores this exact
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MixingError::NoBeakers`] for an empty beaker list and
    /// [`MixingError::InvalidAmount`] if any beaker or the target holds a
    /// negative or non-finite amount.
    pub fn new(beakers: Vec<Paint>, target: Paint, max_steps: usize) -> Result<Self, MixingError> {
        if beakers.is_empty() {
            return Err(MixingError::NoBeakers);
        }
        for paint in beakers.iter().chain(std::iter::once(&target)) {
            Paint::checked(paint.color, paint.amount)?;
        }

        tracing::debug!(
            num_beakers = beakers.len(),
            max_steps,
            "created mixing simulation"
        );

        Ok(Self {
            initial: beakers.clone(),
            beakers,
            target,
            step_count: 0,
            max_steps,
        })
    }

    /// [`MixingSim::new`] with [`DEFAULT_MAX_STEPS`].
    ///
    /// # Errors
    ///
    /// Same as [`MixingSim::new`].
    pub fn with_default_horizon(beakers: Vec<Paint>, target: Paint) -> Result<Self, MixingError> {
        Self::new(beakers, target, DEFAULT_MAX_STEPS)
    }

    /// Restores the construction-time beakers and clears the step counter.
    pub fn reset(&mut self) -> Observation {
        self.beakers.clone_from(&self.initial);
        self.step_count = 0;
        self.observe()
    }

    /// Pours `action.fraction()` of beaker `action.from` into beaker
    /// `action.to`.
    ///
    /// Pouring a beaker into itself is allowed and leaves it unchanged. The
    /// state is not touched when the action is rejected.
    ///
    /// # Errors
    ///
    /// [`MixingError::InvalidBeakerIndex`] if either index is outside
    /// `[0, num_beakers)`, [`MixingError::InvalidTransferRatio`] if the ratio
    /// is outside `[0, 100)`.
    pub fn step(&mut self, action: Action) -> Result<Transition, MixingError> {
        self.validate(action)?;

        let source = &mut self.beakers[action.from];
        let transfer = action.fraction() * source.amount;
        let poured = source.split(transfer).portion;

        self.beakers[action.to] = self.beakers[action.to].mix_with(&poured);
        self.step_count += 1;

        let reward = self.reward();
        let done = self.is_done();

        tracing::debug!(
            step = self.step_count,
            from = action.from,
            to = action.to,
            amount = poured.amount,
            reward,
            done,
            "transfer"
        );

        Ok(Transition {
            observation: self.observe(),
            reward,
            done,
            truncated: false,
        })
    }

    /// Current beakers as a `num_beakers x 4` matrix.
    #[must_use]
    pub fn observe(&self) -> Observation {
        Observation::from_beakers(&self.beakers)
    }

    /// Negated distance of the closest beaker to the target. Only the best
    /// beaker counts; the others are ignored.
    #[must_use]
    pub fn reward(&self) -> f64 {
        -self.closest_beaker().1
    }

    /// Index and distance of the beaker nearest the target. The first beaker
    /// wins ties.
    #[must_use]
    pub fn closest_beaker(&self) -> (usize, f64) {
        self.beakers
            .iter()
            .map(|paint| self.distance_to_target(paint))
            .enumerate()
            .fold((0, f64::INFINITY), |best, (i, d)| if d < best.1 { (i, d) } else { best })
    }

    /// RGB euclidean distance plus absolute volume difference.
    #[must_use]
    pub fn distance_to_target(&self, paint: &Paint) -> f64 {
        paint.color.distance(self.target.color) + (paint.amount - self.target.amount).abs()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step_count >= self.max_steps
    }

    #[must_use]
    pub fn beakers(&self) -> &[Paint] {
        &self.beakers
    }

    #[must_use]
    pub fn initial_beakers(&self) -> &[Paint] {
        &self.initial
    }

    #[must_use]
    pub fn target(&self) -> &Paint {
        &self.target
    }

    #[must_use]
    pub fn num_beakers(&self) -> usize {
        self.beakers.len()
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Volume held across all beakers. Transfers never change it.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.beakers.iter().map(|p| p.amount).sum()
    }

    /// Upper bound of each action component: `[from, to, ratio]`.
    #[must_use]
    pub fn action_dims(&self) -> [usize; 3] {
        [self.num_beakers(), self.num_beakers(), RATIO_LEVELS]
    }

    /// Observation shape, `(num_beakers, 4)`.
    #[must_use]
    pub fn observation_shape(&self) -> (usize, usize) {
        (self.num_beakers(), COLUMNS)
    }

    /// Per-column upper bound of the observation. Color columns top out at
    /// 255; since volume is conserved no beaker can hold more than the
    /// initial total.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn observation_high(&self) -> [f32; COLUMNS] {
        let total: f64 = self.initial.iter().map(|p| p.amount).sum();
        [255.0, 255.0, 255.0, total as f32]
    }

    fn validate(&self, action: Action) -> Result<(), MixingError> {
        let num_beakers = self.num_beakers();
        for index in [action.from, action.to] {
            if index >= num_beakers {
                return Err(MixingError::InvalidBeakerIndex { index, num_beakers });
            }
        }
        if action.ratio >= RATIO_LEVELS {
            return Err(MixingError::InvalidTransferRatio {
                ratio: action.ratio,
            });
        }
        Ok(())
    }
}
