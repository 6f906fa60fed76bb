#![deny(clippy::all, clippy::pedantic)]
//! JSON scene definitions for the mixing simulation.
//!
//! ```json
//! {
//!   "beakers": [
//!     { "color": [255, 0, 0], "amount": 100.0 },
//!     { "color": [0, 255, 0], "amount": 100.0 }
//!   ],
//!   "target": { "color": [128, 128, 0], "amount": 150.0 },
//!   "max_steps": 100
//! }
//! ```
//!
//! `max_steps` may be omitted and defaults to
//! [`mixing::DEFAULT_MAX_STEPS`]. Color channels outside `0..=255` are
//! rejected while parsing; negative amounts when building the simulation.

use std::path::Path;

use anyhow::{Context, Result};
use mixing::{Color, MixingSim, Paint, DEFAULT_MAX_STEPS};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub beakers: Vec<PaintDef>,
    pub target: PaintDef,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PaintDef {
    pub color: [u8; 3],
    pub amount: f64,
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

impl From<PaintDef> for Paint {
    fn from(def: PaintDef) -> Self {
        Paint::new(Color::from(def.color), def.amount)
    }
}

impl Recipe {
    /// Parses a recipe from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, missing fields or color channels
    /// that do not fit in `0..=255`.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a recipe file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read recipe {}", path.display()))?;
        let recipe = Self::parse(&json)
            .with_context(|| format!("failed to parse recipe {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            beakers = recipe.beakers.len(),
            max_steps = recipe.max_steps,
            "loaded recipe"
        );
        Ok(recipe)
    }

    /// Red, green and blue primaries of 100 ml each, aiming for 150 ml of
    /// olive `(128, 128, 0)` within 100 transfers.
    #[must_use]
    pub fn olive() -> Self {
        let primary = |color| PaintDef { color, amount: 100.0 };
        Self {
            beakers: vec![primary([255, 0, 0]), primary([0, 255, 0]), primary([0, 0, 255])],
            target: PaintDef {
                color: [128, 128, 0],
                amount: 150.0,
            },
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Builds a fresh simulation from this recipe.
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe has no beakers or any amount is
    /// negative or non-finite.
    pub fn into_sim(self) -> Result<MixingSim> {
        let beakers = self.beakers.into_iter().map(Paint::from).collect();
        let sim = MixingSim::new(beakers, self.target.into(), self.max_steps)
            .context("invalid recipe")?;
        Ok(sim)
    }
}
