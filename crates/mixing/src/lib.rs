#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Chroma Mixing Engine
//!
//! A small, deterministic world model of subtractive paint mixing.
//!
//! ## Key Components
//!
//! -   **Colors and actions:** [`Color`] is an RGB triple, [`Action`] a
//!     request to pour a fraction of one beaker into another. Both live in
//!     the [`types`] module.
//! -   **Mixing:** [`mixer::mix`] blends two colors in complement space,
//!     weighted by volume.
//! -   **Paint:** [`Paint`] pairs a color with a volume and knows how to
//!     merge with another paint and to split a portion off itself.
//! -   **Simulation:** [`MixingSim`] holds the beakers, the target paint and
//!     the episode counters. It is the state machine an agent drives through
//!     `reset`/`step`/`observe`.
//!
//! ## Usage
//!
//! ```rust
//! use mixing::{Action, Color, MixingSim, Paint};
//!
//! let beakers = vec![
//!     Paint::new(Color::RED, 100.0),
//!     Paint::new(Color::GREEN, 100.0),
//!     Paint::new(Color::BLUE, 100.0),
//! ];
//! let target = Paint::new(Color::new(128, 128, 0), 150.0);
//! let mut sim = MixingSim::with_default_horizon(beakers, target)?;
//!
//! let t = sim.step(Action::new(0, 1, 50))?;
//! assert_eq!(sim.beakers()[1].color, Color::new(85, 170, 0));
//! assert!(t.reward <= 0.0);
//! # Ok::<(), mixing::MixingError>(())
//! ```

pub mod error;
pub mod mixer;
pub mod observation;
pub mod paint;
pub mod simulation;
pub mod types;

pub use error::MixingError;
pub use observation::{BeakerRecord, Observation};
pub use paint::{Paint, Split};
pub use simulation::{MixingSim, Transition, DEFAULT_MAX_STEPS, RATIO_LEVELS};
pub use types::{Action, Color};
