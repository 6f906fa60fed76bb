#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Environment interface and thin consumers for the mixing engine.
//!
//! [`Env`] is the capability set an agent needs; [`mixing::MixingSim`]
//! implements it in [`color_mixing`]. [`VecEnv`] runs several independent
//! instances in lockstep, and [`rollout`] plays episodes with the baseline
//! policies in [`policy`].

pub mod color_mixing;
pub mod env;
pub mod policy;
pub mod rollout;
pub mod spaces;
pub mod vec_env;

pub use env::{Env, Step};
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
pub use rollout::{run_episode, run_vectorized, EpisodeStats};
pub use spaces::{BoxSpace, MultiDiscrete};
pub use vec_env::{VecEnv, VecEnvError, VecStep};
