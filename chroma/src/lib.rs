//! # Chroma: subtractive paint mixing as an agent environment
//!
//! Chroma models pouring paint between beakers as a discrete-time process
//! with a state/action/reward interface. An agent picks a source beaker, a
//! destination beaker and a transfer ratio; the simulation blends the paints
//! subtractively and rewards it by how close the best beaker is to a target
//! color and volume.
//!
//! ## The Crates
//!
//! -   **`chroma`:** The crate you are currently viewing. It holds the
//!     command-line entry point and [`app::run`], which drives whole episodes
//!     from an explicit [`app::RunConfig`].
//! -   **[`mixing`]:** The deterministic engine: colors, paints, the
//!     complement-space mixer and the [`mixing::MixingSim`] state machine.
//! -   **[`rl`]:** The [`rl::Env`] capability trait, space descriptors, a
//!     vectorized wrapper and non-learning baseline policies.
//! -   **[`recipe`]:** JSON scene files describing beakers, target and
//!     episode length.

pub mod app;

pub use mixing;
pub use recipe;
pub use rl;
