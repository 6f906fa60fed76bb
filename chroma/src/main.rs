//! # Chroma Runtime
//!
//! Loads a scene (or the built-in olive scene), plays episodes with a
//! baseline policy and logs the rewards. Set `RUST_LOG=debug` to see every
//! transfer.

use std::path::PathBuf;

use anyhow::Result;
use chroma::app::{self, PolicyKind, RunConfig};
use clap::Parser;
use recipe::Recipe;

#[derive(Parser, Debug)]
#[command(name = "chroma", version, about = "Play subtractive paint mixing episodes")]
struct Args {
    /// Scene file; defaults to three primaries aiming for olive.
    #[arg(long)]
    recipe: Option<PathBuf>,

    /// Episodes to play per environment.
    #[arg(long, default_value_t = 1)]
    episodes: usize,

    /// Independent environments stepped in lockstep.
    #[arg(long, default_value_t = 1)]
    envs: usize,

    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    policy: PolicyKind,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Overrides the scene's episode length.
    #[arg(long)]
    max_steps: Option<usize>,
}

impl Args {
    fn into_config(self) -> Result<RunConfig> {
        let mut recipe = match &self.recipe {
            Some(path) => Recipe::load(path)?,
            None => Recipe::olive(),
        };
        if let Some(max_steps) = self.max_steps {
            recipe = recipe.with_max_steps(max_steps);
        }
        Ok(RunConfig {
            recipe,
            episodes: self.episodes,
            envs: self.envs,
            policy: self.policy,
            seed: self.seed,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config()?;
    app::run(config)?;
    Ok(())
}
