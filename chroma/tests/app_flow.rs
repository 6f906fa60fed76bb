use chroma::app::{run, PolicyKind, RunConfig};
use chroma::recipe::Recipe;

#[test]
fn default_config_plays_one_greedy_episode() {
    let config = RunConfig {
        recipe: Recipe::olive().with_max_steps(3),
        ..RunConfig::default()
    };
    let summary = run(config).unwrap();
    assert_eq!(summary.episodes.len(), 1);
    assert_eq!(summary.episodes[0].steps, 3);
    assert!(summary.best_reward() <= 0.0);
}

#[test]
fn random_policy_over_several_envs() {
    let config = RunConfig {
        recipe: Recipe::olive().with_max_steps(20),
        episodes: 3,
        envs: 4,
        policy: PolicyKind::Random,
        seed: 9,
    };
    let a = run(config.clone()).unwrap();
    let b = run(config).unwrap();
    assert_eq!(a.episodes.len(), 12);
    assert_eq!(a.episodes, b.episodes);
    assert!(a.mean_final_reward() <= 0.0);
}

#[test]
fn zero_counts_are_rejected() {
    let no_envs = RunConfig { envs: 0, ..RunConfig::default() };
    assert!(run(no_envs).is_err());
    let no_episodes = RunConfig { episodes: 0, ..RunConfig::default() };
    assert!(run(no_episodes).is_err());
}

#[test]
fn invalid_recipe_is_an_error() {
    let recipe = Recipe::parse(r#"{ "beakers": [], "target": { "color": [1, 2, 3], "amount": 4 } }"#).unwrap();
    let config = RunConfig { recipe, ..RunConfig::default() };
    assert!(run(config).is_err());
}
