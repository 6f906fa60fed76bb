use mixing::{Color, MixingSim, Paint};
use rl::{run_episode, run_vectorized, Env, GreedyPolicy, Policy, RandomPolicy, VecEnv};

fn olive_sim(max_steps: usize) -> MixingSim {
    MixingSim::new(
        vec![
            Paint::new(Color::RED, 100.0),
            Paint::new(Color::GREEN, 100.0),
            Paint::new(Color::BLUE, 100.0),
        ],
        Paint::new(Color::new(128, 128, 0), 150.0),
        max_steps,
    )
    .unwrap()
}

#[test]
fn episode_runs_to_the_horizon() {
    let mut env = olive_sim(25);
    let mut policy = RandomPolicy::new(0);
    let stats = run_episode(&mut env, &mut policy).unwrap();
    assert_eq!(stats.steps, 25);
    assert!(stats.total_reward <= 0.0);
    assert!(stats.best_reward >= stats.final_reward);
    assert!(stats.mean_reward() <= 0.0);
}

#[test]
fn seeded_random_policy_is_reproducible() {
    let a = run_episode(&mut olive_sim(30), &mut RandomPolicy::new(42)).unwrap();
    let b = run_episode(&mut olive_sim(30), &mut RandomPolicy::new(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn greedy_picks_the_best_immediate_action() {
    let env = olive_sim(10);
    let chosen = GreedyPolicy.act(&env);

    let reward_of = |action: &[usize]| {
        let mut probe = env.clone();
        Env::step(&mut probe, action).unwrap().reward
    };
    let best = env
        .action_space()
        .iter()
        .map(|a| reward_of(&a))
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(reward_of(&chosen), best);
    // probing must not touch the real environment
    assert_eq!(env.step_count(), 0);
}

#[test]
fn greedy_beats_doing_nothing() {
    let mut env = olive_sim(5);
    let initial_reward = env.reward();
    let stats = run_episode(&mut env, &mut GreedyPolicy).unwrap();
    assert!(stats.best_reward >= initial_reward);
}

#[test]
fn vectorized_run_reports_every_episode() {
    let mut envs = VecEnv::new_with(3, || olive_sim(4));
    let mut policies: Vec<Box<dyn Policy<MixingSim>>> = vec![
        Box::new(RandomPolicy::new(1)),
        Box::new(RandomPolicy::new(2)),
        Box::new(GreedyPolicy),
    ];
    let episodes = run_vectorized(&mut envs, &mut policies, 2).unwrap();
    assert_eq!(episodes.len(), 6);
    assert!(episodes.iter().all(|e| e.steps == 4));
}
