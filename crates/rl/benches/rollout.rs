use criterion::{criterion_group, criterion_main, Criterion};
use mixing::{Color, MixingSim, Paint};
use rl::{run_episode, GreedyPolicy, RandomPolicy};

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

fn bench_rollouts(c: &mut Criterion) {
    c.bench_function("random_episode", |b| {
        let mut env = olive_sim(100);
        let mut policy = RandomPolicy::new(0);
        b.iter(|| run_episode(&mut env, &mut policy).unwrap());
    });

    c.bench_function("greedy_episode_10_steps", |b| {
        let mut env = olive_sim(10);
        b.iter(|| run_episode(&mut env, &mut GreedyPolicy).unwrap());
    });
}

criterion_group!(benches, bench_rollouts);
criterion_main!(benches);
