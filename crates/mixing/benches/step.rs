use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mixing::{Action, Color, MixingSim, Paint};

fn bench_episode(c: &mut Criterion) {
    let beakers = vec![
        Paint::new(Color::RED, 100.0),
        Paint::new(Color::GREEN, 100.0),
        Paint::new(Color::BLUE, 100.0),
    ];
    let target = Paint::new(Color::new(128, 128, 0), 150.0);
    let mut sim = MixingSim::with_default_horizon(beakers, target).unwrap();

    c.bench_function("mixing_episode_100_steps", |b| {
        b.iter(|| {
            sim.reset();
            let mut i = 0;
            while !sim.is_done() {
                let action = Action::new(i % 3, (i + 1) % 3, (i * 7) % 100);
                black_box(sim.step(action).unwrap());
                i += 1;
            }
        });
    });
}

criterion_group!(benches, bench_episode);
criterion_main!(benches);
