use criterion::{black_box, criterion_group, criterion_main, Criterion};

use easy21::{Action, Easy21Builder, Environment};

fn bench_episode(c: &mut Criterion) {
    let mut env = Easy21Builder::new().seed(42).build().unwrap();

    c.bench_function("reset", |b| b.iter(|| black_box(env.reset())));

    c.bench_function("episode_hit_below_17", |b| {
        b.iter(|| {
            let mut obs = env.reset();
            loop {
                let action = if obs.player_sum < 17 { Action::Hit } else { Action::Stick };
                let step = env.step(action).unwrap();
                obs = step.observation;
                if step.done {
                    break black_box(step.reward);
                }
            }
        })
    });
}

criterion_group!(benches, bench_episode);
criterion_main!(benches);
