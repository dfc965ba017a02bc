use criterion::{Criterion, criterion_group, criterion_main};
use narwhal::{ForceOptions, Point, Simulation};
use std::hint::black_box;

fn scattered(n: usize, opts: &ForceOptions) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Point::new(
                (t * 73.13).rem_euclid(opts.width),
                (t * 191.71).rem_euclid(opts.height),
            )
        })
        .collect()
}

fn bench_tick_stress(c: &mut Criterion) {
    let opts = ForceOptions::default();
    let center = opts.center();

    let mut group = c.benchmark_group("tick_stress");
    group.sample_size(30);

    for n in [100usize, 1_000] {
        for (label, theta) in [("barnes_hut", 0.8), ("exact", 0.0)] {
            let opts = ForceOptions {
                theta,
                ..opts.clone()
            };
            let bodies = scattered(n, &opts);
            group.bench_function(format!("{label}_n{n}_x50"), |b| {
                b.iter(|| {
                    let mut sim = Simulation::new(bodies.clone(), opts.clone()).expect("sim");
                    sim.set_displacement(move |_: usize, p: &mut Point, alpha: f64| {
                        p.x += (center.x - p.x) * 0.102 * alpha;
                        p.y += (center.y - p.y) * 0.102 * alpha;
                    });
                    sim.start();
                    black_box(sim.run(50, |_, _| {}));
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_tick_stress);
criterion_main!(benches);
