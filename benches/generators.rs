use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use maze_nav::{
    generators,
    units::{Height, Width},
};

fn bench_backtracker_maze_10(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(10);
    c.bench_function("backtracker_maze_10", move |b| {
        b.iter(|| generators::generate(Width(10), Height(10), &mut rng))
    });
}

fn bench_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("backtracker_maze_32", move |b| {
        b.iter(|| generators::generate(Width(32), Height(32), &mut rng))
    });
}

fn bench_backtracker_maze_350(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(350);
    let mut group = c.benchmark_group("large");
    group.sample_size(10);
    group.bench_function("backtracker_maze_350", move |b| {
        b.iter(|| generators::generate(Width(350), Height(350), &mut rng))
    });
    group.finish();
}

fn bench_seeded_maze_32(c: &mut Criterion) {
    c.bench_function("seeded_maze_32", |b| {
        b.iter(|| generators::generate_seeded(Width(32), Height(32), 7))
    });
}

criterion_group!(
    benches,
    bench_backtracker_maze_10,
    bench_backtracker_maze_32,
    bench_backtracker_maze_350,
    bench_seeded_maze_32
);
criterion_main!(benches);
