use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use maze_nav::cells::{Direction, Position};
use maze_nav::generators;
use maze_nav::navigation;
use maze_nav::pathing::{self, Distances};
use maze_nav::session::Session;
use maze_nav::units::{Height, Width};

fn bench_try_move(c: &mut Criterion) {
    c.bench_function("try_move", |b| {
        let g = generators::generate_seeded(Width(32), Height(32), 1).unwrap();
        let position = Position::new(16, 16);
        b.iter(|| {
            Direction::ALL.iter()
                          .map(|&dir| navigation::try_move(&g, position, dir))
                          .filter(|result| !result.is_blocked())
                          .count()
        })
    });
}

fn bench_session_walk(c: &mut Criterion) {
    c.bench_function("session_walk", |b| {
        let g = generators::generate_seeded(Width(32), Height(32), 1).unwrap();
        let route = pathing::solve(&g).unwrap();
        b.iter(|| {
            let mut session = Session::new(&g);
            for &dir in &route {
                session.step(dir);
            }
            session.completions()
        })
    });
}

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let g = generators::generate_seeded(Width(350), Height(350), 2).unwrap();
        let start_coord = Position::new(250, 250);
        b.iter(|| Distances::for_grid(&g, start_coord))
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let g = generators::generate_seeded(Width(350), Height(350), 2).unwrap();
        let start_coord = Position::new(250, 250);
        let distances = Distances::for_grid(&g, start_coord).unwrap();
        let end_coord = Position::new(0, 0);
        b.iter(|| pathing::shortest_path(&g, &distances, end_coord))
    });
}

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve", |b| {
        let g = generators::generate_seeded(Width(100), Height(100), 3).unwrap();
        b.iter(|| pathing::solve(&g))
    });
}

criterion_group!(benches,
    bench_try_move,
    bench_session_walk,
    bench_distances,
    bench_shortest_path,
    bench_solve
);
criterion_main!(benches);
