use aoi::{AoiManager, EntityId, IdSet, MoveRequest, NoopListener};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::prelude::*;

const COUNT: u32 = 10_000;

fn populated() -> AoiManager {
    let mut mgr = AoiManager::new(20.0, 20.0, COUNT as usize, NoopListener).unwrap();
    for i in 0..COUNT {
        mgr.enter(i, (i / 100) as f32, (i % 100) as f32).unwrap();
    }
    mgr
}

fn enter_benchmark(c: &mut Criterion) {
    c.bench_function("aoi_enter", |b| {
        b.iter_batched(
            || AoiManager::new(100.0, 100.0, 1000, NoopListener).unwrap(),
            |mut mgr| {
                for i in 0..1000u32 {
                    mgr.enter(black_box(i), i as f32, i as f32).unwrap();
                }
                mgr
            },
            BatchSize::SmallInput,
        )
    });
}

fn move_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut mgr = populated();
    let mut tick: u32 = 0;

    c.bench_function("aoi_move", |b| {
        b.iter(|| {
            let id: EntityId = tick % COUNT;
            tick = tick.wrapping_add(1);
            let x = rng.gen_range(0..100) as f32;
            let y = rng.gen_range(0..100) as f32;
            mgr.move_to(black_box(id), x, y).unwrap();
        })
    });
}

fn move_batch_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut mgr = populated();
    let requests: Vec<MoveRequest> = (0..COUNT)
        .map(|id| MoveRequest {
            id,
            x: (id / 100) as f32 + rng.gen_range(-1.0..1.0),
            y: (id % 100) as f32 + rng.gen_range(-1.0..1.0),
        })
        .collect();

    c.bench_function("aoi_move_batch_local", |b| {
        b.iter(|| {
            mgr.move_batch(black_box(&requests)).unwrap();
        })
    });
}

fn leave_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut mgr = populated();
    let mut tick: u32 = 0;

    c.bench_function("aoi_leave_enter", |b| {
        b.iter(|| {
            let id: EntityId = tick % COUNT;
            tick = tick.wrapping_add(1);
            mgr.leave(black_box(id)).unwrap();
            let x = rng.gen_range(0..100) as f32;
            let y = rng.gen_range(0..100) as f32;
            mgr.enter(id, x, y).unwrap();
        })
    });
}

fn range_benchmark(c: &mut Criterion) {
    let mgr = populated();
    let mut out = IdSet::default();
    let mut tick: u32 = 0;

    c.bench_function("aoi_query_range", |b| {
        b.iter(|| {
            out.clear();
            let id: EntityId = tick % COUNT;
            tick = tick.wrapping_add(1);
            mgr.query_range(black_box(id), &mut out);
        })
    });
}

criterion_group!(
    aoi_benchmarks,
    enter_benchmark,
    move_benchmark,
    move_batch_benchmark,
    leave_benchmark,
    range_benchmark
);
criterion_main!(aoi_benchmarks);
