//! Benchmarks for the rotation engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use piece_rotation::grid::format_grid;
use piece_rotation::shape::{Pentomino, Tetromino};
use piece_rotation::{
    flip, tables, CellOffset, Category, ColorCombination, EngineProfile, Piece, PieceType, RotationEngine,
};

fn ready_engine() -> RotationEngine {
    let mut engine = RotationEngine::new(EngineProfile::Universal);
    for kind in PieceType::catalog(ColorCombination::RED) {
        engine.register(&kind).unwrap();
    }
    engine.finalize().unwrap();
    engine
}

/// Benchmark a warm clockwise turn.
fn bench_turn_cw(c: &mut Criterion) {
    let mut engine = ready_engine();
    let gamma = PieceType::plain(Category::Tetromino(Tetromino::Gamma), ColorCombination::RED);
    let mut piece = Piece::new(gamma);
    engine.turn0(&mut piece).unwrap();

    c.bench_function("turn_cw", |b| {
        b.iter(|| engine.turn_cw(black_box(&mut piece)).unwrap())
    });
}

/// Benchmark a flip that needs a half turn and an offset shift.
fn bench_flip_horizontal(c: &mut Criterion) {
    let mut engine = ready_engine();
    let p = PieceType::plain(Category::Pentomino(Pentomino::P), ColorCombination::RED);
    let mut piece = Piece::new(p);
    engine.turn0(&mut piece).unwrap();
    let mut offset = CellOffset::default();

    c.bench_function("flip_horizontal", |b| {
        b.iter(|| {
            engine
                .flip_horizontal(black_box(&mut piece), &mut offset)
                .unwrap()
        })
    });
}

/// Benchmark authoring every catalogued grid from scratch.
fn bench_build_catalog(c: &mut Criterion) {
    c.bench_function("build_catalog", |b| {
        b.iter(|| {
            for kind in PieceType::catalog(black_box(ColorCombination::RED)) {
                for rotation in 0..4 {
                    black_box(tables::build(&kind, rotation));
                }
            }
        })
    });
}

/// Benchmark the full flip-table audit.
fn bench_audit(c: &mut Criterion) {
    let mut group = c.benchmark_group("audit");
    group.sample_size(10);
    group.bench_function("flip_tables", |b| b.iter(flip::audit));
    group.finish();
}

/// Benchmark formatting a grid for display.
fn bench_format_grid(c: &mut Criterion) {
    let line = PieceType::plain(Category::Pentomino(Pentomino::Line), ColorCombination::RED);
    let grid = tables::build(&line, 1).unwrap();

    c.bench_function("format_grid", |b| b.iter(|| format_grid(black_box(&grid))));
}

criterion_group!(
    benches,
    bench_turn_cw,
    bench_flip_horizontal,
    bench_build_catalog,
    bench_audit,
    bench_format_grid
);
criterion_main!(benches);
