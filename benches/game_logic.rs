use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{ghost_of, try_rotate, Board, GameState, Piece};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.tick(black_box(0.016)));
        })
    });
}

fn bench_gravity_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.tick(black_box(0.3)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 0..4 {
                board.fill_row(y, PieceKind::I, None);
            }
            board.set(4, 4, Some(PieceKind::T));
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::spawn(PieceKind::T).at(4, 8);

    c.bench_function("try_rotate", |b| {
        b.iter(|| black_box(try_rotate(black_box(&piece), &board)))
    });
}

fn bench_ghost(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 0..6 {
        board.fill_row(y, PieceKind::S, Some(y % 10));
    }
    let piece = Piece::spawn(PieceKind::L);

    c.bench_function("ghost_projection", |b| {
        b.iter(|| black_box(ghost_of(black_box(&piece), &board)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_gravity_step,
    bench_line_clear,
    bench_rotate,
    bench_ghost,
    bench_snapshot
);
criterion_main!(benches);
