use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Game, GameConfig, Grid, Piece};
use blockfall::types::PieceKind;

fn started() -> Game {
    let mut game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
    game.start_game();
    game
}

fn bench_update(c: &mut Criterion) {
    let mut game = started();

    c.bench_function("game_update_16ms", |b| {
        b.iter(|| {
            game.update(black_box(0.016));
            if game.active().is_none() {
                game.start_game();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20).unwrap();
            for y in 0..4 {
                for x in 0..10 {
                    grid.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(grid.clear_rows());
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let grid = Grid::new(10, 20).unwrap();
    let piece = Piece::new(PieceKind::T, 3, 10);

    c.bench_function("can_place", |b| b.iter(|| grid.can_place(black_box(&piece))));
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = started();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            game.rotate_clockwise();
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_game", |b| {
        b.iter(|| {
            let mut game = started();
            while game.hard_drop() {}
            black_box(game.score());
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_line_clear,
    bench_can_place,
    bench_rotate,
    bench_hard_drop
);
criterion_main!(benches);
