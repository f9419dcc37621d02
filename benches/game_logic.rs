use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{slide_row, Board, Game};
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::Direction;

const BUSY: [[u32; 4]; 4] = [
    [2, 2, 4, 4],
    [8, 0, 8, 16],
    [0, 32, 32, 2],
    [4, 4, 4, 4],
];

fn bench_slide_row(c: &mut Criterion) {
    c.bench_function("slide_row", |b| {
        b.iter(|| {
            let mut row = black_box([2, 2, 4, 4]);
            slide_row(&mut row)
        })
    });
}

fn bench_board_slide(c: &mut Criterion) {
    let board = Board::from_cells(BUSY);
    let mut group = c.benchmark_group("board_slide");
    for d in Direction::ALL {
        group.bench_function(d.as_str(), |b| b.iter(|| black_box(board).slide(d)));
    }
    group.finish();
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("game_step_cycle", |b| {
        let mut game = Game::with_seed(12345, 2);
        b.iter(|| {
            for d in Direction::ALL {
                game.step(black_box(d));
            }
            if game.is_game_over() {
                game = Game::with_seed(12345, 2);
            }
        })
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let game = Game::from_cells([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 1);
    c.bench_function("is_game_over_full", |b| b.iter(|| black_box(&game).is_game_over()));
}

fn bench_render(c: &mut Criterion) {
    let snap = Game::from_cells(BUSY, 1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);
    c.bench_function("render_board_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), None, Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_slide_row,
    bench_board_slide,
    bench_step,
    bench_game_over_check,
    bench_render
);
criterion_main!(benches);
