use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameConfig, GameSession, ShapeCatalog, SimpleRng};
use blockfall::types::{Command, Rgb};

fn session() -> GameSession<SimpleRng> {
    GameSession::new(
        GameConfig::default(),
        ShapeCatalog::standard(),
        SimpleRng::new(12345),
    )
    .unwrap()
}

fn bench_tick(c: &mut Criterion) {
    let mut game = session();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_step(c: &mut Criterion) {
    let mut game = session();
    let commands = [Command::MoveLeft, Command::Rotate];

    c.bench_function("session_step_with_commands", |b| {
        b.iter(|| {
            game.step(black_box(16), black_box(&commands));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let gray = Rgb::new(128, 128, 128);

    c.bench_function("clear_2_rows", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Two full bottom rows under a small overhang
            for y in 18..20 {
                for x in 0..10 {
                    board.set(x, y, gray);
                }
            }
            board.set(0, 17, gray);
            board.set(1, 17, gray);
            board.clear_full_rows();
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut game = session();
    // A half-filled bottom row makes validation walk a realistic stack.
    for x in 0..5 {
        game.board_mut().set(x, 19, Rgb::new(128, 128, 128));
    }

    c.bench_function("move_against_stack", |b| {
        b.iter(|| {
            game.handle_command(black_box(Command::MoveRight));
            game.handle_command(black_box(Command::MoveLeft));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = session();
    for x in 0..10 {
        for y in 14..20 {
            if (x + y) % 3 != 0 {
                game.board_mut().set(x, y, Rgb::new(128, 128, 128));
            }
        }
    }
    let mut snapshot = blockfall::core::SessionSnapshot::default();

    c.bench_function("snapshot_into_reused", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_step,
    bench_line_clear,
    bench_validate,
    bench_snapshot
);
criterion_main!(benches);
