use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_chess_rules::game_state::game_state::GameState;
use plum_chess_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_chess_rules::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

// Castling and en passant are not played, so only positions whose reference
// counts do not involve them are usable at these depths.
const CASES_QUICK: &[BenchCase] = &[BenchCase {
    name: "startpos",
    fen: STARTPOS_FEN,
    expected_nodes: &[20, 400, 8902],
}];

const CASES_STANDARD: &[BenchCase] = &[BenchCase {
    name: "startpos",
    fen: STARTPOS_FEN,
    expected_nodes: &[20, 400, 8902, 197_281],
}];

fn suite_name() -> &'static str {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let game = GameState::from_fen(case.fen)
            .expect("benchmark FEN should parse");
        let board = *game.board();
        let side = game.side_to_move();

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&LegalMoveGenerator, &board, side, depth)
                .expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(
                            &LegalMoveGenerator,
                            black_box(&board),
                            side,
                            black_box(depth),
                        )
                        .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_suggest_move(c: &mut Criterion) {
    let game = GameState::new_game();
    c.bench_function("suggest_move_startpos", |b| {
        b.iter(|| black_box(black_box(&game).suggest_move()))
    });
}

criterion_group!(perft_benches, bench_perft, bench_suggest_move);
criterion_main!(perft_benches);
