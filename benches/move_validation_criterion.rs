use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_path::game_state::chess_rules::{scenario_board, SCENARIO_CASES};
use chess_path::game_state::coordinate::Coordinate;
use chess_path::utils::move_probe::random_occupied_move_pairs;

fn bench_scenario_cases(c: &mut Criterion) {
    let board = scenario_board().expect("scenario should build");
    let cases: Vec<(Coordinate, Coordinate, bool)> = SCENARIO_CASES
        .iter()
        .map(|case| {
            (
                case.start.parse().expect("scenario square should parse"),
                case.end.parse().expect("scenario square should parse"),
                case.expected,
            )
        })
        .collect();

    let mut group = c.benchmark_group("try_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Elements(cases.len() as u64));

    group.bench_function("scenario_cases", |b| {
        b.iter(|| {
            for (start, end, expected) in &cases {
                // Correctness guard inside the loop keeps the work observable.
                assert_eq!(board.try_move(black_box(*start), black_box(*end)), *expected);
            }
        });
    });

    for count in [64usize, 1024] {
        let pairs = random_occupied_move_pairs(&board, 1234, count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("random", count), &pairs, |b, pairs| {
            b.iter(|| {
                pairs
                    .iter()
                    .filter(|(start, end)| board.try_move(black_box(*start), black_box(*end)))
                    .count()
            });
        });
    }

    group.finish();
}

criterion_group!(move_validation_benches, bench_scenario_cases);
criterion_main!(move_validation_benches);
