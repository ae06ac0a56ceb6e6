//! Benchmarks for move generation, evaluation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use moxie::board::{evaluate, Position};
use moxie::search::{iterative_deepening, SearchState, Task};
use moxie::sync::StopFlag;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let start = Position::initial();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| start.perft(black_box(depth)));
        });
    }

    let kiwipete = Position::decode(KIWIPETE).unwrap();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)));
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let start = Position::initial();
    group.bench_function("startpos", |b| b.iter(|| black_box(start.legal_moves())));

    let kiwipete = Position::decode(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let start = Position::initial();
    group.bench_function("startpos", |b| b.iter(|| black_box(evaluate(&start))));

    let endgame = Position::decode("8/5k2/3p4/8/3P4/8/5K2/8 w - - 0 1").unwrap();
    group.bench_function("endgame", |b| b.iter(|| black_box(evaluate(&endgame))));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let task = Task {
        root: Position::initial(),
        history: Vec::new(),
        plan: None,
    };
    group.bench_function("startpos_depth3", |b| {
        b.iter(|| {
            let mut state = SearchState::new();
            let stop = StopFlag::new();
            iterative_deepening(&task, &mut state, &stop, &mut |report| {
                if let moxie::search::Report::Improved(var) = report {
                    var.depth < 3
                } else {
                    true
                }
            });
        });
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_evaluate, bench_search);
criterion_main!(benches);
