use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hrd_solver::{generate_moves, parse_layout, solve, SearchConfig, Strategy};

const CLASSIC: &str = "^11^\nv11v\n^<>^\nv22v\n2..2\n";

fn bench_movegen(c: &mut Criterion) {
    let positions = [
        ("classic", CLASSIC),
        ("paired_gap", "^11^\nv11v\n^..^\nv22v\n2<>2\n"),
        ("split_gap", "^112\nv11^\n<>.v\n^22.\nv<>2\n"),
    ];

    for (name, layout) in positions {
        let board = parse_layout(layout).expect("valid layout");
        c.bench_function(&format!("movegen_{name}"), |b| {
            b.iter(|| generate_moves(black_box(&board)).map(|moves| moves.len()))
        });
    }
}

fn bench_solve_classic(c: &mut Criterion) {
    let board = parse_layout(CLASSIC).expect("valid layout");
    let mut group = c.benchmark_group("solve_classic");
    group.sample_size(10);

    for strategy in [Strategy::AStar, Strategy::Dfs] {
        let config = SearchConfig::new(strategy);
        group.bench_function(strategy.to_string(), |b| {
            b.iter(|| solve(black_box(board.clone()), &config).map(|outcome| outcome.is_solved()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_movegen, bench_solve_classic);
criterion_main!(benches);
