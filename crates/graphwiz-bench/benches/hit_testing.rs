use criterion::{Criterion, criterion_group, criterion_main};
use graphwiz_bench::grid_graph;
use graphwiz_core::Position;
use graphwiz_graph::HitTester;
use std::hint::black_box;

fn bench_hit_test_2500_nodes(c: &mut Criterion) {
    let model = grid_graph(50, 60.0);
    let tester = HitTester::new(20.0);
    let miss = Position::new(30.0, 30.0);
    let last = Position::new(49.0 * 60.0, 49.0 * 60.0);

    c.bench_function("hit_test_miss_2500_nodes", |b| {
        b.iter(|| tester.hit_test(black_box(model.nodes()), black_box(miss)))
    });
    c.bench_function("hit_test_last_node_2500_nodes", |b| {
        b.iter(|| tester.hit_test(black_box(model.nodes()), black_box(last)))
    });
}

criterion_group!(benches, bench_hit_test_2500_nodes);
criterion_main!(benches);
