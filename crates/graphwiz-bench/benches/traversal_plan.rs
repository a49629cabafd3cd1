use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graphwiz_bench::{chain_graph, grid_graph};
use graphwiz_core::Algorithm;
use graphwiz_traversal::TraversalPlan;
use std::hint::black_box;

fn bench_plan_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_grid");
    for side in [10u32, 30, 60] {
        let model = grid_graph(side, 60.0);
        for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.short_name(), side * side),
                &model,
                |b, model| b.iter(|| TraversalPlan::build(black_box(model), algorithm)),
            );
        }
    }
    group.finish();
}

fn bench_replay_steps(c: &mut Criterion) {
    let model = grid_graph(30, 60.0);
    let Some(plan) = TraversalPlan::build(&model, Algorithm::BreadthFirst) else {
        return;
    };
    c.bench_function("replay_steps_900_nodes", |b| {
        b.iter(|| black_box(&plan).steps().count())
    });
}

fn bench_dfs_chain(c: &mut Criterion) {
    let model = chain_graph(2_000);
    c.bench_function("dfs_chain_2000", |b| {
        b.iter(|| TraversalPlan::build(black_box(&model), Algorithm::DepthFirst))
    });
}

criterion_group!(benches, bench_plan_grid, bench_replay_steps, bench_dfs_chain);
criterion_main!(benches);
