use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlcond::{Condition, JoinType, Placeholder, args};

/// Build a condition with `n` WHERE clauses, one IN list of `n` values and a join.
fn build_condition(n: usize) -> Condition {
    let mut cond = Condition::new();
    cond.set_join(JoinType::Left, "roles r", "r.id = t.role_id", args![]);
    for i in 0..n {
        cond.set_where(&format!("col{i} = ?"), args![i as i64]);
    }
    let ids: Vec<i64> = (0..n as i64).collect();
    cond.set_where("id IN (?)", args![ids])
        .set_order(["-created_at", "id"])
        .set_limit(50);
    cond
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition/render");

    for n in [1, 5, 10, 50, 100] {
        let cond = build_condition(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cond, |b, cond| {
            b.iter(|| black_box(cond.render(&mut Placeholder::dollar())));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let cond = build_condition(n);
                black_box(cond.render(&mut Placeholder::dollar()))
            });
        });
    }

    group.finish();
}

fn bench_clone_and_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition/clone_and_merge");

    for n in [5, 20, 100] {
        let baseline = build_condition(n);
        let mut scope = Condition::new();
        scope.set_where("tenant_id = ?", args![1i64]).set_limit(10);
        group.bench_with_input(BenchmarkId::from_parameter(n), &baseline, |b, baseline| {
            b.iter(|| {
                let mut cond = baseline.clone();
                cond.merge(&scope);
                black_box(cond)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_build_and_render, bench_clone_and_merge);
criterion_main!(benches);
