use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use socialgraph::SocialGraph;

// Ring of `size` people with a chord every 10 people
fn build_ring(size: usize) -> SocialGraph {
    let mut graph = SocialGraph::new();
    for i in 0..size {
        graph.add_person(&format!("person_{i}"));
    }
    for i in 0..size {
        graph.add_friend(&format!("person_{i}"), &format!("person_{}", (i + 1) % size));
        if i % 10 == 0 {
            graph.add_friend(&format!("person_{i}"), &format!("person_{}", (i + size / 2) % size));
        }
    }
    graph
}

fn bench_person_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("person_lookup");

    for size in [1000, 10_000, 100_000].iter() {
        let graph = build_ring(*size);
        let name = format!("person_{}", size / 2);

        group.bench_with_input(BenchmarkId::new("lookup", size), size, |b, _| {
            b.iter(|| {
                black_box(graph.find_person(&name));
            });
        });
    }

    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for size in [100, 1000, 10_000].iter() {
        let graph = build_ring(*size);
        let goal = format!("person_{}", size / 3);

        group.bench_with_input(BenchmarkId::new("plain", size), size, |b, _| {
            b.iter(|| {
                black_box(graph.shortest_path("person_0", &goal));
            });
        });

        group.bench_with_input(BenchmarkId::new("avoiding", size), size, |b, _| {
            b.iter(|| {
                black_box(graph.shortest_path_avoiding("person_0", &goal, ["person_1"]));
            });
        });
    }

    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");

    for size in [100, 1000, 10_000].iter() {
        let graph = build_ring(*size);

        group.bench_with_input(BenchmarkId::new("top_10", size), size, |b, _| {
            b.iter(|| {
                black_box(graph.top_k("person_0", 10));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_person_lookup, bench_shortest_path, bench_top_k);
criterion_main!(benches);
