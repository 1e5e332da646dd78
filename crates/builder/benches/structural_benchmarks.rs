use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fieldwise_builder::{compare, equals, hash_code, introspect, to_string};

#[derive(Debug, Clone)]
struct Line {
    sku: String,
    quantity: i64,
    unit_price: f64,
}

introspect! {
    Line {
        sku,
        quantity,
        unit_price,
    }
}

#[derive(Debug, Clone)]
struct Order {
    reference: String,
    customer: String,
    revision: u32,
    lines: Vec<Line>,
}

introspect! {
    Order {
        reference,
        customer,
        #[exclude_from_equality]
        revision,
        #[include_in_string]
        lines,
    }
}

fn order(line_count: usize) -> Order {
    Order {
        reference: "SO-1001".to_string(),
        customer: "ACME".to_string(),
        revision: 3,
        lines: (0..line_count)
            .map(|i| Line {
                sku: format!("SKU-{i:04}"),
                quantity: i as i64,
                unit_price: 9.99,
            })
            .collect(),
    }
}

fn bench_structural_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural_operations");

    for line_count in [1usize, 10, 100] {
        let lhs = order(line_count);
        let rhs = lhs.clone();

        group.bench_with_input(BenchmarkId::new("equals", line_count), &line_count, |b, _| {
            b.iter(|| equals(Some(black_box(&lhs)), Some(black_box(&rhs))).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("hash_code", line_count), &line_count, |b, _| {
            b.iter(|| hash_code(Some(black_box(&lhs))).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("compare", line_count), &line_count, |b, _| {
            b.iter(|| compare(black_box(&lhs), black_box(&rhs)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("to_string", line_count), &line_count, |b, _| {
            b.iter(|| to_string(Some(black_box(&lhs))).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_structural_operations);
criterion_main!(benches);
