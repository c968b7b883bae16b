//! Replication pipeline benchmarks.
//!
//! - Sampling cost as the feature count grows (boundary rows double per feature)
//! - Tree fitting on sampled data
//! - End-to-end replication with inference from source

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use replicant::model::{DecisionTreeRegressor, Model};
use replicant::{Bound, DataSampler, InputSpace, ReplicatorConfig, Replicator, Target, Value};

// =============================================================================
// Fixtures
// =============================================================================

fn numeric_space(n_features: usize) -> InputSpace {
    (0..n_features)
        .map(|i| (format!("x{}", i), Bound::numeric(-5.0, 5.0)))
        .collect()
}

fn quadratic_labels(rows: &[Vec<Value>]) -> Vec<Value> {
    rows.iter()
        .map(|row| {
            let sum: f64 = row.iter().filter_map(Value::as_f64).map(|x| x * x).sum();
            Value::Float(sum)
        })
        .collect()
}

const BRANCHY_SOURCE: &str = r#"
    fn price(qty: i64, member: bool, tier: &str) -> f64 {
        if qty > 100 && member {
            0.8
        } else if qty >= 10 || tier == "gold" {
            0.9
        } else if tier == "silver" {
            0.95
        } else {
            1.0
        }
    }
"#;

fn branchy_target() -> Target {
    Target::with_source(BRANCHY_SOURCE, |args| {
        let qty = args.f64("qty")?;
        let member = args.bool("member")?;
        let tier = args.str("tier")?;
        let factor = if qty > 100.0 && member {
            0.8
        } else if qty >= 10.0 || tier == "gold" {
            0.9
        } else if tier == "silver" {
            0.95
        } else {
            1.0
        };
        Ok(Value::Float(factor))
    })
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler/features");
    let n_samples = 1_000;

    for n_features in [1, 4, 8, 12] {
        group.throughput(Throughput::Elements((n_samples + (1 << n_features)) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_features),
            &n_features,
            |b, &n_features| {
                b.iter(|| {
                    let mut sampler = DataSampler::with_seed(numeric_space(n_features), 42);
                    black_box(sampler.sample(n_samples).unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_tree_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree/fit_regressor");
    group.sample_size(20);

    for n_samples in [1_000, 10_000] {
        let rows = DataSampler::with_seed(numeric_space(2), 42).sample(n_samples).unwrap();
        let labels = quadratic_labels(&rows);

        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &(&rows, &labels),
            |b, (rows, labels)| {
                b.iter(|| {
                    let mut model = DecisionTreeRegressor::default();
                    model.fit(rows, labels).unwrap();
                    black_box(model)
                })
            },
        );
    }
    group.finish();
}

fn bench_replicate(c: &mut Criterion) {
    let target = branchy_target();
    let config = ReplicatorConfig::builder().n_samples(2_000).build().unwrap();
    let replicator = Replicator::new(config);

    c.bench_function("replicate/branchy_source", |b| {
        b.iter(|| black_box(replicator.replicate(&target).unwrap()))
    });
}

criterion_group!(benches, bench_sampling, bench_tree_fit, bench_replicate);
criterion_main!(benches);
