mod common;

use std::io::Cursor;

use common::{generate_json_dataset, generate_records};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use recipe_stats::prelude::*;
use tokio::runtime::Runtime;

/// Benchmark the full JSON pipeline with different dataset sizes
fn bench_json_pipeline_dataset_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_pipeline_sizes");
    let runtime = Runtime::new().unwrap();
    let config = StatsConfig::default();

    for (size_name, num_records) in [("small_1k", 1_000), ("medium_10k", 10_000), ("large_100k", 100_000)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &num_records,
            |b, &num_records| {
                b.to_async(&runtime).iter_batched(
                    || generate_json_dataset(num_records, 1_000, 0),
                    |json| {
                        let config = config.clone();
                        async move {
                            let stream = JsonDeliveryStream::from_reader(Cursor::new(json.into_bytes()));
                            let report = generate(stream, &config).await.unwrap();

                            let mut output = Vec::new();
                            write_report(&report, &mut output).await.unwrap();
                            black_box(output);
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark the cost of rejected records in the stream
fn bench_json_pipeline_invalid_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_pipeline_invalid_ratio");
    let runtime = Runtime::new().unwrap();
    let config = StatsConfig::default();

    for (ratio_name, invalid_every) in [("none", 0), ("one_in_ten", 10), ("one_in_two", 2)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(ratio_name),
            &invalid_every,
            |b, &invalid_every| {
                b.to_async(&runtime).iter_batched(
                    || generate_json_dataset(10_000, 1_000, invalid_every),
                    |json| {
                        let config = config.clone();
                        async move {
                            let stream = JsonDeliveryStream::from_reader(Cursor::new(json.into_bytes()));
                            black_box(generate_with_policy(stream, &config, SilentSkip).await.unwrap());
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark aggregation alone against postcode cardinality
fn bench_aggregator_postcode_spread(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregator_postcode_spread");
    let query = StatsQuery::from_config(&StatsConfig::default()).unwrap();

    for (spread_name, num_postcodes) in [("single_postcode", 1), ("postcodes_100", 100), ("postcodes_10000", 10_000)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(spread_name),
            &num_postcodes,
            |b, &num_postcodes| {
                b.iter_batched(
                    || generate_records(10_000, num_postcodes),
                    |records| {
                        let mut aggregator = StatsAggregator::new(query.clone());
                        for record in records {
                            aggregator.record(record);
                        }
                        black_box(aggregator.finish())
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_json_pipeline_dataset_sizes,
    bench_json_pipeline_invalid_ratio,
    bench_aggregator_postcode_spread
);
criterion_main!(benches);
