//! Co-occurrence analysis benchmarks
//!
//! Measures a full analysis pass over synthetic datasets sized like the H2O
//! snapshot (about 14K samples with 10 actions each) and smaller.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hoi::analysis::{AppendPolicy, CooccurrenceAnalyzer};
use hoi::datasets::MemoryDataset;
use hoi::structs::{Action, Sample};
use std::time::Duration;

const VERBS: [&str; 6] = ["grab", "hold", "look", "cut", "carry", "talk_to"];

/// Deterministic synthetic dataset: every sample mixes several verbs, some
/// shared targets and some actions without target
fn synthetic_dataset(samples: usize, actions_per_sample: usize) -> MemoryDataset {
    (0..samples)
        .map(|i| {
            let actions = (0..actions_per_sample)
                .map(|j| {
                    let verb = VERBS[(i + j) % VERBS.len()];
                    let subject = j % 3;
                    let target = if j % 4 == 0 { None } else { Some(3 + (i + j) % 5) };
                    let instrument = if j % 9 == 0 { Some(8) } else { None };
                    Action::new(verb, subject, target, instrument)
                })
                .collect();
            (format!("sample_{}", i), Sample::from_actions(actions))
        })
        .collect()
}

fn bench_dataset_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cooccurrence_dataset_sizes");
    group.measurement_time(Duration::from_secs(5));

    for size in [100usize, 1_000, 14_000].iter() {
        let dataset = synthetic_dataset(*size, 10);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &dataset, |b, dataset| {
            let analyzer = CooccurrenceAnalyzer::default();
            b.iter(|| black_box(analyzer.analyze(black_box(dataset)).counts));
        });
    }

    group.finish();
}

fn bench_append_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("cooccurrence_append_policy");
    group.measurement_time(Duration::from_secs(5));

    let dataset = synthetic_dataset(1_000, 20);
    for policy in [AppendPolicy::PerVerb, AppendPolicy::PerSample] {
        group.bench_function(policy.as_str(), |b| {
            let analyzer = CooccurrenceAnalyzer::new(policy);
            b.iter(|| black_box(analyzer.analyze(black_box(&dataset)).at_least_one.len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dataset_sizes, bench_append_policies);
criterion_main!(benches);
