//! Benchmark for the container combinators and the codec.
//!
//! Compares `Maybe`/`Outcome` chains against the equivalent `Option`/`Result`
//! chains to evaluate the overhead (if any) of the containers, and measures
//! encode/decode throughput of the tagged JSON records.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use maybe_result::codec::{decode_maybe_from_text, decode_outcome_from_text, encode_to_text};
use maybe_result::control::{Maybe, Outcome};
use maybe_result::typeclass::{Functor, Monad};
use std::hint::black_box;

fn checked_half(n: i64) -> Maybe<i64> {
    if n % 2 == 0 {
        Maybe::present(n / 2)
    } else {
        Maybe::absent()
    }
}

fn checked_half_option(n: i64) -> Option<i64> {
    (n % 2 == 0).then_some(n / 2)
}

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    group.bench_function("maybe_map_bind", |bencher| {
        bencher.iter(|| {
            let maybe = Maybe::present(black_box(1024_i64));
            black_box(
                maybe
                    .map(|n| n * 4)
                    .bind(checked_half)
                    .bind(checked_half)
                    .unwrap_or(0),
            )
        });
    });

    group.bench_function("maybe_fmap_flat_map", |bencher| {
        bencher.iter(|| {
            let maybe = Maybe::present(black_box(1024_i64));
            black_box(
                maybe
                    .fmap(|n| n * 4)
                    .flat_map(checked_half)
                    .flat_map(checked_half)
                    .unwrap_or(0),
            )
        });
    });

    group.bench_function("std_option_map_and_then", |bencher| {
        bencher.iter(|| {
            let option = Some(black_box(1024_i64));
            black_box(
                option
                    .map(|n| n * 4)
                    .and_then(checked_half_option)
                    .and_then(checked_half_option)
                    .unwrap_or(0),
            )
        });
    });

    group.finish();
}

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    for input in ["42", "not a number"] {
        group.bench_with_input(BenchmarkId::new("outcome", input), &input, |bencher, input| {
            bencher.iter(|| {
                let parsed: Outcome<i64, String> = Outcome::from(
                    black_box(*input)
                        .parse::<i64>()
                        .map_err(|error| error.to_string()),
                );
                black_box(parsed.map(|n| n + 1).map_err(|error| error.len()).unwrap_or(0))
            });
        });

        group.bench_with_input(BenchmarkId::new("std_result", input), &input, |bencher, input| {
            bencher.iter(|| {
                let parsed: Result<i64, String> = black_box(*input)
                    .parse::<i64>()
                    .map_err(|error| error.to_string());
                black_box(parsed.map(|n| n + 1).map_err(|error| error.len()).unwrap_or(0))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Codec Benchmarks
// =============================================================================

fn benchmark_codec(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("codec");

    for size in [10_usize, 100, 1000] {
        let payload: Vec<i64> = (0..i64::try_from(size).unwrap_or(i64::MAX)).collect();
        let maybe = Maybe::present(payload.clone());
        let outcome: Outcome<Vec<i64>, String> = Outcome::success(payload);
        let maybe_text = encode_to_text(&maybe).unwrap();
        let outcome_text = encode_to_text(&outcome).unwrap();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("encode_maybe", size), &maybe, |bencher, maybe| {
            bencher.iter(|| black_box(encode_to_text(black_box(maybe))));
        });

        group.bench_with_input(
            BenchmarkId::new("decode_maybe", size),
            &maybe_text,
            |bencher, text| {
                bencher.iter(|| black_box(decode_maybe_from_text::<Vec<i64>>(black_box(text))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("decode_outcome", size),
            &outcome_text,
            |bencher, text| {
                bencher.iter(|| {
                    black_box(decode_outcome_from_text::<Vec<i64>, String>(black_box(text)))
                });
            },
        );
    }

    group.bench_function("decode_rejected_tag", |bencher| {
        bencher.iter(|| black_box(decode_maybe_from_text::<i64>(black_box(r#"{"_tag":"bogus"}"#))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_maybe_chain,
    benchmark_outcome_chain,
    benchmark_codec,
);

criterion_main!(benches);
