//! Benchmark suite for frame ordering and manifest validation
//!
//! Measures the natural-sort comparison over shuffled filename sets and the
//! full parse-and-validate pipeline over synthetic manifests.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use atlasplay_benches::{generate_test_filenames, generate_test_manifest};
use atlasplay_types::atlas::{natural_cmp, parse_manifest};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark natural sort over shuffled filename sets
fn bench_natural_sort(c: &mut Criterion) {
	let mut group = c.benchmark_group("natural_sort");

	for count in [64usize, 512, 4096] {
		let names = generate_test_filenames(count);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("sort", count), &names, |b, names| {
			b.iter(|| {
				let mut names = names.clone();
				names.sort_by(|a, b| natural_cmp(a, b));
				black_box(names)
			});
		});
	}

	group.finish();
}

/// Benchmark manifest parse and structural validation
fn bench_parse_manifest(c: &mut Criterion) {
	let mut group = c.benchmark_group("parse_manifest");

	for count in [64usize, 512, 4096] {
		let json = generate_test_manifest(count);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::new("parse", count), &json, |b, json| {
			b.iter(|| {
				let sheet = parse_manifest(black_box(json.as_bytes()));
				black_box(sheet)
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_natural_sort, bench_parse_manifest);
criterion_main!(benches);
