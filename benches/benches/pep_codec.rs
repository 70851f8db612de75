use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pep_benches::{generate_synthetic_pixels, palettes, sizes};
use pep_types::prelude::*;

fn bench_compress(c: &mut Criterion) {
	let mut group = c.benchmark_group("compress");

	for &(label, (width, height)) in &[("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)] {
		let pixels = generate_synthetic_pixels(width, height, palettes::SMALL, 1);
		group.throughput(Throughput::Elements(pixels.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(label), &pixels, |b, pixels| {
			b.iter(|| compress(pixels, width, height, ChannelOrder::Rgba, ChannelBits::Eight));
		});
	}

	group.finish();
}

fn bench_decompress(c: &mut Criterion) {
	let mut group = c.benchmark_group("decompress");

	for &(label, (width, height)) in &[("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)] {
		let pixels = generate_synthetic_pixels(width, height, palettes::SMALL, 1);
		let image = compress(&pixels, width, height, ChannelOrder::Rgba, ChannelBits::Eight);
		group.throughput(Throughput::Elements(pixels.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
			b.iter(|| decompress(image, ChannelOrder::Rgba, false, false));
		});
	}

	group.finish();
}

fn bench_container_roundtrip(c: &mut Criterion) {
	let mut group = c.benchmark_group("container");

	for &(label, palette_size) in &[("monochrome", palettes::MONOCHROME), ("small", palettes::SMALL), ("medium", palettes::MEDIUM), ("large", palettes::LARGE)] {
		let (width, height) = sizes::MEDIUM;
		let pixels = generate_synthetic_pixels(width, height, palette_size, 7);
		let image = compress(&pixels, width, height, ChannelOrder::Rgba, ChannelBits::Eight);

		group.bench_with_input(BenchmarkId::new("serialize", label), &image, |b, image| {
			b.iter(|| serialize(image));
		});

		let bytes = serialize(&image);
		group.bench_with_input(BenchmarkId::new("deserialize", label), &bytes, |b, bytes| {
			b.iter(|| deserialize(bytes));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_container_roundtrip);
criterion_main!(benches);
