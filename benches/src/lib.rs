//! Benchmark helper utilities for `pep-rs`.
//!
//! This crate generates synthetic pixel-art-shaped images: a small palette
//! with strong row-to-row locality, which is the regime the codec is
//! designed for. Real sprite assets aren't bundled with this repository, so
//! benchmarks run entirely against generated data.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Generates a `width * height` row-major pixel buffer (RGBA8) drawn from a
/// `palette_size`-entry palette, with an 80% chance any given pixel repeats
/// the one before it — a cheap stand-in for pixel art's local regularity.
/// `seed` makes the output deterministic across benchmark runs.
pub fn generate_synthetic_pixels(width: u16, height: u16, palette_size: u32, seed: u64) -> Vec<u32> {
	let mut rng = SmallRng::seed_from_u64(seed);
	let palette: Vec<u32> = (0..palette_size.max(1)).map(|i| (i.wrapping_mul(0x0101_0101)) | 0xFF).collect();

	let area = usize::from(width) * usize::from(height);
	let mut pixels = Vec::with_capacity(area);
	let mut current = palette[0];

	for _ in 0..area {
		if rng.random::<f32>() >= 0.8 {
			current = *palette.choose(&mut rng).unwrap_or(&current);
		}
		pixels.push(current);
	}

	pixels
}

/// Common benchmark canvas sizes.
pub mod sizes {
	/// Tiny image: 64x64 (4,096 pixels).
	pub const TINY: (u16, u16) = (64, 64);
	/// Small image: 256x256 (65,536 pixels).
	pub const SMALL: (u16, u16) = (256, 256);
	/// Medium image: 512x512 (262,144 pixels).
	pub const MEDIUM: (u16, u16) = (512, 512);
	/// Large image: 1024x768 (786,432 pixels) - typical sprite-sheet scale.
	pub const LARGE: (u16, u16) = (1024, 768);
	/// Extra large image: 1920x1080 (2,073,600 pixels) - HD resolution.
	pub const XLARGE: (u16, u16) = (1920, 1080);
	/// A common sprite-sheet export size: 640x480.
	pub const REAL_GAME: (u16, u16) = (640, 480);
}

/// Common benchmark palette sizes.
pub mod palettes {
	/// Black & white, exercising the bitmap fast path.
	pub const MONOCHROME: u32 = 2;
	/// A small, typical retro-sprite palette.
	pub const SMALL: u32 = 16;
	/// A larger palette still well inside 1-byte indices.
	pub const MEDIUM: u32 = 64;
	/// The maximum palette this codec's builder ever produces.
	pub const LARGE: u32 = 255;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generates_requested_pixel_count() {
		let pixels = generate_synthetic_pixels(64, 48, 16, 7);
		assert_eq!(pixels.len(), 64 * 48);
	}

	#[test]
	fn is_deterministic_for_a_fixed_seed() {
		let a = generate_synthetic_pixels(32, 32, 8, 42);
		let b = generate_synthetic_pixels(32, 32, 8, 42);
		assert_eq!(a, b);
	}

	#[test]
	fn uses_at_most_palette_size_distinct_colors() {
		let pixels = generate_synthetic_pixels(64, 64, 4, 3);
		let distinct: std::collections::HashSet<_> = pixels.iter().copied().collect();
		assert!(distinct.len() <= 4);
	}

	#[test]
	fn sizes_constants_stay_within_the_dimension_cap() {
		for &(w, h) in &[sizes::TINY, sizes::SMALL, sizes::MEDIUM, sizes::LARGE, sizes::XLARGE, sizes::REAL_GAME] {
			assert!(w <= 4096 && h <= 4096);
		}
	}
}
