//! Index packing and order-2 context-id bookkeeping.
//!
//! Palette ids are packed LSB-first, several to a byte, so that a small
//! palette lets the model see more pixels per coded symbol. The packed byte
//! stream is what the PPM model actually codes; [`ContextTracker`] folds the
//! last two packed symbols into the single-byte history the model uses to
//! pick an order-2 context (see [`super::model`]).

/// Bits needed to address `palette_size` distinct ids, capped at 8.
///
/// `palette_size` is clamped to at least 2 so that a one- or zero-color
/// palette still gets a single addressable bit, matching
/// `ceil(log2(max(2, palette_size)))`.
pub fn bits_per_index(palette_size: u32) -> u32 {
	let n = palette_size.max(2);
	let mut bits = 0u32;
	while (1u32 << bits) < n {
		bits += 1;
	}
	bits.min(8)
}

/// How many palette ids fit in one packed byte for a given `bits_per_index`.
pub fn indices_per_byte(bits_per_index: u32) -> u32 {
	8 / bits_per_index
}

/// How many packed symbols a `pixel_count`-pixel image produces.
///
/// Uses ceiling division so that a trailing partial group of fewer than
/// `indices_per_byte` ids still gets one packed symbol; both [`pack`] and
/// [`unpack_all`] agree with this count, keeping the round trip lossless
/// regardless of whether `pixel_count` is a multiple of `indices_per_byte`.
pub fn packed_symbol_count(pixel_count: usize, indices_per_byte: u32) -> usize {
	pixel_count.div_ceil(indices_per_byte as usize)
}

/// Packs `ids` into bytes, `indices_per_byte` ids per byte, LSB-first.
/// A trailing partial group is still emitted with its unused high bits
/// left at zero.
pub fn pack(ids: &[u8], bits_per_index: u32) -> Vec<u8> {
	let ipb = indices_per_byte(bits_per_index) as usize;
	let mask = ((1u16 << bits_per_index) - 1) as u8;

	ids.chunks(ipb)
		.map(|chunk| {
			chunk.iter().enumerate().fold(0u8, |symbol, (i, &id)| {
				symbol | ((id & mask) << (i as u32 * bits_per_index))
			})
		})
		.collect()
}

/// Unpacks up to `indices_per_byte` ids from one packed `symbol`, stopping
/// early once `remaining` ids have been produced (used to drop the unused
/// tail of the final packed symbol once the pixel budget is exhausted).
pub fn unpack_into(symbol: u8, bits_per_index: u32, remaining: usize, out: &mut Vec<u8>) {
	let ipb = indices_per_byte(bits_per_index) as usize;
	let mask = ((1u16 << bits_per_index) - 1) as u8;

	for i in 0..ipb.min(remaining) {
		out.push((symbol >> (i as u32 * bits_per_index)) & mask);
	}
}

/// Tracks the rolling two-packed-symbol history used to select an order-2
/// context. The index used to code a given packed symbol must be read
/// *before* that symbol is folded in via [`ContextTracker::push`].
#[derive(Debug, Default)]
pub struct ContextTracker {
	ctx_id: u64,
}

impl ContextTracker {
	/// Starts a fresh tracker with no history (`ctx_id = 0`).
	pub fn new() -> Self {
		Self::default()
	}

	/// The order-2 context index for the symbol about to be coded.
	pub fn index(&self) -> usize {
		(self.ctx_id % 256) as usize
	}

	/// Folds a just-coded packed symbol into the history.
	pub fn push(&mut self, symbol: u8) {
		self.ctx_id = (self.ctx_id << 8) | u64::from(symbol);
	}
}
