//! Order-2 / order-0 PPM model driving the arithmetic coder.
//!
//! Each packed symbol is coded against one of 256 order-2 contexts, keyed by
//! the previous two packed symbols folded onto a single byte (see
//! [`super::packer`]). A context that has never seen a symbol falls through
//! to a single shared order-0 context via an escape symbol at index 256.
//! Frequencies are periodically rescaled through a threshold that grows more
//! slowly for images with large palettes, exactly mirroring the reference
//! `PEP_UPDATE` macro.

use super::coder::{Decoder, Encoder, PROB_MAX};

/// Frequency slots per context: 256 symbols plus one escape slot.
const FREQ_N: usize = 257;

/// Index of the escape symbol within a context's frequency table.
const ESCAPE: usize = 256;

/// A single frequency table plus its running sum.
#[derive(Debug, Clone)]
struct Context {
	freq: [u16; FREQ_N],
	sum: u32,
}

impl Context {
	fn zeroed() -> Self {
		Self {
			freq: [0; FREQ_N],
			sum: 0,
		}
	}

	fn order0() -> Self {
		Self {
			freq: [1; FREQ_N],
			sum: FREQ_N as u32,
		}
	}

	fn is_virgin(&self) -> bool {
		self.sum == 0
	}

	/// Sum of `freq[0..upto]`.
	fn prefix_sum(&self, upto: usize) -> u32 {
		self.freq[..upto].iter().map(|&f| u32::from(f)).sum()
	}

	/// Finds the symbol whose cumulative interval contains `target`.
	fn find(&self, target: u32) -> (usize, u32, u32) {
		let mut running = 0u32;
		for (i, &f) in self.freq.iter().enumerate() {
			let f = u32::from(f);
			if running + f > target {
				return (i, running, running + f);
			}
			running += f;
		}
		debug_assert!(false, "target {target} out of range for context sum {}", self.sum);
		(FREQ_N - 1, running, running)
	}
}

/// Order-2/order-0 PPM model. Owns all 257 contexts for one encode or
/// decode operation; nothing here is shared across calls.
#[derive(Debug)]
pub struct Model {
	order0: Context,
	order2: Vec<Context>,
	freq_max: u32,
	palette_size: u16,
}

impl Model {
	/// Creates a fresh model. `palette_size` feeds the rescale threshold's
	/// palette-sensitive growth term and should be the encoded image's
	/// palette size (`0` is treated as 256, matching the container's
	/// `palette_size == 0` convention).
	pub fn new(palette_size: u16) -> Self {
		Self {
			order0: Context::order0(),
			order2: vec![Context::zeroed(); 256],
			freq_max: 128,
			palette_size,
		}
	}

	fn update(&mut self, ctx_index: Option<usize>, symbol: usize) {
		let palette_size = self.palette_size;
		let freq_max = &mut self.freq_max;
		let ctx = match ctx_index {
			Some(i) => &mut self.order2[i],
			None => &mut self.order0,
		};

		ctx.freq[symbol] += 2;
		ctx.sum += 2;

		if u32::from(ctx.freq[symbol]) >= *freq_max || ctx.sum >= PROB_MAX {
			*freq_max += (256 - u32::from(palette_size)) / 2;
			log::trace!("rescaling context, freq_max now {freq_max}");
			ctx.sum = 0;
			for f in &mut ctx.freq {
				if *f > 0 {
					*f = (*f + 1) / 2;
					ctx.sum += u32::from(*f);
				}
			}
		}
	}

	/// Encodes one packed symbol using the order-2 context `ctx_index`,
	/// falling back to the order-0 context on a miss.
	pub fn encode_symbol(&mut self, coder: &mut Encoder, ctx_index: usize, symbol: u8) {
		let symbol = symbol as usize;
		let virgin = self.order2[ctx_index].is_virgin();
		let hit = !virgin && self.order2[ctx_index].freq[symbol] > 0;

		if hit {
			let ctx = &self.order2[ctx_index];
			let cum_low = ctx.prefix_sum(symbol);
			let cum_high = cum_low + u32::from(ctx.freq[symbol]);
			coder.encode(cum_low, cum_high, ctx.sum);
			self.update(Some(ctx_index), symbol);
			return;
		}

		if !virgin {
			log::trace!("escaping order-2 context {ctx_index}");
			let ctx = &self.order2[ctx_index];
			let cum_low = ctx.prefix_sum(ESCAPE);
			let cum_high = cum_low + u32::from(ctx.freq[ESCAPE]);
			coder.encode(cum_low, cum_high, ctx.sum);
			let ctx = &mut self.order2[ctx_index];
			ctx.freq[ESCAPE] += 1;
			ctx.sum += 1;
		}

		let cum_low = self.order0.prefix_sum(symbol);
		let cum_high = cum_low + u32::from(self.order0.freq[symbol]);
		coder.encode(cum_low, cum_high, self.order0.sum);
		self.update(None, symbol);

		let ctx = &mut self.order2[ctx_index];
		if virgin {
			ctx.freq[ESCAPE] = 1;
			ctx.sum = 1;
		}
		ctx.freq[symbol] = 1;
		ctx.sum += 1;
	}

	/// Decodes one packed symbol from the order-2 context `ctx_index`,
	/// mirroring [`Model::encode_symbol`].
	pub fn decode_symbol(&mut self, coder: &mut Decoder<'_>, ctx_index: usize) -> u8 {
		let virgin = self.order2[ctx_index].is_virgin();

		if virgin {
			return self.decode_via_order0(coder, ctx_index, true) as u8;
		}

		let ctx = &self.order2[ctx_index];
		let target = coder.target(ctx.sum);
		let (symbol, cum_low, cum_high) = ctx.find(target);
		coder.consume(cum_low, cum_high);

		if symbol == ESCAPE {
			log::trace!("decoded escape from order-2 context {ctx_index}");
			let ctx = &mut self.order2[ctx_index];
			ctx.freq[ESCAPE] += 1;
			ctx.sum += 1;
			self.decode_via_order0(coder, ctx_index, false) as u8
		} else {
			self.update(Some(ctx_index), symbol);
			symbol as u8
		}
	}

	/// Decodes a symbol from the order-0 context and seeds/updates the
	/// order-2 context `ctx_index` accordingly. `seed_escape` is `true` when
	/// the order-2 context was virgin (it needs its escape slot seeded
	/// rather than merely having already been incremented).
	fn decode_via_order0(&mut self, coder: &mut Decoder<'_>, ctx_index: usize, seed_escape: bool) -> usize {
		let target = coder.target(self.order0.sum);
		let (symbol, cum_low, cum_high) = self.order0.find(target);
		coder.consume(cum_low, cum_high);
		self.update(None, symbol);

		let ctx = &mut self.order2[ctx_index];
		if seed_escape {
			ctx.freq[ESCAPE] = 1;
			ctx.sum = 1;
		}
		ctx.freq[symbol] = 1;
		ctx.sum += 1;
		symbol
	}
}
