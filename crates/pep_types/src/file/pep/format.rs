//! Pixel channel order and precision, plus the output-side pixel transforms
//! (reformatting and alpha pre-multiplication) that sit outside the codec's
//! core scope.

/// Byte position of each channel identity within [`ChannelOrder::layout`].
const RED: u8 = 0;
const GREEN: u8 = 1;
const BLUE: u8 = 2;
const ALPHA: u8 = 3;

/// Channel byte order of a packed 32-bit pixel, read most-significant byte
/// first (so `0x11223344` in [`ChannelOrder::Rgba`] is R=0x11, G=0x22,
/// B=0x33, A=0x44).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
	/// Red, green, blue, alpha.
	Rgba,
	/// Blue, green, red, alpha.
	Bgra,
	/// Alpha, blue, green, red.
	Abgr,
	/// Alpha, red, green, blue.
	Argb,
}

impl ChannelOrder {
	/// Decodes the 2-bit container field (`0..=3`) into a channel order.
	pub fn from_bits(bits: u8) -> Self {
		match bits & 0b11 {
			0 => Self::Rgba,
			1 => Self::Bgra,
			2 => Self::Abgr,
			_ => Self::Argb,
		}
	}

	/// Encodes this channel order back to its 2-bit container field.
	pub fn to_bits(self) -> u8 {
		match self {
			Self::Rgba => 0,
			Self::Bgra => 1,
			Self::Abgr => 2,
			Self::Argb => 3,
		}
	}

	/// Channel identity present at each big-endian byte position.
	fn layout(self) -> [u8; 4] {
		match self {
			Self::Rgba => [RED, GREEN, BLUE, ALPHA],
			Self::Bgra => [BLUE, GREEN, RED, ALPHA],
			Self::Abgr => [ALPHA, BLUE, GREEN, RED],
			Self::Argb => [ALPHA, RED, GREEN, BLUE],
		}
	}

	/// Byte position of the alpha channel under this order (byte 3 for
	/// `rgba`/`bgra`, byte 0 for `abgr`/`argb`).
	pub(super) fn alpha_position(self) -> usize {
		self.layout().iter().position(|&c| c == ALPHA).expect("layout always contains alpha")
	}
}

/// Palette channel-bit precision: bits per channel stored in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelBits {
	/// 1 bit per channel.
	One,
	/// 2 bits per channel.
	Two,
	/// 4 bits per channel.
	Four,
	/// 8 bits per channel (no quantization).
	Eight,
}

impl ChannelBits {
	/// Number of bits this variant represents per channel.
	pub fn bits(self) -> u32 {
		match self {
			Self::One => 1,
			Self::Two => 2,
			Self::Four => 4,
			Self::Eight => 8,
		}
	}

	/// Decodes the 2-bit container field (`0=1, 1=2, 2=4, 3=8`).
	pub fn from_code(code: u8) -> Self {
		match code & 0b11 {
			0 => Self::One,
			1 => Self::Two,
			2 => Self::Four,
			_ => Self::Eight,
		}
	}

	/// Encodes this variant back to its 2-bit container field.
	pub fn code(self) -> u8 {
		match self {
			Self::One => 0,
			Self::Two => 1,
			Self::Four => 2,
			Self::Eight => 3,
		}
	}
}

/// An opaque white pixel: all four bytes `0xFF`, hence identical under every
/// channel order.
pub const WHITE: u32 = 0xFFFF_FFFF;

/// An opaque black pixel under channel order `order` (RGB channels zero,
/// alpha `0xFF`, permuted into `order`'s byte positions).
pub fn black(order: ChannelOrder) -> u32 {
	reformat(0x0000_00FF, ChannelOrder::Rgba, order)
}

/// Permutes `pixel`'s bytes from channel order `from` to channel order `to`.
/// A no-op when `from == to`.
pub fn reformat(pixel: u32, from: ChannelOrder, to: ChannelOrder) -> u32 {
	if from == to {
		return pixel;
	}

	let bytes = pixel.to_be_bytes();
	let from_layout = from.layout();
	let to_layout = to.layout();

	let mut by_channel = [0u8; 4];
	for (i, &channel) in from_layout.iter().enumerate() {
		by_channel[channel as usize] = bytes[i];
	}

	let mut out = [0u8; 4];
	for (i, &channel) in to_layout.iter().enumerate() {
		out[i] = by_channel[channel as usize];
	}
	u32::from_be_bytes(out)
}

/// Pre-multiplies `pixel`'s RGB channels by its alpha channel, rounding with
/// `c' = (c * a * 257 + 32896) >> 16`. Alpha is left unchanged.
pub fn pre_multiply(pixel: u32, order: ChannelOrder) -> u32 {
	let bytes = pixel.to_be_bytes();
	let layout = order.layout();

	let mut by_channel = [0u8; 4];
	for (i, &channel) in layout.iter().enumerate() {
		by_channel[channel as usize] = bytes[i];
	}

	let alpha = u32::from(by_channel[ALPHA as usize]);
	for channel in [RED, GREEN, BLUE] {
		let c = u32::from(by_channel[channel as usize]);
		by_channel[channel as usize] = ((c * alpha * 257 + 32896) >> 16) as u8;
	}

	let mut out = [0u8; 4];
	for (i, &channel) in layout.iter().enumerate() {
		out[i] = by_channel[channel as usize];
	}
	u32::from_be_bytes(out)
}

/// Zeroes the alpha byte of `color` under channel order `order`, used to
/// mark the palette's first entry as transparent.
pub fn zero_alpha(color: u32, order: ChannelOrder) -> u32 {
	let mut bytes = color.to_be_bytes();
	bytes[order.alpha_position()] = 0;
	u32::from_be_bytes(bytes)
}

/// Quantizes an 8-bit channel value down to `bits` bits and replicates it
/// back to 8 bits, the same lossy rounding the container applies when it
/// packs a palette at less than 8 bits per channel.
fn quantize_channel(value: u8, bits: u32) -> u8 {
	if bits >= 8 {
		return value;
	}
	let truncated = u32::from(value) >> (8 - bits);
	let mut scaled = truncated << (8 - bits);
	scaled |= scaled >> bits;
	if bits < 4 {
		scaled |= scaled >> (2 * bits);
	}
	scaled as u8
}

/// Quantizes every channel of `color` to `channel_bits` precision. Used by
/// `compress` so that a lower-than-8-bit `channel_bits` is reflected
/// immediately in the in-memory palette, matching the round-trip law
/// without requiring a serialize/deserialize cycle to see the loss.
pub fn quantize_color(color: u32, channel_bits: ChannelBits) -> u32 {
	let bits = channel_bits.bits();
	if bits >= 8 {
		return color;
	}
	let mut bytes = color.to_be_bytes();
	for byte in &mut bytes {
		*byte = quantize_channel(*byte, bits);
	}
	u32::from_be_bytes(bytes)
}
