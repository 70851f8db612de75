//! `pep`: a lossless codec and container for palette-indexed pixel-art
//! images.
//!
//! Four pieces cooperate: a [`palette`] builder assigns ids to unique
//! colors in scan order, a [`packer`] packs several ids into one byte, a
//! [`model`] (order-2/order-0 PPM) predicts each packed byte, and a
//! [`coder`] range-codes it. [`container`] wraps the resulting bytes with a
//! header and the palette for on-disk storage; [`io`] is the only place
//! that touches the filesystem.
//!
//! Every public entry point here follows the format's in-band error
//! contract: malformed or degenerate input yields an empty/invalid
//! sentinel rather than a panic or a `Result`.

mod coder;
mod container;
mod error;
mod format;
mod io;
mod model;
mod packer;
mod palette;

pub use error::PepIoError;
pub use format::{ChannelBits, ChannelOrder};
pub use io::{load, save};

use model::Model;
use packer::ContextTracker;

/// Largest canvas dimension accepted in either axis.
const MAX_DIMENSION: u16 = 4096;

/// A `pep` image: canvas size, channel order, palette, and an opaque
/// range-coded byte stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
	/// Packed, range-coded index stream. Empty marks an invalid image.
	pub bytes: Vec<u8>,
	/// Canvas width in pixels, `1..=4096`.
	pub width: u16,
	/// Canvas height in pixels, `1..=4096`.
	pub height: u16,
	/// Channel byte order of `palette`'s entries.
	pub format: ChannelOrder,
	/// Insertion-ordered color table; at most 256 entries.
	pub palette: Vec<u32>,
	/// Per-channel bit precision the palette is (or will be) stored at.
	pub channel_bits: ChannelBits,
}

impl Image {
	/// The canonical invalid/empty image: the sentinel every fallible
	/// operation in this module returns instead of panicking or returning
	/// a `Result`.
	pub fn empty() -> Self {
		Self {
			bytes: Vec::new(),
			width: 0,
			height: 0,
			format: ChannelOrder::Rgba,
			palette: Vec::new(),
			channel_bits: ChannelBits::Eight,
		}
	}

	/// Whether this image carries no compressed payload.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}
}

/// Compresses `pixels` (row-major, exactly `width * height` entries, in
/// channel order `format`) into an [`Image`]. `channel_bits` quantizes the
/// stored palette immediately, so a lossy `channel_bits` is reflected even
/// without a serialize/deserialize round trip.
///
/// Returns [`Image::empty`] for invalid input: a zero or oversized
/// dimension, or a pixel count that doesn't match `width * height`.
pub fn compress(pixels: &[u32], width: u16, height: u16, format: ChannelOrder, channel_bits: ChannelBits) -> Image {
	let area = usize::from(width) * usize::from(height);
	if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION || pixels.len() != area {
		log::warn!(
			"refusing to compress invalid image: {width}x{height}, {} pixels supplied",
			pixels.len()
		);
		return Image::empty();
	}

	let (palette_builder, mut ids) = palette::Palette::build(pixels);
	let mut palette: Vec<u32> = palette_builder
		.colors()
		.iter()
		.map(|&c| format::quantize_color(c, channel_bits))
		.collect();

	canonicalize_bitmap_order(&mut palette, &mut ids, format);

	let bits_per_index = packer::bits_per_index(palette.len() as u32);
	let packed = packer::pack(&ids, bits_per_index);

	let mut model = Model::new(palette.len() as u16);
	let mut encoder = coder::Encoder::new();
	let mut tracker = ContextTracker::new();
	for &symbol in &packed {
		model.encode_symbol(&mut encoder, tracker.index(), symbol);
		tracker.push(symbol);
	}

	Image {
		bytes: encoder.finish(),
		width,
		height,
		format,
		palette,
		channel_bits,
	}
}

/// Decompresses `image` back into row-major pixels in channel order
/// `out_format`. `transparent_first` zeroes the alpha channel of palette
/// id 0 before decoding; `pre_multiply` pre-multiplies each output pixel's
/// RGB by its alpha.
///
/// Returns `None` for an invalid or empty image.
pub fn decompress(
	image: &Image,
	out_format: ChannelOrder,
	transparent_first: bool,
	pre_multiply: bool,
) -> Option<Vec<u32>> {
	if image.is_empty() || image.width == 0 || image.height == 0 || image.palette.is_empty() {
		return None;
	}

	let mut palette = image.palette.clone();
	if transparent_first {
		if let Some(first) = palette.first_mut() {
			*first = format::zero_alpha(*first, image.format);
		}
	}

	let area = usize::from(image.width) * usize::from(image.height);
	let bits_per_index = packer::bits_per_index(palette.len() as u32);
	let indices_per_byte = packer::indices_per_byte(bits_per_index);
	let symbol_count = packer::packed_symbol_count(area, indices_per_byte);

	let mut model = Model::new(palette.len() as u16);
	let mut decoder = coder::Decoder::new(&image.bytes);
	let mut tracker = ContextTracker::new();
	let mut ids = Vec::with_capacity(area);

	for _ in 0..symbol_count {
		let symbol = model.decode_symbol(&mut decoder, tracker.index());
		tracker.push(symbol);
		let remaining = area - ids.len();
		packer::unpack_into(symbol, bits_per_index, remaining, &mut ids);
	}

	let pixels = ids
		.iter()
		.map(|&id| {
			let color = palette.get(id as usize).copied().unwrap_or(0);
			let pixel = format::reformat(color, image.format, out_format);
			if pre_multiply { format::pre_multiply(pixel, out_format) } else { pixel }
		})
		.collect();

	Some(pixels)
}

/// Serializes `image` into the container's byte layout. See
/// [`container::serialize`] for the exact layout.
pub fn serialize(image: &Image) -> Vec<u8> {
	container::serialize(image)
}

/// Deserializes bytes produced by [`serialize`] back into an [`Image`].
pub fn deserialize(bytes: &[u8]) -> Image {
	container::deserialize(bytes)
}

/// If `palette` is exactly `{black, white}` in either order, rewrites it
/// (and remaps `ids`) so black is always id 0 and white is always id 1.
///
/// The container's bitmap fast path omits the palette entirely, so decode
/// must reconstruct it with no stored ordering information; a fixed
/// canonical order is the only way that stays decodable.
fn canonicalize_bitmap_order(palette: &mut [u32], ids: &mut [u8], format: ChannelOrder) {
	if palette.len() != 2 {
		return;
	}

	let black = format::black(format);
	let white = format::WHITE;
	let is_black_and_white = (palette[0] == black && palette[1] == white) || (palette[0] == white && palette[1] == black);
	if !is_black_and_white || palette[0] == black {
		return;
	}

	palette.swap(0, 1);
	for id in ids.iter_mut() {
		*id = 1 - *id;
	}
}
