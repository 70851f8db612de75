//! Palette construction from a scan-order pixel stream.

/// An insertion-ordered, deduplicated color table of at most 255 entries.
///
/// The 255 cap (not 256) mirrors the reference encoder's guard
/// `(palette_size + 1) < 256`: the 256th unique color a scan encounters is
/// never appended, it collapses to id 0 instead. The container format still
/// reserves a `palette_size == 0` encoding for "256 colors" (see
/// [`super::container`]), a case this builder never itself produces but
/// which a hand-built or foreign [`super::Image`] may legitimately carry.
#[derive(Debug, Default, Clone)]
pub struct Palette {
	colors: Vec<u32>,
}

impl Palette {
	/// Creates an empty palette.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of distinct colors currently in the palette.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Whether the palette has no colors yet.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// The palette's colors in insertion (id) order.
	pub fn colors(&self) -> &[u32] {
		&self.colors
	}

	/// Linear-searches the palette for `color`, returning its id if present.
	pub fn index_of(&self, color: u32) -> Option<usize> {
		self.colors.iter().position(|&c| c == color)
	}

	/// Returns `color`'s id, appending it if new and there is room.
	/// Once the palette has reached capacity, unknown colors silently
	/// collapse to id `0` — documented, lossy, encode-time behavior, not an
	/// error (spec'd rather than rejected, since the container format has no
	/// way to signal rejection).
	pub fn push(&mut self, color: u32) -> u8 {
		if let Some(id) = self.index_of(color) {
			return id as u8;
		}

		if self.colors.len() + 1 < 256 {
			self.colors.push(color);
			(self.colors.len() - 1) as u8
		} else {
			log::debug!("palette overflow: collapsing color {color:#010x} to id 0");
			0
		}
	}

	/// Scans `pixels` in row-major order, building a palette and the
	/// per-pixel id stream in one pass. Skips the palette lookup entirely
	/// for a pixel identical to the one before it, matching the reference
	/// encoder's cheap "consecutive duplicate" fast path.
	pub fn build(pixels: &[u32]) -> (Self, Vec<u8>) {
		let mut palette = Self::new();
		let mut ids = Vec::with_capacity(pixels.len());
		let mut prev: Option<(u32, u8)> = None;

		for &color in pixels {
			let id = match prev {
				Some((prev_color, prev_id)) if prev_color == color => prev_id,
				_ => {
					let id = palette.push(color);
					prev = Some((color, id));
					id
				}
			};
			ids.push(id);
		}

		(palette, ids)
	}
}
