//! Thin `std::fs` wrappers around [`super::serialize`]/[`super::deserialize`].
//!
//! This is the only place in the crate that touches the filesystem. It
//! still collapses every failure to the boundary contract the rest of the
//! format uses (a `bool` for save, an empty [`super::Image`] for load) —
//! [`PepIoError`] exists purely as an internal plumbing detail so the
//! actual I/O failure can be logged before being discarded.

use std::fs;
use std::path::Path;

use super::Image;
use super::error::PepIoError;

/// Serializes `image` and writes it to `path`. Returns `false` (logging
/// the cause) on any I/O failure or if `image` can't be serialized;
/// never panics.
pub fn save(image: &Image, path: impl AsRef<Path>) -> bool {
	match try_save(image, path.as_ref()) {
		Ok(()) => true,
		Err(err) => {
			log::error!("failed to save pep image to {}: {err}", path.as_ref().display());
			false
		}
	}
}

fn try_save(image: &Image, path: &Path) -> Result<(), PepIoError> {
	let bytes = super::serialize(image);
	if bytes.is_empty() {
		return Err(PepIoError::EmptySerialization);
	}
	fs::write(path, bytes)?;
	Ok(())
}

/// Reads `path` and deserializes it into an [`Image`]. Returns
/// [`Image::empty`] (logging the cause) on any I/O failure or malformed
/// file; never panics.
pub fn load(path: impl AsRef<Path>) -> Image {
	match try_load(path.as_ref()) {
		Ok(image) => image,
		Err(err) => {
			log::warn!("failed to load pep image from {}: {err}", path.as_ref().display());
			Image::empty()
		}
	}
}

fn try_load(path: &Path) -> Result<Image, PepIoError> {
	let bytes = fs::read(path)?;
	let image = super::deserialize(&bytes);
	if image.is_empty() {
		return Err(PepIoError::InvalidImage);
	}
	Ok(image)
}
