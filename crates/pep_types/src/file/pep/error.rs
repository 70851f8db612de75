//! Error type for the `pep` file I/O wrapper.
//!
//! The codec core (`compress`/`decompress`/`serialize`/`deserialize`) never
//! returns a `Result`: malformed or missing data is represented in-band as an
//! empty/invalid [`super::Image`] or `Vec`, per the format's error handling
//! contract. This type exists only for the thin `std::fs` wrapper in
//! [`super::io`], which still has a genuine I/O failure mode to report.

use thiserror::Error;

/// Errors that can occur when loading or saving a `.pep` file from disk.
#[derive(Debug, Error)]
pub enum PepIoError {
	/// The underlying file read or write failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// The image could not be serialized (empty buffer, zero dimensions).
	#[error("image could not be serialized: empty or invalid")]
	EmptySerialization,

	/// The bytes read from disk did not deserialize into a valid image.
	#[error("file did not contain a valid pep image")]
	InvalidImage,
}
