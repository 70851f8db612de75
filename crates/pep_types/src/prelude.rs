//! Prelude module for `pep_types`.
//!
//! This module provides a convenient way to import commonly used types and
//! functions.
//!
//! # Examples
//!
//! ```no_run
//! use pep_types::prelude::*;
//!
//! let image = load("texture.pep");
//! let pixels = decompress(&image, ChannelOrder::Rgba, false, false);
//! ```

#[doc(inline)]
pub use crate::file::pep::{
	ChannelBits, ChannelOrder, Image, PepIoError, compress, decompress, deserialize, load, save,
	serialize,
};

// Re-export the file module for advanced usage.
#[doc(inline)]
pub use crate::file;
