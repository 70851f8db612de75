//! This crate provides the core data types and codec for the `pep` pixel-art
//! image format.
//!
//! # File Formats
//!
//! - **PEP**: a lossless, palette-indexed pixel-art image format that pairs
//!   an order-2/order-0 PPM model with a 32-bit range coder to get very small
//!   encoded sizes on images with a small color palette and strong local
//!   regularity.
//!
//! # Examples
//!
//! ```rust
//! use pep_types::file::pep::{compress, decompress, ChannelBits, ChannelOrder};
//!
//! let pixels = vec![0xFF0000FFu32, 0x00FF00FF, 0xFF0000FF, 0x00FF00FF];
//! let image = compress(&pixels, 2, 2, ChannelOrder::Rgba, ChannelBits::Eight);
//! let decoded = decompress(&image, ChannelOrder::Rgba, false, false).unwrap();
//! assert_eq!(decoded, pixels);
//! ```

pub mod file;
pub mod prelude;

// Re-export the pep codec at the crate root for convenience.
pub use file::pep::{
	ChannelBits, ChannelOrder, Image, PepIoError, compress, decompress, deserialize, load, save,
	serialize,
};
