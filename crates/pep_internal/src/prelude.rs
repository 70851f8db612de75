//! Prelude module for `pep_internal`.
//!
//! This module provides a convenient way to import commonly used types and
//! functions.
//!
//! # Examples
//!
//! ```rust
//! use pep_internal::prelude::*;
//!
//! let pixels = vec![0xFF0000FFu32; 4];
//! let image = compress(&pixels, 2, 2, ChannelOrder::Rgba, ChannelBits::Eight);
//! let decoded = decompress(&image, ChannelOrder::Rgba, false, false).unwrap();
//! assert_eq!(decoded, pixels);
//! ```

// Re-export everything from pep_types::prelude.
#[doc(inline)]
pub use pep_types::prelude::*;

// Re-export the entire pep_types crate for advanced usage.
#[doc(inline)]
pub use pep_types;
