//! Internal crate for `pep-rs`.
//!
//! This crate exists purely to separate the public-facing root crate from
//! the implementation crate ([`pep_types`]) and should not be used
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use pep_internal::prelude::*;
//!
//! let pixels = vec![0xFF0000FFu32; 4];
//! let image = compress(&pixels, 2, 2, ChannelOrder::Rgba, ChannelBits::Eight);
//! ```

/// `use pep_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export pep_types for convenience.
pub use pep_types;
