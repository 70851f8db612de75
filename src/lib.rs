#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `pep-rs` is a lossless codec and container for palettized pixel-art
//! images, built around an order-2/order-0 PPM model and a 32-bit
//! renormalizing range coder.

pub use pep_internal::*;
