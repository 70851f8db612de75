//! File type support for the `pep-rs` project.

pub mod pep;
