//! Shared setup for integration tests.

/// Initializes the `env_logger` backend for `log`, the way the teacher's own
/// `tests/file_types/main.rs` does. Each integration test file is its own
/// binary, so this is safe to call from more than one test in the same file.
pub fn init_logger() {
	let _ = env_logger::try_init();
}
