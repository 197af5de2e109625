//! Cross-crate integration tests for corrlab live in `tests/`.
