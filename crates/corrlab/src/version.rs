//! Version information.

/// The package version.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line printed in the batch header.
#[must_use]
pub fn full_version() -> String {
    format!("corrlab {}", version())
}
