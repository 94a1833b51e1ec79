//! Admin authorization gate.

/// Checks a supplied admin token against the configured one.
///
/// Fails closed: an empty configured token disables admin access entirely,
/// even when the supplied token is also empty. The comparison is a plain
/// case-sensitive equality check.
#[must_use]
pub fn authorize(supplied: &str, configured: &str) -> bool {
    !configured.is_empty() && supplied == configured
}
