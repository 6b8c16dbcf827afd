//! Version negotiation -- membership tests and mutual version selection.
//!
//! Selection depends only on the local list's order. The peer's
//! ordering never influences which mutual version wins.

use crate::version::VersionNumber;

/// Reports whether `v` appears anywhere in `supported`.
///
/// No ordering assumption; an empty list supports nothing.
pub fn is_supported_version(supported: &[VersionNumber], v: VersionNumber) -> bool {
    supported.contains(&v)
}

/// Picks the version to continue the handshake with.
///
/// Walks `ours` in its given order, most preferred first, and returns
/// the first entry `theirs` also lists. [`VersionNumber::UNSUPPORTED`]
/// never matches, whichever list carries it. `None` means no usable
/// overlap; the caller aborts or falls back to a version negotiation
/// exchange.
pub fn select_version(ours: &[VersionNumber], theirs: &[VersionNumber]) -> Option<VersionNumber> {
    let chosen = ours
        .iter()
        .copied()
        .find(|v| *v != VersionNumber::UNSUPPORTED && theirs.contains(v));

    match chosen {
        Some(version) => tracing::trace!(%version, "selected mutually supported version"),
        None => tracing::debug!(?ours, ?theirs, "no mutually supported version"),
    }
    chosen
}
