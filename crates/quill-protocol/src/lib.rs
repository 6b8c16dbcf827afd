//! Quill Protocol -- version numbers, wire tags, negotiation.
//!
//! Versions are small integers in memory and 4-byte ASCII tags on the
//! wire ("Q037" for version 37). This crate converts between the two
//! forms and picks the version a handshake continues with, given our
//! preference-ordered list and whatever the peer advertised. Framing,
//! transport and the handshake itself live elsewhere and hand this
//! crate already-parsed lists.

pub mod negotiation;
pub mod version;

pub use negotiation::{is_supported_version, select_version};
pub use version::{VersionNumber, VersionTag, TAG_LETTER};

/// Versions this endpoint accepts, newest first.
///
/// [`select_version`] walks whatever list it is given in order, so the
/// ordering here is the preference order. Callers negotiating against a
/// non-default support set pass their own slice instead.
pub const SUPPORTED_VERSIONS: &[VersionNumber] = &[
    VersionNumber::V37,
    VersionNumber::V36,
    VersionNumber::V35,
];

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed version tag {tag:#010x}: expected 'Q' plus three ASCII digits")]
    MalformedTag { tag: u32 },
}
