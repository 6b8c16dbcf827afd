//! Protocol version numbers and their 4-byte ASCII wire tags.
//!
//! A tag is the letter 'Q' followed by the hundreds, tens and units
//! digits of the version number, in that byte order. The numeric form
//! of a tag is the little-endian u32 of those bytes, so the value
//! compared in memory is bit-identical to the bytes on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Leading byte of every well-formed version tag.
pub const TAG_LETTER: u8 = b'Q';

/// A protocol version in its compact numeric form.
///
/// Negative values are reserved for sentinels and never appear on the
/// wire; see [`VersionNumber::ANY`] and [`VersionNumber::UNSUPPORTED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionNumber(i32);

impl VersionNumber {
    pub const V35: VersionNumber = VersionNumber(35);
    pub const V36: VersionNumber = VersionNumber(36);
    pub const V37: VersionNumber = VersionNumber(37);

    /// Placeholder for contexts where the version does not matter.
    pub const ANY: VersionNumber = VersionNumber(0);

    /// No usable version. Also the marker for peer-advertised tags we
    /// did not recognise; [`select_version`](crate::select_version)
    /// never matches it.
    pub const UNSUPPORTED: VersionNumber = VersionNumber(-1);

    /// Wraps a raw version identifier.
    pub const fn new(n: i32) -> VersionNumber {
        VersionNumber(n)
    }

    /// Renders this version as its wire tag.
    ///
    /// The tag holds exactly three decimal digits, so versions outside
    /// 0-999 alias: non-negative values encode as `v % 1000`, negative
    /// values wrap through the unsigned cast first. Nothing guards the
    /// range; keep real versions below 1000.
    pub const fn tag(self) -> VersionTag {
        let v = self.0 as u32;
        let hundreds = v / 100 % 10;
        let tens = v / 10 % 10;
        let units = v % 10;
        VersionTag(
            (TAG_LETTER as u32)
                | ((hundreds + b'0' as u32) << 8)
                | ((tens + b'0' as u32) << 16)
                | ((units + b'0' as u32) << 24),
        )
    }
}

impl From<i32> for VersionNumber {
    fn from(n: i32) -> Self {
        VersionNumber(n)
    }
}

impl From<VersionNumber> for i32 {
    fn from(v: VersionNumber) -> Self {
        v.0
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A version tag as it travels on the wire.
///
/// Stored as the little-endian u32 of the tag bytes. Equality on the
/// integer is equality on the bytes, which is what the handshake
/// compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionTag(u32);

impl VersionTag {
    /// The tag in wire order: the letter first, then the hundreds, tens
    /// and units digits as ASCII.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Builds a tag from its four wire bytes, unvalidated.
    pub const fn from_bytes(bytes: [u8; 4]) -> VersionTag {
        VersionTag(u32::from_le_bytes(bytes))
    }

    /// Recovers the version number this tag encodes.
    ///
    /// Assumes the tag is well formed. A tag whose digit bytes are not
    /// ASCII digits decodes to a nonsense number rather than an error;
    /// run peer-supplied tags through [`checked_number`] instead.
    ///
    /// [`checked_number`]: Self::checked_number
    pub const fn number(self) -> VersionNumber {
        let zero = b'0' as u32;
        let hundreds = (self.0 >> 8) & 0xff;
        let tens = (self.0 >> 16) & 0xff;
        let units = (self.0 >> 24) & 0xff;
        let n = hundreds
            .wrapping_sub(zero)
            .wrapping_mul(100)
            .wrapping_add(tens.wrapping_sub(zero).wrapping_mul(10))
            .wrapping_add(units.wrapping_sub(zero));
        VersionNumber(n as i32)
    }

    /// Validating form of [`number`](Self::number).
    ///
    /// Rejects tags that do not start with [`TAG_LETTER`] or whose
    /// remaining bytes are not ASCII digits.
    pub fn checked_number(self) -> Result<VersionNumber, ProtocolError> {
        let bytes = self.to_bytes();
        if bytes[0] != TAG_LETTER || !bytes[1..].iter().all(u8::is_ascii_digit) {
            return Err(ProtocolError::MalformedTag { tag: self.0 });
        }
        Ok(self.number())
    }
}

impl From<u32> for VersionTag {
    fn from(raw: u32) -> Self {
        VersionTag(raw)
    }
}

impl From<VersionTag> for u32 {
    fn from(tag: VersionTag) -> Self {
        tag.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes() {
            if byte.is_ascii_graphic() {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}
