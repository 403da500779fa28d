use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::alphabet::{CAPACITY, PREFIX_LEN, SEPARATOR_LEN};
use crate::error::{Result, YulidError};
use crate::validate::validate_bytes;

/// Returns `buf` up to its first zero byte, or all of `buf` if it has none.
#[must_use]
pub fn render_bytes(buf: &[u8]) -> &[u8] {
    buf.iter()
        .position(|&b| b == 0)
        .map_or(buf, |end| &buf[..end])
}

/// A short, human-readable identifier.
///
/// Format: `PPPP-SSSSSS`, a four character prefix (usually derived from a
/// name), a hyphen, and a random suffix. Generated suffixes are always six
/// characters long; validation also accepts four or five.
///
/// For the name "John Doe" an ID might be `JNDE-ED24HS`.
///
/// The value is a fixed 11-byte buffer. A shorter suffix leaves zero bytes at
/// the end, and everything from the first zero byte on is ignored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Yulid([u8; CAPACITY]);

impl Yulid {
    /// Rebuilds an ID from its raw buffer without checking it.
    ///
    /// Use [`Yulid::validate`] to find out whether the result is well formed.
    #[must_use]
    pub const fn from_raw(raw: [u8; CAPACITY]) -> Self {
        Self(raw)
    }

    /// Parses and validates the textual form of an ID.
    ///
    /// Input is cut at its first zero byte, the same way [`Yulid::render`]
    /// reads a buffer.
    ///
    /// # Errors
    ///
    /// Returns the same error [`crate::validate_bytes`] reports for `s`.
    pub fn parse(s: &str) -> Result<Self> {
        let rendered = render_bytes(s.as_bytes());
        validate_bytes(rendered)?;

        let mut raw = [0u8; CAPACITY];
        raw[..rendered.len()].copy_from_slice(rendered);
        Ok(Self(raw))
    }

    /// The whole backing buffer, zero padding included.
    #[must_use]
    pub const fn raw(&self) -> &[u8; CAPACITY] {
        &self.0
    }

    /// The populated part of the buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        render_bytes(&self.0)
    }

    /// The prefix bytes. Shorter than four bytes only for a malformed buffer.
    #[must_use]
    pub fn prefix(&self) -> &[u8] {
        let rendered = self.as_bytes();
        &rendered[..rendered.len().min(PREFIX_LEN)]
    }

    /// The suffix bytes, empty for a malformed buffer without one.
    #[must_use]
    pub fn suffix(&self) -> &[u8] {
        self.as_bytes()
            .get(PREFIX_LEN + SEPARATOR_LEN..)
            .unwrap_or_default()
    }

    /// Renders the ID as text.
    ///
    /// Never fails. Bytes that are not UTF-8, which only a malformed raw
    /// buffer can hold, come out as U+FFFD.
    #[must_use]
    pub fn render(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Checks the ID against the format rules.
    ///
    /// # Errors
    ///
    /// See [`crate::validate`].
    pub fn validate(&self) -> Result<()> {
        crate::validate::validate(self)
    }
}

impl fmt::Display for Yulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Yulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Yulid").field(&self.render()).finish()
    }
}

impl FromStr for Yulid {
    type Err = YulidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Yulid {
    type Error = YulidError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<[u8]> for Yulid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Yulid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.render())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Yulid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
